//! Transient emphasis of the most recently placed mark.
//!
//! The pop lives entirely in the view. It has its own deadline and is
//! cancelled or replaced independently; nothing here feeds back into the
//! engine.

use std::time::{Duration, Instant};
use tictactoe_engine::Position;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pop {
    position: Position,
    deadline: Instant,
}

/// Single-slot timer for the "just placed" highlight.
#[derive(Debug, Clone)]
pub struct PopTimer {
    duration: Duration,
    active: Option<Pop>,
}

impl PopTimer {
    /// Creates an idle timer; each pop lasts `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Pops `position`, replacing any pop still showing.
    pub fn start(&mut self, position: Position, now: Instant) {
        if self.duration.is_zero() {
            return;
        }
        self.active = Some(Pop {
            position,
            deadline: now + self.duration,
        });
    }

    /// Drops the current pop, if any.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Clears an expired pop. Returns true if one was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.active {
            Some(pop) if now >= pop.deadline => {
                trace!(position = %pop.position, "Pop expired");
                self.active = None;
                true
            }
            _ => false,
        }
    }

    /// The popped position, if its deadline has not passed.
    pub fn active(&self, now: Instant) -> Option<Position> {
        self.active
            .filter(|pop| now < pop.deadline)
            .map(|pop| pop.position)
    }

    /// Time left on the current pop.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.active
            .map(|pop| pop.deadline.saturating_duration_since(now))
    }
}
