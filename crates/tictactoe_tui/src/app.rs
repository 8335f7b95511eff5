//! Application state: the engine plus view-only state around it.

use crate::input::{Action, move_cursor};
use crate::pop::PopTimer;
use std::time::{Duration, Instant};
use tictactoe_engine::{GameEngine, Mark, Outcome, Position, Square};
use tracing::{debug, info, instrument};

/// Upper bound on how long the event loop waits for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// How one square should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// Mark in the square, if any.
    pub mark: Option<Mark>,
    /// Part of the completed line.
    pub winning: bool,
    /// Placed just now.
    pub popped: bool,
    /// Cannot be played (occupied, or the game is over).
    pub disabled: bool,
    /// Under the keyboard cursor.
    pub cursor: bool,
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    cursor: Position,
    pop: PopTimer,
    show_footer: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around a fresh game.
    pub fn new(pop_duration: Duration, show_footer: bool) -> Self {
        Self {
            engine: GameEngine::new(),
            cursor: Position::Center,
            pop: PopTimer::new(pop_duration),
            show_footer,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the footer is shown.
    pub fn show_footer(&self) -> bool {
        self.show_footer
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a user action.
    #[instrument(skip(self, now))]
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Click(index) => self.click(index, now),
            Action::Select => self.click(self.cursor.to_index() as isize, now),
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Reset => self.reset(),
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Forwards a click to the engine and pops the mark if it landed.
    pub fn click(&mut self, index: isize, now: Instant) {
        let before = self.engine.state();
        let after = self.engine.apply_move(index);
        if after == before {
            return;
        }

        if let Some(position) = Position::from_signed(index) {
            debug!(%position, "Mark placed");
            self.cursor = position;
            self.pop.start(position, now);
        }
    }

    /// Restarts the game and clears the view state tied to it.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.pop.cancel();
        self.cursor = Position::Center;
    }

    /// Advances view timers. Returns true if a redraw is needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.pop.expire(now)
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.pop
            .remaining(now)
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL))
    }

    /// Text above the board.
    pub fn status(&self) -> String {
        match self.engine.outcome() {
            Outcome::InProgress => format!("Current Turn: Player {}", self.engine.turn()),
            Outcome::Won(mark) => format!("Player {} wins!", mark),
            Outcome::Draw => "It's a draw!".to_string(),
        }
    }

    /// Label of the reset control.
    pub fn reset_label(&self) -> &'static str {
        if self.engine.outcome().is_over() {
            "Play Again"
        } else {
            "Reset Game"
        }
    }

    /// Everything the renderer needs to know about one square.
    pub fn cell(&self, position: Position, now: Instant) -> CellView {
        let mark = self.engine.board().get(position).mark();
        let index = position.to_index() as isize;
        CellView {
            mark,
            winning: self.engine.is_part_of_winning_line(index),
            popped: self.pop.active(now) == Some(position),
            disabled: self.engine.outcome().is_over()
                || self.engine.board().get(position) != Square::Empty,
            cursor: self.cursor == position && !self.engine.outcome().is_over(),
        }
    }
}
