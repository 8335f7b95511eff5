//! Complete game state snapshot.

use super::action::Move;
use super::outcome::Outcome;
use super::rules;
use super::types::{Board, Mark, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Board, turn, and outcome of a single game.
///
/// Snapshots handed out by [`GameEngine`](crate::GameEngine) are clones;
/// mutating one never affects the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark placed by the next accepted move.
    ///
    /// Left on the final mover once the game is over.
    turn: Mark,
    /// Outcome derived from `board`.
    outcome: Outcome,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Places the move's mark and recomputes the outcome (unchecked).
    pub(crate) fn apply(&mut self, action: Move) {
        self.board
            .set(action.position, Square::Occupied(action.mark));
        self.outcome = rules::evaluate(&self.board);
        if !self.outcome.is_over() {
            self.turn = self.turn.opponent();
        }
    }

    /// Builds a state directly from its parts, bypassing move rules.
    #[cfg(test)]
    pub(crate) fn from_parts(board: Board, turn: Mark, outcome: Outcome) -> Self {
        Self {
            board,
            turn,
            outcome,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
