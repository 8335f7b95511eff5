//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The outcome is always
//! recomputed from the board rather than tracked incrementally.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::outcome::Outcome;
use super::types::Board;
use tracing::instrument;

/// Classifies the board: won, drawn, or still in progress.
///
/// A completed line takes precedence over a full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
