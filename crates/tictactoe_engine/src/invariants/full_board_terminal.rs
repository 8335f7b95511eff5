//! Full board invariant: nine marks always end the game.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: a full board is never in progress.
pub struct FullBoardTerminalInvariant;

impl Invariant<GameState> for FullBoardTerminalInvariant {
    fn holds(state: &GameState) -> bool {
        !rules::is_full(state.board()) || state.outcome().is_over()
    }

    fn description() -> &'static str {
        "A full board is won or drawn"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, GameEngine, Mark, Outcome, Square};

    #[test]
    fn test_holds_after_draw() {
        let mut engine = GameEngine::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.apply_move(index);
        }
        assert!(FullBoardTerminalInvariant::holds(&engine.state()));
    }

    #[test]
    fn test_full_board_in_progress_violates() {
        use Mark::*;
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X].map(Square::Occupied));
        let state = GameState::from_parts(board, X, Outcome::InProgress);
        assert!(!FullBoardTerminalInvariant::holds(&state));
    }
}
