//! Mark balance invariant: X leads O by at most one mark.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1, and agrees with the turn.
///
/// While in progress, X leads exactly when O is to move. Once the game is
/// over the turn stays on the final mover, so X leads exactly when X
/// made the last move.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let xs = state.board().count(Mark::X);
        let os = state.board().count(Mark::O);

        let x_leads = match xs.checked_sub(os) {
            Some(0) => false,
            Some(1) => true,
            _ => return false,
        };

        let last_or_next = if state.outcome().is_over() {
            Mark::X
        } else {
            Mark::O
        };
        x_leads == (*state.turn() == last_or_next)
    }

    fn description() -> &'static str {
        "Marks balance with turns (X leads by 0 or 1)"
    }
}
