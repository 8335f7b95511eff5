//! Outcome consistency invariant: the stored outcome is the board's outcome.

use super::super::{GameState, Outcome, rules};
use super::Invariant;

/// Invariant: the outcome equals a fresh evaluation of the board, and a
/// winner is always the mark that moved last.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        if *state.outcome() != rules::evaluate(state.board()) {
            return false;
        }
        match state.outcome() {
            Outcome::Won(mark) => mark == state.turn(),
            Outcome::InProgress | Outcome::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
