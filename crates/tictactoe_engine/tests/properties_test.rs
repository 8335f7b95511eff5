//! Property-based tests over arbitrary click sequences.

use proptest::prelude::*;
use tictactoe_engine::{GameEngine, Mark, Outcome, Square, rules};

/// Arbitrary clicks, including off-board indices.
fn arb_clicks() -> impl Strategy<Value = Vec<isize>> {
    proptest::collection::vec(-3isize..12, 0..30)
}

proptest! {
    #[test]
    fn mark_balance_tracks_turn(clicks in arb_clicks()) {
        let mut engine = GameEngine::new();
        for index in clicks {
            let state = engine.apply_move(index);
            let xs = state.board().count(Mark::X);
            let os = state.board().count(Mark::O);
            prop_assert!(xs == os || xs == os + 1);

            if xs == os + 1 {
                // O to move, or X just ended the game.
                let x_just_finished = state.outcome().is_over() && *state.turn() == Mark::X;
                prop_assert!(*state.turn() == Mark::O || x_just_finished);
            }
        }
    }

    #[test]
    fn rejected_moves_change_nothing(clicks in arb_clicks(), probe in -3isize..12) {
        let mut engine = GameEngine::new();
        for index in clicks {
            engine.apply_move(index);
        }
        let before = engine.state();
        let off_board = !(0..9).contains(&probe);
        let occupied = !off_board && before.board().squares()[probe as usize] != Square::Empty;

        if off_board || occupied || before.outcome().is_over() {
            prop_assert_eq!(engine.apply_move(probe), before);
        }
    }

    #[test]
    fn finished_games_are_frozen(clicks in arb_clicks(), more in arb_clicks()) {
        let mut engine = GameEngine::new();
        for index in clicks {
            engine.apply_move(index);
        }
        if engine.outcome().is_over() {
            let frozen = engine.state();
            for index in more {
                prop_assert_eq!(engine.apply_move(index), frozen.clone());
            }
        }
    }

    #[test]
    fn outcome_is_derived_from_board(clicks in arb_clicks()) {
        let mut engine = GameEngine::new();
        for index in clicks {
            let state = engine.apply_move(index);
            prop_assert_eq!(*state.outcome(), rules::evaluate(state.board()));
            if rules::is_full(state.board()) {
                prop_assert_ne!(*state.outcome(), Outcome::InProgress);
            }
        }
    }

    #[test]
    fn reset_always_yields_fresh_game(clicks in arb_clicks()) {
        let mut engine = GameEngine::new();
        for index in clicks {
            engine.apply_move(index);
        }
        let fresh = engine.reset();
        prop_assert!(fresh.board().squares().iter().all(|s| *s == Square::Empty));
        prop_assert_eq!(*fresh.turn(), Mark::X);
        prop_assert_eq!(*fresh.outcome(), Outcome::InProgress);
    }

    #[test]
    fn winning_highlight_is_exactly_one_line(clicks in arb_clicks()) {
        let mut engine = GameEngine::new();
        for index in clicks {
            engine.apply_move(index);
        }
        let highlighted = (0..9).filter(|&i| engine.is_part_of_winning_line(i)).count();
        match engine.outcome() {
            Outcome::Won(mark) => {
                prop_assert_eq!(highlighted, 3);
                for i in (0..9).filter(|&i| engine.is_part_of_winning_line(i)) {
                    prop_assert_eq!(engine.board().squares()[i as usize], Square::Occupied(*mark));
                }
            }
            Outcome::InProgress | Outcome::Draw => prop_assert_eq!(highlighted, 0),
        }
    }
}
