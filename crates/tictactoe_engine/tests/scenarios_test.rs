//! Scripted games exercising win, draw, rejection, and reset.

use tictactoe_engine::{GameEngine, GameState, Mark, Outcome, Position, Square};

fn play(engine: &mut GameEngine, moves: &[isize]) -> GameState {
    let mut state = engine.state();
    for &index in moves {
        state = engine.apply_move(index);
    }
    state
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    let state = play(&mut engine, &[0, 4, 1, 5]);
    assert_eq!(*state.outcome(), Outcome::InProgress);

    let state = engine.apply_move(2);
    assert_eq!(*state.outcome(), Outcome::Won(Mark::X));

    let winning: Vec<isize> = (0..9)
        .filter(|&i| engine.is_part_of_winning_line(i))
        .collect();
    assert_eq!(winning, vec![0, 1, 2]);
}

#[test]
fn test_full_board_draw() {
    let mut engine = GameEngine::new();
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    for (n, &index) in moves.iter().enumerate() {
        let state = engine.apply_move(index);
        let expected = if n == moves.len() - 1 {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        assert_eq!(*state.outcome(), expected, "after move {}", n + 1);
    }

    assert!((0..9).all(|i| !engine.is_part_of_winning_line(i)));
}

#[test]
fn test_move_after_win_is_ignored() {
    let mut engine = GameEngine::new();
    let won = play(&mut engine, &[0, 4, 1, 5, 2]);

    let after = engine.apply_move(3);
    assert_eq!(after, won);
    assert_eq!(after.board().get(Position::MiddleLeft), Square::Empty);
}

#[test]
fn test_out_of_range_moves_are_ignored() {
    let mut engine = GameEngine::new();
    let fresh = engine.state();

    assert_eq!(engine.apply_move(-1), fresh);
    assert_eq!(engine.apply_move(9), fresh);
    assert_eq!(engine.apply_move(isize::MIN), fresh);
}

#[test]
fn test_occupied_square_is_ignored() {
    let mut engine = GameEngine::new();
    let state = engine.apply_move(4);
    assert_eq!(engine.apply_move(4), state);
    assert_eq!(*engine.state().turn(), Mark::O);
}

#[test]
fn test_reset_after_terminal_state() {
    for moves in [
        &[0, 4, 1, 5, 2][..],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8][..],
        &[0, 3, 1, 4, 8, 5][..],
    ] {
        let mut engine = GameEngine::new();
        let state = play(&mut engine, moves);
        assert!(state.outcome().is_over());

        let fresh = engine.reset();
        assert_eq!(fresh, GameState::new());

        let state = engine.apply_move(0);
        assert_eq!(
            state.board().get(Position::TopLeft),
            Square::Occupied(Mark::X)
        );
        assert_eq!(*state.turn(), Mark::O);
    }
}

#[test]
fn test_reset_mid_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[4, 0]);

    let fresh = engine.reset();
    assert!(fresh.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(*fresh.turn(), Mark::X);
    assert_eq!(*fresh.outcome(), Outcome::InProgress);
}
