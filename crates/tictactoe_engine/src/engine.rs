//! The game engine: sole owner of a session's [`GameState`].

use super::action::{Move, MoveRejection};
use super::invariants;
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::state::GameState;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument};

/// Owns one game and applies moves to it.
///
/// Rejected moves leave the state untouched. The outcome is recomputed
/// from the board on every accepted move and is never set directly.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark placed by the next accepted move.
    pub fn turn(&self) -> Mark {
        *self.state.turn()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> &Outcome {
        self.state.outcome()
    }

    /// Places the current mark at `index`, or does nothing.
    ///
    /// Out-of-range indices, occupied squares, and moves after the game
    /// is over are silently ignored. Returns the resulting snapshot either
    /// way.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: isize) -> GameState {
        match self.try_move(index) {
            Ok(state) => state,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.state()
            }
        }
    }

    /// Places the current mark at `index`, reporting why if it cannot.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection`] if the index is off the board, the game is
    /// over, or the square is occupied. The state is unchanged on error.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, index: isize) -> Result<GameState, MoveRejection> {
        let position = Position::from_signed(index)
            .ok_or(MoveRejection::OutOfRange(index))?;
        self.place(position)
    }

    /// Places the current mark at a typed position.
    ///
    /// # Errors
    ///
    /// Returns [`MoveRejection::GameOver`] once the game is decided, and
    /// [`MoveRejection::Occupied`] for a taken square.
    #[instrument(skip(self), fields(turn = %self.state.turn()))]
    pub fn place(&mut self, position: Position) -> Result<GameState, MoveRejection> {
        if self.state.outcome().is_over() {
            return Err(MoveRejection::GameOver);
        }
        if !self.state.board().is_empty(position) {
            return Err(MoveRejection::Occupied(position));
        }

        let action = Move::new(*self.state.turn(), position);
        self.state.apply(action);

        if cfg!(debug_assertions) {
            invariants::assert_invariants(&self.state);
        }

        debug!(%action, outcome = %self.state.outcome(), "Move applied");
        if self.state.outcome().is_over() {
            info!(outcome = %self.state.outcome(), "Game over");
        }

        Ok(self.state())
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        info!(previous = %self.state.outcome(), "Resetting game");
        self.state = GameState::new();
        self.state()
    }

    /// Returns true if the square at `index` is part of the winning line.
    ///
    /// The line is re-derived from the board: the first completed line in
    /// row, column, diagonal order. False unless the game has been won.
    pub fn is_part_of_winning_line(&self, index: isize) -> bool {
        let Some(position) = Position::from_signed(index) else {
            return false;
        };
        self.winning_line()
            .is_some_and(|line| line.contains(&position))
    }

    /// Returns the completed line of a won game.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.state.outcome() {
            Outcome::Won(_) => rules::winning_line(self.board()).map(|(_, line)| line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the empty squares, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.state.outcome().is_over() {
            Vec::new()
        } else {
            Position::valid_moves(self.state.board())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_fresh_engine() {
        let engine = GameEngine::new();
        assert_eq!(engine.state(), GameState::new());
        assert_eq!(engine.turn(), Mark::X);
        assert_eq!(engine.valid_moves().len(), 9);
    }

    #[test]
    fn test_try_move_reports_rejections() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.try_move(-1), Err(MoveRejection::OutOfRange(-1)));
        engine.try_move(4).unwrap();
        assert_eq!(
            engine.try_move(4),
            Err(MoveRejection::Occupied(Position::Center))
        );
    }

    #[test]
    fn test_game_over_reported_before_occupied() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 1, 5, 2] {
            engine.apply_move(index);
        }
        assert_eq!(engine.try_move(0), Err(MoveRejection::GameOver));
        assert_eq!(engine.try_move(3), Err(MoveRejection::GameOver));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut engine = GameEngine::new();
        let before = engine.state();
        engine.apply_move(0);
        assert_eq!(before.board().get(Position::TopLeft), Square::Empty);
        assert_eq!(
            engine.board().get(Position::TopLeft),
            Square::Occupied(Mark::X)
        );
    }

    #[test]
    fn test_winning_line_only_when_won() {
        let mut engine = GameEngine::new();
        for index in [0, 4, 1, 5] {
            engine.apply_move(index);
        }
        assert_eq!(engine.winning_line(), None);
        assert!(!engine.is_part_of_winning_line(0));

        engine.apply_move(2);
        assert_eq!(
            engine.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert!(engine.is_part_of_winning_line(1));
        assert!(!engine.is_part_of_winning_line(4));
        assert!(!engine.is_part_of_winning_line(42));
        assert!(engine.valid_moves().is_empty());
    }
}
