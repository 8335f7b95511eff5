//! Tic-tac-toe game engine.
//!
//! A single [`GameEngine`] owns the board, whose turn it is, and the
//! derived [`Outcome`]. A view layer reads [`GameState`] snapshots and
//! forwards user input to [`GameEngine::apply_move`].
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, Outcome};
//!
//! let mut engine = GameEngine::new();
//! for index in [0, 4, 1, 5, 2] {
//!     engine.apply_move(index);
//! }
//! assert_eq!(*engine.outcome(), Outcome::Won(Mark::X));
//! assert!(engine.is_part_of_winning_line(1));
//!
//! let fresh = engine.reset();
//! assert_eq!(*fresh.turn(), Mark::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveRejection};
pub use engine::GameEngine;
pub use outcome::Outcome;
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Mark, Square};
