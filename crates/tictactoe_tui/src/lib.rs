//! Terminal front-end for the tic-tac-toe engine.
//!
//! The engine owns the game; this crate owns everything a player sees:
//! layout, colours, the keyboard cursor, and the brief pop on a freshly
//! placed mark.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod pop;
pub mod tui;
pub mod ui;

pub use app::{App, CellView};
pub use cli::Cli;
pub use config::{ConfigError, Settings};
pub use input::Action;
pub use tui::run;
