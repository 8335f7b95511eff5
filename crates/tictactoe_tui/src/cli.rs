//! Command-line interface for the terminal front-end.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How long a freshly placed mark stays emphasised, in milliseconds
    #[arg(long)]
    pub pop_ms: Option<u64>,

    /// Where to write the log (the terminal is taken by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
