//! Tic Tac Toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, Settings};

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;
    tictactoe_tui::run(settings)
}
