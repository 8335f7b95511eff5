//! Terminal setup and the synchronous event loop.

use crate::app::App;
use crate::config::Settings;
use crate::input::{action_for, mouse_action};
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::EnvFilter;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Sends logs to a file so they never land on the game screen.
pub fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game until the user quits.
#[instrument(skip(settings))]
pub fn run(settings: Settings) -> Result<()> {
    init_tracing(settings.log_file())?;
    info!(pop_ms = settings.pop_duration_ms(), "Starting Tic Tac Toe");

    let mut terminal = setup()?;
    let mut app = App::new(settings.pop_duration(), *settings.show_footer());

    let res = run_loop(&mut terminal, &mut app);
    let restored = restore(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Goodbye");
    res?;
    Ok(restored?)
}

fn setup() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    entered.map_err(|err| {
        if let Err(teardown) = unwind(&mut io::stdout()) {
            warn!(error = %teardown, "Terminal teardown failed");
        }
        err.into()
    })
}

/// Runs every teardown step even if an earlier one fails.
fn restore(terminal: &mut Tui) -> io::Result<()> {
    first_error([unwind(terminal.backend_mut()), terminal.show_cursor()])
}

fn unwind(out: &mut impl Write) -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(out, LeaveAlternateScreen, DisableMouseCapture),
    ])
}

/// Returns the first failure among steps that have already run.
fn first_error(steps: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    steps.into_iter().find_map(Result::err).map_or(Ok(()), Err)
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let mut area = Rect::default();
    let mut dirty = true;

    while !app.should_quit() {
        let now = Instant::now();
        if app.tick(now) {
            dirty = true;
        }
        if dirty {
            terminal.draw(|f| {
                area = f.area();
                ui::draw(f, app, now);
            })?;
            dirty = false;
        }

        if !event::poll(app.poll_timeout(Instant::now()))? {
            continue;
        }
        let action = match event::read()? {
            Event::Key(key) => action_for(key),
            Event::Mouse(mouse) => mouse_action(area, mouse),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                dirty = true;
                None
            }
            _ => None,
        };
        if let Some(action) = action {
            app.handle(action, Instant::now());
            dirty = true;
        }
    }

    Ok(())
}
