//! Stateless UI rendering for tic-tac-toe.

use crate::app::{App, CellView};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPosition, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use std::time::Instant;
use tictactoe_engine::{Mark, Position};

/// Title and reset button colour.
pub const PRIMARY: Color = Color::Rgb(0x19, 0x76, 0xD2);
/// Status line and winning-line colour.
pub const ACCENT: Color = Color::Rgb(0x43, 0xA0, 0x47);
/// Background of a freshly placed mark.
pub const SECONDARY: Color = Color::Rgb(0xEE, 0xEE, 0xEE);

const CELL_WIDTH: u16 = 11;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const BUTTON_WIDTH: u16 = 20;

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Heading.
    pub title: Rect,
    /// Turn or result line.
    pub status: Rect,
    /// The 3x3 grid, separators included.
    pub board: Rect,
    /// Reset button.
    pub reset: Rect,
    /// Key help.
    pub footer: Rect,
}

/// Something on screen that responds to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board square.
    Cell(Position),
    /// The reset button.
    Reset,
}

/// Splits the frame into its regions.
pub fn screen(area: Rect) -> Screen {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Length(3),         // Status
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Reset
            Constraint::Length(1),         // Footer
        ])
        .split(area);

    Screen {
        title: chunks[0],
        status: chunks[1],
        board: center_rect(chunks[2], BOARD_WIDTH, BOARD_HEIGHT),
        reset: center_rect(chunks[3], BUTTON_WIDTH, 3),
        footer: chunks[4],
    }
}

/// Rectangles of the nine squares, in index order.
pub fn cell_rects(board: Rect) -> [Rect; 9] {
    Position::ALL.map(|pos| {
        Rect::new(
            board.x + pos.col() as u16 * (CELL_WIDTH + 1),
            board.y + pos.row() as u16 * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(board)
    })
}

/// Finds what lies under a terminal coordinate.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Target> {
    let screen = screen(area);
    let point = ScreenPosition::new(column, row);

    if screen.reset.contains(point) {
        return Some(Target::Reset);
    }
    Position::ALL
        .into_iter()
        .zip(cell_rects(screen.board))
        .find(|(_, rect)| rect.contains(point))
        .map(|(pos, _)| Target::Cell(pos))
}

/// Renders the whole game.
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let screen = screen(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, screen.title);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(status, screen.status);

    draw_board(frame, screen.board, app, now);

    let button = Paragraph::new(app.reset_label())
        .style(
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, screen.reset);

    if app.show_footer() {
        let footer = Paragraph::new("1-9 place · arrows/hjkl move · r reset · q quit")
            .style(Style::default().fg(PRIMARY).add_modifier(Modifier::DIM))
            .alignment(Alignment::Center);
        frame.render_widget(footer, screen.footer);
    }
}

fn draw_board(frame: &mut Frame, board: Rect, app: &App, now: Instant) {
    let run = "─".repeat(CELL_WIDTH as usize);
    let horizontal = format!("{run}┼{run}┼{run}");
    for k in 1..3 {
        let y = board.y + k * (CELL_HEIGHT + 1) - 1;
        let rect = Rect::new(board.x, y, board.width, 1).intersection(board);
        let sep = Paragraph::new(horizontal.as_str()).style(Style::new().fg(Color::DarkGray));
        frame.render_widget(sep, rect);
    }

    for (pos, rect) in Position::ALL.into_iter().zip(cell_rects(board)) {
        if pos.col() < 2 {
            let sep = Rect::new(rect.right(), rect.y, 1, rect.height).intersection(board);
            draw_separator_vertical(frame, sep);
        }
        draw_cell(frame, rect, pos, app.cell(pos, now));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, pos: Position, view: CellView) {
    let symbol = match view.mark {
        Some(mark) => mark.to_string(),
        None => (pos.to_index() + 1).to_string(),
    };
    let lines = vec![Line::default(), Line::from(symbol), Line::default()];
    let paragraph = Paragraph::new(lines)
        .style(cell_style(view))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Picks the style for a square; a winning highlight outranks everything.
///
/// Only empty squares dim when they cannot be played; placed marks keep
/// their colour so a finished board stays readable.
pub fn cell_style(view: CellView) -> Style {
    let bold = Modifier::BOLD;
    let mut style = match view.mark {
        Some(Mark::X) => Style::default().fg(Color::Blue).add_modifier(bold),
        Some(Mark::O) => Style::default().fg(Color::Red).add_modifier(bold),
        None => Style::default().fg(Color::DarkGray),
    };
    if view.disabled && view.mark.is_none() {
        style = style.add_modifier(Modifier::DIM);
    }
    if view.cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }
    if view.popped {
        style = style
            .bg(SECONDARY)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if view.winning {
        style = style.bg(ACCENT).fg(Color::White).add_modifier(bold);
    }
    style
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
