//! Keyboard and mouse input: bindings and cursor movement.

use crate::ui::{Target, hit_test};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tictactoe_engine::Position;

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place the current mark at a raw board index.
    Click(isize),
    /// Place the current mark under the cursor.
    Select,
    /// Move the cursor one square.
    Cursor(KeyCode),
    /// Start over.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
///
/// Digits 1-9 address squares like a phone keypad read row by row, so
/// `1` is the top-left square (index 0).
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::Click(digit as isize - 1)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(KeyCode::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(KeyCode::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(KeyCode::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(KeyCode::Right)),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Maps a left click inside `area` (the last drawn frame) to an action.
pub fn mouse_action(area: Rect, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    match hit_test(area, mouse.column, mouse.row)? {
        Target::Cell(pos) => Some(Action::Click(pos.to_index() as isize)),
        Target::Reset => Some(Action::Reset),
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
