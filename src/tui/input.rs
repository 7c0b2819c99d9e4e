//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use morpion_rules::Position;

/// Something the user asked for, independent of which key produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor or the history selection.
    Navigate(Direction),
    /// Play at the cursor, or jump to the selected history entry.
    Confirm,
    /// Play directly at a cell.
    PlayAt(Position),
    /// Switch focus between board and history panel.
    ToggleFocus,
    /// Step one snapshot back.
    StepBack,
    /// Step one snapshot forward.
    StepForward,
    /// Jump to the empty board.
    JumpToStart,
    /// Leave the game.
    Quit,
}

/// Arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// Maps a key press to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Action::Navigate(Direction::Up)),
        KeyCode::Down => Some(Action::Navigate(Direction::Down)),
        KeyCode::Left => Some(Action::Navigate(Direction::Left)),
        KeyCode::Right => Some(Action::Navigate(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Tab | KeyCode::BackTab => Some(Action::ToggleFocus),
        KeyCode::Char('[') | KeyCode::PageUp => Some(Action::StepBack),
        KeyCode::Char(']') | KeyCode::PageDown => Some(Action::StepForward),
        KeyCode::Char('r') | KeyCode::Home => Some(Action::JumpToStart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => c
            .to_digit(10)
            .filter(|digit| (1..=9).contains(digit))
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::PlayAt),
        _ => None,
    }
}

/// Moves the board cursor one cell, staying on the board.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match direction {
        Direction::Up => row.checked_sub(1).map(|row| (row, col)),
        Direction::Down => Some((row + 1, col)),
        Direction::Left => col.checked_sub(1).map(|col| (row, col)),
        Direction::Right => Some((row, col + 1)),
    };
    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
