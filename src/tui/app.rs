//! Application state and event handling.

use super::input::{Action, Direction, action_for, move_cursor};
use super::layout::ScreenLayout;
use crate::Settings;
use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use morpion_rules::{GameHistory, Position};
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move the history selection.
    History,
}

impl Focus {
    /// Toggles between `Board` and `History`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Result of handling one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running.
    Stay,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns the single [`GameHistory`] of the session. Every event is applied
/// completely before the next one is read.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    focus: Focus,
    selected: usize,
    viewport: Rect,
    show_cell_numbers: bool,
    mouse: bool,
}

impl App {
    /// Creates a new application with a fresh history.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            viewport: Rect::default(),
            show_cell_numbers: *settings.show_cell_numbers(),
            mouse: *settings.mouse(),
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected entry in the history panel.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Whether empty cells show their number.
    pub fn show_cell_numbers(&self) -> bool {
        self.show_cell_numbers
    }

    /// Records the area of the last drawn frame for mouse hit-testing.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Handles a key event.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Transition {
        // Skip key release events (crossterm fires both press and release on some platforms).
        if key.kind == KeyEventKind::Release {
            return Transition::Stay;
        }
        match action_for(key) {
            Some(action) => self.apply(action),
            None => Transition::Stay,
        }
    }

    /// Handles a mouse event: left click on a cell plays it, left click on a
    /// history entry jumps to it.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Transition {
        if !self.mouse || mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Transition::Stay;
        }

        let layout = ScreenLayout::compute(self.viewport);
        if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
            self.cursor = pos;
            self.play(pos);
        } else if let Some(index) = layout.history_entry_at(
            mouse.column,
            mouse.row,
            layout.history_offset(self.selected),
        ) {
            self.jump(index);
        }
        Transition::Stay
    }

    /// Applies an action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Transition {
        match action {
            Action::Quit => {
                info!("User quit");
                return Transition::Quit;
            }
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.history.current_index();
            }
            Action::Navigate(direction) => self.navigate(direction),
            Action::Confirm => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            Action::PlayAt(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::StepBack => {
                self.history.step_back();
                self.sync_selection();
            }
            Action::StepForward => {
                self.history.step_forward();
                self.sync_selection();
            }
            Action::JumpToStart => self.jump(0),
        }
        Transition::Stay
    }

    fn navigate(&mut self, direction: Direction) {
        match self.focus {
            Focus::Board => self.cursor = move_cursor(self.cursor, direction),
            Focus::History => match direction {
                Direction::Up => self.selected = self.selected.saturating_sub(1),
                Direction::Down => {
                    self.selected = (self.selected + 1).min(self.history.len() - 1);
                }
                Direction::Left | Direction::Right => {}
            },
        }
    }

    /// Plays at `pos`. Illegal moves leave everything as it was.
    fn play(&mut self, pos: Position) {
        match self.history.play(pos) {
            Ok(mv) => {
                info!(%mv, index = self.history.current_index(), "Move played");
                self.sync_selection();
            }
            Err(e) => debug!(error = %e, "Move ignored"),
        }
    }

    fn jump(&mut self, index: usize) {
        match self.history.jump_to(index) {
            Ok(()) => {
                info!(index, "Jumped in history");
                self.sync_selection();
            }
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    fn sync_selection(&mut self) {
        self.selected = self.history.current_index();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) -> Transition {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrows_and_enter_play_at_cursor() {
        let mut app = App::default();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.history().len(), 2);
        assert!(!app.history().current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::default();
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.history().len(), 1);
    }

    #[test]
    fn test_history_focus_selects_and_jumps() {
        let mut app = App::default();
        for digit in ['1', '5', '9'] {
            press(&mut app, KeyCode::Char(digit));
        }
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.selected(), 3);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history().current_index(), 1);
        assert_eq!(app.history().len(), 4);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), 3);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Transition::Quit);
        assert_eq!(press(&mut app, KeyCode::Esc), Transition::Quit);
        assert_eq!(press(&mut app, KeyCode::Char('x')), Transition::Stay);
    }
}
