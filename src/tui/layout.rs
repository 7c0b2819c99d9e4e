//! Screen geometry shared by rendering and mouse hit-testing.

use morpion_rules::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Areas of every widget on screen for a given terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Status line.
    pub status: Rect,
    /// Bordered board panel.
    pub board_panel: Rect,
    /// The nine cells in row-major order.
    pub cells: [Rect; 9],
    /// Bordered history panel.
    pub history_panel: Rect,
    /// Inner history list area; entry `i` is drawn on row `i`.
    pub history_list: Rect,
    /// Help line.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits `area` into the game screen.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Status
                Constraint::Min(BOARD_HEIGHT + 2),
                Constraint::Length(3), // Help
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[2]);

        let board_panel = body[0];
        let history_panel = body[1];

        Self {
            title: rows[0],
            status: rows[1],
            board_panel,
            cells: cell_rects(center_rect(inner(board_panel), BOARD_WIDTH, BOARD_HEIGHT)),
            history_panel,
            history_list: inner(history_panel),
            help: rows[3],
        }
    }

    /// Cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        self.cells
            .iter()
            .position(|rect| contains(*rect, column, row))
            .and_then(Position::from_index)
    }

    /// Index of the first visible history entry when entry `selected` must be
    /// on screen. The list scrolls only once the selection passes the last row.
    pub fn history_offset(&self, selected: usize) -> usize {
        let rows = usize::from(self.history_list.height.max(1));
        selected.saturating_sub(rows - 1)
    }

    /// History entry index under the given terminal coordinates, for a list
    /// scrolled by `offset` entries.
    ///
    /// The index may be past the end of the history; callers check it.
    pub fn history_entry_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        contains(self.history_list, column, row)
            .then(|| offset + usize::from(row - self.history_list.y))
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Area inside a one-cell border.
fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

/// Cells of a board drawn in `area`, with one-cell separators between them.
fn cell_rects(area: Rect) -> [Rect; 9] {
    let mut cells = [Rect::default(); 9];
    for pos in Position::ALL {
        let x = area.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = area.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        cells[pos.to_index()] = Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area);
    }
    cells
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
