//! Stateless UI rendering.

use super::app::{App, Focus};
use super::layout::ScreenLayout;
use super::text;
use morpion_rules::{GameStatus, Player, Position, Square, winning_line};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Draws the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(frame.area());
    let history = app.history();

    let title = Paragraph::new(text::TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let status = history.status();
    let status_style = match status {
        GameStatus::Won(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        GameStatus::Draw => Style::default().fg(Color::Magenta),
        GameStatus::InProgress { .. } => Style::default().fg(Color::Yellow),
    };
    let status = Paragraph::new(text::status(status))
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_board(frame, &layout, app);
    draw_history(frame, &layout, app);

    let help = Paragraph::new(text::HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    frame.render_widget(panel("", app.focus() == Focus::Board), layout.board_panel);

    let board = app.history().current_board();
    let highlighted = winning_line(board).map(|(_, line)| line);

    for pos in Position::ALL {
        let winning = highlighted.is_some_and(|line| line.contains(&pos));
        draw_cell(frame, layout.cells[pos.to_index()], board.get(pos), pos, app, winning);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, square: Square, pos: Position, app: &App, winning: bool) {
    let (symbol, base_style) = match square {
        Square::Empty if app.show_cell_numbers() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let under_cursor = pos == app.cursor() && app.focus() == Focus::Board;
    let style = match (winning, under_cursor) {
        // Winning cells keep their green background; the cursor shows as reverse video.
        (true, true) => base_style.bg(Color::Green).add_modifier(Modifier::REVERSED),
        (true, false) => base_style.bg(Color::Green),
        (false, true) => base_style.bg(Color::White).fg(Color::Black),
        (false, false) => base_style,
    };

    // Vertically centre the symbol in the cell.
    let mut lines = vec![Line::default(); usize::from(area.height / 2)];
    lines.push(Line::from(Span::raw(symbol)));
    let cell = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().style(style));
    frame.render_widget(cell, area);
}

fn draw_history(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let history = app.history();
    let focused = app.focus() == Focus::History;

    let items: Vec<ListItem> = (0..history.len())
        .map(|index| {
            let label = text::history_entry(index, history.move_at(index));
            let mut style = if index == history.current_index() {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            if focused && index == app.selected() {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    frame.render_widget(panel(text::HISTORY_TITLE, focused), layout.history_panel);
    // Same scroll position as mouse hit-testing uses.
    let mut state = ListState::default()
        .with_offset(layout.history_offset(app.selected()))
        .with_selected(Some(app.selected()));
    frame.render_stateful_widget(List::new(items), layout.history_list, &mut state);
}
