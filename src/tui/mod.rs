//! Terminal UI: one event loop over one game history.

mod app;
mod input;
mod layout;
mod text;
mod ui;

pub use app::{App, Focus, Transition};
pub use input::{Action, Direction, action_for, move_cursor};
pub use layout::ScreenLayout;
pub use text::{history_entry, status as status_text};
pub use ui::draw;

use crate::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before any error is returned.
#[instrument(skip(settings))]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Morpion TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if *settings.mouse() {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    } else {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(settings));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Draws, waits for one event, applies it. Repeats until [`Transition::Quit`].
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let frame = terminal.draw(|f| ui::draw(f, &app))?;
        app.set_viewport(frame.area);

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        let transition = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => Transition::Stay,
        };

        if transition == Transition::Quit {
            return Ok(());
        }
    }
}
