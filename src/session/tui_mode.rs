//! TUI mode execution

use super::SessionData;
use crate::print_cmd_info;
use crate::ui::{self, StartScreen};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// Sets up the terminal, runs the UI loop on `start`, and restores the
/// terminal even when the loop fails.
pub async fn run_tui_mode(
    session: SessionData,
    start: StartScreen,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    print_cmd_info!("Connecting", "{}", session.api_url);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = ui::App::new(session.backend, start, with_background);
    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    log::info!("Terminal session closed");
    Ok(())
}
