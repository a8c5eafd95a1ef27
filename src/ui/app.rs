//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::backend::KycBackend;
use crate::consts::cli_consts::INPUT_POLL_MS;
use crate::ui::dashboard::{handle_dashboard_key, render_dashboard};
use crate::ui::employees::{handle_employee_key, render_employees};
use crate::workers::{DashboardSession, EmployeeSession};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::Duration;

/// What the UI loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// Swap between the dashboard and the employee listing.
    SwitchScreen,
    Quit,
}

/// Which screen the application opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartScreen {
    Dashboard,
    Employees,
}

/// The screen being displayed. Each owns its session, so leaving a screen
/// cancels whatever it still had in flight.
pub enum Screen {
    Dashboard(Box<DashboardSession>),
    Employees(Box<EmployeeSession>),
}

/// Application state
pub struct App {
    backend: Arc<dyn KycBackend>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Whether to paint the dark background
    with_background_color: bool,
}

impl App {
    /// Creates the application and starts loading the first screen.
    pub fn new(
        backend: Arc<dyn KycBackend>,
        start: StartScreen,
        with_background_color: bool,
    ) -> Self {
        let current_screen = Self::open(backend.clone(), start);
        Self {
            backend,
            current_screen,
            with_background_color,
        }
    }

    fn open(backend: Arc<dyn KycBackend>, screen: StartScreen) -> Screen {
        match screen {
            StartScreen::Dashboard => {
                let mut session = DashboardSession::new(backend);
                session.refresh();
                Screen::Dashboard(Box::new(session))
            }
            StartScreen::Employees => {
                let mut session = EmployeeSession::new(backend);
                session.refresh();
                Screen::Employees(Box::new(session))
            }
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> &Screen {
        &self.current_screen
    }

    /// Applies finished requests to the visible view.
    pub fn pump(&mut self) {
        match &mut self.current_screen {
            Screen::Dashboard(session) => {
                session.pump();
            }
            Screen::Employees(session) => {
                session.pump();
            }
        }
    }

    /// Returns false when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let outcome = match &mut self.current_screen {
            Screen::Dashboard(session) => handle_dashboard_key(session, key),
            Screen::Employees(session) => handle_employee_key(session, key),
        };
        match outcome {
            KeyOutcome::Continue => true,
            KeyOutcome::Quit => false,
            KeyOutcome::SwitchScreen => {
                let next = match self.current_screen {
                    Screen::Dashboard(_) => StartScreen::Employees,
                    Screen::Employees(_) => StartScreen::Dashboard,
                };
                log::debug!("Switching to {:?}", next);
                self.current_screen = Self::open(self.backend.clone(), next);
                true
            }
        }
    }

    pub fn render(&self, f: &mut Frame) {
        match &self.current_screen {
            Screen::Dashboard(session) => {
                render_dashboard(f, &session.view, self.with_background_color)
            }
            Screen::Employees(session) => {
                render_employees(f, &session.view, self.with_background_color)
            }
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    loop {
        app.pump();
        terminal.draw(|f| app.render(f))?;

        // Poll for key events
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
        // Let the spawned requests make progress on this worker too.
        tokio::task::yield_now().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockKycBackend;
    use crate::backend::error::BackendError;
    use crate::ui::widgets::test_support::screen_text;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn offline_backend() -> MockKycBackend {
        let mut backend = MockKycBackend::new();
        backend
            .expect_list_employees()
            .returning(|| Err(BackendError::MissingCredentials));
        backend
            .expect_dashboard_stats()
            .returning(|| Err(BackendError::MissingCredentials));
        backend.expect_assigned_farmers().returning(|| Ok(Vec::new()));
        backend.expect_todo_list().returning(|| Ok(Default::default()));
        backend.expect_profile().returning(|| Ok(Default::default()));
        backend
    }

    #[tokio::test]
    async fn test_app_loading_retry_and_quit() {
        let mut app = App::new(Arc::new(offline_backend()), StartScreen::Employees, false);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(screen_text(&terminal).contains("Loading employees..."));

        // Keys other than quit are ignored while loading.
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert!(matches!(app.screen(), Screen::Employees(_)));

        if let Screen::Employees(session) = &mut app.current_screen {
            session.settle().await;
        }
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE)));
        if let Screen::Employees(session) = &mut app.current_screen {
            session.settle().await;
        }
        terminal.draw(|f| app.render(f)).unwrap();
        assert!(screen_text(&terminal).contains("Failed to load employees"));
        assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)));
    }

    #[tokio::test]
    async fn test_switching_replaces_session() {
        let mut backend = MockKycBackend::new();
        backend.expect_list_employees().returning(|| Ok(Vec::new()));
        backend
            .expect_dashboard_stats()
            .returning(|| Ok(Default::default()));
        backend.expect_assigned_farmers().returning(|| Ok(Vec::new()));
        backend.expect_todo_list().returning(|| Ok(Default::default()));
        backend.expect_profile().returning(|| Ok(Default::default()));

        let mut app = App::new(Arc::new(backend), StartScreen::Employees, false);
        if let Screen::Employees(session) = &mut app.current_screen {
            session.settle().await;
        }
        assert!(app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
        assert!(matches!(app.screen(), Screen::Dashboard(_)));
    }
}
