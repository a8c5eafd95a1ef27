//! Employee listing key bindings

use crate::ui::KeyOutcome;
use crate::views::{DeletePrompt, LoadState};
use crate::workers::EmployeeSession;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_employee_key(session: &mut EmployeeSession, key: KeyEvent) -> KeyOutcome {
    let view = &mut session.view;

    if view.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            view.dismiss_notice();
        }
        return KeyOutcome::Continue;
    }

    match view.delete_prompt() {
        Some(DeletePrompt::Confirming(_)) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    session.answer_delete(true);
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    session.answer_delete(false);
                }
                _ => {}
            }
            return KeyOutcome::Continue;
        }
        Some(DeletePrompt::Deleting(_)) => return KeyOutcome::Continue,
        None => {}
    }

    if view.details().is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            view.close_details();
        }
        return KeyOutcome::Continue;
    }

    match view.load_state() {
        LoadState::Loading => {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
                _ => KeyOutcome::Continue,
            };
        }
        LoadState::Failed(_) => {
            return match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => {
                    session.refresh();
                    KeyOutcome::Continue
                }
                KeyCode::Char('q') | KeyCode::Esc => KeyOutcome::Quit,
                _ => KeyOutcome::Continue,
            };
        }
        LoadState::Ready(_) => {}
    }

    if view.search_active() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => view.stop_search(),
            KeyCode::Backspace => view.pop_search_char(),
            KeyCode::Char(c) => view.push_search_char(c),
            KeyCode::Up => view.move_cursor(-1),
            KeyCode::Down => view.move_cursor(1),
            _ => {}
        }
        return KeyOutcome::Continue;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Tab => return KeyOutcome::SwitchScreen,
        KeyCode::Up | KeyCode::Char('k') => view.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => view.move_cursor(1),
        KeyCode::Char('/') => view.start_search(),
        KeyCode::Char('s') | KeyCode::Char('S') => view.cycle_status(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            view.request_delete();
        }
        KeyCode::Char('v') | KeyCode::Char('V') | KeyCode::Enter => {
            session.view_details();
        }
        KeyCode::Char('r') | KeyCode::Char('R') => session.refresh(),
        _ => {}
    }
    KeyOutcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockKycBackend;
    use crate::models::EmployeeRecord;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn press(session: &mut EmployeeSession, code: KeyCode) -> KeyOutcome {
        handle_employee_key(session, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ready_session(backend: MockKycBackend) -> EmployeeSession {
        let roster: Vec<EmployeeRecord> = serde_json::from_str(
            r#"[{"id": 7, "employeeId": "EMP000007", "name": "Mohan Das", "designation": "Supervisor"}]"#,
        )
        .unwrap();
        let mut session = EmployeeSession::new(Arc::new(backend));
        session.view.apply_load(Ok(roster));
        session
    }

    #[tokio::test]
    async fn test_delete_needs_explicit_yes() {
        let mut backend = MockKycBackend::new();
        backend.expect_delete_employee().never();
        let mut session = ready_session(backend);

        press(&mut session, KeyCode::Char('d'));
        assert!(session.view.delete_prompt().is_some());
        // Unrelated keys neither answer nor quit.
        assert_eq!(press(&mut session, KeyCode::Char('q')), KeyOutcome::Continue);
        press(&mut session, KeyCode::Char('n'));
        assert!(session.view.delete_prompt().is_none());
    }

    #[tokio::test]
    async fn test_status_key_changes_display_only() {
        let mut session = ready_session(MockKycBackend::new());
        press(&mut session, KeyCode::Char('s'));
        let employee = session.view.selected().unwrap().clone();
        assert_eq!(
            session.view.display_status(&employee).label(),
            "Inactive"
        );
        assert!(!session.pump());
    }

    #[tokio::test]
    async fn test_switch_and_quit() {
        let mut session = ready_session(MockKycBackend::new());
        assert_eq!(press(&mut session, KeyCode::Tab), KeyOutcome::SwitchScreen);
        assert_eq!(press(&mut session, KeyCode::Char('q')), KeyOutcome::Quit);
    }
}
