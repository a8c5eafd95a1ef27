//! Dashboard key bindings

use crate::models::KycAction;
use crate::ui::KeyOutcome;
use crate::views::{LoadState, Tab};
use crate::workers::DashboardSession;
use crossterm::event::{KeyCode, KeyEvent};

const TABS: [Tab; 4] = [Tab::Overview, Tab::Farmers, Tab::Todo, Tab::Profile];

pub fn handle_dashboard_key(session: &mut DashboardSession, key: KeyEvent) -> KeyOutcome {
    let view = &mut session.view;

    // Acknowledgments block everything else until dismissed.
    if view.notice().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            view.dismiss_notice();
        }
        return KeyOutcome::Continue;
    }

    if view.modal().is_some() {
        match key.code {
            KeyCode::Esc => view.cancel_modal(),
            KeyCode::Enter => {
                if let Err(e) = session.confirm() {
                    log::debug!("Decision not sent: {}", e);
                }
            }
            KeyCode::Backspace => view.pop_reason_char(),
            KeyCode::Char(c) => {
                if view.modal().is_some_and(|m| m.action.requires_reason()) {
                    view.push_reason_char(c);
                }
            }
            _ => {}
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
        KeyCode::Char('e') | KeyCode::Char('E') => return KeyOutcome::SwitchScreen,
        KeyCode::Tab | KeyCode::Right => view.set_tab(view.tab().next()),
        KeyCode::BackTab | KeyCode::Left => view.set_tab(view.tab().previous()),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            view.set_tab(TABS[index]);
        }
        KeyCode::Char('r') | KeyCode::Char('R') => session.refresh(),
        KeyCode::Up | KeyCode::Char('k') => view.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => view.move_cursor(1),
        KeyCode::Char('/') => view.start_search(),
        KeyCode::Char('f') | KeyCode::Char('F') => {
            if view.tab() == Tab::Farmers {
                view.cycle_kyc_filter();
            }
        }
        KeyCode::Enter => view.view_selected_todo(),
        KeyCode::Char(c) => {
            let action = [KycAction::Approve, KycAction::ReferBack, KycAction::Reject]
                .into_iter()
                .find(|a| a.hotkey() == c.to_ascii_lowercase());
            if let Some(action) = action {
                view.open_action(action);
            }
        }
        _ => {}
    }
    KeyOutcome::Continue
}
