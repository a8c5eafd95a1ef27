//! View state for the dashboard and the employee listing
//!
//! Plain state machines: key handling and network completions call into them,
//! the renderers only read from them. Nothing in here touches the terminal or
//! the network, so every transition can be unit tested directly.

pub mod dashboard;
pub mod employees;

pub use dashboard::{DashboardEvent, DashboardView, DecisionOutcome, KycModal, ModalPhase, Tab};
pub use employees::{DeleteOutcome, DeletePrompt, DetailsPanel, EmployeeEvent, EmployeeListView};

/// Lifecycle of a view's remote data.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// The load failed; holds the underlying reason for the error screen.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

impl<T> From<Result<T, String>> for LoadState<T> {
    fn from(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(reason) => LoadState::Failed(reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// An acknowledgment the user must dismiss before doing anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Moves a row cursor by `delta`, clamped to `len`.
pub(crate) fn step_cursor(cursor: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let next = cursor as isize + delta;
    next.clamp(0, len as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_cursor_clamps() {
        assert_eq!(step_cursor(0, -1, 3), 0);
        assert_eq!(step_cursor(1, 1, 3), 2);
        assert_eq!(step_cursor(2, 1, 3), 2);
        assert_eq!(step_cursor(5, 0, 0), 0);
    }

    #[test]
    fn test_load_state_from_result() {
        let ok: LoadState<u8> = Ok(1).into();
        assert_eq!(ok.ready(), Some(&1));
        let failed: LoadState<u8> = Err("boom".to_string()).into();
        assert_eq!(failed, LoadState::Failed("boom".into()));
    }
}
