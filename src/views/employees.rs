//! Employee listing state

use super::{LoadState, Notice, step_cursor};
use crate::models::{EmployeeDetails, EmployeeRecord, EmployeeStatus, RecordId};
use std::collections::HashMap;

pub const LOAD_ERROR: &str = "Failed to load employees";
pub const DELETE_QUESTION: &str = "Are you sure you want to delete this employee?";
pub const DELETE_SUCCESS: &str = "Employee deleted successfully";
pub const DELETE_FAILURE: &str = "Error deleting employee";

#[derive(Debug, Clone, PartialEq)]
pub enum DeletePrompt {
    Confirming(EmployeeRecord),
    Deleting(EmployeeRecord),
}

impl DeletePrompt {
    pub fn employee(&self) -> &EmployeeRecord {
        match self {
            DeletePrompt::Confirming(employee) | DeletePrompt::Deleting(employee) => employee,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsPanel {
    Loading(RecordId),
    Ready(EmployeeDetails),
}

/// The delete request settled and the list was read again.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub ok: bool,
    pub reloaded: Result<Vec<EmployeeRecord>, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeEvent {
    Loaded(Result<Vec<EmployeeRecord>, String>),
    DeleteFinished(DeleteOutcome),
    DetailsLoaded {
        id: RecordId,
        result: Result<EmployeeDetails, String>,
    },
}

#[derive(Debug)]
pub struct EmployeeListView {
    load: LoadState<Vec<EmployeeRecord>>,
    search: String,
    search_active: bool,
    cursor: usize,
    delete: Option<DeletePrompt>,
    notice: Option<Notice>,
    // Selector edits are local only; nothing is sent for them.
    status_overrides: HashMap<RecordId, EmployeeStatus>,
    details: Option<DetailsPanel>,
}

impl Default for EmployeeListView {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeListView {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            search: String::new(),
            search_active: false,
            cursor: 0,
            delete: None,
            notice: None,
            status_overrides: HashMap::new(),
            details: None,
        }
    }

    pub fn load_state(&self) -> &LoadState<Vec<EmployeeRecord>> {
        &self.load
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn delete_prompt(&self) -> Option<&DeletePrompt> {
        self.delete.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn details(&self) -> Option<&DetailsPanel> {
        self.details.as_ref()
    }

    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    pub fn apply_load(&mut self, result: Result<Vec<EmployeeRecord>, String>) {
        self.load = result.into();
        let len = self.filtered().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn apply(&mut self, event: EmployeeEvent) {
        match event {
            EmployeeEvent::Loaded(result) => self.apply_load(result),
            EmployeeEvent::DeleteFinished(outcome) => self.apply_delete(outcome),
            EmployeeEvent::DetailsLoaded { id, result } => self.apply_details(&id, result),
        }
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
    }

    pub fn stop_search(&mut self) {
        self.search_active = false;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.cursor = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.cursor = 0;
    }

    pub fn filtered(&self) -> Vec<&EmployeeRecord> {
        match self.load.ready() {
            Some(employees) => employees
                .iter()
                .filter(|employee| employee.matches_search(&self.search))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn summary(&self) -> String {
        format!("Total Employees: {}", self.filtered().len())
    }

    pub fn empty_message(&self) -> &'static str {
        if self.search.is_empty() {
            "No employees found"
        } else {
            "No employees found matching your search"
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        self.cursor = step_cursor(self.cursor, delta, self.filtered().len());
    }

    pub fn selected(&self) -> Option<&EmployeeRecord> {
        self.filtered().get(self.cursor).copied()
    }

    /// Status shown in the selector, including unsent local edits.
    pub fn display_status(&self, employee: &EmployeeRecord) -> EmployeeStatus {
        self.status_overrides
            .get(&employee.id)
            .copied()
            .unwrap_or(employee.status)
    }

    /// Advances the selector of the highlighted row. Issues no request.
    pub fn cycle_status(&mut self) {
        let Some(employee) = self.selected() else {
            return;
        };
        let id = employee.id.clone();
        let next = self.display_status(employee).next();
        self.status_overrides.insert(id, next);
    }

    // ---------------------------------------------------------------------
    // Delete
    // ---------------------------------------------------------------------

    /// Asks for confirmation before deleting the highlighted row.
    pub fn request_delete(&mut self) -> bool {
        if self.delete.is_some() || self.notice.is_some() {
            return false;
        }
        match self.selected().cloned() {
            Some(employee) => {
                self.delete = Some(DeletePrompt::Confirming(employee));
                true
            }
            None => false,
        }
    }

    /// Resolves the confirmation. Returns the id to delete when the answer is yes.
    pub fn answer_delete(&mut self, yes: bool) -> Option<RecordId> {
        let Some(DeletePrompt::Confirming(employee)) = self.delete.take() else {
            return None;
        };
        if !yes {
            return None;
        }
        let id = employee.id.clone();
        self.delete = Some(DeletePrompt::Deleting(employee));
        Some(id)
    }

    pub fn apply_delete(&mut self, outcome: DeleteOutcome) {
        self.delete = None;
        self.apply_load(outcome.reloaded);
        self.notice = Some(if outcome.ok {
            Notice::success(DELETE_SUCCESS)
        } else {
            Notice::error(DELETE_FAILURE)
        });
    }

    // ---------------------------------------------------------------------
    // Details panel
    // ---------------------------------------------------------------------

    pub fn request_details(&mut self) -> Option<RecordId> {
        if self.details.is_some() || self.delete.is_some() || self.notice.is_some() {
            return None;
        }
        let id = self.selected()?.id.clone();
        self.details = Some(DetailsPanel::Loading(id.clone()));
        Some(id)
    }

    /// Applies the response for `id`. Ignored unless the panel is still
    /// waiting on that same employee.
    pub fn apply_details(&mut self, id: &RecordId, result: Result<EmployeeDetails, String>) {
        if !matches!(&self.details, Some(DetailsPanel::Loading(pending)) if pending == id) {
            log::debug!("Dropping stale details response for employee {}", id);
            return;
        }
        match result {
            Ok(details) => self.details = Some(DetailsPanel::Ready(details)),
            Err(message) => {
                self.details = None;
                self.notice = Some(Notice::error(format!("Error: {}", message)));
            }
        }
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::NoticeKind;

    fn employee(id: i64, name: &str, designation: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: RecordId::from(id),
            employee_id: format!("EMP{:06}", id),
            name: name.to_string(),
            designation: designation.to_string(),
            district: Some("Guntur".into()),
            contact_number: None,
            email: None,
            status: EmployeeStatus::Active,
        }
    }

    fn roster() -> Vec<EmployeeRecord> {
        vec![
            employee(3, "Kavya Rao", "Field Officer"),
            employee(7, "Mohan Das", "Supervisor"),
            employee(9, "Lakshmi", "Field Officer"),
        ]
    }

    fn ready_view() -> EmployeeListView {
        let mut view = EmployeeListView::new();
        view.apply_load(Ok(roster()));
        view
    }

    #[test]
    fn test_search_filters_by_name_designation_or_code() {
        let mut view = ready_view();
        view.set_search("field");
        assert_eq!(view.filtered().len(), 2);
        assert_eq!(view.summary(), "Total Employees: 2");
        view.set_search("emp000007");
        assert_eq!(view.filtered()[0].name, "Mohan Das");
    }

    #[test]
    fn test_empty_messages() {
        let mut view = EmployeeListView::new();
        view.apply_load(Ok(Vec::new()));
        assert_eq!(view.empty_message(), "No employees found");
        view.set_search("nobody");
        assert_eq!(
            view.empty_message(),
            "No employees found matching your search"
        );
    }

    #[test]
    fn test_failed_load() {
        let mut view = EmployeeListView::new();
        view.apply(EmployeeEvent::Loaded(Err("connection refused".into())));
        assert!(view.filtered().is_empty());
        assert!(matches!(view.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_declined_delete_sends_nothing() {
        let mut view = ready_view();
        assert!(view.request_delete());
        assert_eq!(view.answer_delete(false), None);
        assert!(view.delete_prompt().is_none());
    }

    #[test]
    fn test_delete_confirmed_then_reloaded() {
        let mut view = ready_view();
        view.move_cursor(1);
        assert!(view.request_delete());
        assert_eq!(view.answer_delete(true), Some(RecordId::from(7)));
        assert!(matches!(
            view.delete_prompt(),
            Some(DeletePrompt::Deleting(e)) if e.name == "Mohan Das"
        ));
        // A second answer while deleting is ignored.
        assert_eq!(view.answer_delete(true), None);

        let remaining: Vec<_> = roster().into_iter().filter(|e| e.id != RecordId::from(7)).collect();
        view.apply(EmployeeEvent::DeleteFinished(DeleteOutcome {
            ok: true,
            reloaded: Ok(remaining),
        }));

        assert_eq!(view.notice(), Some(&Notice::success(DELETE_SUCCESS)));
        assert!(view.filtered().iter().all(|e| e.employee_id != "EMP000007"));
        assert_eq!(view.filtered().len(), 2);
    }

    #[test]
    fn test_failed_delete_still_reloads() {
        let mut view = ready_view();
        view.request_delete();
        view.answer_delete(true);
        view.apply_delete(DeleteOutcome {
            ok: false,
            reloaded: Ok(roster()),
        });
        let notice = view.notice().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, DELETE_FAILURE);
        assert_eq!(view.filtered().len(), 3);
        assert!(view.delete_prompt().is_none());
    }

    #[test]
    fn test_status_selector_is_local() {
        let mut view = ready_view();
        view.cycle_status();
        let first = view.selected().unwrap().clone();
        assert_eq!(first.status, EmployeeStatus::Active);
        assert_eq!(view.display_status(&first), EmployeeStatus::Inactive);
        view.cycle_status();
        assert_eq!(view.display_status(&first), EmployeeStatus::Pending);
    }

    #[test]
    fn test_details_panel_lifecycle() {
        let mut view = ready_view();
        assert_eq!(view.request_details(), Some(RecordId::from(3)));
        assert!(matches!(view.details(), Some(DetailsPanel::Loading(_))));
        assert_eq!(view.request_details(), None);

        let details: EmployeeDetails =
            serde_json::from_str(r#"{"id": 3, "name": "Kavya Rao", "bankName": "SBI"}"#).unwrap();
        view.apply(EmployeeEvent::DetailsLoaded {
            id: RecordId::from(3),
            result: Ok(details),
        });
        assert!(matches!(view.details(), Some(DetailsPanel::Ready(d)) if d.bank_name.as_deref() == Some("SBI")));

        view.close_details();
        view.apply_details(&RecordId::from(3), Err("late".into()));
        assert!(view.details().is_none());
        assert!(view.notice().is_none());
    }

    #[test]
    fn test_details_failure_shows_notice() {
        let mut view = ready_view();
        view.request_details();
        view.apply_details(&RecordId::from(3), Err("Employee not found".into()));
        assert!(view.details().is_none());
        assert_eq!(
            view.notice(),
            Some(&Notice::error("Error: Employee not found"))
        );
    }

    #[test]
    fn test_late_details_for_previous_employee_are_dropped() {
        let mut view = ready_view();
        assert_eq!(view.request_details(), Some(RecordId::from(3)));
        view.close_details();
        view.move_cursor(1);
        assert_eq!(view.request_details(), Some(RecordId::from(7)));

        let stale: EmployeeDetails =
            serde_json::from_str(r#"{"id": 3, "name": "Kavya Rao"}"#).unwrap();
        view.apply(EmployeeEvent::DetailsLoaded {
            id: RecordId::from(3),
            result: Ok(stale),
        });
        assert_eq!(
            view.details(),
            Some(&DetailsPanel::Loading(RecordId::from(7)))
        );

        view.apply_details(&RecordId::from(3), Err("gone".into()));
        assert!(view.notice().is_none());
        assert!(matches!(view.details(), Some(DetailsPanel::Loading(_))));
    }
}
