//! Employee dashboard state
//!
//! Four tabs over one snapshot, plus the KYC decision modal.

use super::{LoadState, Notice, step_cursor};
use chrono::{DateTime, Local};
use crate::consts::cli_consts::RECENT_ACTIVITY_LIMIT;
use crate::models::{
    DashboardSnapshot, DecisionError, Farmer, KycAction, KycDecision, KycStatus, RecordId,
    TodoBucket,
};

/// Headline of the error screen when the fan-out fails.
pub const LOAD_ERROR: &str = "Failed to load dashboard data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Farmers,
    Todo,
    Profile,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Farmers => "Assigned Farmers",
            Tab::Todo => "To-Do List",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Farmers => 1,
            Tab::Todo => 2,
            Tab::Profile => 3,
        }
    }

    pub fn next(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Farmers,
            Tab::Farmers => Tab::Todo,
            Tab::Todo => Tab::Profile,
            Tab::Profile => Tab::Overview,
        }
    }

    pub fn previous(&self) -> Tab {
        match self {
            Tab::Overview => Tab::Profile,
            Tab::Farmers => Tab::Overview,
            Tab::Todo => Tab::Farmers,
            Tab::Profile => Tab::Todo,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Waiting for the reviewer to confirm or cancel.
    Confirming,
    /// The decision has been sent; further confirms are ignored.
    Submitting,
}

/// Confirmation dialog for one KYC decision.
#[derive(Debug, Clone, PartialEq)]
pub struct KycModal {
    pub farmer: Farmer,
    pub action: KycAction,
    pub reason: String,
    pub phase: ModalPhase,
}

impl KycModal {
    /// Whether the confirm button is enabled.
    pub fn can_confirm(&self) -> bool {
        self.phase == ModalPhase::Confirming
            && (!self.action.requires_reason() || !self.reason.trim().is_empty())
    }
}

/// Result of sending a decision, as delivered back to the view.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionOutcome {
    /// The backend accepted the decision; `refreshed` is the follow-up fan-out.
    Succeeded {
        action: KycAction,
        refreshed: Result<DashboardSnapshot, String>,
    },
    Failed {
        message: String,
    },
}

/// Completions the dashboard consumes.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Loaded(Result<DashboardSnapshot, String>),
    DecisionFinished(DecisionOutcome),
}

#[derive(Debug)]
pub struct DashboardView {
    load: LoadState<DashboardSnapshot>,
    tab: Tab,
    search: String,
    search_active: bool,
    kyc_filter: Option<KycStatus>,
    farmer_cursor: usize,
    todo_cursor: usize,
    modal: Option<KycModal>,
    notice: Option<Notice>,
    loaded_at: Option<DateTime<Local>>,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardView {
    pub fn new() -> Self {
        Self {
            load: LoadState::Loading,
            tab: Tab::default(),
            search: String::new(),
            search_active: false,
            kyc_filter: None,
            farmer_cursor: 0,
            todo_cursor: 0,
            modal: None,
            notice: None,
            loaded_at: None,
        }
    }

    pub fn load_state(&self) -> &LoadState<DashboardSnapshot> {
        &self.load
    }

    pub fn snapshot(&self) -> Option<&DashboardSnapshot> {
        self.load.ready()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn search_active(&self) -> bool {
        self.search_active
    }

    pub fn kyc_filter(&self) -> Option<KycStatus> {
        self.kyc_filter
    }

    pub fn farmer_cursor(&self) -> usize {
        self.farmer_cursor
    }

    pub fn todo_cursor(&self) -> usize {
        self.todo_cursor
    }

    pub fn modal(&self) -> Option<&KycModal> {
        self.modal.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// When the snapshot on screen was received.
    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    // ---------------------------------------------------------------------
    // Loading
    // ---------------------------------------------------------------------

    /// Enters the loading state ahead of a mount, retry or manual refresh.
    pub fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replaces all four caches with the outcome of a fan-out.
    pub fn apply_load(&mut self, result: Result<DashboardSnapshot, String>) {
        self.loaded_at = result.is_ok().then(Local::now);
        self.load = result.into();
        self.clamp_cursors();
    }

    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Loaded(result) => self.apply_load(result),
            DashboardEvent::DecisionFinished(outcome) => self.apply_decision(outcome),
        }
    }

    // ---------------------------------------------------------------------
    // Navigation and filtering
    // ---------------------------------------------------------------------

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.search_active = false;
    }

    pub fn start_search(&mut self) {
        if self.tab == Tab::Farmers {
            self.search_active = true;
        }
    }

    pub fn stop_search(&mut self) {
        self.search_active = false;
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.farmer_cursor = 0;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search.push(c);
        self.farmer_cursor = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search.pop();
        self.farmer_cursor = 0;
    }

    pub fn set_kyc_filter(&mut self, filter: Option<KycStatus>) {
        self.kyc_filter = filter;
        self.farmer_cursor = 0;
    }

    /// All → Pending → Approved → Refer Back → Rejected → All.
    pub fn cycle_kyc_filter(&mut self) {
        let next = match self.kyc_filter {
            None => Some(KycStatus::FILTERABLE[0]),
            Some(current) => KycStatus::FILTERABLE
                .iter()
                .position(|s| *s == current)
                .and_then(|i| KycStatus::FILTERABLE.get(i + 1).copied()),
        };
        self.set_kyc_filter(next);
    }

    /// Assigned farmers passing the search term and the KYC filter.
    pub fn filtered_farmers(&self) -> Vec<&Farmer> {
        let Some(snapshot) = self.snapshot() else {
            return Vec::new();
        };
        snapshot
            .farmers
            .iter()
            .filter(|farmer| farmer.matches_search(&self.search))
            .filter(|farmer| self.kyc_filter.is_none_or(|status| farmer.kyc_status == status))
            .collect()
    }

    /// Leading slice of the assigned farmers shown under "Recent Activity".
    pub fn recent_activity(&self) -> &[Farmer] {
        match self.snapshot() {
            Some(snapshot) => {
                let end = snapshot.farmers.len().min(RECENT_ACTIVITY_LIMIT);
                &snapshot.farmers[..end]
            }
            None => &[],
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        match self.tab {
            Tab::Farmers => {
                let len = self.filtered_farmers().len();
                self.farmer_cursor = step_cursor(self.farmer_cursor, delta, len);
            }
            Tab::Todo => {
                let len = self.todo_len();
                self.todo_cursor = step_cursor(self.todo_cursor, delta, len);
            }
            Tab::Overview | Tab::Profile => {}
        }
    }

    fn todo_len(&self) -> usize {
        self.snapshot()
            .map(|snapshot| snapshot.todo.entries().count())
            .unwrap_or(0)
    }

    fn clamp_cursors(&mut self) {
        let farmers = self.filtered_farmers().len();
        self.farmer_cursor = self.farmer_cursor.min(farmers.saturating_sub(1));
        let todo = self.todo_len();
        self.todo_cursor = self.todo_cursor.min(todo.saturating_sub(1));
    }

    pub fn selected_farmer(&self) -> Option<&Farmer> {
        self.filtered_farmers().get(self.farmer_cursor).copied()
    }

    pub fn selected_todo(&self) -> Option<(TodoBucket, &Farmer)> {
        self.snapshot()?.todo.entries().nth(self.todo_cursor)
    }

    /// Decisions offered for the highlighted row of the current tab.
    pub fn selection_actions(&self) -> &'static [KycAction] {
        match self.tab {
            Tab::Farmers => self
                .selected_farmer()
                .map(|farmer| farmer.kyc_status.available_actions())
                .unwrap_or(&[]),
            Tab::Todo => self
                .selected_todo()
                .map(|(bucket, _)| bucket.available_actions())
                .unwrap_or(&[]),
            Tab::Overview | Tab::Profile => &[],
        }
    }

    /// "View details" on a new assignment jumps to the farmers table.
    pub fn view_selected_todo(&mut self) {
        if let Some((TodoBucket::NewAssignments, _)) = self.selected_todo() {
            self.set_tab(Tab::Farmers);
        }
    }

    // ---------------------------------------------------------------------
    // KYC modal
    // ---------------------------------------------------------------------

    /// Opens the decision modal for the highlighted row, if the action is offered.
    pub fn open_action(&mut self, action: KycAction) -> bool {
        if self.modal.is_some() || self.notice.is_some() {
            return false;
        }
        if !self.selection_actions().contains(&action) {
            return false;
        }
        let farmer = match self.tab {
            Tab::Farmers => self.selected_farmer().cloned(),
            Tab::Todo => self.selected_todo().map(|(_, farmer)| farmer.clone()),
            Tab::Overview | Tab::Profile => None,
        };
        match farmer {
            Some(farmer) => {
                self.open_modal(farmer, action);
                true
            }
            None => false,
        }
    }

    pub fn open_modal(&mut self, farmer: Farmer, action: KycAction) {
        self.modal = Some(KycModal {
            farmer,
            action,
            reason: String::new(),
            phase: ModalPhase::Confirming,
        });
    }

    pub fn push_reason_char(&mut self, c: char) {
        if let Some(modal) = self.modal.as_mut().filter(|m| m.phase == ModalPhase::Confirming) {
            modal.reason.push(c);
        }
    }

    pub fn pop_reason_char(&mut self) {
        if let Some(modal) = self.modal.as_mut().filter(|m| m.phase == ModalPhase::Confirming) {
            modal.reason.pop();
        }
    }

    /// Closes the modal and forgets the pending decision. Ignored while submitting.
    pub fn cancel_modal(&mut self) {
        if self
            .modal
            .as_ref()
            .is_some_and(|m| m.phase == ModalPhase::Confirming)
        {
            self.modal = None;
        }
    }

    /// Validates the pending decision and moves the modal to submitting.
    ///
    /// Returns the request to send, `Ok(None)` when there is nothing to
    /// confirm, or the validation error when a required reason is blank. A
    /// refused confirm leaves the modal untouched.
    pub fn confirm_modal(&mut self) -> Result<Option<(RecordId, KycDecision)>, DecisionError> {
        let Some(modal) = self.modal.as_mut() else {
            return Ok(None);
        };
        if modal.phase != ModalPhase::Confirming {
            return Ok(None);
        }
        let decision = KycDecision::new(modal.action, &modal.reason)?;
        modal.phase = ModalPhase::Submitting;
        Ok(Some((modal.farmer.id.clone(), decision)))
    }

    pub fn apply_decision(&mut self, outcome: DecisionOutcome) {
        match outcome {
            DecisionOutcome::Succeeded { action, refreshed } => {
                self.apply_load(refreshed);
                self.modal = None;
                self.notice = Some(Notice::success(format!("KYC {} successful!", action)));
            }
            DecisionOutcome::Failed { message } => {
                if let Some(modal) = self.modal.as_mut() {
                    modal.phase = ModalPhase::Confirming;
                }
                self.notice = Some(Notice::error(format!("Error: {}", message)));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
