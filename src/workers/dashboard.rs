//! Dashboard loading and KYC decisions

use super::core::{EventSender, TaskScope, report_failure};
use crate::backend::KycBackend;
use crate::backend::error::BackendError;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::models::{DashboardSnapshot, DecisionError, KycDecision, RecordId};
use crate::views::{DashboardEvent, DashboardView, DecisionOutcome};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Issues the four dashboard reads concurrently.
///
/// A failing read does not cancel the others. Once all four have settled,
/// the first failure in read order is reported and the rest is discarded.
pub async fn fetch_dashboard(backend: &dyn KycBackend) -> Result<DashboardSnapshot, BackendError> {
    let (stats, farmers, todo, profile) = tokio::join!(
        backend.dashboard_stats(),
        backend.assigned_farmers(),
        backend.todo_list(),
        backend.profile(),
    );
    let (stats, farmers, todo, profile) = (stats?, farmers?, todo?, profile?);
    log::debug!(
        "Dashboard loaded: {} assigned farmers, {} to-do entries",
        farmers.len(),
        todo.entries().count()
    );
    Ok(DashboardSnapshot {
        stats,
        farmers,
        todo,
        profile,
    })
}

async fn load_snapshot(backend: &dyn KycBackend) -> Result<DashboardSnapshot, String> {
    fetch_dashboard(backend)
        .await
        .map_err(|e| report_failure("Error fetching dashboard data", &e))
}

pub async fn load_dashboard(backend: Arc<dyn KycBackend>) -> DashboardEvent {
    DashboardEvent::Loaded(load_snapshot(backend.as_ref()).await)
}

/// Sends one decision and, once accepted, reloads everything.
pub async fn submit_decision(
    backend: Arc<dyn KycBackend>,
    farmer_id: RecordId,
    decision: KycDecision,
) -> DashboardEvent {
    let action = decision.action();
    let outcome = match backend.submit_kyc_decision(&farmer_id, &decision).await {
        Ok(ack) => {
            log::info!("KYC {} for farmer {}: {}", action, farmer_id, ack.trim());
            DecisionOutcome::Succeeded {
                action,
                refreshed: load_snapshot(backend.as_ref()).await,
            }
        }
        Err(e) => DecisionOutcome::Failed {
            message: report_failure(&format!("Error submitting KYC {}", action), &e),
        },
    };
    DashboardEvent::DecisionFinished(outcome)
}

/// A dashboard view wired to the backend.
pub struct DashboardSession {
    pub view: DashboardView,
    backend: Arc<dyn KycBackend>,
    scope: TaskScope,
    sender: EventSender<DashboardEvent>,
    receiver: mpsc::Receiver<DashboardEvent>,
}

impl DashboardSession {
    pub fn new(backend: Arc<dyn KycBackend>) -> Self {
        let (tx, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            view: DashboardView::new(),
            backend,
            scope: TaskScope::new(),
            sender: EventSender::new(tx),
            receiver,
        }
    }

    /// Starts the initial fan-out. Also used for retry and manual refresh.
    pub fn refresh(&mut self) {
        self.view.begin_load();
        self.scope
            .spawn(self.sender.clone(), load_dashboard(self.backend.clone()));
    }

    /// Confirms the open modal, sending the decision if it is valid.
    pub fn confirm(&mut self) -> Result<bool, DecisionError> {
        match self.view.confirm_modal()? {
            Some((farmer_id, decision)) => {
                self.scope.spawn(
                    self.sender.clone(),
                    submit_decision(self.backend.clone(), farmer_id, decision),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Applies every completion that has arrived since the last call.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.receiver.try_recv() {
            self.view.apply(event);
            changed = true;
        }
        changed
    }

    /// Waits for the next completion and applies it.
    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(event) = self.receiver.recv().await {
            self.view.apply(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockKycBackend;
    use crate::models::{
        DashboardStats, EmployeeProfile, Farmer, KycAction, KycStatus, TodoBuckets,
    };
    use crate::views::{LoadState, ModalPhase, Notice, Tab};
    use std::sync::atomic::{AtomicBool, Ordering};

    fn farmer(status: KycStatus) -> Farmer {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Ramesh Kumar",
            "contactNumber": "9000000001",
            "district": "Warangal",
            "state": "Telangana",
            "kycStatus": status.to_string(),
        }))
        .unwrap()
    }

    /// Backend whose farmer 1 flips to APPROVED once approved.
    fn approving_backend(approved: Arc<AtomicBool>) -> MockKycBackend {
        let mut backend = MockKycBackend::new();
        let flag = approved.clone();
        backend.expect_dashboard_stats().returning(move || {
            let done = flag.load(Ordering::SeqCst);
            Ok(DashboardStats {
                total_assigned: 1,
                approved: done as u64,
                pending: (!done) as u64,
                completion_rate: if done { 100.0 } else { 0.0 },
                ..Default::default()
            })
        });
        let flag = approved.clone();
        backend.expect_assigned_farmers().returning(move || {
            let status = if flag.load(Ordering::SeqCst) {
                KycStatus::Approved
            } else {
                KycStatus::Pending
            };
            Ok(vec![farmer(status)])
        });
        let flag = approved.clone();
        backend.expect_todo_list().returning(move || {
            let mut todo = TodoBuckets::default();
            if !flag.load(Ordering::SeqCst) {
                todo.pending_kyc.push(farmer(KycStatus::Pending));
                todo.total_pending_kyc = 1;
            }
            Ok(todo)
        });
        backend
            .expect_profile()
            .returning(|| Ok(EmployeeProfile::default()));
        let flag = approved;
        backend
            .expect_submit_kyc_decision()
            .withf(|id, decision| {
                *id == RecordId::from(1) && decision.action() == KycAction::Approve
            })
            .times(1)
            .returning(move |_, _| {
                flag.store(true, Ordering::SeqCst);
                Ok("KYC approved successfully".into())
            });
        backend
    }

    #[tokio::test]
    async fn test_approve_pending_farmer_end_to_end() {
        let approved = Arc::new(AtomicBool::new(false));
        let mut session = DashboardSession::new(Arc::new(approving_backend(approved)));
        session.refresh();
        assert!(session.view.load_state().is_loading());
        session.settle().await;

        session.view.set_tab(Tab::Farmers);
        assert!(session.view.open_action(KycAction::Approve));
        assert_eq!(session.confirm(), Ok(true));
        assert_eq!(
            session.view.modal().map(|m| m.phase),
            Some(ModalPhase::Submitting)
        );
        // Ignored while the first decision is in flight.
        assert_eq!(session.confirm(), Ok(false));
        session.settle().await;

        let snapshot = session.view.snapshot().unwrap();
        assert!(snapshot.todo.pending_kyc.is_empty());
        assert_eq!(snapshot.farmers[0].kyc_status, KycStatus::Approved);
        assert_eq!(snapshot.stats.completion_label(), "100.0%");
        assert!(session.view.selection_actions().is_empty());
        assert!(session.view.modal().is_none());
        assert_eq!(
            session.view.notice(),
            Some(&Notice::success("KYC approve successful!"))
        );
    }

    #[tokio::test]
    async fn test_any_failed_read_fails_the_whole_load() {
        let mut backend = MockKycBackend::new();
        backend
            .expect_dashboard_stats()
            .returning(|| Ok(DashboardStats::default()));
        backend
            .expect_assigned_farmers()
            .returning(|| Ok(vec![farmer(KycStatus::Pending)]));
        backend.expect_todo_list().returning(|| {
            Err(BackendError::Http {
                status: 500,
                message: "Internal Server Error".into(),
            })
        });
        backend
            .expect_profile()
            .returning(|| Ok(EmployeeProfile::default()));

        let mut session = DashboardSession::new(Arc::new(backend));
        session.refresh();
        session.settle().await;

        assert_eq!(
            session.view.load_state(),
            &LoadState::Failed("Internal Server Error".into())
        );
        assert!(session.view.snapshot().is_none());
    }

    #[tokio::test]
    async fn test_blank_reason_sends_nothing() {
        let mut backend = MockKycBackend::new();
        backend.expect_submit_kyc_decision().never();
        let mut session = DashboardSession::new(Arc::new(backend));
        session.view.apply_load(Ok(DashboardSnapshot {
            farmers: vec![farmer(KycStatus::Pending)],
            ..Default::default()
        }));
        session.view.set_tab(Tab::Farmers);
        session.view.open_action(KycAction::Reject);
        session.view.push_reason_char(' ');

        assert_eq!(
            session.confirm(),
            Err(DecisionError::MissingReason(KycAction::Reject))
        );
        assert!(!session.pump());
    }

    #[tokio::test]
    async fn test_rejected_decision_keeps_modal_and_snapshot() {
        let mut backend = MockKycBackend::new();
        backend
            .expect_submit_kyc_decision()
            .times(1)
            .returning(|_, _| {
                Err(BackendError::Http {
                    status: 400,
                    message: "Error referring back KYC: farmer not assigned".into(),
                })
            });
        backend.expect_dashboard_stats().never();

        let mut session = DashboardSession::new(Arc::new(backend));
        session.view.apply_load(Ok(DashboardSnapshot {
            farmers: vec![farmer(KycStatus::Pending)],
            ..Default::default()
        }));
        session.view.set_tab(Tab::Farmers);
        session.view.open_action(KycAction::ReferBack);
        for c in "blurred photo".chars() {
            session.view.push_reason_char(c);
        }
        assert_eq!(session.confirm(), Ok(true));
        session.settle().await;

        let modal = session.view.modal().unwrap();
        assert_eq!(modal.phase, ModalPhase::Confirming);
        assert_eq!(modal.reason, "blurred photo");
        assert_eq!(
            session.view.notice(),
            Some(&Notice::error(
                "Error: Error referring back KYC: farmer not assigned"
            ))
        );
        assert_eq!(session.view.snapshot().unwrap().farmers.len(), 1);
    }

    /// Stats fail at once while the farmer read is still in flight.
    struct SlowFarmers {
        finished: Arc<AtomicBool>,
    }

    #[async_trait::async_trait]
    impl KycBackend for SlowFarmers {
        async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError> {
            Err(BackendError::Http {
                status: 500,
                message: "Internal Server Error".into(),
            })
        }

        async fn assigned_farmers(&self) -> Result<Vec<Farmer>, BackendError> {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            self.finished.store(true, Ordering::SeqCst);
            Ok(vec![farmer(KycStatus::Pending)])
        }

        async fn todo_list(&self) -> Result<TodoBuckets, BackendError> {
            Ok(TodoBuckets::default())
        }

        async fn profile(&self) -> Result<EmployeeProfile, BackendError> {
            Err(BackendError::Http {
                status: 404,
                message: "Profile not found".into(),
            })
        }

        async fn submit_kyc_decision(
            &self,
            _farmer_id: &RecordId,
            _decision: &KycDecision,
        ) -> Result<String, BackendError> {
            unreachable!("dashboard reads only")
        }

        async fn list_employees(&self) -> Result<Vec<crate::models::EmployeeRecord>, BackendError> {
            unreachable!("dashboard reads only")
        }

        async fn delete_employee(&self, _id: &RecordId) -> Result<(), BackendError> {
            unreachable!("dashboard reads only")
        }

        async fn employee_details(
            &self,
            _id: &RecordId,
        ) -> Result<crate::models::EmployeeDetails, BackendError> {
            unreachable!("dashboard reads only")
        }
    }

    #[tokio::test]
    async fn test_failed_read_lets_the_others_finish() {
        let finished = Arc::new(AtomicBool::new(false));
        let backend = SlowFarmers {
            finished: finished.clone(),
        };
        let err = fetch_dashboard(&backend).await.unwrap_err();
        assert!(finished.load(Ordering::SeqCst));
        assert_eq!(err.user_message(), "Internal Server Error");
    }
}
