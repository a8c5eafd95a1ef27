//! Employee listing requests

use super::core::{EventSender, TaskScope, report_failure};
use crate::backend::KycBackend;
use crate::consts::cli_consts::EVENT_QUEUE_SIZE;
use crate::models::{EmployeeRecord, RecordId};
use crate::views::{DeleteOutcome, EmployeeEvent, EmployeeListView};
use std::sync::Arc;
use tokio::sync::mpsc;

async fn load_list(backend: &dyn KycBackend) -> Result<Vec<EmployeeRecord>, String> {
    backend
        .list_employees()
        .await
        .inspect(|list| log::debug!("Loaded {} employees", list.len()))
        .map_err(|e| report_failure("Error fetching employees", &e))
}

pub async fn load_employees(backend: Arc<dyn KycBackend>) -> EmployeeEvent {
    EmployeeEvent::Loaded(load_list(backend.as_ref()).await)
}

/// Deletes one employee, then reads the list again whatever the outcome.
pub async fn delete_employee(backend: Arc<dyn KycBackend>, id: RecordId) -> EmployeeEvent {
    let ok = match backend.delete_employee(&id).await {
        Ok(()) => {
            log::info!("Deleted employee {}", id);
            true
        }
        Err(e) => {
            report_failure(&format!("Error deleting employee {}", id), &e);
            false
        }
    };
    EmployeeEvent::DeleteFinished(DeleteOutcome {
        ok,
        reloaded: load_list(backend.as_ref()).await,
    })
}

pub async fn load_details(backend: Arc<dyn KycBackend>, id: RecordId) -> EmployeeEvent {
    let result = backend
        .employee_details(&id)
        .await
        .map_err(|e| report_failure(&format!("Error fetching employee {}", id), &e));
    EmployeeEvent::DetailsLoaded { id, result }
}

/// An employee listing wired to the backend.
pub struct EmployeeSession {
    pub view: EmployeeListView,
    backend: Arc<dyn KycBackend>,
    scope: TaskScope,
    sender: EventSender<EmployeeEvent>,
    receiver: mpsc::Receiver<EmployeeEvent>,
}

impl EmployeeSession {
    pub fn new(backend: Arc<dyn KycBackend>) -> Self {
        let (tx, receiver) = mpsc::channel(EVENT_QUEUE_SIZE);
        Self {
            view: EmployeeListView::new(),
            backend,
            scope: TaskScope::new(),
            sender: EventSender::new(tx),
            receiver,
        }
    }

    pub fn refresh(&mut self) {
        self.view.begin_load();
        self.scope
            .spawn(self.sender.clone(), load_employees(self.backend.clone()));
    }

    /// Answers the delete prompt; a yes sends the request.
    pub fn answer_delete(&mut self, yes: bool) -> bool {
        match self.view.answer_delete(yes) {
            Some(id) => {
                self.scope.spawn(
                    self.sender.clone(),
                    delete_employee(self.backend.clone(), id),
                );
                true
            }
            None => false,
        }
    }

    pub fn view_details(&mut self) -> bool {
        match self.view.request_details() {
            Some(id) => {
                self.scope
                    .spawn(self.sender.clone(), load_details(self.backend.clone(), id));
                true
            }
            None => false,
        }
    }

    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.receiver.try_recv() {
            self.view.apply(event);
            changed = true;
        }
        changed
    }

    #[cfg(test)]
    pub async fn settle(&mut self) {
        if let Some(event) = self.receiver.recv().await {
            self.view.apply(event);
        }
    }
}
