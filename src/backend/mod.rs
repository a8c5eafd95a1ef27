use crate::models::{
    DashboardStats, EmployeeDetails, EmployeeProfile, EmployeeRecord, Farmer, KycDecision,
    RecordId, TodoBuckets,
};
use crate::backend::error::BackendError;

pub(crate) mod client;
pub use client::BackendClient;
pub mod credentials;
pub mod error;

#[cfg(test)]
use mockall::automock;

/// The REST backend the views read from and write to.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait KycBackend: Send + Sync {
    /// KYC counters for the signed-in employee.
    async fn dashboard_stats(&self) -> Result<DashboardStats, BackendError>;

    /// Farmers assigned to the signed-in employee.
    async fn assigned_farmers(&self) -> Result<Vec<Farmer>, BackendError>;

    /// Pending, refer-back and newly assigned farmers.
    async fn todo_list(&self) -> Result<TodoBuckets, BackendError>;

    /// Profile of the signed-in employee.
    async fn profile(&self) -> Result<EmployeeProfile, BackendError>;

    /// Records a KYC decision for a farmer. Returns the server's acknowledgment text.
    async fn submit_kyc_decision(
        &self,
        farmer_id: &RecordId,
        decision: &KycDecision,
    ) -> Result<String, BackendError>;

    /// All employees, formatted for the listing.
    async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, BackendError>;

    /// Deletes one employee.
    async fn delete_employee(&self, id: &RecordId) -> Result<(), BackendError>;

    /// Full record of one employee.
    async fn employee_details(&self, id: &RecordId) -> Result<EmployeeDetails, BackendError>;
}
