//! Backend-owned records as the client sees them
//!
//! The views only ever hold the latest snapshot of these types; nothing here
//! is mutated locally once deserialized.

mod dashboard;
mod employee;
mod farmer;
mod id;

pub use dashboard::{DashboardSnapshot, DashboardStats, EmployeeProfile, TodoBucket, TodoBuckets};
pub use employee::{EmployeeDetails, EmployeeRecord, EmployeeStatus};
pub use farmer::{
    DecisionError, Farmer, KycAction, KycDecision, KycStatus, parse_action, parse_status_filter,
};
pub use id::RecordId;

use serde::{Deserialize, Deserializer};

/// The backend serializes absent values as `null` rather than omitting them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
