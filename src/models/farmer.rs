//! Assigned-farmer records and the KYC decision vocabulary

use super::{RecordId, null_as_default};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// KYC verification state of a farmer record.
///
/// APPROVED and REJECTED are terminal. REFER_BACK returns to review and can only
/// leave through approve or reject.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum KycStatus {
    /// The backend reports a missing status as pending.
    #[default]
    Pending,
    Approved,
    Rejected,
    #[strum(to_string = "REFER_BACK", serialize = "refer-back")]
    ReferBack,
    /// Any status string this client does not know about.
    #[serde(other)]
    Unknown,
}

impl KycStatus {
    /// Statuses a reviewer can filter the farmer table by, in menu order.
    pub const FILTERABLE: [KycStatus; 4] = [
        KycStatus::Pending,
        KycStatus::Approved,
        KycStatus::ReferBack,
        KycStatus::Rejected,
    ];

    /// Human readable badge text. Unknown statuses are badged as pending.
    pub fn badge(&self) -> &'static str {
        match self {
            KycStatus::Pending | KycStatus::Unknown => "Pending",
            KycStatus::Approved => "Approved",
            KycStatus::Rejected => "Rejected",
            KycStatus::ReferBack => "Refer Back",
        }
    }

    /// Decisions a reviewer may take from this status.
    pub fn available_actions(&self) -> &'static [KycAction] {
        match self {
            KycStatus::Pending => &[KycAction::Approve, KycAction::ReferBack, KycAction::Reject],
            KycStatus::ReferBack => &[KycAction::Approve, KycAction::Reject],
            KycStatus::Approved | KycStatus::Rejected | KycStatus::Unknown => &[],
        }
    }
}

/// Parses a `--status` filter. `UNKNOWN` is not something a reviewer can pick.
pub fn parse_status_filter(value: &str) -> Result<KycStatus, String> {
    match value.trim().parse::<KycStatus>() {
        Ok(status) if status != KycStatus::Unknown => Ok(status),
        _ => Err(format!(
            "unknown KYC status '{}', expected one of PENDING, APPROVED, REFER_BACK, REJECTED",
            value.trim()
        )),
    }
}

/// A reviewer decision on a farmer's KYC.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum KycAction {
    Approve,
    #[strum(to_string = "refer-back", serialize = "refer_back", serialize = "referback")]
    ReferBack,
    Reject,
}

impl KycAction {
    /// Refer-back and reject must explain themselves.
    pub fn requires_reason(&self) -> bool {
        matches!(self, KycAction::ReferBack | KycAction::Reject)
    }

    /// The wire name, also used as the endpoint path segment.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            KycAction::Approve => "Approve",
            KycAction::ReferBack => "Refer Back",
            KycAction::Reject => "Reject",
        }
    }

    /// Key bound to this action in the terminal views.
    pub fn hotkey(&self) -> char {
        match self {
            KycAction::Approve => 'a',
            KycAction::ReferBack => 'b',
            KycAction::Reject => 'x',
        }
    }
}

/// Parses the action argument of `kyc`.
pub fn parse_action(value: &str) -> Result<KycAction, String> {
    value.trim().parse().map_err(|_| {
        format!(
            "unknown KYC action '{}', expected approve, refer-back or reject",
            value.trim()
        )
    })
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("A reason is required to {0}")]
    MissingReason(KycAction),
}

/// A validated decision, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycDecision {
    action: KycAction,
    reason: Option<String>,
}

impl KycDecision {
    /// Builds a decision, refusing blank reasons for actions that need one.
    ///
    /// The reason is kept as typed; it is only trimmed for the emptiness check.
    /// Approvals never carry a reason.
    pub fn new(action: KycAction, reason: &str) -> Result<Self, DecisionError> {
        if !action.requires_reason() {
            return Ok(Self {
                action,
                reason: None,
            });
        }
        if reason.trim().is_empty() {
            return Err(DecisionError::MissingReason(action));
        }
        Ok(Self {
            action,
            reason: Some(reason.to_string()),
        })
    }

    #[cfg(test)]
    pub fn approve() -> Self {
        Self {
            action: KycAction::Approve,
            reason: None,
        }
    }

    pub fn action(&self) -> KycAction {
        self.action
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

/// Farmer record as listed on the employee dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Farmer {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_number: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kyc_status: KycStatus,
    #[serde(default)]
    pub kyc_submitted_date: Option<String>,
    #[serde(default)]
    pub kyc_reviewed_date: Option<String>,
    #[serde(default)]
    pub kyc_refer_back_reason: Option<String>,
    #[serde(default)]
    pub kyc_rejection_reason: Option<String>,
}

impl Farmer {
    /// "district, state" with whatever parts are known.
    pub fn location(&self) -> String {
        join_location(self.district.as_deref(), self.state.as_deref())
    }

    /// Case-insensitive match of the term against name and contact number.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.contact_number.to_lowercase().contains(&term)
    }
}

pub(crate) fn join_location(district: Option<&str>, state: Option<&str>) -> String {
    match (district, state) {
        (Some(d), Some(s)) => format!("{}, {}", d, s),
        (Some(d), None) => d.to_string(),
        (None, Some(s)) => s.to_string(),
        (None, None) => String::new(),
    }
}
