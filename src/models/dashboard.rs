//! Dashboard read models: counters, to-do buckets and the reviewer's profile

use super::farmer::join_location;
use super::{Farmer, KycAction, KycStatus};
use serde::{Deserialize, Serialize};

/// KYC counters for the signed-in employee.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
    pub total_assigned: u64,
    pub approved: u64,
    pub refer_back: u64,
    pub pending: u64,
    pub rejected: u64,
    /// Percentage of assigned farmers approved, in [0, 100].
    pub completion_rate: f64,
}

impl DashboardStats {
    /// Completion rate with one decimal place, e.g. `66.7%`.
    pub fn completion_label(&self) -> String {
        format!("{:.1}%", self.completion_rate)
    }
}

/// Server-curated groups of farmers needing the reviewer's attention.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodoBuckets {
    pub pending_kyc: Vec<Farmer>,
    pub refer_back_cases: Vec<Farmer>,
    pub new_assignments: Vec<Farmer>,
    pub total_pending_kyc: u64,
    pub total_refer_back: u64,
    pub total_new_assignments: u64,
}

impl TodoBuckets {
    pub fn bucket(&self, bucket: TodoBucket) -> &[Farmer] {
        match bucket {
            TodoBucket::PendingKyc => &self.pending_kyc,
            TodoBucket::ReferBack => &self.refer_back_cases,
            TodoBucket::NewAssignments => &self.new_assignments,
        }
    }

    pub fn total(&self, bucket: TodoBucket) -> u64 {
        match bucket {
            TodoBucket::PendingKyc => self.total_pending_kyc,
            TodoBucket::ReferBack => self.total_refer_back,
            TodoBucket::NewAssignments => self.total_new_assignments,
        }
    }

    /// Every bucketed farmer in display order, tagged with its bucket.
    pub fn entries(&self) -> impl Iterator<Item = (TodoBucket, &Farmer)> {
        TodoBucket::ALL
            .into_iter()
            .flat_map(move |bucket| self.bucket(bucket).iter().map(move |f| (bucket, f)))
    }
}

/// One of the three to-do groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoBucket {
    PendingKyc,
    ReferBack,
    NewAssignments,
}

impl TodoBucket {
    pub const ALL: [TodoBucket; 3] = [
        TodoBucket::PendingKyc,
        TodoBucket::ReferBack,
        TodoBucket::NewAssignments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TodoBucket::PendingKyc => "Pending KYC Verifications",
            TodoBucket::ReferBack => "Refer Back Cases",
            TodoBucket::NewAssignments => "New Assignments",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            TodoBucket::PendingKyc => "No pending KYC verifications",
            TodoBucket::ReferBack => "No refer back cases",
            TodoBucket::NewAssignments => "No new assignments",
        }
    }

    /// Bucketed records may omit their status; the bucket stands in for it.
    pub fn implied_status(&self) -> Option<KycStatus> {
        match self {
            TodoBucket::PendingKyc => Some(KycStatus::Pending),
            TodoBucket::ReferBack => Some(KycStatus::ReferBack),
            TodoBucket::NewAssignments => None,
        }
    }

    pub fn available_actions(&self) -> &'static [KycAction] {
        self.implied_status()
            .map(|status| status.available_actions())
            .unwrap_or(&[])
    }
}

/// The signed-in employee, display only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeProfile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub role: Option<String>,
    pub district: Option<String>,
    pub state: Option<String>,
    pub education: Option<String>,
    pub experience: Option<String>,
}

impl EmployeeProfile {
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First letter of each name part, for the avatar.
    pub fn initials(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn location(&self) -> String {
        join_location(self.district.as_deref(), self.state.as_deref())
    }
}

/// Everything the dashboard loads in one fan-out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSnapshot {
    pub stats: DashboardStats,
    pub farmers: Vec<Farmer>,
    pub todo: TodoBuckets,
    pub profile: EmployeeProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_label_has_one_decimal() {
        let stats = DashboardStats {
            completion_rate: 200.0 / 3.0,
            ..Default::default()
        };
        assert_eq!(stats.completion_label(), "66.7%");
        assert_eq!(DashboardStats::default().completion_label(), "0.0%");
    }

    #[test]
    fn test_stats_accept_integer_completion_rate() {
        // The backend sends a bare 0 when nothing is assigned.
        let stats: DashboardStats = serde_json::from_str(
            r#"{"totalAssigned":0,"approved":0,"referBack":0,"pending":0,"rejected":0,"completionRate":0}"#,
        )
        .unwrap();
        assert_eq!(stats.completion_rate, 0.0);
    }

    #[test]
    fn test_todo_bucket_implies_actions() {
        assert_eq!(TodoBucket::PendingKyc.available_actions().len(), 3);
        assert_eq!(
            TodoBucket::ReferBack.available_actions(),
            &[KycAction::Approve, KycAction::Reject]
        );
        assert!(TodoBucket::NewAssignments.available_actions().is_empty());
    }

    #[test]
    fn test_todo_entries_follow_bucket_order() {
        let todo: TodoBuckets = serde_json::from_str(
            r#"{
                "pendingKyc": [{"id": 1, "name": "A"}],
                "referBackCases": [{"id": 2, "name": "B", "kycReferBackReason": "photo"}],
                "newAssignments": [{"id": 3, "name": "C"}],
                "totalPendingKyc": 1,
                "totalReferBack": 1,
                "totalNewAssignments": 1
            }"#,
        )
        .unwrap();
        let order: Vec<(TodoBucket, String)> = todo
            .entries()
            .map(|(bucket, farmer)| (bucket, farmer.name.clone()))
            .collect();
        assert_eq!(
            order,
            vec![
                (TodoBucket::PendingKyc, "A".to_string()),
                (TodoBucket::ReferBack, "B".to_string()),
                (TodoBucket::NewAssignments, "C".to_string()),
            ]
        );
    }

    #[test]
    fn test_profile_initials_and_location() {
        let profile = EmployeeProfile {
            first_name: Some("meera".into()),
            last_name: Some("Rao".into()),
            district: Some("Guntur".into()),
            state: Some("Andhra Pradesh".into()),
            ..Default::default()
        };
        assert_eq!(profile.full_name(), "meera Rao");
        assert_eq!(profile.initials(), "MR");
        assert_eq!(profile.location(), "Guntur, Andhra Pradesh");
        assert_eq!(EmployeeProfile::default().initials(), "");
    }
}
