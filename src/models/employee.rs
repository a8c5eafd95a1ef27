//! Employee listing records

use super::{RecordId, null_as_default};
use serde::{Deserialize, Serialize};

/// Access status of an employee account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    /// The backend reports a missing access status as active.
    #[default]
    Active,
    Inactive,
    Pending,
    #[serde(other)]
    Unknown,
}

impl EmployeeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::Pending => "Pending",
            EmployeeStatus::Unknown => "Unknown",
        }
    }

    /// Next option in the status selector.
    pub fn next(&self) -> EmployeeStatus {
        match self {
            EmployeeStatus::Active => EmployeeStatus::Inactive,
            EmployeeStatus::Inactive => EmployeeStatus::Pending,
            EmployeeStatus::Pending | EmployeeStatus::Unknown => EmployeeStatus::Active,
        }
    }
}

/// One row of the employee table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub employee_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub designation: String,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: EmployeeStatus,
}

impl EmployeeRecord {
    /// Case-insensitive match against name, designation and employee code.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.designation.to_lowercase().contains(&term)
            || self.employee_id.to_lowercase().contains(&term)
    }
}

/// Full employee record behind the "view" action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDetails {
    pub id: RecordId,
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
}

impl EmployeeDetails {
    /// Label/value pairs in display order, skipping unknown fields.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let id = self.id.to_string();
        [
            ("Employee ID", self.employee_id.clone().or(Some(id))),
            ("Name", self.name.clone()),
            ("Designation", self.designation.clone()),
            ("Email", self.email.clone()),
            ("Contact", self.contact_number.clone()),
            ("District", self.district.clone()),
            ("State", self.state.clone()),
            ("Status", self.status.clone()),
            ("Education", self.education.clone()),
            ("Experience", self.experience.clone()),
            ("Bank", self.bank_name.clone()),
            ("Account", self.account_number.clone()),
            ("IFSC", self.ifsc_code.clone()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: &str, name: &str, designation: &str) -> EmployeeRecord {
        EmployeeRecord {
            id: RecordId::from(employee_id),
            employee_id: employee_id.to_string(),
            name: name.to_string(),
            designation: designation.to_string(),
            district: None,
            contact_number: None,
            email: None,
            status: EmployeeStatus::Active,
        }
    }

    #[test]
    fn test_search_covers_name_designation_and_code() {
        let employee = record("EMP000007", "Sunita Devi", "Field Officer");
        assert!(employee.matches_search("sunita"));
        assert!(employee.matches_search("FIELD"));
        assert!(employee.matches_search("emp000007"));
        assert!(employee.matches_search(""));
        assert!(!employee.matches_search("manager"));
    }

    #[test]
    fn test_status_defaults_and_unknowns() {
        let parsed: EmployeeRecord = serde_json::from_str(
            r#"{"id": 7, "employeeId": "EMP000007", "name": "A", "designation": "employee", "status": null}"#,
        )
        .unwrap();
        assert_eq!(parsed.status, EmployeeStatus::Active);

        let parsed: EmployeeRecord =
            serde_json::from_str(r#"{"id": 8, "status": "SUSPENDED"}"#).unwrap();
        assert_eq!(parsed.status, EmployeeStatus::Unknown);
    }

    #[test]
    fn test_status_selector_cycles() {
        assert_eq!(EmployeeStatus::Active.next(), EmployeeStatus::Inactive);
        assert_eq!(EmployeeStatus::Inactive.next(), EmployeeStatus::Pending);
        assert_eq!(EmployeeStatus::Pending.next(), EmployeeStatus::Active);
        assert_eq!(EmployeeStatus::Pending.to_string(), "PENDING");
    }

    #[test]
    fn test_details_fields_skip_missing_values() {
        let details: EmployeeDetails =
            serde_json::from_str(r#"{"id": 12, "name": "Kiran", "bankName": null}"#).unwrap();
        let fields = details.fields();
        assert_eq!(
            fields,
            vec![
                ("Employee ID", "12".to_string()),
                ("Name", "Kiran".to_string())
            ]
        );
    }
}
