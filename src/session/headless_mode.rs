//! Headless mode execution
//!
//! One-shot commands over the same backend and filtering logic as the
//! terminal views. Each writes plain text to `out`.

use crate::backend::KycBackend;
use crate::models::{EmployeeRecord, Farmer, KycAction, KycDecision, KycStatus, RecordId, TodoBucket};
use crate::views::employees::{DELETE_FAILURE, DELETE_SUCCESS};
use crate::views::EmployeeListView;
use crate::workers::core::report_failure;
use crate::print_cmd_success;
use std::error::Error;
use std::io::{self, BufRead, Write};

type CommandResult = Result<(), Box<dyn Error>>;

fn farmer_row(farmer: &Farmer) -> String {
    format!(
        "{:<8} {:<24} {:<14} {:<28} {:<10}",
        farmer.id.to_string(),
        farmer.name,
        farmer.contact_number,
        farmer.location(),
        farmer.kyc_status.badge()
    )
}

fn employee_row(employee: &EmployeeRecord, status: &str) -> String {
    format!(
        "{:<12} {:<24} {:<20} {:<14} {:<14} {:<28} {}",
        employee.employee_id,
        employee.name,
        employee.designation,
        employee.district.as_deref().unwrap_or_default(),
        employee.contact_number.as_deref().unwrap_or_default(),
        employee.email.as_deref().unwrap_or_default(),
        status
    )
}

pub async fn stats(backend: &dyn KycBackend, out: &mut dyn Write) -> CommandResult {
    let stats = backend.dashboard_stats().await?;
    writeln!(out, "Total Assigned:  {}", stats.total_assigned)?;
    writeln!(out, "Approved:        {}", stats.approved)?;
    writeln!(out, "Refer Back:      {}", stats.refer_back)?;
    writeln!(out, "Pending:         {}", stats.pending)?;
    writeln!(out, "Rejected:        {}", stats.rejected)?;
    writeln!(out, "Completion Rate: {}", stats.completion_label())?;
    Ok(())
}

/// Assigned farmers matching `search` and `status`, like the farmers tab.
pub async fn farmers(
    backend: &dyn KycBackend,
    search: Option<&str>,
    status: Option<KycStatus>,
    out: &mut dyn Write,
) -> CommandResult {
    let farmers = backend.assigned_farmers().await?;
    let term = search.unwrap_or_default();
    let matching: Vec<&Farmer> = farmers
        .iter()
        .filter(|f| f.matches_search(term))
        .filter(|f| status.is_none_or(|s| f.kyc_status == s))
        .collect();

    if matching.is_empty() {
        writeln!(out, "No farmers found")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<8} {:<24} {:<14} {:<28} {:<10}",
        "ID", "Name", "Contact", "Location", "KYC Status"
    )?;
    for farmer in matching {
        writeln!(out, "{}", farmer_row(farmer))?;
    }
    Ok(())
}

pub async fn todo(backend: &dyn KycBackend, out: &mut dyn Write) -> CommandResult {
    let todo = backend.todo_list().await?;
    for bucket in TodoBucket::ALL {
        writeln!(out, "{} ({})", bucket.title(), todo.total(bucket))?;
        let farmers = todo.bucket(bucket);
        if farmers.is_empty() {
            writeln!(out, "  {}", bucket.empty_message())?;
        }
        for farmer in farmers {
            let note = match bucket {
                TodoBucket::PendingKyc => format!(
                    "Submitted: {}",
                    farmer.kyc_submitted_date.as_deref().unwrap_or("Not submitted")
                ),
                TodoBucket::ReferBack => format!(
                    "Reason: {}",
                    farmer.kyc_refer_back_reason.as_deref().unwrap_or_default()
                ),
                TodoBucket::NewAssignments => "Newly assigned - KYC not yet started".to_string(),
            };
            writeln!(out, "  [{}] {} - {}", farmer.id, farmer.name, note)?;
        }
    }
    Ok(())
}

pub async fn profile(backend: &dyn KycBackend, out: &mut dyn Write) -> CommandResult {
    let profile = backend.profile().await?;
    writeln!(out, "{}", profile.full_name())?;
    let rows = [
        ("Email", profile.email.clone()),
        ("Contact", profile.contact_number.clone()),
        ("Role", profile.role.clone()),
        ("Location", Some(profile.location()).filter(|l| !l.is_empty())),
        ("Education", profile.education.clone()),
        ("Experience", profile.experience.clone()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            writeln!(out, "{:<11} {}", format!("{}:", label), value)?;
        }
    }
    Ok(())
}

/// Validates and sends one KYC decision. A blank reason is refused before
/// any request is made.
pub async fn kyc(
    backend: &dyn KycBackend,
    action: KycAction,
    farmer_id: &RecordId,
    reason: Option<&str>,
) -> CommandResult {
    let decision = KycDecision::new(action, reason.unwrap_or_default())?;
    match backend.submit_kyc_decision(farmer_id, &decision).await {
        Ok(_) => {
            print_cmd_success!(&format!("KYC {} successful!", action), "farmer {}", farmer_id);
            Ok(())
        }
        Err(e) => {
            let message = report_failure(&format!("Error submitting KYC {}", action), &e);
            Err(format!("Error: {}", message).into())
        }
    }
}

pub async fn employees(
    backend: &dyn KycBackend,
    search: Option<&str>,
    out: &mut dyn Write,
) -> CommandResult {
    let mut view = EmployeeListView::new();
    view.apply_load(Ok(backend.list_employees().await?));
    view.set_search(search.unwrap_or_default());

    let listed = view.filtered();
    if listed.is_empty() {
        writeln!(out, "{}", view.empty_message())?;
    } else {
        writeln!(
            out,
            "{:<12} {:<24} {:<20} {:<14} {:<14} {:<28} {}",
            "Employee ID", "Name", "Designation", "District", "Contact Number", "Email", "Status"
        )?;
        for employee in &listed {
            writeln!(out, "{}", employee_row(employee, employee.status.label()))?;
        }
    }
    writeln!(out, "{}", view.summary())?;
    Ok(())
}

pub async fn employee(backend: &dyn KycBackend, id: &RecordId, out: &mut dyn Write) -> CommandResult {
    let details = backend.employee_details(id).await?;
    for (label, value) in details.fields() {
        writeln!(out, "{:<12} {}", format!("{}:", label), value)?;
    }
    Ok(())
}

pub async fn delete_employee(backend: &dyn KycBackend, id: &RecordId) -> CommandResult {
    match backend.delete_employee(id).await {
        Ok(()) => {
            print_cmd_success!(DELETE_SUCCESS, "");
            Ok(())
        }
        Err(e) => {
            let message = report_failure(&format!("Error deleting employee {}", id), &e);
            Err(format!("{}: {}", DELETE_FAILURE, message).into())
        }
    }
}

/// Asks a yes/no question on stdin. Anything but `y`/`yes` is a no.
pub fn confirm(question: &str) -> io::Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(parse_confirmation(&answer))
}

fn parse_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
