//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::models::{Farmer, KycAction, KycStatus};
use ratatui::prelude::{Color, Style};
use ratatui::text::Span;

/// Get a ratatui color for a KYC badge
pub fn status_color(status: KycStatus) -> Color {
    match status {
        KycStatus::Approved => Color::LightGreen,
        KycStatus::Rejected => Color::LightRed,
        KycStatus::ReferBack => Color::LightYellow,
        KycStatus::Pending | KycStatus::Unknown => Color::LightBlue,
    }
}

pub fn status_badge(status: KycStatus) -> Span<'static> {
    Span::styled(status.badge(), Style::default().fg(status_color(status)))
}

pub fn action_color(action: KycAction) -> Color {
    match action {
        KycAction::Approve => Color::LightGreen,
        KycAction::ReferBack => Color::LightYellow,
        KycAction::Reject => Color::LightRed,
    }
}

/// e.g. `[a] Approve  [x] Reject`
pub fn action_hints(actions: &[KycAction]) -> String {
    actions
        .iter()
        .map(|a| format!("[{}] {}", a.hotkey(), a.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn reviewed_label(farmer: &Farmer) -> String {
    match &farmer.kyc_reviewed_date {
        Some(date) => format!("Reviewed: {}", date),
        None => "Not reviewed".to_string(),
    }
}

pub fn submitted_label(farmer: &Farmer) -> String {
    format!(
        "Submitted: {}",
        farmer.kyc_submitted_date.as_deref().unwrap_or("Not submitted")
    )
}

/// "contact • district, state", skipping unknown parts.
pub fn contact_line(farmer: &Farmer) -> String {
    let location = farmer.location();
    if location.is_empty() {
        farmer.contact_number.clone()
    } else {
        format!("{} • {}", farmer.contact_number, location)
    }
}
