//! Assigned farmers table with search and KYC filter

use super::super::utils::{action_hints, status_badge};
use crate::models::KycStatus;
use crate::views::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

fn filter_label(filter: Option<KycStatus>) -> &'static str {
    filter.map(|s| s.badge()).unwrap_or("All Status")
}

pub fn render_farmers(f: &mut Frame, area: Rect, view: &DashboardView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .split(area);

    let search_style = if view.search_active() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Gray)
    };
    let search_text = if view.search().is_empty() && !view.search_active() {
        "Search farmers...".to_string()
    } else if view.search_active() {
        format!("{}_", view.search())
    } else {
        view.search().to_string()
    };
    let search_bar = Line::from(vec![
        Span::styled("[/] Search: ", Style::default().fg(Color::Cyan)),
        Span::styled(search_text, search_style),
        Span::styled("   [F] Filter: ", Style::default().fg(Color::Cyan)),
        Span::styled(filter_label(view.kyc_filter()), Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(search_bar), chunks[0]);

    let farmers = view.filtered_farmers();
    let rows: Vec<Row> = farmers
        .iter()
        .map(|farmer| {
            Row::new(vec![
                Cell::from(farmer.name.clone()),
                Cell::from(farmer.contact_number.clone()),
                Cell::from(farmer.location()),
                Cell::from(status_badge(farmer.kyc_status)),
                Cell::from(
                    farmer
                        .kyc_submitted_date
                        .clone()
                        .unwrap_or_else(|| "Not submitted".to_string()),
                ),
                Cell::from(action_hints(farmer.kyc_status.available_actions())),
            ])
        })
        .collect();

    let header = Row::new(vec![
        "Name",
        "Contact",
        "Location",
        "KYC Status",
        "Submitted",
        "Actions",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(18),
            Constraint::Percentage(13),
            Constraint::Percentage(18),
            Constraint::Percentage(11),
            Constraint::Percentage(12),
            Constraint::Percentage(28),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .title(format!("Assigned Farmers ({})", farmers.len()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let mut state = TableState::default();
    if !farmers.is_empty() {
        state.select(Some(view.farmer_cursor()));
    }
    f.render_stateful_widget(table, chunks[1], &mut state);

    if farmers.is_empty() {
        let empty = Paragraph::new("No farmers found")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(empty, chunks[1].inner(ratatui::layout::Margin::new(1, 2)));
    }

    // Reason behind a previous refer-back or rejection of the highlighted farmer.
    let detail = view.selected_farmer().and_then(|farmer| {
        farmer
            .kyc_refer_back_reason
            .as_ref()
            .map(|r| format!("Refer back reason: {}", r))
            .or_else(|| {
                farmer
                    .kyc_rejection_reason
                    .as_ref()
                    .map(|r| format!("Rejection reason: {}", r))
            })
    });
    if let Some(detail) = detail {
        f.render_widget(
            Paragraph::new(detail).style(Style::default().fg(Color::LightYellow)),
            chunks[2],
        );
    }
}
