//! Overview tab: stat cards, quick actions and recent activity

use super::super::utils::{reviewed_label, status_badge};
use crate::models::DashboardStats;
use crate::views::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

fn stat_cards(stats: &DashboardStats) -> [(&'static str, String, Color); 6] {
    [
        ("Total Assigned", stats.total_assigned.to_string(), Color::Cyan),
        ("Approved", stats.approved.to_string(), Color::LightGreen),
        ("Refer Back", stats.refer_back.to_string(), Color::LightYellow),
        ("Pending", stats.pending.to_string(), Color::LightBlue),
        ("Rejected", stats.rejected.to_string(), Color::LightRed),
        ("Completion Rate", stats.completion_label(), Color::LightMagenta),
    ]
}

pub fn render_overview(f: &mut Frame, area: Rect, view: &DashboardView) {
    let Some(snapshot) = view.snapshot() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(area);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 6); 6])
        .split(chunks[0]);
    for ((label, value, color), card_area) in stat_cards(&snapshot.stats).into_iter().zip(card_areas.iter()) {
        let card = Paragraph::new(vec![Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(card, *card_area);
    }

    let quick_actions = Paragraph::new("[2] View All Farmers   [3] View To-Do List   [R] Refresh Data")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title("Quick Actions")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(quick_actions, chunks[1]);

    let items: Vec<ListItem> = view
        .recent_activity()
        .iter()
        .map(|farmer| {
            ListItem::new(Line::from(vec![
                Span::styled(farmer.name.clone(), Style::default().fg(Color::White)),
                Span::raw(" - "),
                status_badge(farmer.kyc_status),
                Span::styled(
                    format!("   {}", reviewed_label(farmer)),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let activity = List::new(items).block(
        Block::default()
            .title("Recent Activity")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(activity, chunks[2]);
}
