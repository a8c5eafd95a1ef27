//! Dashboard header component
//!
//! Renders the title and the signed-in employee

use crate::views::DashboardView;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: Rect, view: &DashboardView) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("EMPLOYEE DASHBOARD v{}", version))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    let mut spans = Vec::new();
    if let Some(snapshot) = view.snapshot() {
        let profile = &snapshot.profile;
        spans.push(Span::styled(
            format!("Welcome back, {}", profile.full_name()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
        if let Some(email) = &profile.email {
            spans.push(Span::styled(
                format!("  {}", email),
                Style::default().fg(Color::Gray),
            ));
        }
    }
    if let Some(at) = view.loaded_at() {
        spans.push(Span::styled(
            format!("  (updated {})", at.format("%H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        ));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        header_chunks[1],
    );
}
