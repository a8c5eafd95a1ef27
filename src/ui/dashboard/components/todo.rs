//! To-do tab: the three server-curated buckets

use super::super::utils::{action_hints, contact_line, submitted_label};
use crate::models::{Farmer, TodoBucket};
use crate::views::DashboardView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

fn entry_lines(bucket: TodoBucket, farmer: &Farmer, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let name_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let detail = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, name_style),
            Span::styled(farmer.name.clone(), name_style),
        ]),
        Line::from(Span::styled(format!("    {}", contact_line(farmer)), detail)),
    ];
    match bucket {
        TodoBucket::PendingKyc => {
            lines.push(Line::from(Span::styled(
                format!("    {}", submitted_label(farmer)),
                detail,
            )));
        }
        TodoBucket::ReferBack => {
            lines.push(Line::from(Span::styled(
                format!(
                    "    Reason: {}",
                    farmer.kyc_refer_back_reason.as_deref().unwrap_or_default()
                ),
                Style::default().fg(Color::LightYellow),
            )));
        }
        TodoBucket::NewAssignments => {
            lines.push(Line::from(Span::styled(
                "    Newly assigned - KYC not yet started",
                detail,
            )));
        }
    }
    if selected {
        let hint = match bucket {
            TodoBucket::NewAssignments => "[Enter] View Details".to_string(),
            _ => action_hints(bucket.available_actions()),
        };
        lines.push(Line::from(Span::styled(
            format!("    {}", hint),
            Style::default().fg(Color::Cyan),
        )));
    }
    lines
}

pub fn render_todo(f: &mut Frame, area: Rect, view: &DashboardView) {
    let Some(snapshot) = view.snapshot() else {
        return;
    };
    let todo = &snapshot.todo;

    let mut lines = Vec::new();
    let mut index = 0;
    let mut selected_line = 0;
    for bucket in TodoBucket::ALL {
        lines.push(Line::from(Span::styled(
            format!("{} ({})", bucket.title(), todo.total(bucket)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        let farmers = todo.bucket(bucket);
        if farmers.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", bucket.empty_message()),
                Style::default().fg(Color::DarkGray),
            )));
        }
        for farmer in farmers {
            let selected = index == view.todo_cursor();
            if selected {
                selected_line = lines.len();
            }
            lines.extend(entry_lines(bucket, farmer, selected));
            index += 1;
        }
        lines.push(Line::from(""));
    }

    // Keep the highlighted entry on screen.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(5));

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0))
        .block(
            Block::default()
                .title("To-Do List")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}
