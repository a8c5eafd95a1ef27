//! Profile tab

use crate::views::DashboardView;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

fn detail_row(label: &str, value: Option<&str>) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<12}", label), Style::default().fg(Color::Cyan)),
        Span::styled(
            value.unwrap_or_default().to_string(),
            Style::default().fg(Color::White),
        ),
    ])
}

pub fn render_profile(f: &mut Frame, area: Rect, view: &DashboardView) {
    let Some(snapshot) = view.snapshot() else {
        return;
    };
    let profile = &snapshot.profile;
    let location = profile.location();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", profile.initials()),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                profile.full_name(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            profile.email.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            profile.contact_number.clone().unwrap_or_default(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        detail_row("Role:", profile.role.as_deref()),
        detail_row("Location:", Some(location.as_str())),
        detail_row("Education:", profile.education.as_deref()),
        detail_row("Experience:", profile.experience.as_deref()),
    ];

    let block = Block::default()
        .title("Employee Profile")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
