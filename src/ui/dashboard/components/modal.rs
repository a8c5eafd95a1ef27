//! KYC decision modal

use super::super::utils::action_color;
use crate::ui::widgets::centered_rect;
use crate::views::{KycModal, ModalPhase};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

pub fn render_modal(f: &mut Frame, area: Rect, modal: &KycModal) {
    let color = action_color(modal.action);
    let mut lines = vec![Line::from(vec![
        Span::raw("Are you sure you want to "),
        Span::styled(
            modal.action.as_str(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" the KYC for {}?", modal.farmer.name)),
    ])];

    if modal.action.requires_reason() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Reason:",
            Style::default().fg(Color::Cyan),
        )));
        let reason = if modal.reason.is_empty() {
            Span::styled(
                format!("Enter reason for {}...", modal.action),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            Span::styled(modal.reason.clone(), Style::default().fg(Color::White))
        };
        let mut reason_line = vec![reason];
        if modal.phase == ModalPhase::Confirming {
            reason_line.push(Span::styled("_", Style::default().fg(Color::Yellow)));
        }
        lines.push(Line::from(reason_line));
    }

    lines.push(Line::from(""));
    let actions = match modal.phase {
        ModalPhase::Submitting => Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        ModalPhase::Confirming => {
            let confirm_style = if modal.can_confirm() {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(vec![
                Span::styled("[Esc] Cancel   ", Style::default().fg(Color::Gray)),
                Span::styled(format!("[Enter] Confirm {}", modal.action), confirm_style),
            ])
        }
    };
    lines.push(actions);

    let popup = centered_rect(64, 12, area);
    let block = Block::default()
        .title(format!("KYC Action - {}", modal.farmer.name))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .padding(Padding::horizontal(1));
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}
