//! Widgets shared by both screens

use crate::views::{Notice, NoticeKind};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// A `width` x `height` rectangle centered in `area`, clipped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

pub fn render_loading(f: &mut Frame, area: Rect, what: &str) {
    let text = Paragraph::new(format!("Loading {}...", what))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(text, centered_rect(area.width, 1, area));
}

/// Full-screen error with a retry affordance.
pub fn render_load_error(f: &mut Frame, area: Rect, headline: &str, reason: &str) {
    let lines = vec![
        Line::from(Span::styled(
            headline.to_string(),
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            reason.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[R] Retry   [Q] Quit",
            Style::default().fg(Color::Cyan),
        )),
    ];
    let block = Block::default()
        .title("Error")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    f.render_widget(paragraph, centered_rect(60, 11, area));
}

/// Acknowledgment popup; blocks other input until dismissed.
pub fn render_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let color = match notice.kind {
        NoticeKind::Success => Color::LightGreen,
        NoticeKind::Error => Color::LightRed,
    };
    let popup = centered_rect(54, 7, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            notice.message.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(body, popup);
}

/// Single-line key hint bar.
pub fn render_hints(f: &mut Frame, area: Rect, hints: &str) {
    let footer = Paragraph::new(hints.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}

/// Splits `area` into a fixed header, a body and a footer.
pub fn frame_layout(area: Rect, header: u16) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
pub(crate) mod test_support {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    /// Screen contents, one string per row.
    pub fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        screen_lines(terminal).join("\n")
    }
}
