use crate::views::Tab;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Tabs};

const ORDER: [Tab; 4] = [Tab::Overview, Tab::Farmers, Tab::Todo, Tab::Profile];

pub fn render_tabs(f: &mut Frame, area: Rect, active: Tab) {
    let titles = ORDER
        .iter()
        .enumerate()
        .map(|(i, tab)| format!("{} {}", i + 1, tab.title()));
    let tabs = Tabs::new(titles)
        .select(active.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(tabs, area);
}
