//! Dashboard footer component
//!
//! Key hints for the active tab

use crate::ui::widgets::render_hints;
use crate::views::{DashboardView, Tab};
use ratatui::Frame;
use ratatui::layout::Rect;

pub fn render_footer(f: &mut Frame, area: Rect, view: &DashboardView) {
    let hints = if view.modal().is_some() {
        "[Enter] Confirm | [Esc] Cancel".to_string()
    } else if view.search_active() {
        "Type to search | [Enter/Esc] Done".to_string()
    } else {
        let tab_hints = match view.tab() {
            Tab::Farmers => "[↑↓] Select | [/] Search | [F] Filter | [A/B/X] Decide | ",
            Tab::Todo => "[↑↓] Select | [A/B/X] Decide | [Enter] View | ",
            Tab::Overview | Tab::Profile => "",
        };
        format!(
            "{}[Tab/1-4] Switch | [R] Refresh | [E] Employees | [Q] Quit",
            tab_hints
        )
    };
    render_hints(f, area, &hints);
}
