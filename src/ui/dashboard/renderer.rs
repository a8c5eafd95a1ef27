//! Dashboard main renderer

use super::components::{farmers, footer, header, modal, overview, profile, tabs, todo};
use crate::ui::widgets::{frame_layout, render_load_error, render_loading, render_notice};
use crate::views::dashboard::LOAD_ERROR;
use crate::views::{DashboardView, LoadState, Tab};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_dashboard(f: &mut Frame, view: &DashboardView, with_background_color: bool) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    match view.load_state() {
        LoadState::Loading => {
            render_loading(f, f.area(), "dashboard");
            return;
        }
        LoadState::Failed(reason) => {
            render_load_error(f, f.area(), LOAD_ERROR, reason);
            return;
        }
        LoadState::Ready(_) => {}
    }

    let [header_area, body, footer_area] = frame_layout(f.area(), 3);
    header::render_header(f, header_area, view);

    let body_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(body);
    tabs::render_tabs(f, body_chunks[0], view.tab());

    match view.tab() {
        Tab::Overview => overview::render_overview(f, body_chunks[1], view),
        Tab::Farmers => farmers::render_farmers(f, body_chunks[1], view),
        Tab::Todo => todo::render_todo(f, body_chunks[1], view),
        Tab::Profile => profile::render_profile(f, body_chunks[1], view),
    }
    footer::render_footer(f, footer_area, view);

    if let Some(kyc_modal) = view.modal() {
        modal::render_modal(f, f.area(), kyc_modal);
    }
    if let Some(notice) = view.notice() {
        render_notice(f, f.area(), notice);
    }
}
