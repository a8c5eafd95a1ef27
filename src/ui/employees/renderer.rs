//! Employee table, delete prompt and details panel

use crate::models::EmployeeStatus;
use crate::ui::widgets::{
    centered_rect, frame_layout, render_hints, render_load_error, render_loading, render_notice,
};
use crate::views::employees::{DELETE_QUESTION, LOAD_ERROR};
use crate::views::{DeletePrompt, DetailsPanel, EmployeeListView, LoadState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, Padding, Paragraph, Row, Table, TableState, Wrap,
};

fn status_color(status: EmployeeStatus) -> Color {
    match status {
        EmployeeStatus::Active => Color::LightGreen,
        EmployeeStatus::Inactive => Color::LightRed,
        EmployeeStatus::Pending => Color::LightYellow,
        EmployeeStatus::Unknown => Color::Gray,
    }
}

pub fn render_employees(f: &mut Frame, view: &EmployeeListView, with_background_color: bool) {
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    match view.load_state() {
        LoadState::Loading => {
            render_loading(f, f.area(), "employees");
            return;
        }
        LoadState::Failed(reason) => {
            render_load_error(f, f.area(), LOAD_ERROR, reason);
            return;
        }
        LoadState::Ready(_) => {}
    }

    let [header_area, body, footer_area] = frame_layout(f.area(), 3);
    render_header(f, header_area, view);
    render_table(f, body, view);
    render_hints(f, footer_area, footer_hints(view));

    if let Some(prompt) = view.delete_prompt() {
        render_delete_prompt(f, f.area(), prompt);
    }
    if let Some(panel) = view.details() {
        render_details(f, f.area(), panel);
    }
    if let Some(notice) = view.notice() {
        render_notice(f, f.area(), notice);
    }
}

fn footer_hints(view: &EmployeeListView) -> &'static str {
    if view.search_active() {
        "Type to search | [Enter/Esc] Done"
    } else {
        "[↑↓] Select | [/] Search | [V] View | [S] Status | [D] Delete | [R] Refresh | [Tab] Dashboard | [Q] Quit"
    }
}

fn render_header(f: &mut Frame, area: Rect, view: &EmployeeListView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1)])
        .split(area);

    let title = Paragraph::new("EMPLOYEES LIST")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, chunks[0]);

    let search = if view.search_active() {
        Span::styled(format!("{}_", view.search()), Style::default().fg(Color::Yellow))
    } else if view.search().is_empty() {
        Span::styled(
            "Search by name or designation",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(view.search().to_string(), Style::default().fg(Color::Gray))
    };
    let line = Line::from(vec![
        Span::styled("[/] Search: ", Style::default().fg(Color::Cyan)),
        search,
        Span::raw("   "),
        Span::styled(
            view.summary(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), chunks[1]);
}

fn render_table(f: &mut Frame, area: Rect, view: &EmployeeListView) {
    let employees = view.filtered();
    let rows: Vec<Row> = employees
        .iter()
        .map(|employee| {
            let status = view.display_status(employee);
            Row::new(vec![
                Cell::from(employee.employee_id.clone()),
                Cell::from(employee.name.clone()),
                Cell::from(employee.designation.clone()),
                Cell::from(employee.district.clone().unwrap_or_default()),
                Cell::from(employee.contact_number.clone().unwrap_or_default()),
                Cell::from(employee.email.clone().unwrap_or_default()),
                Cell::from(Span::styled(
                    format!("< {} >", status.label()),
                    Style::default().fg(status_color(status)),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec![
        "Employee ID",
        "Name",
        "Designation",
        "District",
        "Contact Number",
        "Email",
        "Status",
    ])
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Percentage(18),
            Constraint::Percentage(15),
            Constraint::Percentage(12),
            Constraint::Length(15),
            Constraint::Percentage(22),
            Constraint::Length(14),
        ],
    )
    .header(header)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    let mut state = TableState::default();
    if !employees.is_empty() {
        state.select(Some(view.cursor()));
    }
    f.render_stateful_widget(table, area, &mut state);

    if employees.is_empty() {
        let empty = Paragraph::new(view.empty_message())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, area.inner(Margin::new(1, 2)));
    }
}

fn render_delete_prompt(f: &mut Frame, area: Rect, prompt: &DeletePrompt) {
    let employee = prompt.employee();
    let action_line = match prompt {
        DeletePrompt::Confirming(_) => Line::from(vec![
            Span::styled(
                "[Y] Yes   ",
                Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            ),
            Span::styled("[N] No", Style::default().fg(Color::Gray)),
        ]),
        DeletePrompt::Deleting(_) => Line::from(Span::styled(
            "Deleting...",
            Style::default().fg(Color::Yellow),
        )),
    };
    let lines = vec![
        Line::from(DELETE_QUESTION),
        Line::from(Span::styled(
            format!("{} ({})", employee.name, employee.employee_id),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        action_line,
    ];
    let popup = centered_rect(56, 8, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title("Delete Employee")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::LightRed)),
            ),
        popup,
    );
}

fn render_details(f: &mut Frame, area: Rect, panel: &DetailsPanel) {
    let lines: Vec<Line> = match panel {
        DetailsPanel::Loading(id) => vec![Line::from(Span::styled(
            format!("Loading employee {}...", id),
            Style::default().fg(Color::Cyan),
        ))],
        DetailsPanel::Ready(details) => details
            .fields()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{:<14}", label), Style::default().fg(Color::Cyan)),
                    Span::styled(value, Style::default().fg(Color::White)),
                ])
            })
            .chain(std::iter::once(Line::from("")))
            .chain(std::iter::once(Line::from(Span::styled(
                "[Esc] Close",
                Style::default().fg(Color::Gray),
            ))))
            .collect(),
    };
    let popup = centered_rect(60, 19, area);
    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .title("Employee Details")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRecord, RecordId};
    use crate::ui::widgets::test_support::screen_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn roster() -> Vec<EmployeeRecord> {
        serde_json::from_str(
            r#"[{"id": 7, "employeeId": "EMP000007", "name": "Mohan Das",
                 "designation": "Supervisor", "district": "Guntur", "status": "INACTIVE"}]"#,
        )
        .unwrap()
    }

    fn draw(view: &EmployeeListView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(130, 30)).unwrap();
        terminal.draw(|f| render_employees(f, view, false)).unwrap();
        screen_text(&terminal)
    }

    #[test]
    fn test_table_and_summary() {
        let mut view = EmployeeListView::new();
        view.apply_load(Ok(roster()));
        let text = draw(&view);
        assert!(text.contains("EMP000007"));
        assert!(text.contains("Total Employees: 1"));
        assert!(text.contains("Inactive"));
    }

    #[test]
    fn test_empty_search_message() {
        let mut view = EmployeeListView::new();
        view.apply_load(Ok(roster()));
        view.set_search("zzz");
        assert!(draw(&view).contains("No employees found matching your search"));
    }

    #[test]
    fn test_delete_prompt_and_details() {
        let mut view = EmployeeListView::new();
        view.apply_load(Ok(roster()));
        view.request_delete();
        assert!(draw(&view).contains(DELETE_QUESTION));

        view.answer_delete(false);
        assert_eq!(view.request_details(), Some(RecordId::from(7)));
        assert!(draw(&view).contains("Loading employee 7"));
    }

    #[test]
    fn test_error_screen() {
        let mut view = EmployeeListView::new();
        view.apply_load(Err("timed out".into()));
        assert!(draw(&view).contains(LOAD_ERROR));
    }
}
