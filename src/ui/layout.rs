//! Layout components (header, panels, status bar)

use crate::app::{App, ServiceHealth};
use crate::platform::SUBMIT_SHORTCUT;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub form: Rect,
    pub result: Rect,
    pub status: Rect,
}

/// Split the screen into header, form (left), result (right) and status bar
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Panels
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Form
            Constraint::Percentage(40), // Result
        ])
        .split(rows[1]);

    AppLayout {
        header: rows[0],
        form: panels[0],
        result: panels[1],
        status: rows[2],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Loan Approval ",
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let form = app.controller.form();
    let progress = if form.is_complete() {
        Span::styled(" all fields filled", Style::default().fg(Color::Green))
    } else {
        Span::styled(
            format!(" {} field(s) to go", form.missing_fields().len()),
            Style::default().fg(Color::DarkGray),
        )
    };
    spans.push(progress);

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Service status
    let health = match app.health {
        ServiceHealth::Online => Span::styled(" ● online ", Style::default().fg(Color::Green)),
        ServiceHealth::Offline => Span::styled(" ○ offline ", Style::default().fg(Color::Red)),
        ServiceHealth::Checking => {
            Span::styled(" ◌ checking ", Style::default().fg(Color::Yellow))
        }
    };
    spans.push(health);

    spans.push(Span::styled(
        get_focus_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.right().saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Key help for whatever has focus
fn get_focus_hints(app: &App) -> String {
    if app.form_view.open_dropdown().is_some() {
        return "↑↓:choose  Enter:select  Esc:close".to_string();
    }
    match app.form_view.active() {
        Some(field) if field.is_numeric() => {
            format!("0-9:type  ↑↓:step  Tab:next  {SUBMIT_SHORTCUT}:submit")
        }
        Some(_) => format!("Enter:open  Tab:next  {SUBMIT_SHORTCUT}:submit  q:quit"),
        None => "Enter:submit  Tab:next  q:quit".to_string(),
    }
}
