//! Decision panel

use crate::app::App;
use crate::state::{Decision, DriverCategory, HitTarget, SubmissionResult};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    app.hit_map
        .borrow_mut()
        .record(area, HitTarget::ResultPanel);

    let result = app.controller.result();
    let border_color = match result {
        SubmissionResult::Success(decision) if decision.view().approved => Color::Green,
        SubmissionResult::Success(_) | SubmissionResult::Failure(_) => Color::Red,
        SubmissionResult::Loading => Color::Yellow,
        SubmissionResult::Idle => Color::DarkGray,
    };
    let block = Block::default()
        .title(" Decision ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let lines = result_lines(result);
    let max_scroll = (lines.len() as u16).saturating_sub(1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll.min(max_scroll), 0));

    frame.render_widget(paragraph, area);
}

fn result_lines(result: &SubmissionResult) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::DarkGray);
    match result {
        SubmissionResult::Idle => vec![
            Line::from(Span::styled("No decision yet.", muted)),
            Line::from(""),
            Line::from(Span::styled(
                "Fill in every field, then submit to score the application.",
                muted,
            )),
        ],
        SubmissionResult::Loading => vec![Line::from(Span::styled(
            "Scoring application…",
            Style::default().fg(Color::Yellow),
        ))],
        SubmissionResult::Success(decision) => decision_lines(decision),
        SubmissionResult::Failure(message) => vec![
            Line::from(Span::styled(
                "Request failed",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(message.clone()),
            Line::from(""),
            Line::from(Span::styled(
                "Your entries are unchanged. Submit again when ready.",
                muted,
            )),
        ],
    }
}

fn decision_lines(decision: &Decision) -> Vec<Line<'static>> {
    let view = decision.view();
    let decision_color = if view.approved {
        Color::Green
    } else {
        Color::Red
    };

    let mut lines = vec![Line::from(vec![
        Span::raw("Decision: "),
        Span::styled(
            view.decision_label,
            Style::default()
                .fg(decision_color)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    if let Some(probability) = view.probability_label {
        lines.push(Line::from(format!("Approval probability: {probability}")));
    }

    if !view.drivers.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Top drivers",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        for driver in view.drivers {
            let (marker, color) = match driver.category {
                DriverCategory::Risk => ("▼", Color::Red),
                DriverCategory::Strength => ("▲", Color::Green),
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {marker} "), Style::default().fg(color)),
                Span::raw(driver.feature),
                Span::styled(
                    format!("  {:+.2}  ", driver.score),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(driver.category.label(), Style::default().fg(color)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Scored at {}", decision.decided_at.format("%H:%M:%S")),
        Style::default().fg(Color::DarkGray),
    )));
    lines
}
