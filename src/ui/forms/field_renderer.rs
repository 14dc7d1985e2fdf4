//! Field rendering utilities for forms

use crate::state::LoanField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Field height in rows (top border + value + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Title shown in the field border, with the expected range if there is one
pub fn field_title(field: LoanField) -> String {
    match field.hint() {
        Some(hint) => format!(" {} ({hint}) ", field.label()),
        None => format!(" {} ", field.label()),
    }
}

/// Draw a numeric field showing the text as typed
pub fn draw_number_field(
    frame: &mut Frame,
    area: Rect,
    field: LoanField,
    text: &str,
    is_active: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let (display, style) = if text.is_empty() && !is_active {
        ("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        (text, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style(is_active));

    frame.render_widget(content.block(block), area);
}

/// Draw a dropdown trigger showing the chosen label or the placeholder
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: LoanField,
    label: &str,
    has_value: bool,
    is_active: bool,
    is_open: bool,
) {
    let label_style = if has_value {
        Style::default().fg(if is_active { Color::Cyan } else { Color::White })
    } else {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    };
    let arrow = if is_open { " ▴" } else { " ▾" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(label, label_style),
        Span::styled(arrow, border_style(is_active)),
    ]));

    let block = Block::default()
        .title(field_title(field))
        .borders(Borders::ALL)
        .border_style(border_style(is_active || is_open));

    frame.render_widget(content.block(block), area);
}
