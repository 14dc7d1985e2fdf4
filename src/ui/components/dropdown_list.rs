//! Option list of an open dropdown

use crate::state::Dropdown;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Where the list of `option_count` rows goes for a trigger at `trigger`.
///
/// Drops below the trigger when it fits inside `screen`, otherwise opens
/// upward. Always clipped to `screen`.
pub fn list_area(trigger: Rect, option_count: usize, screen: Rect) -> Rect {
    let height = (option_count as u16).saturating_add(2).min(screen.height);
    let y = if trigger.bottom().saturating_add(height) <= screen.bottom() {
        trigger.bottom()
    } else {
        trigger.y.saturating_sub(height).max(screen.y)
    };
    Rect {
        x: trigger.x,
        y,
        width: trigger.width,
        height,
    }
    .intersection(screen)
}

/// Render the options, marking the current value and the highlight
pub fn render_dropdown_list(frame: &mut Frame, area: Rect, dropdown: &Dropdown, value: Option<&str>) {
    let lines: Vec<Line> = dropdown
        .options()
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let marker = if Dropdown::is_selected(option, value) {
                "✓ "
            } else {
                "  "
            };
            let style = if index == dropdown.highlighted() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(option.label.as_str(), style),
            ])
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
