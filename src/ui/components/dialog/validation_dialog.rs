//! Modal shown when a submit is blocked by missing fields

use super::base::{render_dialog, DialogConfig};
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

pub fn render_validation_dialog(frame: &mut Frame, message: &str) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to go back to the form"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "Incomplete application",
            accent: Color::Yellow,
            message,
            hint,
            max_width: 64,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_message_and_hint() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                render_validation_dialog(
                    frame,
                    "Please fill in all fields before submitting. Missing: CIBIL Score",
                )
            })
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Incomplete application"));
        assert!(text.contains("CIBIL Score"));
        assert!(text.contains("to go back to the form"));
    }

    #[test]
    fn test_survives_small_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| render_validation_dialog(frame, "Missing: everything"))
            .unwrap();
    }
}
