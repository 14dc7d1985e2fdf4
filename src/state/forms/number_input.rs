//! Editable text buffer behind a numeric field
//!
//! The form stores parsed numbers, but a half-typed value like `"12."` still
//! has to be shown as typed. The input keeps that text and proposes every
//! edit as a [`ChangeEvent`]; it only adopts the new text once the form has
//! accepted the change.

use super::change::ChangeEvent;
use super::field::{format_number, FieldValue, LoanField};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberInput {
    field: LoanField,
    buffer: String,
}

impl NumberInput {
    pub fn new(field: LoanField) -> Self {
        Self {
            field,
            buffer: String::new(),
        }
    }

    /// Text shown in the input
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Proposed change for typing `c`. Characters a number can't contain are
    /// dropped here.
    pub fn type_char(&self, c: char) -> Option<ChangeEvent> {
        if !(c.is_ascii_digit() || c == '.' || c == '-') {
            return None;
        }
        let mut candidate = self.buffer.clone();
        candidate.push(c);
        Some(self.event(candidate))
    }

    /// Proposed change for deleting the last character
    pub fn backspace(&self) -> Option<ChangeEvent> {
        if self.buffer.is_empty() {
            return None;
        }
        let mut candidate = self.buffer.clone();
        candidate.pop();
        Some(self.event(candidate))
    }

    /// Proposed change for an arrow-key step from `current`
    pub fn step(&self, current: Option<f64>, delta: f64) -> ChangeEvent {
        self.event(format_number(current.unwrap_or(0.0) + delta))
    }

    /// Adopt the text of a change the form accepted
    pub fn accept(&mut self, event: &ChangeEvent) {
        self.buffer.clone_from(&event.value);
    }

    /// Re-derive the text from the stored value unless it already shows it
    pub fn sync(&mut self, value: &FieldValue) {
        let shown = self.buffer.trim().parse::<f64>().ok();
        if shown != value.as_number() {
            self.buffer = value.display_value();
        }
    }

    fn event(&self, value: String) -> ChangeEvent {
        ChangeEvent::new(self.field.name(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(NumberInput::new(LoanField::LoanAmount).text(), "");
    }

    #[test]
    fn test_type_char_proposes_appended_text() {
        let mut input = NumberInput::new(LoanField::LoanAmount);
        let event = input.type_char('4').unwrap();
        assert_eq!(event, ChangeEvent::new("loan_amount", "4"));
        input.accept(&event);
        let event = input.type_char('2').unwrap();
        assert_eq!(event.value, "42");
    }

    #[test]
    fn test_type_char_ignores_letters() {
        let input = NumberInput::new(LoanField::LoanAmount);
        assert!(input.type_char('x').is_none());
        assert!(input.type_char(' ').is_none());
    }

    #[test]
    fn test_proposal_does_not_change_text() {
        let input = NumberInput::new(LoanField::LoanAmount);
        let _ = input.type_char('-');
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut input = NumberInput::new(LoanField::LoanTerm);
        assert!(input.backspace().is_none());
        input.accept(&ChangeEvent::new("loan_term", "12"));
        assert_eq!(input.backspace().unwrap().value, "1");
    }

    #[test]
    fn test_step_from_unset_starts_at_zero() {
        let input = NumberInput::new(LoanField::NoOfDependents);
        assert_eq!(input.step(None, 1.0).value, "1");
        assert_eq!(input.step(Some(0.0), -1.0).value, "-1");
    }

    #[test]
    fn test_sync_keeps_partial_text() {
        let mut input = NumberInput::new(LoanField::LoanTerm);
        input.accept(&ChangeEvent::new("loan_term", "12."));
        input.sync(&FieldValue::Number(Some(12.0)));
        assert_eq!(input.text(), "12.");
    }

    #[test]
    fn test_sync_replaces_stale_text() {
        let mut input = NumberInput::new(LoanField::LoanTerm);
        input.accept(&ChangeEvent::new("loan_term", "12"));
        input.sync(&FieldValue::Number(None));
        assert_eq!(input.text(), "");
        input.sync(&FieldValue::Number(Some(7.0)));
        assert_eq!(input.text(), "7");
    }
}
