//! On-screen arrangement of the loan form
//!
//! Holds one input widget per field, in field order, followed by the Submit
//! button. Focus moves through them with Tab/BackTab.

use super::controller::FormController;
use super::dropdown::{Dropdown, SelectOption};
use super::field::LoanField;
use super::form_state::Form;
use super::number_input::NumberInput;
use super::wheel_guard::WheelGuard;
use crate::state::events::EventHub;

/// The widget behind one field
#[derive(Debug)]
pub enum FieldInput {
    Number(NumberInput),
    Select(Dropdown),
}

impl FieldInput {
    fn for_field(field: LoanField) -> Self {
        match field {
            LoanField::Education => FieldInput::Select(Dropdown::new(
                field.name(),
                vec![
                    SelectOption::simple("Graduate"),
                    SelectOption::simple("Not Graduate"),
                ],
                "Select education",
            )),
            LoanField::SelfEmployed => FieldInput::Select(Dropdown::new(
                field.name(),
                vec![SelectOption::simple("Yes"), SelectOption::simple("No")],
                "Select status",
            )),
            _ => FieldInput::Number(NumberInput::new(field)),
        }
    }
}

#[derive(Debug)]
pub struct LoanFormView {
    inputs: Vec<FieldInput>,
    pub active_field_index: usize,
    wheel_guard: Option<WheelGuard>,
}

impl LoanFormView {
    /// Index of the Submit button in the focus order
    pub const SUBMIT_INDEX: usize = LoanField::COUNT;

    pub fn new() -> Self {
        Self {
            inputs: LoanField::ALL.into_iter().map(FieldInput::for_field).collect(),
            active_field_index: 0,
            wheel_guard: None,
        }
    }

    /// Attach the dropdowns' outside-click listeners and the wheel guard
    pub fn mount(&mut self, hub: &EventHub) {
        for dropdown in self.dropdowns_mut() {
            dropdown.mount(hub);
        }
        if self.wheel_guard.is_none() {
            self.wheel_guard = Some(WheelGuard::mount(hub));
        }
    }

    pub fn unmount(&mut self) {
        for dropdown in self.dropdowns_mut() {
            dropdown.unmount();
        }
        self.wheel_guard = None;
    }

    pub fn input(&self, field: LoanField) -> &FieldInput {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: LoanField) -> &mut FieldInput {
        &mut self.inputs[field.index()]
    }

    /// Field under focus, or `None` when the Submit button has it
    pub fn active(&self) -> Option<LoanField> {
        LoanField::ALL.get(self.active_field_index).copied()
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    pub fn dropdowns(&self) -> impl Iterator<Item = (LoanField, &Dropdown)> + '_ {
        LoanField::ALL
            .into_iter()
            .zip(self.inputs.iter())
            .filter_map(|(field, input)| match input {
                FieldInput::Select(d) => Some((field, d)),
                FieldInput::Number(_) => None,
            })
    }

    fn dropdowns_mut(&mut self) -> impl Iterator<Item = &mut Dropdown> + '_ {
        self.inputs.iter_mut().filter_map(|input| match input {
            FieldInput::Select(d) => Some(d),
            FieldInput::Number(_) => None,
        })
    }

    /// Close any open option list without reporting a change
    pub fn close_dropdowns(&mut self) {
        for dropdown in self.dropdowns_mut() {
            dropdown.close();
        }
    }

    /// Move focus to `field`, closing any list left open elsewhere
    pub fn focus(&mut self, field: LoanField) {
        self.close_dropdowns();
        self.active_field_index = field.index();
    }

    /// The dropdown whose list is showing, if any
    pub fn open_dropdown(&self) -> Option<LoanField> {
        self.dropdowns()
            .find(|(_, d)| d.is_open())
            .map(|(field, _)| field)
    }

    /// Bring every number input's text in line with the stored values
    pub fn sync_from(&mut self, controller: &FormController) {
        for (field, input) in LoanField::ALL.into_iter().zip(self.inputs.iter_mut()) {
            if let FieldInput::Number(n) = input {
                n.sync(controller.form().get(field));
            }
        }
    }
}

impl Default for LoanFormView {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LoanFormView {
    fn field_count(&self) -> usize {
        LoanField::COUNT + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}

impl Drop for LoanFormView {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_input_per_field() {
        let view = LoanFormView::new();
        for field in LoanField::ALL {
            match (field.is_numeric(), view.input(field)) {
                (true, FieldInput::Number(n)) => assert_eq!(n.step(None, 1.0).name, field.name()),
                (false, FieldInput::Select(d)) => assert_eq!(d.name(), field.name()),
                _ => panic!("wrong widget for {}", field.name()),
            }
        }
    }

    #[test]
    fn test_dropdown_options() {
        let view = LoanFormView::new();
        let values: Vec<Vec<&str>> = view
            .dropdowns()
            .map(|(_, d)| d.options().iter().map(|o| o.value.as_str()).collect())
            .collect();
        assert_eq!(values, vec![vec!["Graduate", "Not Graduate"], vec!["Yes", "No"]]);
    }

    #[test]
    fn test_field_count_includes_submit() {
        let view = LoanFormView::new();
        assert_eq!(view.field_count(), 12);
    }

    #[test]
    fn test_next_field_wraps_after_submit() {
        let mut view = LoanFormView::new();
        view.set_active_field(LoanFormView::SUBMIT_INDEX);
        assert!(view.is_submit_active());
        assert_eq!(view.active(), None);
        view.next_field();
        assert_eq!(view.active(), Some(LoanField::NoOfDependents));
    }

    #[test]
    fn test_prev_field_wraps_to_submit() {
        let mut view = LoanFormView::new();
        view.prev_field();
        assert!(view.is_submit_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut view = LoanFormView::new();
        view.set_active_field(100);
        assert_eq!(view.active_field_index, LoanFormView::SUBMIT_INDEX);
    }

    #[test]
    fn test_mount_registers_two_dropdowns_and_guard() {
        let hub = EventHub::new();
        let mut view = LoanFormView::new();
        view.mount(&hub);
        view.mount(&hub);
        assert_eq!(hub.pointer_listener_count(), 2);
        assert_eq!(hub.wheel_listener_count(), 1);

        view.unmount();
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_drop_unmounts() {
        let hub = EventHub::new();
        for _ in 0..10 {
            let mut view = LoanFormView::new();
            view.mount(&hub);
        }
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_open_dropdown() {
        let mut view = LoanFormView::new();
        assert_eq!(view.open_dropdown(), None);
        if let FieldInput::Select(d) = view.input_mut(LoanField::SelfEmployed) {
            d.toggle(None);
        }
        assert_eq!(view.open_dropdown(), Some(LoanField::SelfEmployed));
    }

    #[test]
    fn test_focus_closes_open_list() {
        let mut view = LoanFormView::new();
        if let FieldInput::Select(d) = view.input_mut(LoanField::Education) {
            d.toggle(None);
        }
        view.focus(LoanField::CibilScore);
        assert_eq!(view.open_dropdown(), None);
        assert_eq!(view.active(), Some(LoanField::CibilScore));
    }
}
