//! Closed-set single-selection widget state
//!
//! The dropdown is a controlled widget: it never stores the selected value.
//! The form passes the current value in when rendering, and the dropdown
//! reports picks through the same [`ChangeEvent`] shape that number inputs
//! use. Its only own state is whether the option list is open.

use super::change::ChangeEvent;
use crate::state::events::{EventHub, Subscription};
use ratatui::layout::{Position, Rect};
use std::cell::Cell;
use std::rc::Rc;

/// One choice in a dropdown. `value` is the identity; `label` is display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn simple(text: &str) -> Self {
        Self::new(text, text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// Screen area the dropdown occupied on the last frame
#[derive(Debug, Default)]
struct Bounds {
    trigger: Cell<Rect>,
    list: Cell<Option<Rect>>,
}

impl Bounds {
    fn contains(&self, position: Position) -> bool {
        self.trigger.get().contains(position)
            || self.list.get().is_some_and(|r| r.contains(position))
    }
}

pub struct Dropdown {
    name: String,
    options: Vec<SelectOption>,
    placeholder: String,
    state: Rc<Cell<DropdownState>>,
    highlighted: usize,
    bounds: Rc<Bounds>,
    subscription: Option<Subscription>,
}

impl Dropdown {
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>, placeholder: &str) -> Self {
        Self {
            name: name.into(),
            options,
            placeholder: placeholder.to_string(),
            state: Rc::new(Cell::new(DropdownState::Closed)),
            highlighted: 0,
            bounds: Rc::new(Bounds::default()),
            subscription: None,
        }
    }

    /// Start listening for clicks outside the widget.
    ///
    /// Calling this while already mounted does nothing, so there is never more
    /// than one listener per dropdown.
    pub fn mount(&mut self, hub: &EventHub) {
        if self.subscription.is_some() {
            return;
        }
        let state = Rc::clone(&self.state);
        let bounds = Rc::clone(&self.bounds);
        self.subscription = Some(hub.on_pointer_down(move |event| {
            if state.get() == DropdownState::Open && !bounds.contains(event.position) {
                state.set(DropdownState::Closed);
            }
        }));
    }

    /// Stop listening. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.state.set(DropdownState::Closed);
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.state.get() == DropdownState::Open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Label for the current value, or the placeholder when unset or unmatched
    pub fn label_for<'a>(&'a self, value: Option<&str>) -> &'a str {
        value
            .filter(|v| !v.is_empty())
            .and_then(|v| self.options.iter().find(|o| o.value == v))
            .map_or(self.placeholder.as_str(), |o| o.label.as_str())
    }

    /// Whether `option` is the current selection (compared by value)
    pub fn is_selected(option: &SelectOption, value: Option<&str>) -> bool {
        value.is_some_and(|v| option.value == v)
    }

    /// Open or close the list. Opening highlights the current selection.
    pub fn toggle(&mut self, value: Option<&str>) {
        match self.state.get() {
            DropdownState::Closed => {
                self.highlighted = value
                    .and_then(|v| self.options.iter().position(|o| o.value == v))
                    .unwrap_or(0);
                self.state.set(DropdownState::Open);
            }
            DropdownState::Open => self.state.set(DropdownState::Closed),
        }
    }

    /// Close without reporting a change
    pub fn close(&mut self) {
        self.state.set(DropdownState::Closed);
    }

    pub fn highlight_next(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.options.len();
        }
    }

    pub fn highlight_prev(&mut self) {
        if !self.options.is_empty() {
            self.highlighted = self
                .highlighted
                .checked_sub(1)
                .unwrap_or(self.options.len() - 1);
        }
    }

    /// Pick the option at `index`.
    ///
    /// Only acts while open. `on_change` runs exactly once, before the list
    /// closes. Returns whether a change was reported.
    pub fn select(&mut self, index: usize, on_change: impl FnOnce(ChangeEvent)) -> bool {
        if !self.is_open() {
            return false;
        }
        let Some(option) = self.options.get(index) else {
            return false;
        };
        on_change(ChangeEvent::new(self.name.clone(), option.value.clone()));
        self.highlighted = index;
        self.state.set(DropdownState::Closed);
        true
    }

    pub fn select_highlighted(&mut self, on_change: impl FnOnce(ChangeEvent)) -> bool {
        self.select(self.highlighted, on_change)
    }

    /// Record where the trigger was drawn
    pub fn set_trigger_area(&self, area: Rect) {
        self.bounds.trigger.set(area);
    }

    /// Record where the open list was drawn (`None` when closed)
    pub fn set_list_area(&self, area: Option<Rect>) {
        self.bounds.list.set(area);
    }

    pub fn trigger_area(&self) -> Rect {
        self.bounds.trigger.get()
    }

    /// Option row under `position` in the open list, if any
    pub fn option_at(&self, position: Position) -> Option<usize> {
        if !self.is_open() {
            return None;
        }
        let list = self.bounds.list.get()?;
        if !list.contains(position) {
            return None;
        }
        // list has a one-cell border
        let row = position.y.checked_sub(list.y + 1)? as usize;
        (row < self.options.len() && position.y < list.bottom().saturating_sub(1)).then_some(row)
    }
}

impl Drop for Dropdown {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl std::fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dropdown")
            .field("name", &self.name)
            .field("state", &self.state.get())
            .field("mounted", &self.is_mounted())
            .finish()
    }
}
