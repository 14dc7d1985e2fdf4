//! Application state and core logic

use crate::platform;
use crate::scoring::ScoringClientTrait;
use crate::state::events::{PointerEvent, Propagation, WheelDirection, WheelEvent, WheelTarget};
use crate::state::{
    ChangeEvent, Completion, EventHub, FieldInput, Form, FormController, HitMap, HitTarget,
    LoanField, LoanFormView, SubmitStatus,
};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Scoring service reachability as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceHealth {
    Checking,
    Online,
    Offline,
}

/// Main application struct
pub struct App {
    /// Form data and the submission lifecycle
    pub controller: FormController,
    /// Input widgets and focus
    pub form_view: LoanFormView,
    /// Global pointer/wheel listeners
    pub hub: EventHub,
    /// Regions recorded by the last draw, for mouse hit-testing
    pub hit_map: RefCell<HitMap>,
    /// First visible line of the result panel
    pub result_scroll: u16,
    pub health: ServiceHealth,
    /// Modal messages, oldest first
    errors: VecDeque<String>,
    health_check: Option<JoinHandle<bool>>,
    quit: bool,
}

impl App {
    /// Create the app with the form mounted
    pub fn new(client: Arc<dyn ScoringClientTrait>) -> Self {
        let hub = EventHub::new();
        let mut form_view = LoanFormView::new();
        form_view.mount(&hub);

        Self {
            controller: FormController::new(client),
            form_view,
            hub,
            hit_map: RefCell::new(HitMap::default()),
            result_scroll: 0,
            health: ServiceHealth::Checking,
            errors: VecDeque::new(),
            health_check: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Queue a message for the modal dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Message currently shown in the modal
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Current value of a categorical field, `None` while unset
    pub fn selected_value(&self, field: LoanField) -> Option<&str> {
        Some(self.controller.form().get(field).as_text()).filter(|v| !v.is_empty())
    }

    /// Ask the scoring service whether it is up. A check already running is
    /// left alone.
    pub fn start_health_check(&mut self) {
        if self.health_check.is_some() {
            return;
        }
        self.health = ServiceHealth::Checking;
        let client = self.controller.client();
        self.health_check = Some(tokio::spawn(async move { client.check_health().await }));
    }

    /// Apply anything that finished in the background since the last frame
    pub async fn tick(&mut self) {
        match self.controller.poll_outcome() {
            Some(Completion::Success) => {
                self.health = ServiceHealth::Online;
                self.result_scroll = 0;
            }
            Some(Completion::Failure { transport: true }) => self.start_health_check(),
            Some(Completion::Failure { transport: false }) | None => {}
        }

        if self
            .health_check
            .as_ref()
            .is_some_and(JoinHandle::is_finished)
        {
            if let Some(handle) = self.health_check.take() {
                self.health = match handle.await {
                    Ok(true) => ServiceHealth::Online,
                    Ok(false) => ServiceHealth::Offline,
                    Err(err) => {
                        tracing::warn!("Health check task failed: {err}");
                        ServiceHealth::Offline
                    }
                };
                tracing::info!(health = ?self.health, "Scoring service health updated");
            }
        }

        self.form_view.sync_from(&self.controller);
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return;
        }

        if platform::is_submit_shortcut(&key) {
            self.submit();
            return;
        }

        if let Some(field) = self.form_view.open_dropdown() {
            if self.handle_open_dropdown_key(field, key) {
                return;
            }
        }

        match key.code {
            KeyCode::Tab => {
                self.form_view.close_dropdowns();
                self.form_view.next_field();
                return;
            }
            KeyCode::BackTab => {
                self.form_view.close_dropdowns();
                self.form_view.prev_field();
                return;
            }
            _ => {}
        }

        match self.form_view.active() {
            None => self.handle_submit_key(key),
            Some(field) if field.is_numeric() => self.handle_number_key(field, key),
            Some(field) => self.handle_dropdown_key(field, key),
        }
    }

    fn handle_submit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
            KeyCode::Up => self.form_view.prev_field(),
            KeyCode::Down => self.form_view.next_field(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_number_key(&mut self, field: LoanField, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.step_number(field, 1.0),
            KeyCode::Down => self.step_number(field, -1.0),
            KeyCode::Enter => self.form_view.next_field(),
            KeyCode::Char(_) | KeyCode::Backspace => self.edit_number(field, key.code),
            _ => {}
        }
    }

    fn edit_number(&mut self, field: LoanField, code: KeyCode) {
        let FieldInput::Number(input) = self.form_view.input(field) else {
            return;
        };
        let proposal = match code {
            KeyCode::Char(c) => input.type_char(c),
            KeyCode::Backspace => input.backspace(),
            _ => None,
        };
        if let Some(event) = proposal {
            self.apply_number_change(field, event);
        }
    }

    /// Keys for a focused dropdown whose list is closed
    fn handle_dropdown_key(&mut self, field: LoanField, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_dropdown(field),
            KeyCode::Up => self.form_view.prev_field(),
            KeyCode::Down => self.form_view.next_field(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Keys for an open option list. Returns false for keys it leaves to the
    /// regular handlers.
    fn handle_open_dropdown_key(&mut self, field: LoanField, key: KeyEvent) -> bool {
        let FieldInput::Select(dropdown) = self.form_view.input_mut(field) else {
            return false;
        };
        match key.code {
            KeyCode::Up => dropdown.highlight_prev(),
            KeyCode::Down => dropdown.highlight_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let controller = &mut self.controller;
                dropdown.select_highlighted(|event| {
                    controller.handle_change(event);
                });
            }
            KeyCode::Esc => dropdown.close(),
            _ => return false,
        }
        true
    }

    fn toggle_dropdown(&mut self, field: LoanField) {
        let value = Some(self.controller.form().get(field).as_text()).filter(|v| !v.is_empty());
        if let FieldInput::Select(dropdown) = self.form_view.input_mut(field) {
            dropdown.toggle(value);
        }
    }

    fn step_number(&mut self, field: LoanField, delta: f64) {
        let current = self.controller.form().get(field).as_number();
        let FieldInput::Number(input) = self.form_view.input(field) else {
            return;
        };
        let event = input.step(current, delta);
        self.apply_number_change(field, event);
    }

    /// Send an edit to the form; the input only shows it once accepted
    fn apply_number_change(&mut self, field: LoanField, event: ChangeEvent) {
        if self.controller.handle_change(event.clone()).is_applied() {
            if let FieldInput::Number(input) = self.form_view.input_mut(field) {
                input.accept(&event);
            }
        }
    }

    fn submit(&mut self) {
        self.form_view.close_dropdowns();
        match self.controller.submit() {
            Ok(SubmitStatus::Submitted(_)) => self.result_scroll = 0,
            Ok(SubmitStatus::AlreadyInFlight) => {}
            Err(err) => self.push_error(err.to_string()),
        }
    }

    /// Handle mouse input
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(position),
            MouseEventKind::ScrollUp => self.handle_wheel(position, WheelDirection::Up),
            MouseEventKind::ScrollDown => self.handle_wheel(position, WheelDirection::Down),
            _ => {}
        }
    }

    fn handle_click(&mut self, position: Position) {
        if self.has_errors() {
            return;
        }

        // Global listeners see the click before the widget under it
        self.hub.dispatch_pointer_down(&PointerEvent { position });

        let target = self.hit_map.borrow().target_at(position);
        match target {
            Some(HitTarget::Field(field)) => {
                self.form_view.set_active_field(field.index());
                if !field.is_numeric() {
                    self.toggle_dropdown(field);
                }
            }
            Some(HitTarget::DropdownList(field)) => {
                if let FieldInput::Select(dropdown) = self.form_view.input_mut(field) {
                    if let Some(index) = dropdown.option_at(position) {
                        let controller = &mut self.controller;
                        dropdown.select(index, |event| {
                            controller.handle_change(event);
                        });
                    }
                }
            }
            Some(HitTarget::SubmitButton) => {
                self.form_view.set_active_field(LoanFormView::SUBMIT_INDEX);
                self.submit();
            }
            Some(HitTarget::ResultPanel) | None => {}
        }
    }

    fn handle_wheel(&mut self, position: Position, direction: WheelDirection) {
        let hit = self.hit_map.borrow().target_at(position);
        let target = match hit {
            Some(HitTarget::Field(field)) if field.is_numeric() => {
                WheelTarget::NumberInput(field.index())
            }
            _ => WheelTarget::Other,
        };

        let event = WheelEvent {
            position,
            direction,
            target,
        };
        if self.hub.dispatch_wheel(&event) == Propagation::PreventDefault {
            return;
        }

        // Default actions
        let delta = match direction {
            WheelDirection::Up => 1.0,
            WheelDirection::Down => -1.0,
        };
        match hit {
            Some(HitTarget::Field(field))
                if field.is_numeric() && self.form_view.active() == Some(field) =>
            {
                self.step_number(field, delta);
            }
            Some(HitTarget::DropdownList(field)) => {
                if let FieldInput::Select(dropdown) = self.form_view.input_mut(field) {
                    match direction {
                        WheelDirection::Up => dropdown.highlight_prev(),
                        WheelDirection::Down => dropdown.highlight_next(),
                    }
                }
            }
            Some(HitTarget::ResultPanel) => match direction {
                WheelDirection::Up => self.result_scroll = self.result_scroll.saturating_sub(1),
                WheelDirection::Down => self.result_scroll = self.result_scroll.saturating_add(1),
            },
            _ => {}
        }
    }
}
