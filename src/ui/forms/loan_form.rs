//! Loan application form rendering

use super::field_renderer::{draw_number_field, draw_select_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Dropdown, FieldInput, HitTarget, LoanField};
use crate::ui::components::{list_area, render_button, render_dropdown_list, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Fields per row
const COLUMNS: usize = 2;
const ROWS: usize = LoanField::COUNT.div_ceil(COLUMNS);
const SUBMIT_WIDTH: u16 = 24;

/// Draw the form fields, the Submit button, and any open option list
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); ROWS];
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row_index, fields) in LoanField::ALL.chunks(COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(rows[row_index]);
        for (field, cell) in fields.iter().zip(cells.iter()) {
            draw_field(frame, *cell, *field, app);
        }
    }

    draw_submit(frame, rows[ROWS], app);

    // Lists overlay the fields below them, so they go last
    for (field, dropdown) in app.form_view.dropdowns() {
        if dropdown.is_open() {
            draw_open_list(frame, field, dropdown, app);
        } else {
            dropdown.set_list_area(None);
        }
    }
}

fn draw_field(frame: &mut Frame, area: Rect, field: LoanField, app: &App) {
    let is_active = app.form_view.active() == Some(field);
    match app.form_view.input(field) {
        FieldInput::Number(input) => {
            draw_number_field(frame, area, field, input.text(), is_active);
        }
        FieldInput::Select(dropdown) => {
            let value = app.selected_value(field);
            dropdown.set_trigger_area(area);
            draw_select_field(
                frame,
                area,
                field,
                dropdown.label_for(value),
                value.is_some(),
                is_active,
                dropdown.is_open(),
            );
        }
    }
    app.hit_map
        .borrow_mut()
        .record(area, HitTarget::Field(field));
}

fn draw_submit(frame: &mut Frame, row: Rect, app: &App) {
    let area = Rect {
        width: SUBMIT_WIDTH.min(row.width),
        ..row
    };
    let is_loading = app.controller.is_loading();
    let content = if is_loading {
        "Scoring…"
    } else {
        "Submit application"
    };
    render_button(
        frame,
        area,
        content,
        app.form_view.is_submit_active(),
        !is_loading,
    );
    app.hit_map
        .borrow_mut()
        .record(area, HitTarget::SubmitButton);
}

fn draw_open_list(frame: &mut Frame, field: LoanField, dropdown: &Dropdown, app: &App) {
    let area = list_area(
        dropdown.trigger_area(),
        dropdown.options().len(),
        frame.area(),
    );
    render_dropdown_list(frame, area, dropdown, app.selected_value(field));
    dropdown.set_list_area(Some(area));
    app.hit_map
        .borrow_mut()
        .record(area, HitTarget::DropdownList(field));
}
