//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_panel;

use crate::app::App;
use components::render_validation_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    // Regions from the previous frame are stale once we start drawing
    app.hit_map.borrow_mut().clear();

    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    result_panel::draw(frame, areas.result, app);
    forms::draw_loan_form(frame, areas.form, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Modal goes on top of everything
    if let Some(message) = app.current_error() {
        render_validation_dialog(frame, message);
    }
}
