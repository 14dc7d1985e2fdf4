//! Dialog components for TUI

mod base;
mod validation_dialog;

pub use validation_dialog::render_validation_dialog;
