//! Reusable UI components

mod button;
mod dialog;
mod dropdown_list;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_validation_dialog;
pub use dropdown_list::{list_area, render_dropdown_list};
