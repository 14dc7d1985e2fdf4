//! Form domain layer
//!
//! Everything behind the loan form: field values, change normalization,
//! validation, the dropdown and number-input widgets, and the controller that
//! submits to the scoring service.

mod change;
mod controller;
mod dropdown;
mod field;
mod form_state;
mod form_view;
mod number_input;
mod wheel_guard;

pub use change::ChangeEvent;
pub use controller::{Completion, FormController, SubmitStatus};
pub use dropdown::Dropdown;
pub use field::{FieldValue, LoanField};
pub use form_state::Form;
pub use form_view::{FieldInput, LoanFormView};
