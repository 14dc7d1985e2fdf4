//! Form rendering module
//!
//! - `field_renderer`: number and dropdown field boxes
//! - `loan_form`: the loan application form

mod field_renderer;
mod loan_form;

pub use loan_form::draw as draw_loan_form;
