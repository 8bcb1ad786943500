//! Form rendering module
//!
//! - `field_renderer`: a bordered input with its inline error line
//! - `signup_form`: the sign-up form with its submit button

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup_form;
