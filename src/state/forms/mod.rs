//! Form domain layer
//!
//! Field value objects, the validation schema and the sign-up form
//! controller that ties them together.

mod field;
mod form_state;
mod schema;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, SignupForm, SubmitOutcome, SubmitPhase};
#[cfg(test)]
pub use schema::FieldName;
