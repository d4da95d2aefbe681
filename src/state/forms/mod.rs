//! Lead form domain layer
//!
//! Field values, validation, focus and the submission controller. Nothing
//! here knows about the terminal; the `ui` module only reads from it.

mod controller;
mod field;
mod form_state;
mod validation;

pub use controller::{LeadFormController, LeadFormView, SubmitAttempt};
pub use field::{FieldId, FieldKind, LeadFormFields};
pub use form_state::{Form, LeadFormFocus};
pub use validation::ValidationErrorKind;
