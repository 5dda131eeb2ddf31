//! Form domain layer
//!
//! Focus handling and field metadata for the three step screens.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{FocusTarget, Form, FormButton, StepForm, OPTION_COUNT};
