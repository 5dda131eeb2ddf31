//! Form rendering module
//!
//! - `field_renderer`: text inputs
//! - `choices`: moment radio group and pains checklist
//! - `step_page`: one step screen with its action row

mod choices;
mod field_renderer;
mod step_page;

pub use step_page::{draw, target_rows};
