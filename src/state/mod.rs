//! Application state module

mod app_state;
mod forms;
mod lead;
mod session;
mod splash_state;
mod step;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use lead::*;
pub use session::*;
pub use splash_state::*;
pub use step::*;
pub use validation::*;
