//! Submission of finished leads to the form-processing endpoint

mod client;
mod error;
mod traits;

pub use client::FormspreeClient;
pub use error::SubmissionError;
pub use traits::LeadSubmitter;

#[cfg(test)]
pub use traits::MockLeadSubmitter;
