//! Submission failures

use reqwest::StatusCode;
use thiserror::Error;

/// Message shown to the prospect for any failed submission
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Houve um erro no envio. Verifique sua conexão ou tente novamente.";

/// The outbound POST did not succeed
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Network-level failure (DNS, connect, timeout, TLS)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered outside the 2xx range
    #[error("endpoint returned {0}")]
    Status(StatusCode),

    /// The submission task ended without reporting a result
    #[error("submission task ended unexpectedly")]
    Interrupted,
}

impl SubmissionError {
    pub fn user_message(&self) -> &'static str {
        SUBMISSION_FAILED_MESSAGE
    }
}
