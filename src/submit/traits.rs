//! Trait abstraction for the form endpoint to enable mocking in tests

use super::error::SubmissionError;
use crate::state::LeadData;
use async_trait::async_trait;

/// Sends a finished lead to the form-processing service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// POST the lead once. No retry.
    async fn submit(&self, lead: &LeadData) -> Result<(), SubmissionError>;
}
