//! Step controller for one form session

use super::lead::LeadData;
use super::step::Step;
use super::validation::{validate_step, ValidationError};
use crate::submit::SubmissionError;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Result of a successful `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the given step
    Moved(Step),
    /// Already on the last step; submission is the next action
    AtLastStep,
    /// The session was already submitted
    Finished,
}

/// Why a submission could not be dispatched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("form already submitted")]
    AlreadySubmitted,
    #[error("submission is only available on the last step")]
    NotOnFinalStep,
    #[error("a submission is already in flight")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// One prospect's pass through the form.
///
/// Owns the answers, the current step, the terminal `submitted` flag and the
/// in-flight guard for the outbound POST.
#[derive(Debug, Clone)]
pub struct IntakeSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    lead: LeadData,
    step: Step,
    submitted: bool,
    submitting: bool,
}

impl Default for IntakeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl IntakeSession {
    pub fn new() -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            lead: LeadData::new(),
            step: Step::Identity,
            submitted: false,
            submitting: false,
        };
        tracing::info!(session = %session.id, "Form session started");
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn lead(&self) -> &LeadData {
        &self.lead
    }

    /// Mutable access for the field setters; validation is deferred to the guards
    pub fn lead_mut(&mut self) -> &mut LeadData {
        &mut self.lead
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Move forward one step if the current step's required fields are filled
    pub fn advance(&mut self) -> Result<AdvanceOutcome, ValidationError> {
        if self.submitted {
            return Ok(AdvanceOutcome::Finished);
        }
        let Some(next) = self.step.next() else {
            return Ok(AdvanceOutcome::AtLastStep);
        };

        if let Err(err) = validate_step(&self.lead, self.step) {
            tracing::info!(
                session = %self.id,
                step = self.step.number(),
                missing = ?err.missing,
                "Advance blocked"
            );
            return Err(err);
        }

        tracing::debug!(session = %self.id, from = self.step.number(), to = next.number(), "Advance");
        self.step = next;
        Ok(AdvanceOutcome::Moved(next))
    }

    /// Move back one step. Returns the new step, or `None` when nothing moved.
    pub fn retreat(&mut self) -> Option<Step> {
        if self.submitted {
            return None;
        }
        let prev = self.step.prev()?;
        tracing::debug!(session = %self.id, from = self.step.number(), to = prev.number(), "Retreat");
        self.step = prev;
        Some(prev)
    }

    /// Claim the in-flight slot and return the payload to send
    pub fn begin_submission(&mut self) -> Result<LeadData, SubmitRejected> {
        if self.submitted {
            return Err(SubmitRejected::AlreadySubmitted);
        }
        if !self.step.is_last() {
            return Err(SubmitRejected::NotOnFinalStep);
        }
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        validate_step(&self.lead, self.step)?;

        self.submitting = true;
        tracing::info!(session = %self.id, pains = self.lead.pains().len(), "Submitting lead");
        Ok(self.lead.clone())
    }

    /// Record the outcome of the POST. The in-flight flag clears on every path.
    pub fn finish_submission(&mut self, result: Result<(), SubmissionError>) -> Result<(), SubmissionError> {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.submitted = true;
                let elapsed = Utc::now().signed_duration_since(self.started_at);
                tracing::info!(
                    session = %self.id,
                    elapsed_secs = elapsed.num_seconds(),
                    "Lead submitted"
                );
                Ok(())
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "Lead submission failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::lead::{Moment, PAIN_CATALOGUE};
    use crate::state::validation::RequiredField;
    use pretty_assertions::assert_eq;

    fn fill_identity(session: &mut IntakeSession) {
        let lead = session.lead_mut();
        lead.set_name("Ana");
        lead.set_business_name("Ana Studio");
        lead.set_contact("ana@x.com");
    }

    fn session_at_vision() -> IntakeSession {
        let mut session = IntakeSession::new();
        fill_identity(&mut session);
        session.advance().unwrap();
        session.lead_mut().set_moment(Some(Moment::Reforma));
        session.advance().unwrap();
        assert_eq!(session.step(), Step::Vision);
        session
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_fresh_session() {
            let session = IntakeSession::new();
            assert_eq!(session.step(), Step::Identity);
            assert!(!session.is_submitted());
            assert!(!session.is_submitting());
        }

        #[test]
        fn test_identity_filled_advances_to_business() {
            let mut session = IntakeSession::new();
            fill_identity(&mut session);
            assert_eq!(session.advance(), Ok(AdvanceOutcome::Moved(Step::Business)));
            assert_eq!(session.step(), Step::Business);
        }

        #[test]
        fn test_blank_business_name_blocks() {
            let mut session = IntakeSession::new();
            fill_identity(&mut session);
            session.lead_mut().set_business_name("   ");
            let err = session.advance().unwrap_err();
            assert_eq!(err.missing, vec![RequiredField::BusinessName]);
            assert_eq!(session.step(), Step::Identity);
        }

        #[test]
        fn test_business_with_moment_and_pain_advances() {
            let mut session = IntakeSession::new();
            fill_identity(&mut session);
            session.advance().unwrap();

            session.lead_mut().set_moment(Some(Moment::Zero));
            session.lead_mut().toggle_pain("Meu site é lento ou amador");
            assert_eq!(session.advance(), Ok(AdvanceOutcome::Moved(Step::Vision)));
            assert_eq!(session.lead().pains(), &["Meu site é lento ou amador"]);
        }

        #[test]
        fn test_business_without_moment_blocks_even_with_pains() {
            let mut session = IntakeSession::new();
            fill_identity(&mut session);
            session.advance().unwrap();
            for pain in PAIN_CATALOGUE {
                session.lead_mut().toggle_pain(pain);
            }
            assert!(session.advance().is_err());
            assert_eq!(session.step(), Step::Business);
        }

        #[test]
        fn test_advance_never_passes_last_step() {
            let mut session = session_at_vision();
            assert_eq!(session.advance(), Ok(AdvanceOutcome::AtLastStep));
            assert_eq!(session.step(), Step::Vision);
            assert!(!session.is_submitted());
        }

        #[test]
        fn test_retreat_is_noop_on_first_step() {
            let mut session = IntakeSession::new();
            assert_eq!(session.retreat(), None);
            assert_eq!(session.step(), Step::Identity);
        }

        #[test]
        fn test_retreat_is_unconditional() {
            let mut session = session_at_vision();
            session.lead_mut().set_moment(None);
            assert_eq!(session.retreat(), Some(Step::Business));
            assert_eq!(session.retreat(), Some(Step::Identity));
            assert_eq!(session.lead().name(), "Ana");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejected_before_last_step() {
            let mut session = IntakeSession::new();
            assert_eq!(
                session.begin_submission(),
                Err(SubmitRejected::NotOnFinalStep)
            );
            assert!(!session.is_submitting());
        }

        #[test]
        fn test_rejected_when_goal_blank() {
            let mut session = session_at_vision();
            session.lead_mut().set_success_goal(" ");
            let err = session.begin_submission().unwrap_err();
            assert!(matches!(err, SubmitRejected::Invalid(ref v) if v.step == Step::Vision));
            assert!(!session.is_submitting());
        }

        #[test]
        fn test_in_flight_blocks_second_dispatch() {
            let mut session = session_at_vision();
            session.lead_mut().set_success_goal("agenda cheia");
            let payload = session.begin_submission().unwrap();
            assert_eq!(payload.success_goal(), "agenda cheia");
            assert!(session.is_submitting());
            assert_eq!(session.begin_submission(), Err(SubmitRejected::InFlight));
        }

        #[test]
        fn test_success_marks_submitted() {
            let mut session = session_at_vision();
            session.lead_mut().set_success_goal("agenda cheia");
            session.begin_submission().unwrap();
            assert!(session.finish_submission(Ok(())).is_ok());
            assert!(session.is_submitted());
            assert!(!session.is_submitting());
            assert_eq!(
                session.begin_submission(),
                Err(SubmitRejected::AlreadySubmitted)
            );
            assert_eq!(session.advance(), Ok(AdvanceOutcome::Finished));
            assert_eq!(session.retreat(), None);
        }

        #[test]
        fn test_failure_keeps_step_and_data() {
            let mut session = session_at_vision();
            session.lead_mut().set_success_goal("agenda cheia");
            session.lead_mut().set_brand_vibe("bistrô premium");
            let before = session.lead().clone();

            session.begin_submission().unwrap();
            let result = session.finish_submission(Err(SubmissionError::Interrupted));
            assert!(result.is_err());
            assert_eq!(session.step(), Step::Vision);
            assert!(!session.is_submitted());
            assert!(!session.is_submitting());
            assert_eq!(session.lead(), &before);

            // retry with the same data is allowed
            assert!(session.begin_submission().is_ok());
        }
    }
}
