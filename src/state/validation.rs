//! Guard predicates for step transitions

use super::lead::{is_blank, LeadData};
use super::step::Step;
use std::fmt;
use thiserror::Error;

/// A field that must be answered before leaving its step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    Name,
    BusinessName,
    Contact,
    Moment,
    SuccessGoal,
}

impl RequiredField {
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BusinessName => "businessName",
            Self::Contact => "contact",
            Self::Moment => "moment",
            Self::SuccessGoal => "successGoal",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Required answers are missing on `step`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", user_message(.step))]
pub struct ValidationError {
    pub step: Step,
    pub missing: Vec<RequiredField>,
}

fn user_message(step: &Step) -> &'static str {
    match step {
        Step::Identity => "Por favor, preencha todos os campos desta etapa.",
        Step::Business => "Selecione como está seu momento atual.",
        Step::Vision => "Conte pra gente o que seria sucesso daqui a 1 ano.",
    }
}

/// Check the fields that gate leaving `step`.
///
/// Step 2 only requires `moment`; pains are optional.
pub fn validate_step(lead: &LeadData, step: Step) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    match step {
        Step::Identity => {
            if is_blank(lead.name()) {
                missing.push(RequiredField::Name);
            }
            if is_blank(lead.business_name()) {
                missing.push(RequiredField::BusinessName);
            }
            if is_blank(lead.contact()) {
                missing.push(RequiredField::Contact);
            }
        }
        Step::Business => {
            if lead.moment().is_none() {
                missing.push(RequiredField::Moment);
            }
        }
        Step::Vision => {
            if is_blank(lead.success_goal()) {
                missing.push(RequiredField::SuccessGoal);
            }
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { step, missing })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::lead::{Moment, PAIN_CATALOGUE};

    fn identity(name: &str, business: &str, contact: &str) -> LeadData {
        let mut lead = LeadData::new();
        lead.set_name(name);
        lead.set_business_name(business);
        lead.set_contact(contact);
        lead
    }

    #[test]
    fn test_identity_passes_iff_all_present() {
        let values = ["", "  ", "x"];
        for name in values {
            for business in values {
                for contact in values {
                    let lead = identity(name, business, contact);
                    let expected = !is_blank(name) && !is_blank(business) && !is_blank(contact);
                    assert_eq!(
                        validate_step(&lead, Step::Identity).is_ok(),
                        expected,
                        "name={name:?} business={business:?} contact={contact:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_identity_lists_missing_fields() {
        let lead = identity("Ana", "", " ");
        let err = validate_step(&lead, Step::Identity).unwrap_err();
        assert_eq!(err.step, Step::Identity);
        assert_eq!(
            err.missing,
            vec![RequiredField::BusinessName, RequiredField::Contact]
        );
    }

    #[test]
    fn test_business_requires_only_moment() {
        let mut lead = LeadData::new();
        assert!(validate_step(&lead, Step::Business).is_err());

        lead.toggle_pain(PAIN_CATALOGUE[0]);
        lead.set_other_pains("muita coisa");
        assert!(validate_step(&lead, Step::Business).is_err());

        for moment in Moment::ALL {
            let mut lead = LeadData::new();
            lead.set_moment(Some(moment));
            assert!(validate_step(&lead, Step::Business).is_ok());
        }
    }

    #[test]
    fn test_vision_requires_success_goal() {
        let mut lead = LeadData::new();
        lead.set_brand_vibe("bistrô premium");
        let err = validate_step(&lead, Step::Vision).unwrap_err();
        assert_eq!(err.missing, vec![RequiredField::SuccessGoal]);

        lead.set_success_goal("agenda cheia");
        assert!(validate_step(&lead, Step::Vision).is_ok());
    }

    #[test]
    fn test_messages_per_step() {
        let err = validate_step(&LeadData::new(), Step::Identity).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Por favor, preencha todos os campos desta etapa."
        );
        let err = validate_step(&LeadData::new(), Step::Business).unwrap_err();
        assert_eq!(err.to_string(), "Selecione como está seu momento atual.");
    }
}
