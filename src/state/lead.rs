//! Lead answers collected by the diagnostic form
//!
//! `LeadData` is both the in-memory model and the outbound JSON payload, so
//! its serialized shape is part of the wire contract with the form endpoint.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where the prospect's business currently stands (step 2, single-select)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Moment {
    /// Starting from scratch
    Zero,
    /// Existing business whose digital presence stalled
    Reforma,
    /// Stable sales, wants to scale
    Aceleracao,
    /// Urgent help with sales
    Resgate,
}

impl Moment {
    /// All options in display order
    pub const ALL: [Moment; 4] = [
        Moment::Zero,
        Moment::Reforma,
        Moment::Aceleracao,
        Moment::Resgate,
    ];

    /// Wire identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Reforma => "reforma",
            Self::Aceleracao => "aceleracao",
            Self::Resgate => "resgate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Zero => "Tudo Novo",
            Self::Reforma => "Reforma",
            Self::Aceleracao => "Aceleração",
            Self::Resgate => "Resgate",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Zero => "Estou começando do zero.",
            Self::Reforma => "Já existo, mas o digital parou.",
            Self::Aceleracao => "Venda estável, quero escala.",
            Self::Resgate => "Ajuda urgente com vendas.",
        }
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown moment: {0:?}")]
pub struct UnknownMoment(pub String);

impl FromStr for Moment {
    type Err = UnknownMoment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Moment::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| UnknownMoment(s.to_string()))
    }
}

/// Pains offered as checkboxes on step 2, in display order
pub const PAIN_CATALOGUE: [&str; 4] = [
    "Meu site é lento ou amador",
    "Posto muito e vendo pouco",
    "Ninguém me acha no Google",
    "Minha marca não passa confiança",
];

/// Free-text fields of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    Name,
    BusinessName,
    Contact,
    OtherPains,
    SuccessGoal,
    BrandVibe,
}

impl LeadField {
    /// JSON key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BusinessName => "businessName",
            Self::Contact => "contact",
            Self::OtherPains => "otherPains",
            Self::SuccessGoal => "successGoal",
            Self::BrandVibe => "brandVibe",
        }
    }
}

/// All answers of one form session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadData {
    name: String,
    business_name: String,
    contact: String,
    #[serde(with = "moment_field")]
    moment: Option<Moment>,
    pains: Vec<String>,
    other_pains: String,
    success_goal: String,
    brand_vibe: String,
}

impl LeadData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn moment(&self) -> Option<Moment> {
        self.moment
    }

    pub fn pains(&self) -> &[String] {
        &self.pains
    }

    pub fn other_pains(&self) -> &str {
        &self.other_pains
    }

    pub fn success_goal(&self) -> &str {
        &self.success_goal
    }

    pub fn brand_vibe(&self) -> &str {
        &self.brand_vibe
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_business_name(&mut self, value: impl Into<String>) {
        self.business_name = value.into();
    }

    pub fn set_contact(&mut self, value: impl Into<String>) {
        self.contact = value.into();
    }

    pub fn set_moment(&mut self, moment: Option<Moment>) {
        self.moment = moment;
    }

    pub fn set_other_pains(&mut self, value: impl Into<String>) {
        self.other_pains = value.into();
    }

    pub fn set_success_goal(&mut self, value: impl Into<String>) {
        self.success_goal = value.into();
    }

    pub fn set_brand_vibe(&mut self, value: impl Into<String>) {
        self.brand_vibe = value.into();
    }

    /// Remove `pain` if selected, otherwise append it
    pub fn toggle_pain(&mut self, pain: &str) {
        if let Some(pos) = self.pains.iter().position(|p| p == pain) {
            self.pains.remove(pos);
        } else {
            self.pains.push(pain.to_string());
        }
    }

    pub fn has_pain(&self, pain: &str) -> bool {
        self.pains.iter().any(|p| p == pain)
    }

    /// Current value of a free-text field
    pub fn text(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::BusinessName => &self.business_name,
            LeadField::Contact => &self.contact,
            LeadField::OtherPains => &self.other_pains,
            LeadField::SuccessGoal => &self.success_goal,
            LeadField::BrandVibe => &self.brand_vibe,
        }
    }

    /// Overwrite a free-text field through its setter
    pub fn set_text(&mut self, field: LeadField, value: impl Into<String>) {
        match field {
            LeadField::Name => self.set_name(value),
            LeadField::BusinessName => self.set_business_name(value),
            LeadField::Contact => self.set_contact(value),
            LeadField::OtherPains => self.set_other_pains(value),
            LeadField::SuccessGoal => self.set_success_goal(value),
            LeadField::BrandVibe => self.set_brand_vibe(value),
        }
    }

    /// Append a character to a free-text field
    pub fn push_char(&mut self, field: LeadField, c: char) {
        let mut value = self.text(field).to_string();
        value.push(c);
        self.set_text(field, value);
    }

    /// Remove the last character of a free-text field
    pub fn pop_char(&mut self, field: LeadField) {
        let mut value = self.text(field).to_string();
        value.pop();
        self.set_text(field, value);
    }
}

/// True when the value is empty after trimming whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// The endpoint expects `""` for an unanswered moment
mod moment_field {
    use super::Moment;
    use serde::de::IntoDeserializer;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Moment>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(moment) => moment.serialize(s),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Moment>, D::Error> {
        let raw = String::deserialize(d)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Moment::deserialize(IntoDeserializer::<D::Error>::into_deserializer(raw)).map(Some)
    }
}

impl Serialize for Moment {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Moment {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
