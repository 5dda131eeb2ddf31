//! Form field descriptors

use crate::state::{LeadData, LeadField, Step};

/// A free-text input on one of the step screens.
///
/// The value itself lives in `LeadData`; this only describes how to show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub field: LeadField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub is_multiline: bool,
    pub is_required: bool,
}

impl FormField {
    /// Descriptor for a lead field
    pub fn for_lead_field(field: LeadField) -> Self {
        let (label, placeholder, is_multiline, is_required) = match field {
            LeadField::Name => ("NOME_PESSOAL", "Como prefere ser chamado?", false, true),
            LeadField::BusinessName => ("NOME_MARCA_OU_EMPRESA", "Nome do seu negócio", false, true),
            LeadField::Contact => ("CONTATO_DIRETO", "Seu melhor WhatsApp ou E-mail", false, true),
            LeadField::OtherPains => (
                "OUTRAS_DORES // ADICIONAL",
                "Algo específico que não listamos acima?",
                true,
                false,
            ),
            LeadField::SuccessGoal => (
                "META_PRINCIPAL",
                "Ex: Ter a agenda cheia de clientes qualificados ou faturar R$ 50k/mês no digital...",
                true,
                true,
            ),
            LeadField::BrandVibe => (
                "BRAND_VIBE (ESTILO)",
                "Ex: Descontraída como um bar ou sofisticada como um bistrô premium?",
                false,
                false,
            ),
        };
        Self {
            field,
            label,
            placeholder,
            is_multiline,
            is_required,
        }
    }

    /// Text fields shown on `step`, in focus order
    pub fn for_step(step: Step) -> Vec<Self> {
        let fields: &[LeadField] = match step {
            Step::Identity => &[LeadField::Name, LeadField::BusinessName, LeadField::Contact],
            Step::Business => &[LeadField::OtherPains],
            Step::Vision => &[LeadField::SuccessGoal, LeadField::BrandVibe],
        };
        fields.iter().copied().map(Self::for_lead_field).collect()
    }

    pub fn value<'a>(&self, lead: &'a LeadData) -> &'a str {
        lead.text(self.field)
    }

    /// Push a character to the field value
    pub fn push_char(&self, lead: &mut LeadData, c: char) {
        lead.push_char(self.field, c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&self, lead: &mut LeadData) {
        lead.pop_char(self.field);
    }

    /// Enter inserts a newline only in multiline fields
    pub fn push_newline(&self, lead: &mut LeadData) -> bool {
        if self.is_multiline {
            lead.push_char(self.field, '\n');
        }
        self.is_multiline
    }

    /// Title shown on the field border
    pub fn title(&self) -> String {
        if self.is_required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_fields_are_required_single_line() {
        let fields = FormField::for_step(Step::Identity);
        assert_eq!(fields.len(), 3);
        assert!(fields.iter().all(|f| f.is_required && !f.is_multiline));
        assert_eq!(fields[0].field, LeadField::Name);
        assert_eq!(fields[2].field, LeadField::Contact);
    }

    #[test]
    fn test_other_pains_is_optional_multiline() {
        let fields = FormField::for_step(Step::Business);
        assert_eq!(fields, vec![FormField::for_lead_field(LeadField::OtherPains)]);
        assert!(fields[0].is_multiline);
        assert!(!fields[0].is_required);
    }

    #[test]
    fn test_vision_fields() {
        let fields = FormField::for_step(Step::Vision);
        assert_eq!(fields[0].field, LeadField::SuccessGoal);
        assert!(fields[0].is_required);
        assert!(!fields[1].is_required);
    }

    #[test]
    fn test_editing_goes_through_lead() {
        let mut lead = LeadData::new();
        let field = FormField::for_lead_field(LeadField::Contact);
        field.push_char(&mut lead, 'a');
        field.push_char(&mut lead, 'b');
        field.pop_char(&mut lead);
        assert_eq!(field.value(&lead), "a");
        assert_eq!(lead.contact(), "a");
    }

    #[test]
    fn test_newline_only_in_multiline() {
        let mut lead = LeadData::new();
        let single = FormField::for_lead_field(LeadField::Name);
        assert!(!single.push_newline(&mut lead));
        assert_eq!(lead.name(), "");

        let multi = FormField::for_lead_field(LeadField::SuccessGoal);
        assert!(multi.push_newline(&mut lead));
        assert_eq!(lead.success_goal(), "\n");
    }

    #[test]
    fn test_title_marks_required() {
        assert_eq!(FormField::for_lead_field(LeadField::Name).title(), "NOME_PESSOAL *");
        assert_eq!(
            FormField::for_lead_field(LeadField::BrandVibe).title(),
            "BRAND_VIBE (ESTILO)"
        );
    }
}
