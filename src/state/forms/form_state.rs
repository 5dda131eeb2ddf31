//! Focus state for the step screens

use super::field::FormField;
use crate::state::{LeadData, Moment, Step, PAIN_CATALOGUE};

/// Options in each choice group (moments and pains both have four)
pub const OPTION_COUNT: usize = 4;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_target(&self, index: usize) -> Option<&FocusTarget>;
}

/// Something that can hold focus on a step screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    Text(FormField),
    /// Single-select radio group for `moment`
    MomentGroup,
    /// Multi-select checklist for `pains`
    PainChecklist,
    /// Back / next / submit buttons
    Actions,
}

impl FocusTarget {
    /// Terminal rows the target occupies on the step screen, borders included
    pub fn rows(&self) -> u16 {
        match self {
            Self::Text(field) if field.is_multiline => 6,
            Self::Text(_) => 3,
            Self::MomentGroup | Self::PainChecklist => OPTION_COUNT as u16 + 2,
            Self::Actions => 3,
        }
    }
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormButton {
    Back,
    Next,
    Submit,
}

impl FormButton {
    pub fn label(&self, submitting: bool) -> &'static str {
        match self {
            Self::Back => "[ VOLTAR ]",
            Self::Next => "PRÓXIMA ETAPA →",
            Self::Submit if submitting => "ENVIANDO_DADOS...",
            Self::Submit => "INICIALIZAR DIAGNÓSTICO >_",
        }
    }
}

/// Focus and cursor state of the current step screen
#[derive(Debug, Clone)]
pub struct StepForm {
    pub step: Step,
    pub targets: Vec<FocusTarget>,
    pub active_field_index: usize,
    /// Highlighted option inside a choice group
    pub option_cursor: usize,
    /// Which button is selected when on the action row
    pub selected_button: usize,
}

impl StepForm {
    pub fn for_step(step: Step) -> Self {
        let fields = FormField::for_step(step);
        let mut targets = Vec::new();
        if step == Step::Business {
            targets.push(FocusTarget::MomentGroup);
            targets.push(FocusTarget::PainChecklist);
        }
        targets.extend(fields.into_iter().map(FocusTarget::Text));
        targets.push(FocusTarget::Actions);

        let mut form = Self {
            step,
            targets,
            active_field_index: 0,
            option_cursor: 0,
            selected_button: 0,
        };
        form.selected_button = form.buttons().len() - 1;
        form
    }

    pub fn active_target(&self) -> &FocusTarget {
        &self.targets[self.active_field_index]
    }

    /// The focused text field, if any
    pub fn active_text_field(&self) -> Option<&FormField> {
        match self.active_target() {
            FocusTarget::Text(field) => Some(field),
            _ => None,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.active_text_field().is_some_and(|f| f.is_multiline)
    }

    /// Returns true if the action row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        matches!(self.active_target(), FocusTarget::Actions)
    }

    /// Buttons shown for this step, left to right
    pub fn buttons(&self) -> Vec<FormButton> {
        let mut buttons = Vec::new();
        if self.step.prev().is_some() {
            buttons.push(FormButton::Back);
        }
        buttons.push(if self.step.is_last() {
            FormButton::Submit
        } else {
            FormButton::Next
        });
        buttons
    }

    pub fn selected_button(&self) -> Option<FormButton> {
        self.buttons().get(self.selected_button).copied()
    }

    /// Move to the next button (wraps around)
    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % self.buttons().len();
    }

    /// Move to the previous button (wraps around)
    pub fn prev_button(&mut self) {
        let count = self.buttons().len();
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.option_cursor = self.option_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.option_cursor = (self.option_cursor + 1).min(OPTION_COUNT - 1);
    }

    /// Apply Space/Enter on a choice group. Returns false when focus is elsewhere.
    pub fn choose(&self, lead: &mut LeadData) -> bool {
        match self.active_target() {
            FocusTarget::MomentGroup => {
                lead.set_moment(Some(Moment::ALL[self.option_cursor]));
                true
            }
            FocusTarget::PainChecklist => {
                lead.toggle_pain(PAIN_CATALOGUE[self.option_cursor]);
                true
            }
            _ => false,
        }
    }
}

impl Form for StepForm {
    fn field_count(&self) -> usize {
        self.targets.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        let index = index.min(self.targets.len() - 1);
        if index != self.active_field_index {
            self.option_cursor = 0;
        }
        self.active_field_index = index;
    }
    fn get_target(&self, index: usize) -> Option<&FocusTarget> {
        self.targets.get(index)
    }
}
