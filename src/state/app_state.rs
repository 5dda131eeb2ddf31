//! Application state definitions

use super::forms::{FocusTarget, Form, StepForm};
use super::session::IntakeSession;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Brand splash with logo animation
    Splash,
    /// The three-step form
    #[default]
    Form,
    /// "Diagnóstico Recebido" after a successful submission
    Confirmation,
}

/// Kind of modal message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// A required field is missing
    Validation,
    /// The POST failed
    Submission,
}

impl AlertKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation => "Atenção",
            Self::Submission => "Falha no envio",
        }
    }
}

/// A blocking message shown over the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Everything the UI renders from
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub session: IntakeSession,
    pub form: StepForm,
    /// Index of the first focus target drawn on the step screen
    pub scroll_offset: usize,
    /// Rows available to focus targets, once the screen size is known
    viewport_rows: Option<u16>,
    alerts: VecDeque<Alert>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let session = IntakeSession::new();
        let form = StepForm::for_step(session.step());
        Self {
            current_view: View::Form,
            session,
            form,
            scroll_offset: 0,
            viewport_rows: None,
            alerts: VecDeque::new(),
        }
    }

    /// Throw away the session and start over, like reloading the page
    pub fn restart(&mut self) {
        self.session = IntakeSession::new();
        self.alerts.clear();
        self.current_view = View::Form;
        self.reset_step_view();
    }

    /// Rebuild the step screen for the session's step and scroll to its top
    pub fn reset_step_view(&mut self) {
        self.form = StepForm::for_step(self.session.step());
        self.scroll_offset = 0;
    }

    /// Record the rows the step screen gives to focus targets
    pub fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = Some(rows);
        self.follow_focus();
    }

    /// Scroll just enough to keep the focused target on screen
    pub fn follow_focus(&mut self) {
        let active = self.form.active_field();
        self.scroll_offset = match self.viewport_rows {
            Some(rows) => {
                let heights: Vec<u16> =
                    self.form.targets.iter().map(FocusTarget::rows).collect();
                first_visible(&heights, self.scroll_offset, active, rows)
            }
            None => self.scroll_offset.min(active),
        };
    }

    pub fn push_alert(&mut self, kind: AlertKind, message: impl Into<String>) {
        self.alerts.push_back(Alert {
            kind,
            message: message.into(),
        });
    }

    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }

    pub fn current_alert(&self) -> Option<&Alert> {
        self.alerts.front()
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

/// First target to draw so that the active one fits in `available` rows
pub fn first_visible(
    heights: &[u16],
    scroll_offset: usize,
    active: usize,
    available: u16,
) -> usize {
    let mut start = scroll_offset.min(active);
    while start < active && heights[start..=active].iter().sum::<u16>() > available {
        start += 1;
    }
    start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Step;

    #[test]
    fn test_new_state_is_first_step() {
        let state = AppState::new();
        assert_eq!(state.current_view, View::Form);
        assert_eq!(state.session.step(), Step::Identity);
        assert_eq!(state.form.step, Step::Identity);
        assert_eq!(state.scroll_offset, 0);
        assert!(!state.has_alerts());
    }

    #[test]
    fn test_alerts_are_fifo() {
        let mut state = AppState::new();
        state.push_alert(AlertKind::Validation, "first");
        state.push_alert(AlertKind::Submission, "second");
        assert_eq!(state.current_alert().unwrap().message, "first");
        state.dismiss_alert();
        assert_eq!(state.current_alert().unwrap().kind, AlertKind::Submission);
        state.dismiss_alert();
        assert!(!state.has_alerts());
        state.dismiss_alert();
    }

    #[test]
    fn test_reset_step_view_scrolls_to_top() {
        let mut state = AppState::new();
        state.set_viewport_rows(3);
        state.form.set_active_field(2);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 2);
        state.reset_step_view();
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.form.active_field(), 0);
    }

    #[test]
    fn test_follow_focus_scrolls_down_to_active() {
        let mut state = AppState::new();
        // four targets of three rows, two fit at a time
        state.set_viewport_rows(6);
        state.form.set_active_field(3);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 2);

        state.form.set_active_field(2);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 2);

        state.form.set_active_field(0);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_smaller_viewport_keeps_focus_visible() {
        let mut state = AppState::new();
        state.form.set_active_field(3);
        state.set_viewport_rows(20);
        assert_eq!(state.scroll_offset, 0);
        state.set_viewport_rows(3);
        assert_eq!(state.scroll_offset, 3);
    }

    #[test]
    fn test_follow_focus_moves_up_only() {
        let mut state = AppState::new();
        state.scroll_offset = 2;
        state.form.set_active_field(1);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 1);

        state.form.set_active_field(3);
        state.follow_focus();
        assert_eq!(state.scroll_offset, 1);
    }

    #[test]
    fn test_restart_discards_answers() {
        let mut state = AppState::new();
        state.session.lead_mut().set_name("Ana");
        state.current_view = View::Confirmation;
        state.push_alert(AlertKind::Validation, "x");
        let old_id = state.session.id();

        state.restart();

        assert_eq!(state.session.lead().name(), "");
        assert_ne!(state.session.id(), old_id);
        assert_eq!(state.current_view, View::Form);
        assert!(!state.has_alerts());
    }

    #[test]
    fn test_alert_titles_differ() {
        assert_ne!(AlertKind::Validation.title(), AlertKind::Submission.title());
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_everything_fits_from_top() {
            assert_eq!(first_visible(&[3, 3, 3, 3], 0, 3, 20), 0);
        }

        #[test]
        fn test_scrolls_down_to_reveal_active() {
            // 6 + 6 + 6 + 3 = 21 rows, only 12 available
            assert_eq!(first_visible(&[6, 6, 6, 3], 0, 3, 12), 2);
        }

        #[test]
        fn test_scroll_offset_never_hides_active_above() {
            assert_eq!(first_visible(&[3, 3, 3, 3], 3, 1, 20), 1);
        }

        #[test]
        fn test_keeps_scroll_when_active_visible() {
            assert_eq!(first_visible(&[3, 3, 3, 3], 1, 2, 6), 1);
        }

        #[test]
        fn test_active_taller_than_area_is_first() {
            assert_eq!(first_visible(&[3, 6], 0, 1, 4), 1);
        }
    }
}
