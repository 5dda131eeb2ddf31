//! Application state and core logic

use crate::state::{
    AdvanceOutcome, AlertKind, AppState, FocusTarget, Form, FormButton, LeadField, RequiredField,
    SplashState, SubmitRejected, View,
};
use crate::submit::{LeadSubmitter, SubmissionError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the form endpoint
    submitter: Arc<dyn LeadSubmitter>,
    /// Result channel of the POST in flight, if any
    pending_submission: Option<oneshot::Receiver<Result<(), SubmissionError>>>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance, starting on the splash screen
    pub fn new(submitter: Arc<dyn LeadSubmitter>) -> Self {
        let mut state = AppState::new();
        state.current_view = View::Splash;

        Self {
            state,
            submitter,
            pending_submission: None,
            quit: false,
            splash_state: Some(SplashState::new()),
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    /// Any key skips the splash
    fn skip_splash(&mut self) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        self.finish_splash();
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Form;
    }

    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while a submission is waiting for the endpoint
    pub fn is_submitting(&self) -> bool {
        self.state.session.is_submitting()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Alerts are modal
        if self.state.has_alerts() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_alert();
            }
            return;
        }

        match self.state.current_view {
            View::Splash => self.skip_splash(),
            View::Form => self.handle_form_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') | KeyCode::Char('R') => {
                tracing::info!("Starting a new form session");
                self.state.restart();
            }
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        // The form is disabled while the POST is in flight
        if self.is_submitting() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let target = self.state.form.active_target().clone();

        match key.code {
            KeyCode::Char('n') if ctrl => {
                self.advance();
            }
            KeyCode::Char('s') if ctrl => self.primary_action(),
            KeyCode::Char('w') if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.primary_action()
            }
            KeyCode::Esc => {
                self.retreat();
            }
            KeyCode::Tab => self.focus_next(),
            KeyCode::BackTab => self.focus_prev(),
            KeyCode::Up => match target {
                FocusTarget::MomentGroup | FocusTarget::PainChecklist => {
                    self.state.form.cursor_up()
                }
                _ => self.focus_prev(),
            },
            KeyCode::Down => match target {
                FocusTarget::MomentGroup | FocusTarget::PainChecklist => {
                    self.state.form.cursor_down()
                }
                _ => self.focus_next(),
            },
            KeyCode::Left if target == FocusTarget::Actions => self.state.form.prev_button(),
            KeyCode::Right if target == FocusTarget::Actions => self.state.form.next_button(),
            KeyCode::Enter => match target {
                FocusTarget::Actions => self.press_selected_button(),
                FocusTarget::MomentGroup | FocusTarget::PainChecklist => {
                    self.state.form.choose(self.state.session.lead_mut());
                }
                FocusTarget::Text(field) => {
                    if !field.push_newline(self.state.session.lead_mut()) {
                        self.focus_next();
                    }
                }
            },
            KeyCode::Char(' ')
                if matches!(target, FocusTarget::MomentGroup | FocusTarget::PainChecklist) =>
            {
                self.state.form.choose(self.state.session.lead_mut());
            }
            // AltGr arrives as Ctrl+Alt on Windows; only bare Ctrl chords are dropped
            KeyCode::Char(c) if !ctrl || key.modifiers.contains(KeyModifiers::ALT) => {
                if let FocusTarget::Text(field) = target {
                    field.push_char(self.state.session.lead_mut(), c);
                }
            }
            KeyCode::Backspace => {
                if let FocusTarget::Text(field) = target {
                    field.pop_char(self.state.session.lead_mut());
                }
            }
            _ => {}
        }
    }

    fn focus_next(&mut self) {
        self.state.form.next_field();
        self.state.follow_focus();
    }

    fn focus_prev(&mut self) {
        self.state.form.prev_field();
        self.state.follow_focus();
    }

    fn press_selected_button(&mut self) {
        match self.state.form.selected_button() {
            Some(FormButton::Back) => {
                self.retreat();
            }
            Some(FormButton::Next) => {
                self.advance();
            }
            Some(FormButton::Submit) => {
                self.submit();
            }
            None => {}
        }
    }

    /// Advance on steps 1-2, submit on step 3
    fn primary_action(&mut self) {
        if self.state.session.step().is_last() {
            self.submit();
        } else {
            self.advance();
        }
    }

    /// Try to move to the next step. Returns true when the step changed.
    pub fn advance(&mut self) -> bool {
        match self.state.session.advance() {
            Ok(AdvanceOutcome::Moved(_)) => {
                self.state.reset_step_view();
                true
            }
            Ok(AdvanceOutcome::AtLastStep | AdvanceOutcome::Finished) => false,
            Err(err) => {
                if let Some(first) = err.missing.first() {
                    self.focus_required(*first);
                }
                self.state.push_alert(AlertKind::Validation, err.to_string());
                false
            }
        }
    }

    /// Go back one step. Returns true when the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.state.session.retreat().is_some() {
            self.state.reset_step_view();
            true
        } else {
            false
        }
    }

    /// Dispatch the lead to the endpoint. Returns true when a POST was started.
    pub fn submit(&mut self) -> bool {
        match self.state.session.begin_submission() {
            Ok(lead) => {
                let submitter = Arc::clone(&self.submitter);
                let (tx, rx) = oneshot::channel();
                tokio::spawn(async move {
                    let result = submitter.submit(&lead).await;
                    let _ = tx.send(result);
                });
                self.pending_submission = Some(rx);
                true
            }
            Err(SubmitRejected::Invalid(err)) => {
                if let Some(first) = err.missing.first() {
                    self.focus_required(*first);
                }
                self.state.push_alert(AlertKind::Validation, err.to_string());
                false
            }
            Err(rejected) => {
                tracing::debug!(reason = %rejected, "Submit ignored");
                false
            }
        }
    }

    /// Pick up the result of an in-flight submission without blocking
    pub fn poll_submission(&mut self) {
        let Some(rx) = self.pending_submission.as_mut() else {
            return;
        };
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(SubmissionError::Interrupted),
        };
        self.pending_submission = None;
        self.complete_submission(result);
    }

    fn complete_submission(&mut self, result: Result<(), SubmissionError>) {
        match self.state.session.finish_submission(result) {
            Ok(()) => self.state.current_view = View::Confirmation,
            Err(err) => self
                .state
                .push_alert(AlertKind::Submission, err.user_message()),
        }
    }

    /// Move focus to the input that answers `field`
    fn focus_required(&mut self, field: RequiredField) {
        let index = self.state.form.targets.iter().position(|t| match (t, field) {
            (FocusTarget::MomentGroup, RequiredField::Moment) => true,
            (FocusTarget::Text(f), RequiredField::Name) => f.field == LeadField::Name,
            (FocusTarget::Text(f), RequiredField::BusinessName) => {
                f.field == LeadField::BusinessName
            }
            (FocusTarget::Text(f), RequiredField::Contact) => f.field == LeadField::Contact,
            (FocusTarget::Text(f), RequiredField::SuccessGoal) => {
                f.field == LeadField::SuccessGoal
            }
            _ => false,
        });
        if let Some(index) = index {
            self.state.form.set_active_field(index);
            self.state.follow_focus();
        }
    }
}

#[cfg(test)]
impl App {
    /// Await the in-flight submission and apply its result
    async fn wait_for_submission(&mut self) {
        if let Some(rx) = self.pending_submission.take() {
            let result = rx.await.unwrap_or(Err(SubmissionError::Interrupted));
            self.complete_submission(result);
        }
    }
}
