//! Submit-lifecycle orchestration
//!
//! Idle -> Submitting on submit; the async call runs on the app-owned
//! runtime and drops its outcome into a shared slot polled each frame.
//! Either terminal outcome returns to Idle.

use super::App;
use crate::api::SubmissionOutcome;
use crate::constants::{FORM_INVALID_MESSAGE, SUCCESS_MESSAGE};
use crate::form::{RegistrationForm, RegistrationInput, UiState};
use crate::message::MessageBar;
use eframe::egui;
use std::time::Instant;
use tracing::{info, warn};

/// Gate a submit attempt: no-op while a submission is in flight, and
/// failed client-side validation shows the error banner without ever
/// entering `Submitting`. Returns the payload to submit otherwise.
/// Split out from `App` so the transitions are testable headless.
pub(crate) fn begin_submit(
    form: &mut RegistrationForm,
    ui_state: &mut UiState,
    messages: &mut MessageBar,
    now: Instant,
) -> Option<RegistrationInput> {
    if *ui_state == UiState::Submitting {
        return None;
    }
    if !form.validate_all() {
        messages.show_error(FORM_INVALID_MESSAGE, now);
        return None;
    }
    *ui_state = UiState::Submitting;
    Some(form.input())
}

/// Apply a terminal submission outcome to the form state. Split out from
/// `App` so the success/failure transitions are testable headless.
pub(crate) fn apply_outcome(
    form: &mut RegistrationForm,
    ui_state: &mut UiState,
    messages: &mut MessageBar,
    outcome: SubmissionOutcome,
    now: Instant,
) {
    *ui_state = UiState::Idle;
    match outcome {
        SubmissionOutcome::Success { user_id } => {
            info!(user_id = %user_id, "Registration complete");
            form.reset();
            messages.show_success(SUCCESS_MESSAGE, now);
        }
        SubmissionOutcome::Failure { reason } => {
            warn!(reason = %reason, "Registration failed");
            messages.show_error(reason, now);
        }
    }
}

impl App {
    /// Validate and kick off an asynchronous submission. No-op while a
    /// submission is already in flight.
    pub fn submit_registration(&mut self, ctx: &egui::Context) {
        let Some(input) = begin_submit(
            &mut self.form,
            &mut self.ui_state,
            &mut self.messages,
            Instant::now(),
        ) else {
            return;
        };
        info!(email = %input.email, "Submitting registration");

        let api = self.api.clone();
        let slot = self.pending_outcome.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let outcome = api.submit(&input).await;
            *slot.lock().unwrap() = Some(outcome);
            ctx.request_repaint();
        });
    }

    /// Pick up a finished submission, if any.
    pub fn poll_submission(&mut self) {
        let outcome = self.pending_outcome.lock().unwrap().take();
        if let Some(outcome) = outcome {
            apply_outcome(
                &mut self.form,
                &mut self.ui_state,
                &mut self.messages,
                outcome,
                Instant::now(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageKind;
    use std::time::Duration;

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new();
        form.first_name.value = "A".into();
        form.last_name.value = "B".into();
        form.email.value = "a@b.co".into();
        form.phone.value = "5551234567".into();
        form
    }

    #[test]
    fn test_submit_while_in_flight_is_noop() {
        let mut form = filled_form();
        let mut ui_state = UiState::Submitting;
        let mut messages = MessageBar::new();
        let now = Instant::now();

        let input = begin_submit(&mut form, &mut ui_state, &mut messages, now);

        assert!(input.is_none());
        assert_eq!(ui_state, UiState::Submitting);
        assert!(messages.current(now).is_none());
        assert_eq!(form.first_name.value, "A");
    }

    #[test]
    fn test_invalid_form_never_enters_submitting() {
        let mut form = RegistrationForm::new();
        let mut ui_state = UiState::Idle;
        let mut messages = MessageBar::new();
        let now = Instant::now();

        let input = begin_submit(&mut form, &mut ui_state, &mut messages, now);

        assert!(input.is_none());
        assert_eq!(ui_state, UiState::Idle);
        assert!(form.email.error.is_some());

        // Persistent error banner
        let msg = messages
            .current(now + Duration::from_secs(30))
            .expect("validation banner shown");
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, FORM_INVALID_MESSAGE);
    }

    #[test]
    fn test_valid_form_enters_submitting_with_payload() {
        let mut form = filled_form();
        let mut ui_state = UiState::Idle;
        let mut messages = MessageBar::new();
        let now = Instant::now();

        let input = begin_submit(&mut form, &mut ui_state, &mut messages, now)
            .expect("valid form submits");

        assert_eq!(ui_state, UiState::Submitting);
        assert_eq!(input.email, "a@b.co");
        assert!(messages.current(now).is_none());
    }

    #[test]
    fn test_success_resets_form_and_shows_transient_banner() {
        let mut form = filled_form();
        let mut ui_state = UiState::Submitting;
        let mut messages = MessageBar::new();
        let now = Instant::now();

        apply_outcome(
            &mut form,
            &mut ui_state,
            &mut messages,
            SubmissionOutcome::Success { user_id: "abc123def".into() },
            now,
        );

        assert_eq!(ui_state, UiState::Idle);
        assert!(form.first_name.value.is_empty());
        assert!(form.email.value.is_empty());

        let msg = messages.current(now).expect("success banner shown");
        assert_eq!(msg.kind, MessageKind::Success);
        assert_eq!(msg.text, SUCCESS_MESSAGE);
        // Auto-clears after 5 seconds
        assert!(messages.current(now + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_failure_keeps_form_and_shows_persistent_error() {
        let mut form = filled_form();
        let mut ui_state = UiState::Submitting;
        let mut messages = MessageBar::new();
        let now = Instant::now();

        apply_outcome(
            &mut form,
            &mut ui_state,
            &mut messages,
            SubmissionOutcome::Failure { reason: "Invalid email address".into() },
            now,
        );

        // Re-enabled for retry, no reset
        assert_eq!(ui_state, UiState::Idle);
        assert_eq!(form.first_name.value, "A");

        let msg = messages
            .current(now + Duration::from_secs(30))
            .expect("error banner persists");
        assert_eq!(msg.kind, MessageKind::Error);
        assert_eq!(msg.text, "Invalid email address");
    }
}
