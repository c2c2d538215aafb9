//! Transient status banner shown under the registration form
//!
//! At most one message is visible at a time. Success messages auto-dismiss
//! after a fixed delay; error messages persist until overwritten. Time is
//! passed in by the caller so expiry is deterministic under test.

use crate::constants::SUCCESS_DISMISS_SECS;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
    shown_at: Instant,
}

impl StatusMessage {
    fn expired(&self, now: Instant) -> bool {
        self.kind == MessageKind::Success
            && now.saturating_duration_since(self.shown_at)
                >= Duration::from_secs(SUCCESS_DISMISS_SECS)
    }
}

/// The single message-display region.
#[derive(Debug, Default)]
pub struct MessageBar {
    current: Option<StatusMessage>,
}

impl MessageBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_success(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind: MessageKind::Success,
            shown_at: now,
        });
    }

    pub fn show_error(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some(StatusMessage {
            text: text.into(),
            kind: MessageKind::Error,
            shown_at: now,
        });
    }

    /// The live message, dropping an expired success banner first.
    pub fn current(&mut self, now: Instant) -> Option<&StatusMessage> {
        if self.current.as_ref().is_some_and(|m| m.expired(now)) {
            self.current = None;
        }
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_auto_dismisses_after_delay() {
        let start = Instant::now();
        let mut bar = MessageBar::new();
        bar.show_success("Registered", start);

        assert!(bar.current(start).is_some());
        assert!(bar
            .current(start + Duration::from_millis(4_900))
            .is_some());
        assert!(bar.current(start + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_error_persists() {
        let start = Instant::now();
        let mut bar = MessageBar::new();
        bar.show_error("Registration failed", start);

        let msg = bar.current(start + Duration::from_secs(60));
        assert!(msg.is_some_and(|m| m.kind == MessageKind::Error));
    }

    #[test]
    fn test_new_message_overwrites_previous() {
        let start = Instant::now();
        let mut bar = MessageBar::new();
        bar.show_error("first", start);
        bar.show_success("second", start);

        let msg = bar.current(start);
        assert!(msg.is_some_and(|m| m.text == "second" && m.kind == MessageKind::Success));
    }

    #[test]
    fn test_expiry_counts_from_display_time() {
        let start = Instant::now();
        let mut bar = MessageBar::new();
        bar.show_success("old", start);
        // Re-shown later: the clock restarts
        bar.show_success("new", start + Duration::from_secs(4));
        assert!(bar.current(start + Duration::from_secs(6)).is_some());
        assert!(bar.current(start + Duration::from_secs(9)).is_none());
    }
}
