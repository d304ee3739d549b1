//! Email capture popup state.
//!
//! The notify form collects an address locally and simulates a successful
//! submission: nothing is transmitted anywhere. After submitting, the form
//! shows its confirmation for a fixed hold and then reports that it should
//! close, at which point the owner drops it.

use std::time::{Duration, Instant};

/// Local-only email capture form.
///
/// Owned by the zen screen. The editing buffer keeps its cursor on char
/// boundaries, so arbitrary unicode input is safe.
#[derive(Debug, Clone, Default)]
pub struct NotifyForm {
    /// Email text being edited.
    email: String,
    /// Byte offset of the cursor within `email`, always on a char boundary.
    cursor: usize,
    /// Set once a non-empty address is submitted.
    submitted_at: Option<Instant>,
}

impl NotifyForm {
    /// How long the confirmation shows before the form closes itself.
    pub const CONFIRM_HOLD: Duration = Duration::from_millis(2000);

    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor. Ignored after submission.
    pub fn insert(&mut self, c: char) {
        if self.submitted_at.is_some() {
            return;
        }
        self.email.insert(self.cursor, c);
        self.cursor = self.cursor.saturating_add(c.len_utf8());
    }

    /// Delete the character before the cursor. Ignored after submission.
    pub fn backspace(&mut self) {
        if self.submitted_at.is_some() {
            return;
        }
        if let Some((idx, _)) = self.email[..self.cursor].char_indices().next_back() {
            self.email.remove(idx);
            self.cursor = idx;
        }
    }

    /// Delete the character at the cursor. Ignored after submission.
    pub fn delete(&mut self) {
        if self.submitted_at.is_some() {
            return;
        }
        if self.cursor < self.email.len() {
            self.email.remove(self.cursor);
        }
    }

    /// Move the cursor one character left.
    pub fn left(&mut self) {
        if let Some((idx, _)) = self.email[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    /// Move the cursor one character right.
    pub fn right(&mut self) {
        if self.cursor < self.email.len() {
            let step = self.email[self.cursor..].chars().next().map_or(1, char::len_utf8);
            self.cursor = self.cursor.saturating_add(step);
        }
    }

    /// Move the cursor to the start of the text.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end of the text.
    pub fn end(&mut self) {
        self.cursor = self.email.len();
    }

    /// Submit the form at `now`.
    ///
    /// Only non-emptiness is validated; an empty submit leaves the form
    /// editing. Re-submitting after success is a no-op.
    pub fn submit(&mut self, now: Instant) {
        if self.email.is_empty() || self.submitted_at.is_some() {
            return;
        }
        self.submitted_at = Some(now);
        tracing::debug!("notify form submitted");
    }

    /// Whether the confirmation hold has elapsed and the form should close.
    pub fn should_close(&self, now: Instant) -> bool {
        self.submitted_at.is_some_and(|at| now.duration_since(at) >= Self::CONFIRM_HOLD)
    }

    /// Email text as typed.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display column of the cursor (characters before it, not bytes).
    pub fn cursor_column(&self) -> usize {
        self.email[..self.cursor].chars().count()
    }

    /// Whether the form is showing its confirmation.
    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_and_cursor_movement() {
        let mut form = NotifyForm::new();

        form.insert('a');
        form.insert('b');
        form.insert('c');
        assert_eq!(form.email(), "abc");
        assert_eq!(form.cursor_column(), 3);

        form.home();
        assert_eq!(form.cursor_column(), 0);
        form.right();
        form.insert('x');
        assert_eq!(form.email(), "axbc");

        form.end();
        form.backspace();
        assert_eq!(form.email(), "axb");
    }

    #[test]
    fn multibyte_editing_stays_on_boundaries() {
        let mut form = NotifyForm::new();

        form.insert('é');
        form.insert('λ');
        form.insert('@');
        assert_eq!(form.email(), "éλ@");
        assert_eq!(form.cursor_column(), 3);

        form.left();
        form.left();
        form.insert('x');
        assert_eq!(form.email(), "éxλ@");

        form.backspace();
        form.delete();
        assert_eq!(form.email(), "é@");
    }

    #[test]
    fn empty_submit_keeps_editing() {
        let t0 = Instant::now();
        let mut form = NotifyForm::new();

        form.submit(t0);

        assert!(!form.is_submitted());
        assert!(!form.should_close(t0 + NotifyForm::CONFIRM_HOLD));
    }

    #[test]
    fn submit_then_close_after_hold() {
        let t0 = Instant::now();
        let mut form = NotifyForm::new();
        form.insert('a');

        form.submit(t0);
        assert!(form.is_submitted());

        assert!(!form.should_close(t0 + NotifyForm::CONFIRM_HOLD - Duration::from_millis(1)));
        assert!(form.should_close(t0 + NotifyForm::CONFIRM_HOLD));
    }

    #[test]
    fn editing_frozen_after_submit() {
        let t0 = Instant::now();
        let mut form = NotifyForm::new();
        form.insert('a');
        form.submit(t0);

        form.insert('b');
        form.backspace();
        form.delete();

        assert_eq!(form.email(), "a");
    }

    #[test]
    fn resubmit_keeps_original_timestamp() {
        let t0 = Instant::now();
        let mut form = NotifyForm::new();
        form.insert('a');

        form.submit(t0);
        form.submit(t0 + Duration::from_millis(1500));

        // The hold runs from the first submission.
        assert!(form.should_close(t0 + NotifyForm::CONFIRM_HOLD));
    }
}
