//! Fuzz target for the notify form editor
//!
//! Hammer the email buffer with arbitrary edits and cursor motion.
//!
//! # Strategy
//!
//! - Arbitrary chars including multi-byte and combining characters
//! - Cursor motion interleaved with inserts and deletes
//! - Submit attempts mid-edit, plus close polls at arbitrary offsets
//!
//! # Invariants
//!
//! - Cursor column never exceeds the char count (no boundary panics)
//! - Empty submissions are rejected, the form stays editable
//! - Once submitted, the email is frozen and never mutates again

#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use auraforge_app::NotifyForm;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum EditOp {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Submit { advance_ms: u16 },
    PollClose { advance_ms: u16 },
}

fuzz_target!(|ops: Vec<EditOp>| {
    let mut form = NotifyForm::new();
    let mut now = Instant::now();
    let mut frozen: Option<String> = None;

    for op in ops {
        match op {
            EditOp::Insert(c) => form.insert(c),
            EditOp::Backspace => form.backspace(),
            EditOp::Delete => form.delete(),
            EditOp::Left => form.left(),
            EditOp::Right => form.right(),
            EditOp::Home => form.home(),
            EditOp::End => form.end(),
            EditOp::Submit { advance_ms } => {
                now += Duration::from_millis(u64::from(advance_ms));
                let was_empty = form.email().is_empty();
                form.submit(now);
                if was_empty {
                    assert!(!form.is_submitted(), "empty email accepted");
                }
            }
            EditOp::PollClose { advance_ms } => {
                now += Duration::from_millis(u64::from(advance_ms));
                let _ = form.should_close(now);
            }
        }

        assert!(
            form.cursor_column() <= form.email().chars().count(),
            "cursor {} past end of {:?}",
            form.cursor_column(),
            form.email()
        );

        if form.is_submitted() {
            match &frozen {
                Some(email) => assert_eq!(form.email(), email, "submitted email mutated"),
                None => frozen = Some(form.email().to_owned()),
            }
        }
    }
});
