//! Application input events.
//!
//! This module defines [`AppEvent`], the comprehensive set of inputs that
//! drive the [`crate::App`] state machine.
//!
//! Events carry the instant they occurred at wherever the app needs time.
//! The state machine never reads a clock itself, which keeps every timing
//! rule replayable in tests by synthesizing instants.

use std::time::Instant;

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// Keyboard input.
    Key {
        /// The key that was pressed.
        key: KeyInput,
        /// When the key arrived.
        now: Instant,
    },

    /// Periodic animation tick.
    Tick {
        /// When the tick fired.
        now: Instant,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
