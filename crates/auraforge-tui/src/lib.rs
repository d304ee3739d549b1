//! Terminal frontend for the Auraforge teaser.
//!
//! A thin shell over [`auraforge_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`auraforge_app::Runtime`];
//! this crate only handles terminal events, rendering, and the snow overlay.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod snow;
pub mod terminal;
pub mod ui;

pub use auraforge_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use snow::Snowfield;
pub use terminal::{TerminalDriver, TerminalError};
