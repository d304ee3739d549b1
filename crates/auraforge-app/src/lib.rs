//! Application layer for the Auraforge teaser
//!
//! Pure state machines and a generic runtime for the terminal teaser,
//! enabling deterministic testing with the same code that runs in
//! production. All timing enters through event payloads, so every
//! animation and screen transition can be replayed tick by tick.
//!
//! # Components
//!
//! - [`App`]: view state machine (hero, loading, zen) and key routing
//! - [`anim`]: animation timelines (eased progress fill, XP accrual)
//! - [`NotifyForm`]: local email capture with simulated confirmation
//! - [`Driver`]: trait for platform-specific I/O abstraction
//! - [`Runtime`]: generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod event;
mod input;
mod notify;
mod runtime;
mod screen;

pub mod anim;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use notify::NotifyForm;
pub use runtime::Runtime;
pub use screen::{LaunchExit, Screen};
