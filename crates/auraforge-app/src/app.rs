//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the
//! interactive state of the teaser completely decoupled from I/O and
//! rendering mechanics.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! Time only enters through event payloads.
//!
//! # Responsibilities
//!
//! - Owns the current [`Screen`] and drives launch sequencing on ticks.
//! - Routes keys by screen, with an open notify popup capturing input.
//! - Tracks the snow overlay flag and terminal dimensions.

use std::time::Instant;

use crate::anim::{ProgressFill, RankCard};
use crate::{AppAction, AppEvent, KeyInput, LaunchExit, NotifyForm, Screen};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Current screen, owning its animation state.
    screen: Screen,
    /// Snow overlay enabled.
    snow: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App on a freshly mounted hero screen.
    pub fn new() -> Self {
        Self {
            screen: Screen::Hero { card: RankCard::new(), exit: None },
            snow: true,
            terminal_size: (80, 24),
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key { key, now } => self.handle_key(key, now),
            AppEvent::Tick { now } => self.handle_tick(now),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
        }
    }

    /// Start the launch sequence at `now`.
    ///
    /// Only the idle hero screen can launch; a second launch while the exit
    /// animation is in flight, or a launch from any other screen, is a
    /// no-op. The exit flag is observable immediately.
    pub fn launch(&mut self, now: Instant) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Hero { exit, .. } if exit.is_none() => {
                *exit = Some(LaunchExit::new(now));
                tracing::debug!("launch sequence started");
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Return to the hero screen, cancelling whatever was in flight.
    ///
    /// From loading or zen this rebuilds a fresh hero, dropping the pending
    /// transition, progress fill, and popup with the old screen. During an
    /// in-flight launch it clears the exit flag and keeps the mounted card.
    /// On the idle hero it is a no-op.
    pub fn back(&mut self) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Hero { exit: None, .. } => vec![],
            Screen::Hero { exit, .. } => {
                *exit = None;
                tracing::debug!("launch aborted");
                vec![AppAction::Render]
            },
            Screen::Loading { .. } | Screen::Zen { .. } => {
                self.screen = Screen::Hero { card: RankCard::new(), exit: None };
                tracing::debug!("returned to hero");
                vec![AppAction::Render]
            },
        }
    }

    /// Toggle the snow overlay.
    pub fn toggle_snow(&mut self) -> Vec<AppAction> {
        self.snow = !self.snow;
        vec![AppAction::Render]
    }

    /// Open the notify popup. Only available on zen without a popup open.
    pub fn open_notify(&mut self) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Zen { notify, .. } if notify.is_none() => {
                *notify = Some(NotifyForm::new());
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Close the notify popup if one is open, dropping its state.
    pub fn close_notify(&mut self) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Zen { notify, .. } if notify.is_some() => {
                *notify = None;
                vec![AppAction::Render]
            },
            _ => vec![],
        }
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Advance all live animations and screen transitions to `now`.
    ///
    /// At most one launch stage advances per tick, so the sequence
    /// hero, loading, zen holds in order and every stage is observable
    /// even when ticks arrive late.
    fn handle_tick(&mut self, now: Instant) -> Vec<AppAction> {
        match &mut self.screen {
            Screen::Hero { card, exit } => {
                card.tick(now);
                let exit_done = exit.as_ref().is_some_and(|exit| exit.is_done(now));
                if exit_done {
                    self.screen = Screen::Loading { zen_at: now + Screen::LOADING_HOLD };
                    tracing::debug!("hero exit finished, holding loading frame");
                }
            },
            Screen::Loading { zen_at } => {
                if now >= *zen_at {
                    self.screen = Screen::Zen { progress: ProgressFill::new(now), notify: None };
                    tracing::debug!("loading hold elapsed, settled on zen");
                }
            },
            Screen::Zen { progress, notify } => {
                progress.tick(now);
                if notify.as_ref().is_some_and(|form| form.should_close(now)) {
                    *notify = None;
                    tracing::debug!("notify confirmation elapsed, popup closed");
                }
            },
        }
        vec![AppAction::Render]
    }

    /// Route a key according to the current screen.
    fn handle_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        if self.notify_open() {
            return self.handle_notify_key(key, now);
        }

        match key {
            KeyInput::Char('q') => self.quit(),
            KeyInput::Char('s') => self.toggle_snow(),
            KeyInput::Enter | KeyInput::Char('l') => self.launch(now),
            KeyInput::Char('b') => self.back(),
            KeyInput::Char('n') => self.open_notify(),
            KeyInput::Esc => match &self.screen {
                Screen::Hero { exit: None, .. } => self.quit(),
                _ => self.back(),
            },
            _ => vec![],
        }
    }

    /// Route a key into the open notify form.
    fn handle_notify_key(&mut self, key: KeyInput, now: Instant) -> Vec<AppAction> {
        if key == KeyInput::Esc {
            return self.close_notify();
        }

        let Screen::Zen { notify: Some(form), .. } = &mut self.screen else {
            return vec![];
        };
        match key {
            KeyInput::Char(c) => form.insert(c),
            KeyInput::Backspace => form.backspace(),
            KeyInput::Delete => form.delete(),
            KeyInput::Left => form.left(),
            KeyInput::Right => form.right(),
            KeyInput::Home => form.home(),
            KeyInput::End => form.end(),
            KeyInput::Enter => form.submit(now),
            KeyInput::Esc | KeyInput::Tab | KeyInput::Up | KeyInput::Down => return vec![],
        }
        vec![AppAction::Render]
    }

    /// Whether the notify popup is open.
    fn notify_open(&self) -> bool {
        matches!(self.screen, Screen::Zen { notify: Some(_), .. })
    }

    /// Current screen.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether the hero exit animation is in flight.
    pub fn is_exiting(&self) -> bool {
        matches!(self.screen, Screen::Hero { exit: Some(_), .. })
    }

    /// Snow overlay enabled.
    pub fn snow_enabled(&self) -> bool {
        self.snow
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Whether any animation wants per-frame ticks.
    ///
    /// The hero card accrues for as long as it is mounted and snow drifts
    /// whenever enabled, so the only settled state is a snowless zen screen
    /// with a parked bar and no pending confirmation.
    pub fn needs_frame(&self) -> bool {
        if self.snow {
            return true;
        }
        match &self.screen {
            Screen::Hero { .. } | Screen::Loading { .. } => true,
            Screen::Zen { progress, notify } => {
                !progress.is_complete() || notify.as_ref().is_some_and(NotifyForm::is_submitted)
            },
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
