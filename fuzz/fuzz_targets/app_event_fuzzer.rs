//! Fuzz target for the App state machine
//!
//! Drive arbitrary event sequences through every screen of the teaser.
//!
//! # Strategy
//!
//! - Keys: full key space, so command keys double as popup text input
//! - Ticks: arbitrary forward jumps from zero to about a minute
//! - Resizes: arbitrary dimensions including zero
//! - Mixed ordering so every screen sees every event kind
//!
//! # Invariants
//!
//! - Hero XP stays below the level threshold, level stays positive
//! - Rank title is never empty, no matter how far the level climbs
//! - Zen fill value stays inside [0, target]
//! - A submitted notify form always carries a non-empty email
//! - Screens only move along launch edges (hero -> loading -> zen on
//!   ticks) or reset to hero on a back key

#![no_main]

use std::time::{Duration, Instant};

use arbitrary::Arbitrary;
use auraforge_app::anim::{ProgressFill, RankCard};
use auraforge_app::{App, AppEvent, KeyInput, Screen};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Copy, Arbitrary)]
enum AppOp {
    Tick { advance_ms: u16 },
    Key(KeyChoice),
    Resize { cols: u16, rows: u16 },
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum KeyChoice {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

fuzz_target!(|ops: Vec<AppOp>| {
    let mut app = App::new();
    let mut now = Instant::now();

    for op in ops {
        let before = app.screen().label();
        let was_tick = matches!(op, AppOp::Tick { .. });
        let was_back_key = matches!(op, AppOp::Key(KeyChoice::Char('b') | KeyChoice::Esc));

        match op {
            AppOp::Tick { advance_ms } => {
                now += Duration::from_millis(u64::from(advance_ms));
                let _ = app.handle(AppEvent::Tick { now });
            }
            AppOp::Key(choice) => {
                let _ = app.handle(AppEvent::Key { key: convert_key(choice), now });
            }
            AppOp::Resize { cols, rows } => {
                let _ = app.handle(AppEvent::Resize(cols, rows));
            }
        }

        check_screen_invariants(&app);
        check_transition(before, app.screen().label(), was_tick, was_back_key);
    }
});

fn convert_key(choice: KeyChoice) -> KeyInput {
    match choice {
        KeyChoice::Char(c) => KeyInput::Char(c),
        KeyChoice::Enter => KeyInput::Enter,
        KeyChoice::Backspace => KeyInput::Backspace,
        KeyChoice::Delete => KeyInput::Delete,
        KeyChoice::Tab => KeyInput::Tab,
        KeyChoice::Esc => KeyInput::Esc,
        KeyChoice::Left => KeyInput::Left,
        KeyChoice::Right => KeyInput::Right,
        KeyChoice::Up => KeyInput::Up,
        KeyChoice::Down => KeyInput::Down,
        KeyChoice::Home => KeyInput::Home,
        KeyChoice::End => KeyInput::End,
    }
}

fn check_screen_invariants(app: &App) {
    match app.screen() {
        Screen::Hero { card, .. } => {
            assert!(card.xp() < RankCard::LEVEL_THRESHOLD, "xp {} past threshold", card.xp());
            assert!(card.level() >= 1, "level wrapped to {}", card.level());
            assert!(!card.title().is_empty(), "empty title at level {}", card.level());
        }
        Screen::Loading { .. } => {}
        Screen::Zen { progress, notify } => {
            assert!(progress.value() >= 0.0, "fill below zero: {}", progress.value());
            assert!(
                progress.value() <= ProgressFill::TARGET,
                "fill past target: {}",
                progress.value()
            );
            if let Some(form) = notify {
                if form.is_submitted() {
                    assert!(!form.email().is_empty(), "submitted with empty email");
                }
            }
        }
    }
}

fn check_transition(before: &str, after: &str, was_tick: bool, was_back_key: bool) {
    if before == after {
        return;
    }
    let legal = match (before, after) {
        ("hero", "loading") | ("loading", "zen") => was_tick,
        (_, "hero") => was_back_key,
        _ => false,
    };
    assert!(legal, "illegal transition {before} -> {after}");
}
