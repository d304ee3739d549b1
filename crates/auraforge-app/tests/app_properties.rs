//! Property-based tests for the App state machine.
//!
//! Tests verify that invariants hold under arbitrary interaction
//! sequences: the XP window, the progress bounds, and the launch
//! sequence's screen graph.

use std::time::{Duration, Instant};

use auraforge_app::anim::{ProgressFill, RankCard};
use auraforge_app::{App, AppEvent, KeyInput, NotifyForm, Screen};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// One scripted interaction: time passing or a key press.
#[derive(Debug, Clone, Copy)]
enum Op {
    Tick { advance_ms: u64 },
    Key(KeyInput),
}

/// Generate random interactions, biased toward ticks so animations run.
fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0u64..1200).prop_map(|advance_ms| Op::Tick { advance_ms }),
        2 => key_strategy().prop_map(Op::Key),
    ]
}

/// Generate key presses covering commands, text, and editing keys.
fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        5 => prop::char::range('a', 'z').prop_map(KeyInput::Char),
        1 => Just(KeyInput::Char('@')),
        1 => Just(KeyInput::Enter),
        1 => Just(KeyInput::Esc),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// Generate editing keys for the notify form, including non-ASCII text.
fn edit_key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        5 => prop::char::any().prop_map(KeyInput::Char),
        2 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Delete),
        2 => Just(KeyInput::Left),
        2 => Just(KeyInput::Right),
        1 => Just(KeyInput::Home),
        1 => Just(KeyInput::End),
    ]
}

/// Feed one interaction into the app, advancing the simulated clock.
fn apply(app: &mut App, now: &mut Instant, op: Op) {
    match op {
        Op::Tick { advance_ms } => {
            *now += Duration::from_millis(advance_ms);
            let _ = app.handle(AppEvent::Tick { now: *now });
        },
        Op::Key(key) => {
            let _ = app.handle(AppEvent::Key { key, now: *now });
        },
    }
}

/// Check every cross-screen invariant on the current state.
fn check_invariants(app: &App) -> Result<(), TestCaseError> {
    match app.screen() {
        Screen::Hero { card, .. } => {
            prop_assert!(card.xp() < RankCard::LEVEL_THRESHOLD, "xp escaped window: {}", card.xp());
            prop_assert!(card.level() >= 1);
            prop_assert!(!card.title().is_empty());
        },
        Screen::Loading { .. } => {},
        Screen::Zen { progress, notify } => {
            prop_assert!(progress.value() >= 0.0);
            prop_assert!(progress.value() <= ProgressFill::TARGET);
            if let Some(form) = notify {
                // Submits are only accepted with a non-empty address.
                prop_assert!(!form.is_submitted() || !form.email().is_empty());
            }
        },
    }
    Ok(())
}

/// Straight-line model of XP accrual: one step per whole period.
fn xp_oracle(steps: u64) -> (u32, u32) {
    let mut xp = RankCard::INITIAL_XP;
    let mut level = 1u32;
    for _ in 0..steps {
        xp += RankCard::XP_STEP;
        if xp >= RankCard::LEVEL_THRESHOLD {
            xp = 0;
            level += 1;
        }
    }
    (xp, level)
}

proptest! {
    #[test]
    fn prop_invariants_hold_under_arbitrary_ops(
        ops in prop::collection::vec(op_strategy(), 0..80),
    ) {
        let mut app = App::new();
        let mut now = Instant::now();

        for op in ops {
            apply(&mut app, &mut now, op);
            check_invariants(&app)?;
        }
    }

    #[test]
    fn prop_screen_changes_follow_launch_graph(
        ops in prop::collection::vec(op_strategy(), 1..80),
    ) {
        let mut app = App::new();
        let mut now = Instant::now();

        for op in ops {
            let before = app.screen().label();
            apply(&mut app, &mut now, op);
            let after = app.screen().label();

            // Forward edges only advance on ticks; the only way back to
            // hero is an explicit back command.
            let legal = match (before, after) {
                _ if before == after => true,
                ("hero", "loading") | ("loading", "zen") => matches!(op, Op::Tick { .. }),
                (_, "hero") => matches!(op, Op::Key(KeyInput::Char('b') | KeyInput::Esc)),
                _ => false,
            };
            prop_assert!(legal, "illegal transition {} -> {} via {:?}", before, after, op);
        }
    }

    #[test]
    fn prop_progress_monotone_on_zen(
        deltas in prop::collection::vec(0u64..2000, 1..50),
    ) {
        let t0 = Instant::now();
        let mut app = App::new();
        let _ = app.launch(t0);
        let _ = app.handle(AppEvent::Tick { now: t0 + Duration::from_millis(800) });
        let mut now = t0 + Duration::from_millis(850);
        let _ = app.handle(AppEvent::Tick { now });

        let mut prev = 0.0_f64;
        for delta in deltas {
            now += Duration::from_millis(delta);
            let _ = app.handle(AppEvent::Tick { now });

            prop_assert!(matches!(app.screen(), Screen::Zen { .. }), "ticks alone left zen");
            if let Screen::Zen { progress, .. } = app.screen() {
                prop_assert!(progress.value() >= prev, "fill moved backwards");
                prop_assert!(progress.value() <= ProgressFill::TARGET);
                prev = progress.value();
            }
        }
    }

    #[test]
    fn prop_xp_matches_step_oracle(
        deltas in prop::collection::vec(0u64..5000, 1..40),
    ) {
        let t0 = Instant::now();
        let mut app = App::new();
        // First tick anchors the cadence without accruing.
        let _ = app.handle(AppEvent::Tick { now: t0 });

        let mut elapsed_ms = 0u64;
        for delta in deltas {
            elapsed_ms += delta;
            let _ = app.handle(AppEvent::Tick { now: t0 + Duration::from_millis(elapsed_ms) });

            let (xp, level) = xp_oracle(elapsed_ms / 100);
            prop_assert!(matches!(app.screen(), Screen::Hero { .. }), "ticks alone left hero");
            if let Screen::Hero { card, .. } = app.screen() {
                prop_assert_eq!(card.xp(), xp);
                prop_assert_eq!(card.level(), level);
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_notify_editing_keeps_cursor_on_boundary(
        keys in prop::collection::vec(edit_key_strategy(), 0..60),
    ) {
        let mut form = NotifyForm::new();

        for key in keys {
            match key {
                KeyInput::Char(c) => form.insert(c),
                KeyInput::Backspace => form.backspace(),
                KeyInput::Delete => form.delete(),
                KeyInput::Left => form.left(),
                KeyInput::Right => form.right(),
                KeyInput::Home => form.home(),
                KeyInput::End => form.end(),
                _ => {},
            }
            prop_assert!(form.cursor_column() <= form.email().chars().count());
        }
    }
}
