//! Observable view state.
//!
//! This module defines the [`Screen`] enum, the application's single source
//! of truth for what is on screen. Each variant owns the animation state
//! that only exists while that screen is mounted, so replacing the variant
//! drops the animators with it. That ownership rule is the whole teardown
//! story: there are no timer handles to forget to cancel.

use std::time::{Duration, Instant};

use crate::NotifyForm;
use crate::anim::{ProgressFill, RankCard};

/// In-flight hero exit animation, started by a launch.
#[derive(Debug, Clone, Copy)]
pub struct LaunchExit {
    started_at: Instant,
}

impl LaunchExit {
    /// How long the hero exit animation plays before the screen flips.
    pub const DURATION: Duration = Duration::from_millis(800);

    /// Start the exit at `now`.
    pub fn new(now: Instant) -> Self {
        Self { started_at: now }
    }

    /// Whether the exit animation has run its course.
    pub fn is_done(&self, now: Instant) -> bool {
        now.duration_since(self.started_at) >= Self::DURATION
    }
}

/// The three screens of the teaser.
///
/// Launch sequencing moves strictly hero, loading, zen, advancing at most
/// one stage per tick so each stage is observable for at least one frame.
/// Going back rebuilds a fresh hero variant.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Landing screen with the animated rank card.
    Hero {
        /// Level/XP card, fresh on every mount.
        card: RankCard,
        /// Exit animation, present while a launch is in flight.
        exit: Option<LaunchExit>,
    },

    /// Transient blank frame between hero and zen.
    Loading {
        /// When the loading hold ends and zen takes over.
        zen_at: Instant,
    },

    /// "Coming soon" screen with the progress fill.
    Zen {
        /// One-shot progress bar animation.
        progress: ProgressFill,
        /// Email capture popup, present while open.
        notify: Option<NotifyForm>,
    },
}

impl Screen {
    /// How long the blank loading frame holds before settling on zen.
    pub const LOADING_HOLD: Duration = Duration::from_millis(50);

    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hero { .. } => "hero",
            Self::Loading { .. } => "loading",
            Self::Zen { .. } => "zen",
        }
    }
}
