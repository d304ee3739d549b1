//! Repeating XP accumulator for the hero rank card.
//!
//! The card accrues XP on a fixed cadence for as long as the hero screen is
//! mounted. Crossing the level threshold wraps XP to zero and bumps the
//! level in the same update, so observers never see XP at or past the
//! threshold. Remounting the hero screen starts over from the initial
//! values.

use std::time::{Duration, Instant};

/// Tier titles for levels 1 through 10.
const TIER_TITLES: [&str; 10] =
    ["Seed", "Scout", "Awaken", "Hunter", "Hacker", "Leader", "Champ", "Titan", "Prime", "Legend"];

/// Title for every level past the named tiers.
const ETERNAL_TITLE: &str = "Eternal";

/// Animated level/XP card shown on the hero screen.
///
/// Accrual is tick-driven: each [`tick`](Self::tick) applies every whole
/// step period elapsed since the last applied step, so late ticks catch up
/// rather than losing XP.
#[derive(Debug, Clone)]
pub struct RankCard {
    xp: u32,
    level: u32,
    /// Boundary of the last applied accrual step. `None` until the first
    /// tick anchors the cadence.
    last_step: Option<Instant>,
}

impl RankCard {
    /// XP gained per accrual step.
    pub const XP_STEP: u32 = 2;
    /// Time between accrual steps.
    pub const STEP_PERIOD: Duration = Duration::from_millis(100);
    /// XP value that triggers a level-up and wrap.
    pub const LEVEL_THRESHOLD: u32 = 1000;
    /// XP at mount.
    pub const INITIAL_XP: u32 = 850;

    /// Create a freshly mounted card.
    pub fn new() -> Self {
        Self { xp: Self::INITIAL_XP, level: 1, last_step: None }
    }

    /// Advance accrual to `now`.
    ///
    /// The first tick anchors the step cadence without accruing. Later
    /// ticks apply one step per whole period elapsed, re-checking the wrap
    /// rule after each step so `xp` never rests at or above the threshold.
    pub fn tick(&mut self, now: Instant) {
        let Some(mut last) = self.last_step else {
            self.last_step = Some(now);
            return;
        };

        while now.duration_since(last) >= Self::STEP_PERIOD {
            last += Self::STEP_PERIOD;
            self.xp += Self::XP_STEP;
            if self.xp >= Self::LEVEL_THRESHOLD {
                self.xp = 0;
                self.level += 1;
                tracing::debug!(level = self.level, "rank card leveled up");
            }
        }
        self.last_step = Some(last);
    }

    /// Current XP, always below [`Self::LEVEL_THRESHOLD`].
    pub fn xp(&self) -> u32 {
        self.xp
    }

    /// Current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Tier title for the current level.
    ///
    /// Levels 1 through 10 map to the named tiers; everything above maps
    /// to the terminal title.
    pub fn title(&self) -> &'static str {
        let idx = self.level.saturating_sub(1) as usize;
        TIER_TITLES.get(idx).copied().unwrap_or(ETERNAL_TITLE)
    }

    /// XP progress toward the next level in `[0.0, 1.0)`.
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.xp) / f64::from(Self::LEVEL_THRESHOLD)
    }
}

impl Default for RankCard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(n: u32) -> Duration {
        RankCard::STEP_PERIOD * n
    }

    #[test]
    fn mounts_at_initial_values() {
        let card = RankCard::new();

        assert_eq!(card.xp(), 850);
        assert_eq!(card.level(), 1);
        assert_eq!(card.title(), "Seed");
    }

    #[test]
    fn first_tick_anchors_without_accruing() {
        let t0 = Instant::now();
        let mut card = RankCard::new();

        card.tick(t0);
        assert_eq!(card.xp(), 850);

        card.tick(t0 + steps(1));
        assert_eq!(card.xp(), 852);
    }

    #[test]
    fn late_tick_catches_up_whole_steps() {
        let t0 = Instant::now();
        let mut card = RankCard::new();
        card.tick(t0);

        // 1050ms covers ten whole steps; the trailing 50ms waits.
        card.tick(t0 + steps(10) + RankCard::STEP_PERIOD / 2);
        assert_eq!(card.xp(), 870);

        // The half period carries over to the next tick.
        card.tick(t0 + steps(11));
        assert_eq!(card.xp(), 872);
    }

    #[test]
    fn wrap_is_atomic() {
        let t0 = Instant::now();
        let mut card = RankCard::new();
        card.xp = 998;
        card.last_step = Some(t0);

        card.tick(t0 + steps(1));

        assert_eq!(card.xp(), 0);
        assert_eq!(card.level(), 2);
    }

    #[test]
    fn reaches_wrap_from_mount() {
        let t0 = Instant::now();
        let mut card = RankCard::new();
        card.tick(t0);

        // 850 + 75 * 2 = 1000 on the 75th step, which wraps in-place.
        card.tick(t0 + steps(75));

        assert_eq!(card.xp(), 0);
        assert_eq!(card.level(), 2);

        card.tick(t0 + steps(76));
        assert_eq!(card.xp(), 2);
    }

    #[test]
    fn xp_never_observable_at_threshold() {
        let t0 = Instant::now();
        let mut card = RankCard::new();
        card.tick(t0);

        for n in 1..=2000 {
            card.tick(t0 + steps(n));
            assert!(card.xp() < RankCard::LEVEL_THRESHOLD);
        }
        assert!(card.level() > 1);
    }

    #[test]
    fn titles_cover_all_levels() {
        let mut card = RankCard::new();

        let expected = [
            (1, "Seed"),
            (2, "Scout"),
            (3, "Awaken"),
            (4, "Hunter"),
            (5, "Hacker"),
            (6, "Leader"),
            (7, "Champ"),
            (8, "Titan"),
            (9, "Prime"),
            (10, "Legend"),
            (11, "Eternal"),
            (1000, "Eternal"),
        ];
        for (level, title) in expected {
            card.level = level;
            assert_eq!(card.title(), title, "level {level}");
        }
    }

    #[test]
    fn progress_ratio_reflects_xp() {
        let card = RankCard::new();
        assert_eq!(card.progress_ratio(), 0.85);
    }
}
