//! One-shot eased progress fill.
//!
//! Drives the zen screen's progress bar: after a short arming delay the bar
//! fills along a quadratic ease-out curve until it reaches its target, then
//! holds there. The fill runs exactly once per [`ProgressFill`] value; a
//! fresh zen screen gets a fresh fill.

use std::time::{Duration, Instant};

use crate::anim::ease_out_quad;

/// One-shot animated fill toward a fixed target percentage.
///
/// Owned by the zen screen. Advances only through [`tick`](Self::tick), so
/// dropping the screen is all the cancellation there is.
#[derive(Debug, Clone)]
pub struct ProgressFill {
    /// When the fill was armed (zen screen entry).
    armed_at: Instant,
    /// Timeline anchor, captured on the first tick past the arming delay.
    ///
    /// Anchoring to the first observed tick rather than the nominal delay
    /// expiry means a sluggish first frame stretches the animation instead
    /// of truncating it.
    started_at: Option<Instant>,
    /// Current fill value in percent, `0.0..=TARGET`.
    value: f64,
}

impl ProgressFill {
    /// Final fill value in percent. The bar parks here.
    pub const TARGET: f64 = 70.0;
    /// Delay between arming and the timeline anchor.
    pub const START_DELAY: Duration = Duration::from_millis(500);
    /// Duration of the fill from anchor to target.
    pub const DURATION: Duration = Duration::from_millis(6000);

    /// Create a fill armed at `armed_at`.
    pub fn new(armed_at: Instant) -> Self {
        Self { armed_at, started_at: None, value: 0.0 }
    }

    /// Advance the fill to `now`.
    ///
    /// Ticks during the arming delay do nothing. The first tick at or past
    /// the delay anchors the timeline; later ticks interpolate along the
    /// ease-out curve and clamp at the target.
    pub fn tick(&mut self, now: Instant) {
        let started_at = if let Some(at) = self.started_at {
            at
        } else {
            if now.duration_since(self.armed_at) < Self::START_DELAY {
                return;
            }
            self.started_at = Some(now);
            now
        };

        let elapsed = now.duration_since(started_at);
        let t = (elapsed.as_secs_f64() / Self::DURATION.as_secs_f64()).min(1.0);
        self.value = ease_out_quad(t) * Self::TARGET;
    }

    /// Current fill value in percent.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whole-percent display value (floor of [`value`](Self::value)).
    pub fn percent(&self) -> u16 {
        self.value as u16
    }

    /// Bar fill ratio in `[0.0, 1.0]` relative to a full 100% bar.
    pub fn ratio(&self) -> f64 {
        self.value / 100.0
    }

    /// Whether the fill has parked at the target.
    pub fn is_complete(&self) -> bool {
        self.value >= Self::TARGET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn ticks_during_arming_delay_do_nothing() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);

        fill.tick(t0);
        fill.tick(t0 + ms(499));

        assert_eq!(fill.value(), 0.0);
        assert!(fill.started_at.is_none());
    }

    #[test]
    fn first_tick_past_delay_anchors_timeline() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);

        // First frame arrives 200ms late; the timeline starts there.
        fill.tick(t0 + ms(700));
        assert_eq!(fill.started_at, Some(t0 + ms(700)));
        assert_eq!(fill.value(), 0.0);

        // Halfway through the fill measured from the anchor, not from t0.
        fill.tick(t0 + ms(700) + ms(3000));
        assert_eq!(fill.value(), 52.5);
    }

    #[test]
    fn midpoint_is_exact() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);

        fill.tick(t0 + ms(500));
        fill.tick(t0 + ms(500) + ms(3000));

        // t = 0.5, eased = 0.75, value = 0.75 * 70 = 52.5, all exact
        assert_eq!(fill.value(), 52.5);
        assert_eq!(fill.percent(), 52);
        assert!(!fill.is_complete());
    }

    #[test]
    fn reaches_target_exactly_and_holds() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);

        fill.tick(t0 + ms(500));
        fill.tick(t0 + ms(500) + ProgressFill::DURATION);

        assert_eq!(fill.value(), 70.0);
        assert!(fill.is_complete());

        // Ticks after completion stay parked at the target.
        fill.tick(t0 + ms(500) + ms(60_000));
        assert_eq!(fill.value(), 70.0);
        assert_eq!(fill.percent(), 70);
    }

    #[test]
    fn value_is_monotonic() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);
        let mut prev = fill.value();

        for step in 0..200 {
            fill.tick(t0 + ms(step * 50));
            assert!(fill.value() >= prev, "fill decreased at step {step}");
            prev = fill.value();
        }

        assert!(fill.is_complete());
    }

    #[test]
    fn ratio_tracks_value_against_full_bar() {
        let t0 = Instant::now();
        let mut fill = ProgressFill::new(t0);

        fill.tick(t0 + ms(500));
        fill.tick(t0 + ms(500) + ProgressFill::DURATION);

        assert_eq!(fill.ratio(), 0.7);
    }
}
