//! Easing curves.

/// Quadratic ease-out: fast start, decelerating toward the end.
///
/// Maps `t` in `[0.0, 1.0]` to `[0.0, 1.0]` with `f(t) = t * (2 - t)`.
/// Callers clamp `t` before applying the curve.
pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
    }

    #[test]
    fn midpoint_value() {
        // 0.5 * (2 - 0.5) = 0.75, exact in binary floating point
        assert_eq!(ease_out_quad(0.5), 0.75);
    }

    #[test]
    fn monotonically_increasing_on_unit_interval() {
        let mut prev = ease_out_quad(0.0);
        for i in 1..=100 {
            let t = f64::from(i) / 100.0;
            let v = ease_out_quad(t);
            assert!(v >= prev, "curve decreased at t={t}");
            prev = v;
        }
    }

    #[test]
    fn front_loaded_relative_to_linear() {
        for i in 1..100 {
            let t = f64::from(i) / 100.0;
            assert!(ease_out_quad(t) > t, "ease-out should lead linear at t={t}");
        }
    }
}
