// Copyright 2025 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves and time-sampled tweens.
//!
//! Everything here is sampled against millisecond timestamps supplied by the
//! host; nothing schedules callbacks or owns a clock.
//!
//! ```
//! use tactile_ripple::anim::{Easing, Tween};
//!
//! let mut alpha = Tween::settled(0.0);
//! alpha.retarget(1000, 1.0, 200, Easing::Linear);
//! assert_eq!(alpha.value_at(1100), 0.5);
//! assert!(alpha.is_finished(1200));
//! ```

/// Easing curves applied to a linear fraction in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-in, `(0.42, 0, 1, 1)`.
    EaseIn,
    /// Cubic ease-out, `(0, 0, 0.58, 1)`.
    EaseOut,
    /// Cubic ease-in-out, `(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Material standard curve, `(0.4, 0, 0.2, 1)`.
    FastOutSlowIn,
    /// Ease-out that overshoots the target before settling, `(0.34, 1.56, 0.64, 1)`.
    ///
    /// Stands in for a lightly damped spring.
    OvershootOut,
    /// Arbitrary cubic Bézier timing curve with control points `(x1, y1, x2, y2)`.
    ///
    /// `x1` and `x2` must lie in `[0, 1]` for the curve to be a function of time.
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Apply the curve to a linear fraction. Inputs are clamped to `[0, 1]`.
    pub fn transform(self, fraction: f64) -> f64 {
        let x = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        match self {
            Self::Linear => x,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, x),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, x),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, x),
            Self::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, x),
            Self::OvershootOut => cubic_bezier(0.34, 1.56, 0.64, 1.0, x),
            Self::CubicBezier(x1, y1, x2, y2) => {
                cubic_bezier(x1.clamp(0.0, 1.0), y1, x2.clamp(0.0, 1.0), y2, x)
            }
        }
    }
}

/// One coordinate of a unit cubic Bézier with end points 0 and 1.
fn bezier_coord(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * t * p1 + 3.0 * mt * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f64, p2: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    3.0 * mt * mt * p1 + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Evaluate a timing curve at time fraction `x` by solving for the curve parameter.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    const EPSILON: f64 = 1e-7;

    // Newton first; it converges in a handful of steps for typical curves.
    let mut t = x;
    for _ in 0..8 {
        let err = bezier_coord(x1, x2, t) - x;
        if err.abs() < EPSILON {
            return bezier_coord(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < 1e-6 {
            break;
        }
        t = (t - err / slope).clamp(0.0, 1.0);
    }

    // Flat regions: bisection is slower but always converges.
    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..48 {
        let value = bezier_coord(x1, x2, t);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }
    bezier_coord(y1, y2, t)
}

/// A scalar animated from one value to another over a time window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    start: u64,
    duration: u64,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value`.
    pub const fn settled(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0,
            duration: 0,
            easing: Easing::Linear,
        }
    }

    /// A tween from `from` to `to` starting at `start` and lasting `duration` milliseconds.
    pub const fn new(from: f64, to: f64, start: u64, duration: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress_at(&self, now: u64) -> f64 {
        if self.duration == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed as f64 / self.duration as f64).min(1.0)
    }

    /// Eased value at `now`.
    pub fn value_at(&self, now: u64) -> f64 {
        let progress = self.progress_at(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.transform(progress)
    }

    /// The value this tween settles at.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Timestamp at which the tween reaches its target.
    pub fn end(&self) -> u64 {
        self.start.saturating_add(self.duration)
    }

    /// Whether the tween has reached its target at `now`.
    pub fn is_finished(&self, now: u64) -> bool {
        now >= self.end()
    }

    /// Start animating towards `to` from wherever the tween is at `now`.
    pub fn retarget(&mut self, now: u64, to: f64, duration: u64, easing: Easing) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Jump to `value` without animating.
    pub fn snap(&mut self, value: f64) {
        *self = Self::settled(value);
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::settled(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::FastOutSlowIn,
        Easing::OvershootOut,
    ];

    #[test]
    fn curves_hit_their_end_points() {
        for easing in ALL {
            assert_eq!(easing.transform(0.0), 0.0, "start of {easing:?}");
            assert_eq!(easing.transform(1.0), 1.0, "end of {easing:?}");
        }
    }

    #[test]
    fn inputs_are_clamped() {
        assert_eq!(Easing::EaseIn.transform(-1.0), 0.0);
        assert_eq!(Easing::EaseIn.transform(2.0), 1.0);
        assert_eq!(Easing::EaseIn.transform(f64::NAN), 0.0);
    }

    #[test]
    fn ease_in_lags_and_ease_out_leads() {
        assert!(Easing::EaseIn.transform(0.5) < 0.5, "ease-in starts slow");
        assert!(Easing::EaseOut.transform(0.5) > 0.5, "ease-out starts fast");
    }

    #[test]
    fn symmetric_curve_passes_through_midpoint() {
        let mid = Easing::EaseInOut.transform(0.5);
        assert!((mid - 0.5).abs() < 1e-4, "ease-in-out midpoint was {mid}");
    }

    #[test]
    fn overshoot_exceeds_target() {
        let peak = (1..100)
            .map(|i| Easing::OvershootOut.transform(f64::from(i) / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0, "overshoot curve peaked at {peak}");
    }

    #[test]
    fn linear_bezier_is_identity() {
        let easing = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let x = f64::from(i) / 10.0;
            assert!((easing.transform(x) - x).abs() < 1e-5, "at {x}");
        }
    }

    #[test]
    fn tween_samples_and_finishes() {
        let tween = Tween::new(10.0, 20.0, 100, 100, Easing::Linear);
        assert_eq!(tween.value_at(0), 10.0);
        assert_eq!(tween.value_at(150), 15.0);
        assert_eq!(tween.value_at(200), 20.0);
        assert!(!tween.is_finished(199));
        assert!(tween.is_finished(200));
    }

    #[test]
    fn zero_duration_is_already_finished() {
        let tween = Tween::new(0.0, 1.0, 50, 0, Easing::EaseOut);
        assert_eq!(tween.value_at(50), 1.0);
        assert!(tween.is_finished(50));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0, 1.0, 0, 200, Easing::Linear);
        tween.retarget(100, 0.0, 100, Easing::Linear);
        assert_eq!(tween.value_at(100), 0.5);
        assert_eq!(tween.value_at(150), 0.25);
        assert_eq!(tween.target(), 0.0);
    }

    #[test]
    fn snap_settles_immediately() {
        let mut tween = Tween::new(0.0, 1.0, 0, 200, Easing::Linear);
        tween.snap(0.75);
        assert_eq!(tween.value_at(0), 0.75);
        assert!(tween.is_finished(0));
    }
}
