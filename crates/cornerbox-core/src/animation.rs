//! Easing utilities for smoothing the hole between committed states.
//!
//! Animations are driven by an external per-frame tick and only ever read
//! committed geometry. Nothing here feeds back into gesture handling.
//!
//! # Invariants
//!
//! 1. `value()` equals the start value at zero elapsed time and the target
//!    once `elapsed >= duration`.
//! 2. `retarget()` continues from the currently displayed value, so a new
//!    commit mid-flight never jumps.
//! 3. A zero duration snaps straight to the target.

use crate::geometry::Hole;
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default duration of the hole transition.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(50);

/// Linear interpolation between two values.
pub trait Lerp: Copy {
    /// Interpolate from `self` to `other`; `t` is 0.0 at `self` and 1.0 at `other`.
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Point::new(self.x.lerp(other.x, t), self.y.lerp(other.y, t))
    }
}

impl Lerp for Size {
    fn lerp(self, other: Self, t: f64) -> Self {
        Size::new(self.width.lerp(other.width, t), self.height.lerp(other.height, t))
    }
}

/// Easing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic bezier (0.4, 0.0, 0.2, 1.0): quick start, gentle settle.
    #[default]
    FastOutSlowIn,
    /// Arbitrary cubic bezier with control points (x1, y1) and (x2, y2).
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    /// Check that the curve is a usable timing function: finite control
    /// points with x coordinates in `[0, 1]`.
    pub fn is_valid(self) -> bool {
        match self {
            Easing::Linear | Easing::FastOutSlowIn => true,
            Easing::CubicBezier(x1, y1, x2, y2) => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
        }
    }

    /// Map progress in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluate a CSS-style cubic bezier timing curve at `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let bezier = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let bezier_slope = |p1: f64, p2: f64, s: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    // Newton iterations first, bisection if the slope flattens out
    let mut s = x;
    for _ in 0..8 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            return bezier(y1, y2, s);
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = x;
    for _ in 0..32 {
        let err = bezier(x1, x2, s) - x;
        if err.abs() < 1e-7 {
            break;
        }
        if err > 0.0 {
            hi = s;
        } else {
            lo = s;
        }
        s = (lo + hi) / 2.0;
    }
    bezier(y1, y2, s)
}

/// A single value easing toward a target over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween<T: Lerp> {
    start: T,
    target: T,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// Create a tween resting at `value`.
    pub fn new(value: T, duration: Duration) -> Self {
        Self {
            start: value,
            target: value,
            duration,
            elapsed: duration,
            easing: Easing::default(),
        }
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current interpolated value.
    pub fn value(&self) -> T {
        if self.is_finished() {
            return self.target;
        }
        self.start.lerp(self.target, self.easing.apply(self.progress()))
    }

    /// Value the tween is heading to.
    pub fn target(&self) -> T {
        self.target
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Check if the target has been reached.
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Start a new transition from the current value toward `target`.
    pub fn retarget(&mut self, target: T) {
        self.start = self.value();
        self.target = target;
        self.elapsed = Duration::ZERO;
    }
}

/// Offset and size tweens for the displayed hole.
#[derive(Debug, Clone, Copy)]
pub struct HoleAnimation {
    offset: Tween<Point>,
    size: Tween<Size>,
}

impl HoleAnimation {
    /// Create an animation resting at `hole`.
    pub fn new(hole: Hole, duration: Duration) -> Self {
        Self {
            offset: Tween::new(hole.offset, duration),
            size: Tween::new(hole.size, duration),
        }
    }

    /// Set the easing curve for both tweens.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.offset = self.offset.with_easing(easing);
        self.size = self.size.with_easing(easing);
        self
    }

    /// Retarget toward a newly committed hole.
    pub fn retarget(&mut self, hole: Hole) {
        self.offset.retarget(hole.offset);
        self.size.retarget(hole.size);
    }

    /// Advance both tweens by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.offset.advance(dt);
        self.size.advance(dt);
    }

    /// Geometry to draw this frame.
    pub fn animated(&self) -> Hole {
        Hole::new(self.offset.value(), self.size.value())
    }

    /// Check if both tweens have settled.
    pub fn is_finished(&self) -> bool {
        self.offset.is_finished() && self.size.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-6;

    #[test]
    fn test_easing_endpoints() {
        for easing in [Easing::Linear, Easing::FastOutSlowIn, Easing::CubicBezier(0.25, 0.1, 0.25, 1.0)] {
            assert!(easing.apply(0.0).abs() < EPS);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_fast_out_slow_in_is_monotonic_and_ahead_of_linear() {
        let mut last = 0.0;
        for i in 1..=20 {
            let t = i as f64 / 20.0;
            let v = Easing::FastOutSlowIn.apply(t);
            assert!(v >= last - EPS);
            last = v;
        }
        assert!(Easing::FastOutSlowIn.apply(0.5) > 0.5);
    }

    #[test]
    fn test_linear_cubic_bezier_matches_linear() {
        let easing = Easing::CubicBezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert!((easing.apply(t) - t).abs() < 1e-4);
        }
    }

    #[test]
    fn test_tween_starts_at_rest() {
        let tween = Tween::new(5.0, Duration::from_millis(50));
        assert!(tween.is_finished());
        assert!((tween.value() - 5.0).abs() < EPS);
    }

    #[test]
    fn test_tween_linear_progress() {
        let mut tween = Tween::new(0.0, Duration::from_millis(100)).with_easing(Easing::Linear);
        tween.retarget(10.0);
        assert!(tween.value().abs() < EPS);

        tween.advance(Duration::from_millis(25));
        assert!((tween.value() - 2.5).abs() < EPS);

        tween.advance(Duration::from_millis(500));
        assert!(tween.is_finished());
        assert!((tween.value() - 10.0).abs() < EPS);
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut tween = Tween::new(0.0, Duration::from_millis(100)).with_easing(Easing::Linear);
        tween.retarget(10.0);
        tween.advance(Duration::from_millis(50));
        tween.retarget(20.0);
        assert!((tween.value() - 5.0).abs() < EPS);
        assert!((tween.target() - 20.0).abs() < EPS);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut tween = Tween::new(Point::ZERO, Duration::ZERO);
        tween.retarget(Point::new(3.0, 4.0));
        assert_eq!(tween.value(), Point::new(3.0, 4.0));
    }

    #[test]
    fn test_easing_validity() {
        assert!(Easing::FastOutSlowIn.is_valid());
        assert!(Easing::CubicBezier(0.25, 1.5, 0.75, -0.5).is_valid());
        assert!(!Easing::CubicBezier(1.2, 0.0, 0.5, 1.0).is_valid());
        assert!(!Easing::CubicBezier(0.2, f64::NAN, 0.5, 1.0).is_valid());
    }

    #[test]
    fn test_easing_json() {
        let easing: Easing = serde_json::from_str(r#""fast_out_slow_in""#).unwrap();
        assert_eq!(easing, Easing::FastOutSlowIn);
        let easing: Easing = serde_json::from_str(r#"{ "cubic_bezier": [0.4, 0.0, 0.2, 1.0] }"#).unwrap();
        assert_eq!(easing, Easing::CubicBezier(0.4, 0.0, 0.2, 1.0));
    }

    #[test]
    fn test_hole_animation() {
        let mut anim = HoleAnimation::new(Hole::default(), Duration::from_millis(50)).with_easing(Easing::Linear);
        let target = Hole::new(Point::new(300.0, 200.0), Size::new(100.0, 200.0));
        anim.retarget(target);
        assert!(!anim.is_finished());

        anim.advance(Duration::from_millis(25));
        let mid = anim.animated();
        assert!((mid.offset.x - 250.0).abs() < EPS);
        assert!((mid.size.width - 150.0).abs() < EPS);

        anim.advance(Duration::from_millis(25));
        assert!(anim.is_finished());
        assert_eq!(anim.animated(), target);
    }
}
