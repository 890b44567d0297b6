//! Per-move transforms that turn a drag delta into a candidate hole.
//!
//! Each transform clamps only the edges it drags. The result still has to
//! pass [`crate::validate::is_valid`] before it is committed, since a corner
//! drag can push the opposite edge past the boundary.

use crate::geometry::{Boundary, Hole, min_size};
use crate::touch::TouchMode;
use kurbo::{Point, Size, Vec2};

/// Compute the candidate hole for one drag step in the given mode.
pub fn apply_drag(
    mode: TouchMode,
    hole: &Hole,
    delta: Vec2,
    boundary: &Boundary,
    corner_radius: f64,
) -> Hole {
    let min = min_size(corner_radius);
    let Hole { offset, size } = *hole;

    match mode {
        TouchMode::TopLeft => Hole::new(
            Point::new(
                at_least(offset.x + delta.x, boundary.offset.x),
                at_least(offset.y + delta.y, boundary.offset.y),
            ),
            Size::new(
                at_least(size.width - delta.x, min),
                at_least(size.height - delta.y, min),
            ),
        ),
        TouchMode::TopRight => Hole::new(
            Point::new(offset.x, at_least(offset.y + delta.y, boundary.offset.y)),
            Size::new(
                at_least(size.width + delta.x, min),
                at_least(size.height - delta.y, min),
            ),
        ),
        TouchMode::BottomLeft => Hole::new(
            Point::new(at_least(offset.x + delta.x, boundary.offset.x), offset.y),
            Size::new(
                at_least(size.width - delta.x, min),
                at_least(size.height + delta.y, min),
            ),
        ),
        TouchMode::BottomRight => Hole::new(
            offset,
            Size::new(
                at_least(size.width + delta.x, min),
                at_least(size.height + delta.y, min),
            ),
        ),
        TouchMode::Center => Hole::new(
            Point::new(
                clamp_to_range(offset.x + delta.x, boundary.offset.x, boundary.max_x() - size.width),
                clamp_to_range(offset.y + delta.y, boundary.offset.y, boundary.max_y() - size.height),
            ),
            size,
        ),
        TouchMode::None => *hole,
    }
}

/// Raise `value` to at least `lo`. NaN is passed through so the validator
/// rejects the candidate.
fn at_least(value: f64, lo: f64) -> f64 {
    if value.is_nan() { value } else { value.max(lo) }
}

/// Clamp `value` into `[lo, hi]` without panicking on an inverted range.
///
/// `f64::clamp` asserts `lo <= hi`. Before the first layout the boundary is
/// empty and the range inverts; the upper bound then wins and the validator
/// rejects the candidate. NaN is passed through like in [`at_least`].
fn clamp_to_range(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() { value } else { value.max(lo).min(hi) }
}
