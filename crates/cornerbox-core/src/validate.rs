//! Constraint check applied before a candidate hole is committed.

use crate::geometry::Boundary;
use kurbo::{Point, Size};

/// Check if a hole with the given geometry may be committed.
///
/// The hole must lie fully inside `boundary` and both edges must be strictly
/// longer than twice the corner radius.
pub fn is_valid(offset: Point, size: Size, boundary: &Boundary, corner_radius: f64) -> bool {
    let min = corner_radius * 2.0;
    offset.x >= boundary.offset.x
        && offset.y >= boundary.offset.y
        && offset.x + size.width <= boundary.max_x()
        && offset.y + size.height <= boundary.max_y()
        && size.width > min
        && size.height > min
}
