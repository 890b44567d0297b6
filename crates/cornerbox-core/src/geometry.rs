//! Hole and boundary geometry plus the hit-test helpers built on them.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Corner radius used when no configuration overrides it.
pub const DEFAULT_CORNER_RADIUS: f64 = 30.0;

/// Smallest edge length a hole may be clamped to while resizing.
pub fn min_size(corner_radius: f64) -> f64 {
    corner_radius * 2.0
}

/// Corner positions of the hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// All corners in hit-test priority order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];
}

/// The draggable, resizable hole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Top-left corner position.
    pub offset: Point,
    /// Width and height.
    pub size: Size,
}

impl Default for Hole {
    fn default() -> Self {
        Self {
            offset: Point::new(200.0, 200.0),
            size: Size::new(200.0, 200.0),
        }
    }
}

impl Hole {
    /// Create a new hole.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Get the hole as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::from_origin_size(self.offset, self.size)
    }

    /// Anchor point of a corner, used as the center of its hit zone.
    pub fn corner(&self, corner: Corner) -> Point {
        let Point { x, y } = self.offset;
        match corner {
            Corner::TopLeft => Point::new(x, y),
            Corner::TopRight => Point::new(x + self.size.width, y),
            Corner::BottomLeft => Point::new(x, y + self.size.height),
            Corner::BottomRight => Point::new(x + self.size.width, y + self.size.height),
        }
    }

    /// Check if a point lies inside the hole, edges included.
    ///
    /// `Rect::contains` excludes the far edges, so the bounds are compared
    /// directly.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.offset.x
            && point.x <= self.offset.x + self.size.width
            && point.y >= self.offset.y
            && point.y <= self.offset.y + self.size.height
    }
}

/// The area the hole has to stay inside.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub offset: Point,
    pub size: Size,
}

impl Boundary {
    /// Create a new boundary.
    pub fn new(offset: Point, size: Size) -> Self {
        Self { offset, size }
    }

    /// Right edge x coordinate.
    pub fn max_x(&self) -> f64 {
        self.offset.x + self.size.width
    }

    /// Bottom edge y coordinate.
    pub fn max_y(&self) -> f64 {
        self.offset.y + self.size.height
    }

    /// Whether the host has not reported a layout yet.
    pub fn is_empty(&self) -> bool {
        self.size.width <= 0.0 || self.size.height <= 0.0
    }
}

/// Check if `point` is within the grab zone of a corner anchor.
///
/// The zone is a circle of twice the corner radius, larger than the drawn arc.
pub fn is_near_corner(point: Point, anchor: Point, corner_radius: f64) -> bool {
    point.distance(anchor) <= corner_radius * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hole() {
        let hole = Hole::default();
        assert_eq!(hole.offset, Point::new(200.0, 200.0));
        assert_eq!(hole.size, Size::new(200.0, 200.0));
    }

    #[test]
    fn test_corner_anchors() {
        let hole = Hole::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(hole.corner(Corner::TopLeft), Point::new(10.0, 20.0));
        assert_eq!(hole.corner(Corner::TopRight), Point::new(110.0, 20.0));
        assert_eq!(hole.corner(Corner::BottomLeft), Point::new(10.0, 70.0));
        assert_eq!(hole.corner(Corner::BottomRight), Point::new(110.0, 70.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let hole = Hole::new(Point::new(0.0, 0.0), Size::new(100.0, 100.0));
        assert!(hole.contains(Point::new(0.0, 0.0)));
        assert!(hole.contains(Point::new(100.0, 100.0)));
        assert!(hole.contains(Point::new(50.0, 100.0)));
        assert!(!hole.contains(Point::new(100.1, 50.0)));
        assert!(!hole.contains(Point::new(-0.1, 50.0)));
    }

    #[test]
    fn test_near_corner_uses_double_radius() {
        let anchor = Point::new(100.0, 100.0);
        assert!(is_near_corner(Point::new(160.0, 100.0), anchor, 30.0));
        assert!(is_near_corner(Point::new(136.0, 148.0), anchor, 30.0));
        assert!(!is_near_corner(Point::new(160.1, 100.0), anchor, 30.0));
    }

    #[test]
    fn test_empty_boundary() {
        assert!(Boundary::default().is_empty());
        assert!(!Boundary::new(Point::ZERO, Size::new(800.0, 600.0)).is_empty());
    }
}
