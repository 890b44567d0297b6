//! Touch classification at the start of a drag.

use crate::geometry::{Corner, Hole, is_near_corner};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The manipulation a drag performs. Fixed when the drag starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchMode {
    /// The drag started outside the hole; moves are ignored.
    #[default]
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Move the whole hole.
    Center,
}

impl TouchMode {
    /// Resize mode for a corner.
    pub fn from_corner(corner: Corner) -> Self {
        match corner {
            Corner::TopLeft => TouchMode::TopLeft,
            Corner::TopRight => TouchMode::TopRight,
            Corner::BottomLeft => TouchMode::BottomLeft,
            Corner::BottomRight => TouchMode::BottomRight,
        }
    }

    /// The corner being dragged, if this is a resize mode.
    pub fn corner(self) -> Option<Corner> {
        match self {
            TouchMode::TopLeft => Some(Corner::TopLeft),
            TouchMode::TopRight => Some(Corner::TopRight),
            TouchMode::BottomLeft => Some(Corner::BottomLeft),
            TouchMode::BottomRight => Some(Corner::BottomRight),
            TouchMode::None | TouchMode::Center => None,
        }
    }

    /// Check if a drag in this mode changes anything.
    pub fn is_active(self) -> bool {
        self != TouchMode::None
    }
}

/// Classify where a drag started relative to the hole.
///
/// Corner zones win over the interior so resizing is preferred where the
/// two overlap.
pub fn classify_touch(point: Point, hole: &Hole, corner_radius: f64) -> TouchMode {
    for corner in Corner::ALL {
        if is_near_corner(point, hole.corner(corner), corner_radius) {
            return TouchMode::from_corner(corner);
        }
    }
    if hole.contains(point) {
        TouchMode::Center
    } else {
        TouchMode::None
    }
}
