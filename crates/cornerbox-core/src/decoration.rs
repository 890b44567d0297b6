//! Draw commands for the overlay, the hole and its corner arcs.

use crate::geometry::{Corner, Hole};
use kurbo::{Point, Rect, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Black at 20% opacity.
    pub fn dim_black() -> Self {
        Self::new(0, 0, 0, 51)
    }

    /// White at 20% opacity.
    pub fn dim_white() -> Self {
        Self::new(255, 255, 255, 51)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Colors and stroke width of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorationStyle {
    /// Full-surface dimming layer.
    pub background: SerializableColor,
    /// Fill of the rounded hole.
    pub hole_fill: SerializableColor,
    /// Stroke color of the corner arcs.
    pub arc_color: SerializableColor,
    /// Stroke width of the corner arcs.
    pub arc_stroke_width: f64,
}

impl Default for DecorationStyle {
    fn default() -> Self {
        Self {
            background: SerializableColor::dim_black(),
            hole_fill: SerializableColor::dim_white(),
            arc_color: SerializableColor::white(),
            arc_stroke_width: 10.0,
        }
    }
}

/// A single drawing instruction, in surface coordinates.
#[derive(Debug, Clone, Copy)]
pub enum DrawCommand {
    /// Fill `rect` with `color`.
    Background { rect: Rect, color: Color },
    /// Fill a rounded rectangle.
    RoundedHole { rect: Rect, radius: f64, color: Color },
    /// Stroke a 90 degree arc inscribed in `bounds`.
    ///
    /// Angles are in degrees, clockwise from the positive x axis (y points down).
    CornerArc {
        corner: Corner,
        bounds: Rect,
        start_angle: f64,
        sweep_angle: f64,
        stroke_width: f64,
        color: Color,
    },
}

impl Corner {
    /// Start angle of the arc that faces outward from this corner.
    pub fn arc_start_angle(self) -> f64 {
        match self {
            Corner::TopLeft => 180.0,
            Corner::TopRight => 270.0,
            Corner::BottomLeft => 90.0,
            Corner::BottomRight => 0.0,
        }
    }

    /// Square of side `2 * corner_radius` tucked into this corner of `hole`.
    pub fn arc_bounds(self, hole: &Hole, corner_radius: f64) -> Rect {
        let side = corner_radius * 2.0;
        let Hole { offset, size } = *hole;
        let origin = match self {
            Corner::TopLeft => offset,
            Corner::TopRight => Point::new(offset.x + size.width - side, offset.y),
            Corner::BottomLeft => Point::new(offset.x, offset.y + size.height - side),
            Corner::BottomRight => Point::new(
                offset.x + size.width - side,
                offset.y + size.height - side,
            ),
        };
        Rect::from_origin_size(origin, Size::new(side, side))
    }
}

/// Build the draw commands for one frame.
///
/// `hole` should be the animated geometry, not the committed one.
pub fn decoration_commands(
    hole: &Hole,
    surface: Size,
    corner_radius: f64,
    style: &DecorationStyle,
) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(6);
    commands.push(DrawCommand::Background {
        rect: Rect::from_origin_size(Point::ZERO, surface),
        color: style.background.into(),
    });
    commands.push(DrawCommand::RoundedHole {
        rect: hole.as_rect(),
        radius: corner_radius,
        color: style.hole_fill.into(),
    });
    for corner in Corner::ALL {
        commands.push(DrawCommand::CornerArc {
            corner,
            bounds: corner.arc_bounds(hole, corner_radius),
            start_angle: corner.arc_start_angle(),
            sweep_angle: 90.0,
            stroke_width: style.arc_stroke_width,
            color: style.arc_color.into(),
        });
    }
    commands
}
