//! CornerBox Core Library
//!
//! Platform-agnostic gesture interpretation and geometry constraints for a
//! draggable, resizable "hole" with arc-decorated corners.

pub mod animation;
pub mod config;
pub mod decoration;
pub mod drag;
pub mod geometry;
pub mod touch;
pub mod validate;
pub mod widget;

pub use animation::{Easing, HoleAnimation, Lerp, Tween};
pub use config::{ConfigError, HoleConfig};
pub use decoration::{DecorationStyle, DrawCommand, SerializableColor, decoration_commands};
pub use drag::apply_drag;
pub use geometry::{Boundary, Corner, DEFAULT_CORNER_RADIUS, Hole, min_size};
pub use touch::{TouchMode, classify_touch};
pub use validate::is_valid;
pub use widget::{CommitResult, GestureEvent, HoleWidget, SubscriptionId};
