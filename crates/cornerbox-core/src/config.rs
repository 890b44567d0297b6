//! Widget configuration.

use crate::animation::{DEFAULT_ANIMATION_DURATION, Easing};
use crate::decoration::DecorationStyle;
use crate::geometry::{DEFAULT_CORNER_RADIUS, Hole, min_size};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for a [`crate::widget::HoleWidget`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoleConfig {
    /// Radius of the rounded corners and the drawn arcs.
    pub corner_radius: f64,
    /// Top-left corner of the hole at creation.
    pub initial_offset: Point,
    /// Size of the hole at creation.
    pub initial_size: Size,
    /// Duration of the transition between committed states, in milliseconds.
    pub animation_ms: u64,
    /// Curve of that transition.
    pub easing: Easing,
    /// Overlay colors and arc stroke.
    pub style: DecorationStyle,
}

impl Default for HoleConfig {
    fn default() -> Self {
        let hole = Hole::default();
        Self {
            corner_radius: DEFAULT_CORNER_RADIUS,
            initial_offset: hole.offset,
            initial_size: hole.size,
            animation_ms: DEFAULT_ANIMATION_DURATION.as_millis() as u64,
            easing: Easing::default(),
            style: DecorationStyle::default(),
        }
    }
}

impl HoleConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config from disk.
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&json)?;
        log::debug!("Loaded hole config from {}", path.display());
        Ok(config)
    }

    /// Check the values a widget relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.corner_radius.is_finite() || self.corner_radius <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "corner_radius must be positive, got {}",
                self.corner_radius
            )));
        }
        let min = min_size(self.corner_radius);
        if !(self.initial_size.width > min && self.initial_size.height > min) {
            return Err(ConfigError::Invalid(format!(
                "initial_size {}x{} must exceed {} on both axes",
                self.initial_size.width, self.initial_size.height, min
            )));
        }
        if !self.initial_offset.is_finite() {
            return Err(ConfigError::Invalid("initial_offset must be finite".to_string()));
        }
        if !self.easing.is_valid() {
            return Err(ConfigError::Invalid(format!(
                "easing control points out of range: {:?}",
                self.easing
            )));
        }
        let stroke = self.style.arc_stroke_width;
        if !stroke.is_finite() || stroke < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "arc_stroke_width must be non-negative, got {}",
                stroke
            )));
        }
        Ok(())
    }

    /// The hole a widget starts with.
    pub fn initial_hole(&self) -> Hole {
        Hole::new(self.initial_offset, self.initial_size)
    }

    /// Transition duration.
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}
