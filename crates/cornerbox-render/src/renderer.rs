//! Renderer trait abstraction.

use cornerbox_core::decoration::DrawCommand;
use cornerbox_core::widget::HoleWidget;
use kurbo::{Affine, Size};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The widget to render.
    pub widget: &'a HoleWidget,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(widget: &'a HoleWidget, viewport_size: Size) -> Self {
        Self {
            widget,
            viewport_size,
            scale_factor: 1.0,
        }
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Transform from widget coordinates to physical pixels.
    pub fn transform(&self) -> Affine {
        Affine::scale(self.scale_factor)
    }

    /// Viewport size in widget coordinates.
    pub fn surface_size(&self) -> Size {
        Size::new(
            self.viewport_size.width / self.scale_factor,
            self.viewport_size.height / self.scale_factor,
        )
    }

    /// Check that the viewport can be drawn into.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(RendererError::InvalidViewport(format!(
                "scale factor must be positive, got {}",
                self.scale_factor
            )));
        }
        let Size { width, height } = self.viewport_size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(RendererError::InvalidViewport(format!(
                "viewport size {}x{} must be finite and non-negative",
                width, height
            )));
        }
        Ok(())
    }
}

/// Trait for rendering backends.
///
/// Implementations can use Vello, wgpu directly, or other rendering engines.
pub trait Renderer: Send + Sync {
    /// Build the scene/command buffer for a frame.
    ///
    /// This method is called once per frame and should prepare all drawing commands.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;
}

/// Helper trait for backends that consume [`DrawCommand`]s one by one.
pub trait CommandRenderer {
    /// Encode a single draw command.
    fn render_command(&mut self, command: &DrawCommand, transform: Affine);

    /// Encode every command of the widget's current frame, in order.
    ///
    /// `surface` is the area covered by the background, in widget coordinates.
    fn render_widget(&mut self, widget: &HoleWidget, surface: Size, transform: Affine) {
        for command in widget.draw_commands(surface) {
            self.render_command(&command, transform);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};

    #[derive(Default)]
    struct Recorder {
        commands: Vec<DrawCommand>,
    }

    impl CommandRenderer for Recorder {
        fn render_command(&mut self, command: &DrawCommand, _transform: Affine) {
            self.commands.push(*command);
        }
    }

    #[test]
    fn test_render_widget_emits_all_commands() {
        let mut widget = HoleWidget::default();
        widget.on_boundary_change(Point::ZERO, Size::new(800.0, 600.0));
        widget.on_drag_start(Point::new(300.0, 300.0));
        widget.on_drag_move(Vec2::new(20.0, 0.0));

        let mut recorder = Recorder::default();
        recorder.render_widget(&widget, Size::new(1024.0, 768.0), Affine::IDENTITY);
        assert_eq!(recorder.commands.len(), 6);
        match recorder.commands[0] {
            DrawCommand::Background { rect, .. } => assert_eq!(rect.size(), Size::new(1024.0, 768.0)),
            _ => panic!("Expected background first"),
        }
    }

    #[test]
    fn test_context_transform() {
        let widget = HoleWidget::default();
        let ctx = RenderContext::new(&widget, Size::new(800.0, 600.0)).with_scale_factor(2.0);
        assert_eq!(ctx.transform() * Point::new(10.0, 5.0), Point::new(20.0, 10.0));
        assert_eq!(ctx.surface_size(), Size::new(400.0, 300.0));
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_invalid_viewport() {
        let widget = HoleWidget::default();
        let zero_scale = RenderContext::new(&widget, Size::new(800.0, 600.0)).with_scale_factor(0.0);
        assert!(matches!(zero_scale.validate(), Err(RendererError::InvalidViewport(_))));

        let nan_size = RenderContext::new(&widget, Size::new(f64::NAN, 600.0));
        assert!(nan_size.validate().is_err());
    }
}
