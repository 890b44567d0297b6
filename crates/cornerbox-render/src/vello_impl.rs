//! Vello-based renderer implementation.

use crate::renderer::{CommandRenderer, RenderContext, RenderResult, Renderer};
use cornerbox_core::decoration::DrawCommand;
use kurbo::{Affine, RoundedRect, Stroke, Vec2};
use peniko::Fill;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self { scene: Scene::new() }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }
}

impl CommandRenderer for VelloRenderer {
    fn render_command(&mut self, command: &DrawCommand, transform: Affine) {
        match *command {
            DrawCommand::Background { rect, color } => {
                self.scene.fill(Fill::NonZero, transform, color, None, &rect);
            }
            DrawCommand::RoundedHole { rect, radius, color } => {
                let hole = RoundedRect::from_rect(rect, radius);
                self.scene.fill(Fill::NonZero, transform, color, None, &hole);
            }
            DrawCommand::CornerArc {
                bounds,
                start_angle,
                sweep_angle,
                stroke_width,
                color,
                ..
            } => {
                // y points down, so positive sweep runs clockwise on screen
                let arc = kurbo::Arc {
                    center: bounds.center(),
                    radii: Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
                    start_angle: start_angle.to_radians(),
                    sweep_angle: sweep_angle.to_radians(),
                    x_rotation: 0.0,
                };
                self.scene.stroke(&Stroke::new(stroke_width), transform, color, None, &arc);
            }
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        self.scene.reset();
        ctx.validate()?;
        if ctx.widget.boundary().is_empty() {
            log::trace!("Drawing before first layout");
        }
        self.render_widget(ctx.widget, ctx.surface_size(), ctx.transform());
        Ok(())
    }
}
