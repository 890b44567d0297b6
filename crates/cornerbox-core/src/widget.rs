//! The hole widget: explicit state plus a single commit entry point.
//!
//! Events are processed strictly in arrival order. A drag starts by fixing a
//! [`TouchMode`]; every move computes a candidate with [`apply_drag`] and
//! commits it only if [`is_valid`] accepts it. Rejected candidates leave the
//! committed hole untouched.

use crate::animation::HoleAnimation;
use crate::config::HoleConfig;
use crate::decoration::{DrawCommand, decoration_commands};
use crate::drag::apply_drag;
use crate::geometry::{Boundary, Hole};
use crate::touch::{TouchMode, classify_touch};
use crate::validate::is_valid;
use kurbo::{Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Input the widget reacts to, in host coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GestureEvent {
    /// The host surface was measured or resized.
    BoundaryChanged { offset: Point, size: Size },
    /// Pointer went down and started a drag.
    DragStart { point: Point },
    /// Pointer moved by `delta` since the previous event.
    DragMove { delta: Vec2 },
    /// Drag finished or was cancelled.
    DragEnd,
}

/// Outcome of applying one [`GestureEvent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitResult {
    /// A drag started in this mode.
    ModeSelected(TouchMode),
    /// The candidate passed validation and is now the committed hole.
    Committed(Hole),
    /// The candidate failed validation; the hole is unchanged.
    Rejected,
    /// No drag mode is active, so the move did nothing.
    Ignored,
    /// A new boundary was stored.
    BoundaryUpdated(Boundary),
    /// The drag ended.
    Ended,
}

impl CommitResult {
    /// Check if this result changed the committed hole.
    pub fn is_commit(&self) -> bool {
        matches!(self, CommitResult::Committed(_))
    }
}

/// Handle returned by [`HoleWidget::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type CommitListener = Box<dyn FnMut(&Hole)>;

/// A draggable, resizable hole inside a boundary.
pub struct HoleWidget {
    config: HoleConfig,
    hole: Hole,
    boundary: Boundary,
    touch_mode: TouchMode,
    animation: HoleAnimation,
    /// Incremented on every commit so renderers can poll for changes.
    revision: u64,
    listeners: Vec<(SubscriptionId, CommitListener)>,
    next_subscription: u64,
}

impl std::fmt::Debug for HoleWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HoleWidget")
            .field("hole", &self.hole)
            .field("boundary", &self.boundary)
            .field("touch_mode", &self.touch_mode)
            .field("revision", &self.revision)
            .field("listener_count", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for HoleWidget {
    fn default() -> Self {
        Self::new(HoleConfig::default())
    }
}

impl HoleWidget {
    /// Create a widget with the given configuration.
    ///
    /// The boundary starts empty, so every drag is rejected until the host
    /// reports its first layout.
    pub fn new(config: HoleConfig) -> Self {
        let hole = config.initial_hole();
        let animation = HoleAnimation::new(hole, config.animation_duration()).with_easing(config.easing);
        Self {
            config,
            hole,
            boundary: Boundary::default(),
            touch_mode: TouchMode::None,
            animation,
            revision: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The committed hole.
    pub fn hole(&self) -> Hole {
        self.hole
    }

    /// The current boundary.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Mode of the drag in progress.
    pub fn touch_mode(&self) -> TouchMode {
        self.touch_mode
    }

    /// Number of commits so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn config(&self) -> &HoleConfig {
        &self.config
    }

    pub fn corner_radius(&self) -> f64 {
        self.config.corner_radius
    }

    /// Apply a single event.
    pub fn apply_gesture(&mut self, event: GestureEvent) -> CommitResult {
        match event {
            GestureEvent::BoundaryChanged { offset, size } => self.on_boundary_change(offset, size),
            GestureEvent::DragStart { point } => CommitResult::ModeSelected(self.on_drag_start(point)),
            GestureEvent::DragMove { delta } => self.on_drag_move(delta),
            GestureEvent::DragEnd => {
                self.on_drag_end();
                CommitResult::Ended
            }
        }
    }

    /// Store the host's new layout.
    ///
    /// The committed hole is left as is even if it no longer fits; the next
    /// drag that would keep it outside is rejected.
    pub fn on_boundary_change(&mut self, offset: Point, size: Size) -> CommitResult {
        self.boundary = Boundary::new(offset, size);
        log::debug!(
            "Boundary changed to ({}, {}) {}x{}",
            offset.x,
            offset.y,
            size.width,
            size.height
        );
        CommitResult::BoundaryUpdated(self.boundary)
    }

    /// Classify the drag start and fix the mode for this gesture.
    pub fn on_drag_start(&mut self, point: Point) -> TouchMode {
        self.touch_mode = classify_touch(point, &self.hole, self.config.corner_radius);
        log::debug!("Drag started at ({}, {}) in {:?} mode", point.x, point.y, self.touch_mode);
        self.touch_mode
    }

    /// Apply one drag step in the current mode.
    pub fn on_drag_move(&mut self, delta: Vec2) -> CommitResult {
        if !self.touch_mode.is_active() {
            return CommitResult::Ignored;
        }

        let candidate = apply_drag(
            self.touch_mode,
            &self.hole,
            delta,
            &self.boundary,
            self.config.corner_radius,
        );
        if !is_valid(candidate.offset, candidate.size, &self.boundary, self.config.corner_radius) {
            log::trace!("Rejected {:?} candidate {:?}", self.touch_mode, candidate);
            return CommitResult::Rejected;
        }

        self.commit(candidate);
        CommitResult::Committed(candidate)
    }

    /// Finish the current drag.
    pub fn on_drag_end(&mut self) {
        self.touch_mode = TouchMode::None;
    }

    fn commit(&mut self, hole: Hole) {
        self.hole = hole;
        self.revision += 1;
        self.animation.retarget(hole);
        log::trace!("Committed hole {:?} (revision {})", hole, self.revision);
        for (_, listener) in &mut self.listeners {
            listener(&hole);
        }
    }

    /// Register a callback fired after every commit.
    pub fn subscribe(&mut self, listener: impl FnMut(&Hole) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Advance the display animation by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.animation.advance(dt);
    }

    /// Geometry to draw this frame.
    pub fn animated_hole(&self) -> Hole {
        self.animation.animated()
    }

    /// Check if the display animation has settled.
    pub fn is_animating(&self) -> bool {
        !self.animation.is_finished()
    }

    /// Draw commands for the current animated geometry.
    ///
    /// `surface` is the host area dimmed by the background, in the same
    /// coordinates as the hole. Drawing does not depend on a layout.
    pub fn draw_commands(&self, surface: Size) -> Vec<DrawCommand> {
        decoration_commands(
            &self.animated_hole(),
            surface,
            self.config.corner_radius,
            &self.config.style,
        )
    }
}
