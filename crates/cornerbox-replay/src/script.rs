//! Gesture scripts and their replay against a [`HoleWidget`].

use std::path::Path;
use std::time::Duration;

use cornerbox_core::{Boundary, CommitResult, GestureEvent, Hole, HoleWidget};
use serde::{Deserialize, Serialize};

use crate::error::{ReplayError, Result};

fn default_frame_ms() -> u64 {
    16
}

/// A recorded sequence of gesture events.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GestureScript {
    /// Layout applied before the first event, if any.
    #[serde(default)]
    pub boundary: Option<Boundary>,
    pub events: Vec<GestureEvent>,
    /// Animation time advanced after each event.
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

impl GestureScript {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json)?;
        if script.events.is_empty() {
            return Err(ReplayError::EmptyScript);
        }
        Ok(script)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

/// What happened for one scripted event.
#[derive(Debug, Clone, Copy)]
pub struct ReplayStep {
    pub index: usize,
    pub event: GestureEvent,
    pub result: CommitResult,
    /// Displayed geometry after the frame tick.
    pub animated: Hole,
}

/// Totals over a whole replay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReplaySummary {
    pub events: usize,
    pub commits: usize,
    pub rejections: usize,
    pub ignored: usize,
    pub final_hole: Hole,
    pub revision: u64,
}

/// Feed every event of `script` into `widget`, ticking the animation after each.
pub fn replay(widget: &mut HoleWidget, script: &GestureScript) -> Vec<ReplayStep> {
    if let Some(boundary) = script.boundary {
        widget.on_boundary_change(boundary.offset, boundary.size);
    }
    let frame = Duration::from_millis(script.frame_ms);

    script
        .events
        .iter()
        .enumerate()
        .map(|(index, &event)| {
            let result = widget.apply_gesture(event);
            widget.tick(frame);
            ReplayStep {
                index,
                event,
                result,
                animated: widget.animated_hole(),
            }
        })
        .collect()
}

pub fn summarize(widget: &HoleWidget, steps: &[ReplayStep]) -> ReplaySummary {
    let count = |pred: fn(&CommitResult) -> bool| steps.iter().filter(|s| pred(&s.result)).count();
    ReplaySummary {
        events: steps.len(),
        commits: count(|r| r.is_commit()),
        rejections: count(|r| *r == CommitResult::Rejected),
        ignored: count(|r| *r == CommitResult::Ignored),
        final_hole: widget.hole(),
        revision: widget.revision(),
    }
}

/// One human-readable line per step.
pub fn format_step(step: &ReplayStep) -> String {
    let outcome = match step.result {
        CommitResult::ModeSelected(mode) => format!("mode {:?}", mode),
        CommitResult::Committed(hole) => format!(
            "commit offset=({}, {}) size={}x{}",
            hole.offset.x, hole.offset.y, hole.size.width, hole.size.height
        ),
        CommitResult::Rejected => "rejected".to_string(),
        CommitResult::Ignored => "ignored".to_string(),
        CommitResult::BoundaryUpdated(b) => format!(
            "boundary offset=({}, {}) size={}x{}",
            b.offset.x, b.offset.y, b.size.width, b.size.height
        ),
        CommitResult::Ended => "end".to_string(),
    };
    format!("{:>4}  {:<40}  {}", step.index, format!("{:?}", step.event), outcome)
}
