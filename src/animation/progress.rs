use crate::animation::spring::{SpringConfig, spring};
use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::RevealResult;

/// Raw spring value treated as "finished".
///
/// The spring output is remapped linearly from `[0, SETTLE_POINT]` onto `[0, 1]` and extended
/// past it, so a stroke reads as complete well before the spring's asymptote.
pub const SETTLE_POINT: f64 = 0.95;

/// Per-stroke timing: a start delay and the spring that drives the reveal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeTiming {
    /// Frames to wait before the spring starts moving.
    pub delay_frames: i64,
    /// Spring parameters.
    pub spring: SpringConfig,
}

impl StrokeTiming {
    /// Validate the spring parameters.
    pub fn validate(&self) -> RevealResult<()> {
        self.spring.validate()
    }

    /// Reveal state of this stroke at `frame`.
    pub fn reveal_at(&self, frame: FrameIndex, fps: Fps) -> RevealState {
        RevealState {
            progress: progress(frame.offset_by(self.delay_frames), fps, self.spring),
        }
    }
}

/// Reveal progress of one stroke for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RevealState {
    /// Fraction of the stroke's dots that are visible, slightly above 1 once settled.
    pub progress: f64,
}

/// Progress for a delay-adjusted frame `t`: spring output remapped from `[0, 0.95]` to `[0, 1]`.
///
/// Negative `t` gives exactly 0. The result is bounded by `1 / SETTLE_POINT` for springs that
/// do not overshoot.
pub fn progress(t: f64, fps: Fps, config: SpringConfig) -> f64 {
    let raw = spring(t, fps, config);
    raw / SETTLE_POINT
}

#[cfg(test)]
#[path = "../../tests/unit/animation/progress.rs"]
mod tests;
