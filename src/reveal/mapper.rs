//! Per-point visual state of a stroke for one frame.
//!
//! Point `i` of `N` sits at position fraction `(N - i) / N` and becomes visible once the
//! stroke's progress passes that fraction. Dots near the leading edge get a size bonus that
//! fades out as the stroke completes; widths taper toward both ends and colors follow the
//! stroke's palette along the index sequence.

use crate::animation::interpolate::{ColorInterpolator, InterpolateOpts, Interpolator};
use crate::animation::progress::RevealState;
use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::{RevealError, RevealResult};

/// Dot width at both ends of a stroke.
pub const END_WIDTH: f64 = 18.0;

/// Index fractions where the end taper meets the full-width middle.
pub const TAPER_BREAKPOINTS: [f64; 4] = [0.0, 0.15, 0.85, 1.0];

/// Blur radius applied to every dot in [`RenderMode::Production`].
pub const PRODUCTION_BLUR_PX: f64 = 1.0;

const TIP_DISTANCES: [f64; 3] = [0.0, 0.01, 0.2];
const TIP_BONUSES: [f64; 3] = [0.3, 0.2, 0.0];
const TIP_FADE_PROGRESS: [f64; 2] = [0.9, 1.0];

/// Whether frames are computed for a quick preview or for the final render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// No softening.
    #[default]
    Preview,
    /// Every dot is softened by [`PRODUCTION_BLUR_PX`].
    Production,
}

impl RenderMode {
    /// Blur radius for dots rendered in this mode.
    pub fn blur_px(self) -> Option<f64> {
        match self {
            Self::Preview => None,
            Self::Production => Some(PRODUCTION_BLUR_PX),
        }
    }
}

/// Fixed visual parameters of one stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Dot width through the middle of the stroke.
    pub max_stroke_width: f64,
    /// Colors spread evenly from the first to the last point.
    pub palette: Vec<Rgba8>,
}

impl StrokeStyle {
    /// Validate width and palette.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.max_stroke_width.is_finite() || self.max_stroke_width <= 0.0 {
            return Err(RevealError::validation(
                "max_stroke_width must be finite and > 0",
            ));
        }
        if self.palette.is_empty() {
            return Err(RevealError::validation("stroke palette must not be empty"));
        }
        Ok(())
    }
}

/// Visual state of one visible dot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotVisual {
    /// Index of the point in the stroke's sequence.
    pub index: usize,
    /// Dot center.
    pub position: Point,
    /// Dot diameter.
    pub size: f64,
    /// Fill color.
    pub color: Rgba8,
    /// Softening radius, if any.
    pub blur_px: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
enum ColorRamp {
    Solid(Rgba8),
    Ramp(ColorInterpolator),
}

/// Reveal mapping for a stroke of a fixed point count.
///
/// All breakpoint tables are validated once here so per-frame evaluation cannot fail.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealMapper {
    len: usize,
    width: Interpolator,
    tip: Interpolator,
    tip_fade: Interpolator,
    color: ColorRamp,
}

impl RevealMapper {
    /// Build the mapper for a stroke of `len` points.
    pub fn new(style: &StrokeStyle, len: usize) -> RevealResult<Self> {
        style.validate()?;
        let max = style.max_stroke_width;
        let width = Interpolator::new(
            &TAPER_BREAKPOINTS,
            &[END_WIDTH, max, max, END_WIDTH],
            InterpolateOpts::EXTEND,
        )?;
        let tip = Interpolator::new(&TIP_DISTANCES, &TIP_BONUSES, InterpolateOpts::CLAMP_RIGHT)?;
        let tip_fade = Interpolator::new(&TIP_FADE_PROGRESS, &[1.0, 0.0], InterpolateOpts::CLAMP)?;

        let k = style.palette.len();
        let color = if len < 2 || k < 2 {
            ColorRamp::Solid(style.palette[0])
        } else {
            let n = len as f64;
            let stops: Vec<f64> = (0..k).map(|j| n * j as f64 / (k - 1) as f64).collect();
            ColorRamp::Ramp(ColorInterpolator::new(&stops, &style.palette)?)
        };

        Ok(Self {
            len,
            width,
            tip,
            tip_fade,
            color,
        })
    }

    /// Number of points this mapper was built for.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` for a stroke without points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `(N - i) / N`: 1 at the first point, `1 / N` at the last.
    pub fn position_fraction(&self, i: usize) -> f64 {
        let n = self.len as f64;
        (n - i as f64) / n
    }

    /// Whether point `i` is revealed at `progress`.
    pub fn is_visible(&self, i: usize, progress: f64) -> bool {
        self.position_fraction(i) < progress
    }

    /// Leading-edge size bonus of point `i`, faded out as `progress` approaches 1.
    pub fn tip_bonus(&self, i: usize, progress: f64) -> f64 {
        let difference = (self.position_fraction(i) - progress).abs();
        self.tip.eval(difference) * self.tip_fade.eval(progress)
    }

    /// Tapered width of point `i` before the tip bonus.
    pub fn base_width(&self, i: usize) -> f64 {
        self.width.eval(i as f64 / self.len as f64)
    }

    /// Palette color of point `i`.
    pub fn color(&self, i: usize) -> Rgba8 {
        match &self.color {
            ColorRamp::Solid(c) => *c,
            ColorRamp::Ramp(ramp) => ramp.eval(i as f64),
        }
    }

    /// Visual state of point `i`, or `None` when it is not revealed yet.
    pub fn dot(&self, i: usize, position: Point, progress: f64, mode: RenderMode) -> Option<DotVisual> {
        if !self.is_visible(i, progress) {
            return None;
        }
        let size = self.base_width(i) * (1.0 + self.tip_bonus(i, progress));
        Some(DotVisual {
            index: i,
            position,
            size,
            color: self.color(i),
            blur_px: mode.blur_px(),
        })
    }

    /// All visible dots of `points` in index order.
    pub fn reveal(&self, points: &[Point], state: RevealState, mode: RenderMode) -> Vec<DotVisual> {
        debug_assert_eq!(points.len(), self.len);
        points
            .iter()
            .enumerate()
            .filter_map(|(i, &p)| self.dot(i, p, state.progress, mode))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/mapper.rs"]
mod tests;
