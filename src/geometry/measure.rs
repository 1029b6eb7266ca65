use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::{RevealError, RevealResult};

/// Accuracy passed to kurbo's arc-length solvers.
const ARCLEN_ACCURACY: f64 = 1e-6;

/// A path that can be queried by distance along its outline.
pub trait ArcLengthPath {
    /// Total arc length of the path.
    fn total_length(&self) -> f64;

    /// Position at arc length `s`, clamped to the path ends.
    fn point_at_length(&self, s: f64) -> Point;
}

/// Arc-length index over a [`BezPath`].
///
/// Segment lengths are measured once on construction; queries locate the segment by a binary
/// search over cumulative lengths and solve for the curve parameter inside it.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    segments: Vec<PathSeg>,
    /// `ends[i]` is the cumulative length at the end of `segments[i]`.
    ends: Vec<f64>,
    start: Option<Point>,
}

impl PathMeasure {
    /// Measure an already-built path.
    pub fn new(path: &BezPath) -> Self {
        let segments: Vec<PathSeg> = path.segments().collect();
        let mut ends = Vec::with_capacity(segments.len());
        let mut acc = 0.0;
        for seg in &segments {
            acc += seg.arclen(ARCLEN_ACCURACY);
            ends.push(acc);
        }
        let start = path.elements().iter().find_map(|el| match el {
            kurbo::PathEl::MoveTo(p) => Some(*p),
            _ => None,
        });
        Self {
            segments,
            ends,
            start,
        }
    }

    /// Parse SVG path data (`d` attribute) and measure it.
    pub fn from_svg(d: &str) -> RevealResult<Self> {
        Ok(Self::new(&parse_svg_path(d)?))
    }

    /// Number of drawable segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }
}

impl ArcLengthPath for PathMeasure {
    fn total_length(&self) -> f64 {
        self.ends.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, s: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return self.start.unwrap_or(Point::ORIGIN);
        };
        if s.is_nan() || s <= 0.0 {
            return self.segments[0].eval(0.0);
        }
        if s >= self.total_length() {
            return last.eval(1.0);
        }

        let i = self.ends.partition_point(|&end| end < s);
        let seg = &self.segments[i];
        let seg_start = if i == 0 { 0.0 } else { self.ends[i - 1] };
        let seg_len = self.ends[i] - seg_start;
        if seg_len <= 0.0 {
            return seg.eval(0.0);
        }
        let t = seg.inv_arclen(s - seg_start, ARCLEN_ACCURACY);
        seg.eval(t.clamp(0.0, 1.0))
    }
}

/// Parse non-empty SVG path data into a [`BezPath`].
pub fn parse_svg_path(d: &str) -> RevealResult<BezPath> {
    let d = d.trim();
    if d.is_empty() {
        return Err(RevealError::validation("svg path data must be non-empty"));
    }

    BezPath::from_svg(d).map_err(|e| RevealError::validation(format!("invalid svg path data: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/measure.rs"]
mod tests;
