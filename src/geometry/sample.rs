use crate::foundation::core::Point;
use crate::geometry::measure::ArcLengthPath;

/// Order in which sampled points are listed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleOrder {
    /// Index 0 is the path's start.
    #[default]
    Forward,
    /// Index 0 is the path's end.
    Reverse,
}

/// Points sampled at unit arc-length spacing along one stroke, in draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathGeometry {
    /// Floored arc length of the source path.
    pub total_length: u64,
    /// Sampled points; `points.len() == total_length`.
    pub points: Vec<Point>,
}

impl PathGeometry {
    /// Geometry of a zero-length stroke.
    pub fn empty() -> Self {
        Self {
            total_length: 0,
            points: Vec::new(),
        }
    }

    /// Number of sampled points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Return `true` when the stroke contributes no dots.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Replace the points with `f(points)`, keeping `total_length`.
    pub fn map_points(self, f: impl FnOnce(&[Point]) -> Vec<Point>) -> Self {
        let points = f(&self.points);
        debug_assert_eq!(points.len(), self.points.len());
        Self {
            total_length: self.total_length,
            points,
        }
    }
}

/// Sample `path` at arc lengths `0, 1, .., floor(len) - 1`.
///
/// Non-finite or negative lengths are treated as zero and yield an empty geometry.
pub fn sample_path<P: ArcLengthPath + ?Sized>(path: &P, order: SampleOrder) -> PathGeometry {
    let len = path.total_length();
    let total_length = if len.is_finite() && len > 0.0 {
        len.floor() as u64
    } else {
        0
    };

    let mut points: Vec<Point> = (0..total_length)
        .map(|i| path.point_at_length(i as f64))
        .collect();
    if order == SampleOrder::Reverse {
        points.reverse();
    }

    PathGeometry {
        total_length,
        points,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/sample.rs"]
mod tests;
