use crate::foundation::core::Point;

/// Window, in samples, used to smooth traced logo strokes.
pub const SMOOTHING_WINDOW: usize = 30;

/// Centered moving average over `points`.
///
/// For index `i` the neighbors are `i + j - window / 2` for `j in 0..window`; neighbors outside
/// the sequence are dropped and the remaining ones averaged per axis. The output has the same
/// length as the input. A `window` of 0 leaves points unchanged.
pub fn smooth_points(points: &[Point], window: usize) -> Vec<Point> {
    if window == 0 {
        return points.to_vec();
    }
    let half = window / 2;
    let len = points.len();

    (0..len)
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + window - half).min(len);
            let neighbors = &points[lo..hi];

            let (sx, sy) = neighbors
                .iter()
                .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
            let n = neighbors.len() as f64;
            Point::new(sx / n, sy / n)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/smooth.rs"]
mod tests;
