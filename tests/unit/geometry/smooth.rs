use super::*;

fn line(n: usize) -> Vec<Point> {
    (0..n).map(|i| Point::new(i as f64, 2.0 * i as f64)).collect()
}

#[test]
fn preserves_length_for_any_window() {
    let pts = line(17);
    for w in [1, 2, 3, 10, 30, 100] {
        assert_eq!(smooth_points(&pts, w).len(), pts.len(), "window {w}");
    }
    assert!(smooth_points(&[], 30).is_empty());
}

#[test]
fn single_point_is_returned_unchanged() {
    let p = Point::new(3.5, -1.25);
    for w in [0, 1, 2, 30] {
        assert_eq!(smooth_points(&[p], w), vec![p]);
    }
}

#[test]
fn window_of_one_is_identity() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(5.0, 1.0),
        Point::new(-2.0, 7.0),
    ];
    assert_eq!(smooth_points(&pts, 1), pts);
}

#[test]
fn even_window_leans_backwards_and_drops_out_of_range_neighbors() {
    // window 4 covers offsets -2..=1
    let pts: Vec<Point> = [0.0, 10.0, 20.0, 30.0, 40.0]
        .iter()
        .map(|&x| Point::new(x, 0.0))
        .collect();
    let out = smooth_points(&pts, 4);
    let xs: Vec<f64> = out.iter().map(|p| p.x).collect();
    // i=0: {0,10}; i=1: {0,10,20}; i=2: {0,10,20,30}; i=3: {10,20,30,40}; i=4: {20,30,40}
    assert_eq!(xs, vec![5.0, 10.0, 15.0, 25.0, 30.0]);
}

#[test]
fn interior_of_a_straight_line_is_unchanged() {
    let pts = line(80);
    let out = smooth_points(&pts, SMOOTHING_WINDOW);
    for i in 15..65 {
        assert!((out[i].x - (pts[i].x - 0.5)).abs() < 1e-9);
        assert!((out[i].y - (pts[i].y - 1.0)).abs() < 1e-9);
    }
}

#[test]
fn removes_alternating_jitter() {
    let pts: Vec<Point> = (0..60)
        .map(|i| Point::new(i as f64, if i % 2 == 0 { 1.0 } else { -1.0 }))
        .collect();
    let out = smooth_points(&pts, SMOOTHING_WINDOW);
    for p in &out[15..45] {
        assert!(p.y.abs() < 1e-9);
    }
    assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}
