use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn maps_inside_single_segment() {
    let v = interpolate(0.475, &[0.0, 0.95], &[0.0, 1.0], InterpolateOpts::EXTEND).unwrap();
    assert!(approx(v, 0.5));
}

#[test]
fn extend_continues_outer_slopes() {
    let it = Interpolator::new(&[0.0, 0.95], &[0.0, 1.0], InterpolateOpts::EXTEND).unwrap();
    assert!(approx(it.eval(1.0), 1.0 / 0.95));
    assert!(approx(it.eval(-0.095), -0.1));
}

#[test]
fn clamp_holds_outer_values() {
    let fade = Interpolator::new(&[0.9, 1.0], &[1.0, 0.0], InterpolateOpts::CLAMP).unwrap();
    assert_eq!(fade.eval(0.2), 1.0);
    assert!(approx(fade.eval(0.95), 0.5));
    assert_eq!(fade.eval(1.05), 0.0);
}

#[test]
fn identity_returns_input_outside_range() {
    let opts = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
    };
    let it = Interpolator::new(&[0.0, 1.0], &[10.0, 20.0], opts).unwrap();
    assert_eq!(it.eval(-3.0), -3.0);
    assert_eq!(it.eval(7.0), 7.0);
    assert!(approx(it.eval(0.5), 15.0));
}

#[test]
fn multi_segment_picks_containing_segment() {
    let it = Interpolator::new(
        &[0.0, 0.01, 0.2],
        &[0.3, 0.2, 0.0],
        InterpolateOpts::CLAMP_RIGHT,
    )
    .unwrap();
    assert!(approx(it.eval(0.0), 0.3));
    assert!(approx(it.eval(0.005), 0.25));
    assert!(approx(it.eval(0.01), 0.2));
    assert!(approx(it.eval(0.105), 0.1));
    assert_eq!(it.eval(0.5), 0.0);
}

#[test]
fn flat_segment_returns_constant() {
    let it = Interpolator::new(
        &[0.0, 0.15, 0.85, 1.0],
        &[18.0, 32.0, 32.0, 18.0],
        InterpolateOpts::EXTEND,
    )
    .unwrap();
    assert_eq!(it.eval(0.0), 18.0);
    assert_eq!(it.eval(0.5), 32.0);
    assert!(approx(it.eval(0.075), 25.0));
    assert!(approx(it.eval(1.0), 18.0));
}

#[test]
fn rejects_malformed_ranges() {
    let o = InterpolateOpts::EXTEND;
    assert!(Interpolator::new(&[0.0], &[1.0], o).is_err());
    assert!(Interpolator::new(&[0.0, 1.0], &[1.0], o).is_err());
    assert!(Interpolator::new(&[1.0, 1.0], &[0.0, 1.0], o).is_err());
    assert!(Interpolator::new(&[1.0, 0.0], &[0.0, 1.0], o).is_err());
    assert!(Interpolator::new(&[0.0, f64::NAN], &[0.0, 1.0], o).is_err());
    assert!(Interpolator::new(&[0.0, 1.0], &[0.0, f64::INFINITY], o).is_err());
}

#[test]
fn color_ramp_hits_endpoints_and_blends() {
    let black = Rgba8::rgb(0, 0, 0);
    let white = Rgba8::rgb(255, 255, 255);
    let ramp = ColorInterpolator::new(&[0.0, 10.0], &[black, white]).unwrap();
    assert_eq!(ramp.eval(0.0), black);
    assert_eq!(ramp.eval(10.0), white);
    assert_eq!(ramp.eval(5.0), Rgba8::rgb(128, 128, 128));
    assert_eq!(ramp.eval(-4.0), black);
    assert_eq!(ramp.eval(40.0), white);
}

#[test]
fn color_ramp_uses_inner_segments() {
    let red = Rgba8::rgb(255, 0, 0);
    let green = Rgba8::rgb(0, 255, 0);
    let blue = Rgba8::rgb(0, 0, 255);
    let ramp = ColorInterpolator::new(&[0.0, 1.0, 2.0], &[red, green, blue]).unwrap();
    assert_eq!(ramp.eval(1.0), green);
    assert_eq!(ramp.eval(1.5), Rgba8::rgb(0, 128, 128));
}
