use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn stroke_a() -> StrokeTiming {
    StrokeTiming {
        delay_frames: 20,
        spring: SpringConfig::with_mass_damping(15.0, 200.0),
    }
}

fn stroke_b() -> StrokeTiming {
    StrokeTiming {
        delay_frames: 10,
        spring: SpringConfig::with_mass_damping(1.0, 200.0),
    }
}

#[test]
fn nothing_is_revealed_until_the_delay_elapses() {
    let timing = stroke_a();
    for frame in 0..=20 {
        let r = timing.reveal_at(FrameIndex(frame), fps30());
        assert_eq!(r.progress, 0.0, "frame {frame}");
    }
    assert!(timing.reveal_at(FrameIndex(21), fps30()).progress > 0.0);
}

#[test]
fn settles_past_one_by_frame_200() {
    for timing in [stroke_a(), stroke_b()] {
        let p = timing.reveal_at(FrameIndex(200), fps30()).progress;
        assert!(p >= 0.99, "{p}");
        assert!(p <= 1.0 / SETTLE_POINT);
    }
}

#[test]
fn progress_is_bounded_finite_and_non_decreasing() {
    for timing in [stroke_a(), stroke_b()] {
        let mut prev = 0.0;
        for frame in 0..300 {
            let p = timing.reveal_at(FrameIndex(frame), fps30()).progress;
            assert!(p.is_finite());
            assert!(p >= 0.0);
            assert!(p <= 1.0 / SETTLE_POINT + 1e-12);
            assert!(p + 1e-12 >= prev, "frame {frame}");
            prev = p;
        }
    }
}

#[test]
fn light_spring_leads_heavy_spring() {
    let a = stroke_a().reveal_at(FrameIndex(40), fps30()).progress;
    let b = stroke_b().reveal_at(FrameIndex(40), fps30()).progress;
    assert!(b > a);
}

#[test]
fn remap_reaches_one_at_settle_point() {
    // t where the mass-1 spring crosses 0.95 maps to ~1.
    let cfg = SpringConfig::with_mass_damping(1.0, 200.0);
    let mut crossed = None;
    for frame in 0..200 {
        if spring(f64::from(frame), fps30(), cfg) >= SETTLE_POINT {
            crossed = Some(frame);
            break;
        }
    }
    let frame = crossed.expect("spring crosses the settle point");
    assert!(progress(f64::from(frame), fps30(), cfg) >= 1.0);
    assert!(progress(f64::from(frame - 1), fps30(), cfg) < 1.0);
}

#[test]
fn validate_forwards_spring_errors() {
    let mut timing = stroke_b();
    assert!(timing.validate().is_ok());
    timing.spring.mass = 0.0;
    assert!(timing.validate().is_err());
}
