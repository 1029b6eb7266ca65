use super::*;
use serde_json::json;

#[test]
fn default_config_is_the_authored_logo() {
    let cfg = LogoConfig::default();
    cfg.validate().unwrap();

    assert_eq!(cfg.composition.duration_frames, 150);
    assert_eq!(cfg.composition.fps.as_f64(), 30.0);

    let [outer, leaf] = &cfg.strokes;
    assert_eq!(outer.order, SampleOrder::Reverse);
    assert_eq!(leaf.order, SampleOrder::Forward);
    assert_eq!(outer.style.max_stroke_width, 32.0);
    assert_eq!(leaf.style.max_stroke_width, 22.0);
    assert_eq!(outer.timing.delay_frames, 20);
    assert_eq!(leaf.timing.delay_frames, 10);
    assert_eq!(outer.timing.spring.mass, 15.0);
    assert_eq!(leaf.timing.spring.mass, 1.0);
    assert_eq!(outer.timing.spring.damping, 200.0);
}

#[test]
fn palettes_are_applied_in_reverse_authored_order() {
    let cfg = LogoConfig::default();
    let outer = &cfg.strokes[0].style.palette;
    assert_eq!(outer.len(), 10);
    assert_eq!(outer[0], Rgba8::from_hex("#76b3e9").unwrap());
    assert_eq!(outer[9], Rgba8::from_hex("#a9d15f").unwrap());

    let leaf = &cfg.strokes[1].style.palette;
    assert_eq!(leaf, &vec![
        Rgba8::from_hex("#88c8a3").unwrap(),
        Rgba8::from_hex("#037a95").unwrap(),
    ]);
}

#[test]
fn background_outlines_are_unpainted_by_default() {
    let cfg = LogoConfig::default();
    let a = cfg.strokes[0].background();
    let b = cfg.strokes[1].background();
    assert_eq!((a.width, b.width), (24.0, 19.0));
    assert_eq!((a.color, b.color), (None, None));
    assert_eq!(a.svg_path_d, STROKE_A_PATH_D);
}

#[test]
fn layout_centers_the_logo_box() {
    let layout = LogoLayout::default();
    let origin = layout.origin(Canvas {
        width: 700,
        height: 700,
    });
    assert_eq!(origin, Vec2::new(159.0, 122.5));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = LogoConfig::default();
    let text = serde_json::to_string(&cfg).unwrap();
    let mut back = LogoConfig::from_reader(text.as_bytes()).unwrap();
    let d = back.layout.stroke_translate - cfg.layout.stroke_translate;
    assert!(d.hypot() < 1e-9);
    back.layout = cfg.layout;
    assert_eq!(back, cfg);
}

#[test]
fn minimal_json_fills_in_defaults() {
    let stroke = |name: &str| {
        json!({
            "name": name,
            "svg_path_d": "M0,0 L100,0",
            "background_width": 10.0,
            "style": {"max_stroke_width": 20.0, "palette": ["#000000", "#ffffff"]},
            "timing": {"delay_frames": 0, "spring": {"mass": 1.0, "damping": 200.0}},
        })
    };
    let v = json!({ "strokes": [stroke("a"), stroke("b")] });
    let cfg: LogoConfig = serde_json::from_value(v).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.strokes[0].order, SampleOrder::Forward);
    assert_eq!(cfg.strokes[1].timing.spring.stiffness, 100.0);
    assert_eq!(cfg.composition, CompositionMeta::default());
}

#[test]
fn validate_reports_the_offending_stroke() {
    let mut cfg = LogoConfig::default();
    cfg.strokes[1].style.palette.clear();
    let err = cfg.validate().unwrap_err().to_string();
    assert!(err.contains("leaf"), "{err}");

    let mut cfg = LogoConfig::default();
    cfg.strokes[0].timing.spring.mass = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = LogoConfig::default();
    cfg.composition.fps.den = 0;
    assert!(cfg.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = LogoConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
}
