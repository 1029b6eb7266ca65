use super::*;
use crate::foundation::core::{FrameIndex, Point};
use crate::logo::config::LogoConfig;
use crate::reveal::mapper::RenderMode;
use crate::session::render_session::SessionOpts;

fn small_config() -> LogoConfig {
    let mut config = LogoConfig::default();
    config.composition.canvas = Canvas {
        width: 480,
        height: 480,
    };
    config
}

fn session(mode: RenderMode) -> AnimationSession {
    AnimationSession::from_config(
        &small_config(),
        SessionOpts {
            mode,
            ..SessionOpts::default()
        },
    )
    .unwrap()
}

#[test]
fn frame_before_any_reveal_is_plain_background() {
    let s = session(RenderMode::Preview);
    let compositor = CpuCompositor::new(&s, CpuCompositorOpts::default()).unwrap();
    let frame = compositor.render(&s.render(FrameIndex(0))).unwrap();
    assert_eq!((frame.width, frame.height), (480, 480));
    assert_eq!(frame.data.len(), 480 * 480 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px == [255, 255, 255, 255]));
}

#[test]
fn revealed_dots_paint_their_palette_color() {
    let s = session(RenderMode::Preview);
    let compositor = CpuCompositor::new(&s, CpuCompositorOpts::default()).unwrap();
    let visuals = s.render(FrameIndex(200));
    let frame = compositor.render(&visuals).unwrap();

    let dot = visuals.strokes[1].dots[visuals.strokes[1].dots.len() / 2];
    let center = s.canvas_position(dot.position);
    let px = frame
        .pixel(center.x.round() as u32, center.y.round() as u32)
        .unwrap();
    assert_eq!(px[3], 255);
    assert_ne!(px, [255, 255, 255, 255]);
    let far = frame.pixel(2, 2).unwrap();
    assert_eq!(far, [255, 255, 255, 255]);
}

#[test]
fn rendering_is_deterministic_and_parallel_safe() {
    let s = session(RenderMode::Production);
    let compositor = CpuCompositor::new(&s, CpuCompositorOpts::default()).unwrap();
    let visuals: Vec<_> = [30, 60, 90].map(|f| s.render(FrameIndex(f))).into();
    let seq = compositor.render_all(&visuals, false, None).unwrap();
    let par = compositor.render_all(&visuals, true, Some(2)).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn production_blur_softens_dot_edges() {
    let sharp_session = session(RenderMode::Preview);
    let soft_session = session(RenderMode::Production);
    let sharp = CpuCompositor::new(&sharp_session, CpuCompositorOpts::default())
        .unwrap()
        .render(&sharp_session.render(FrameIndex(200)))
        .unwrap();
    let soft = CpuCompositor::new(&soft_session, CpuCompositorOpts::default())
        .unwrap()
        .render(&soft_session.render(FrameIndex(200)))
        .unwrap();
    assert_ne!(sharp.data, soft.data);
}

#[test]
fn painted_backgrounds_are_drawn_under_the_dots() {
    let mut config = small_config();
    config.strokes[0].background_color = Some(Rgba8::rgb(0, 0, 0));
    let s = AnimationSession::from_config(&config, SessionOpts::default()).unwrap();
    let compositor = CpuCompositor::new(&s, CpuCompositorOpts::default()).unwrap();
    let frame = compositor.render(&s.render(FrameIndex(0))).unwrap();

    // First vertex of the outer outline, shifted by the layout.
    let layout = s.layout();
    let p = Point::new(154.610453, 134.0) + layout.origin(s.canvas()) + layout.stroke_translate;
    let px = frame.pixel(p.x.round() as u32, p.y.round() as u32).unwrap();
    assert_eq!(px, [0, 0, 0, 255]);
}

#[test]
fn straight_conversion_keeps_opaque_frames() {
    let s = session(RenderMode::Preview);
    let compositor = CpuCompositor::new(&s, CpuCompositorOpts::default()).unwrap();
    let frame = compositor.render(&s.render(FrameIndex(100))).unwrap();
    let straight = frame.clone().into_straight();
    assert!(!straight.premultiplied);
    assert_eq!(straight.data, frame.data);
}

#[test]
fn oversized_canvas_is_rejected() {
    let mut config = LogoConfig::default();
    config.composition.canvas.width = 70_000;
    let s = AnimationSession::from_config(&config, SessionOpts::default()).unwrap();
    assert!(CpuCompositor::new(&s, CpuCompositorOpts::default()).is_err());
}
