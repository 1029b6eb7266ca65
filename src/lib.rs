//! Dot-stroke logo reveal animation.
//!
//! A logo is two traced strokes. Each stroke is sampled into unit-spaced points along its arc
//! length, smoothed, and revealed dot by dot as a damped spring drives its progress from 0 to 1.
//! Frame evaluation is a pure function of the frame index, so frames can be produced in any
//! order and in parallel.
//!
//! - Describe the logo with a [`LogoConfig`] (or use [`LogoConfig::default`])
//! - Mount it: a [`Mount`] stays pending until path geometry is measurable
//! - Evaluate frames into [`FrameVisuals`] and optionally rasterize them with [`CpuCompositor`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Interpolation, springs and reveal progress.
pub mod animation;
/// Shared primitives and errors.
pub mod foundation;
/// Path measurement, sampling and smoothing.
pub mod geometry;
/// The authored logo description.
pub mod logo;
/// Rasterization of frame visuals.
pub mod render;
/// Per-point reveal mapping.
pub mod reveal;
/// Mounted animation sessions.
pub mod session;

pub use crate::animation::interpolate::{
    ColorInterpolator, Extrapolate, InterpolateOpts, Interpolator, interpolate,
};
pub use crate::animation::progress::{RevealState, SETTLE_POINT, StrokeTiming, progress};
pub use crate::animation::spring::{SpringConfig, spring};
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Rgba8Premul, Vec2,
};
pub use crate::foundation::error::{RevealError, RevealResult};
pub use crate::geometry::measure::{ArcLengthPath, PathMeasure, parse_svg_path};
pub use crate::geometry::sample::{PathGeometry, SampleOrder, sample_path};
pub use crate::geometry::smooth::{SMOOTHING_WINDOW, smooth_points};
pub use crate::logo::config::{
    BackgroundStroke, CompositionMeta, LogoConfig, LogoLayout, StrokeConfig,
};
pub use crate::render::cpu::{CpuCompositor, CpuCompositorOpts};
pub use crate::render::frame::FrameRGBA;
pub use crate::reveal::mapper::{DotVisual, RenderMode, RevealMapper, StrokeStyle};
pub use crate::session::mount::{Mount, MountState};
pub use crate::session::render_session::{
    AnimationSession, FrameVisuals, SessionOpts, Stroke, StrokeVisuals,
};
