use rayon::prelude::*;

use crate::animation::progress::{RevealState, StrokeTiming};
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::measure::{ArcLengthPath, PathMeasure};
use crate::geometry::sample::{PathGeometry, sample_path};
use crate::geometry::smooth::{SMOOTHING_WINDOW, smooth_points};
use crate::logo::config::{BackgroundStroke, LogoConfig, LogoLayout, StrokeConfig};
use crate::reveal::mapper::{DotVisual, RenderMode, RevealMapper};

/// Upper bound on rasterized frames held at once by chunked rendering.
const MAX_CHUNK_BUFFER_BYTES: u64 = 128 * 1024 * 1024;

/// Options controlling how a session evaluates frames.
#[derive(Clone, Debug)]
pub struct SessionOpts {
    /// Preview or production dot softening.
    pub mode: RenderMode,
    /// Evaluate frame ranges in parallel (rayon) instead of sequentially.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Frames per chunk for [`AnimationSession::frame_chunks`]. `0` is treated as `1`.
    pub chunk_size: usize,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            mode: RenderMode::default(),
            parallel: false,
            threads: None,
            chunk_size: 64,
        }
    }
}

/// One stroke of a mounted session: smoothed geometry plus its fixed parameters.
#[derive(Clone, Debug)]
pub struct Stroke {
    name: String,
    geometry: PathGeometry,
    mapper: RevealMapper,
    timing: StrokeTiming,
    background: BackgroundStroke,
}

impl Stroke {
    fn build<P: ArcLengthPath + ?Sized>(config: &StrokeConfig, path: &P) -> RevealResult<Self> {
        let geometry = sample_path(path, config.order)
            .map_points(|points| smooth_points(points, SMOOTHING_WINDOW));
        if geometry.is_empty() {
            tracing::warn!(stroke = %config.name, "stroke has zero length; it contributes no dots");
        } else {
            tracing::debug!(
                stroke = %config.name,
                total_length = geometry.total_length,
                "sampled stroke"
            );
        }
        let mapper = RevealMapper::new(&config.style, geometry.len())?;
        Ok(Self {
            name: config.name.clone(),
            geometry,
            mapper,
            timing: config.timing,
            background: config.background(),
        })
    }

    /// Label from the config.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Smoothed points in draw order.
    pub fn geometry(&self) -> &PathGeometry {
        &self.geometry
    }

    /// Start delay and spring.
    pub fn timing(&self) -> StrokeTiming {
        self.timing
    }

    /// Static outline drawn under the dots.
    pub fn background(&self) -> &BackgroundStroke {
        &self.background
    }

    /// Per-point mapping for this stroke.
    pub fn mapper(&self) -> &RevealMapper {
        &self.mapper
    }

    fn visuals(&self, frame: FrameIndex, fps: Fps, mode: RenderMode) -> StrokeVisuals {
        let reveal = self.timing.reveal_at(frame, fps);
        StrokeVisuals {
            name: self.name.clone(),
            reveal,
            dots: self.mapper.reveal(&self.geometry.points, reveal, mode),
        }
    }
}

/// Visible dots of one stroke for one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeVisuals {
    /// Stroke label.
    pub name: String,
    /// Progress driving this frame.
    pub reveal: RevealState,
    /// Visible dots in index order.
    pub dots: Vec<DotVisual>,
}

/// Everything the compositor needs to draw one frame, strokes in draw order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameVisuals {
    /// Frame these visuals belong to.
    pub frame: FrameIndex,
    /// Per-stroke dots.
    pub strokes: [StrokeVisuals; 2],
}

impl FrameVisuals {
    /// Total number of visible dots across strokes.
    pub fn dot_count(&self) -> usize {
        self.strokes.iter().map(|s| s.dots.len()).sum()
    }
}

/// Immutable animation state, built once from measurable path geometry.
///
/// Frames are pure functions of `(session, frame)`: nothing is cached or mutated after
/// construction, so frames can be evaluated in any order and on any thread.
#[derive(Clone, Debug)]
pub struct AnimationSession {
    fps: Fps,
    canvas: Canvas,
    duration_frames: u64,
    layout: LogoLayout,
    strokes: [Stroke; 2],
    opts: SessionOpts,
}

impl AnimationSession {
    /// Build a session by measuring the SVG path data embedded in `config`.
    pub fn from_config(config: &LogoConfig, opts: SessionOpts) -> RevealResult<Self> {
        config.validate()?;
        let a = PathMeasure::from_svg(&config.strokes[0].svg_path_d)?;
        let b = PathMeasure::from_svg(&config.strokes[1].svg_path_d)?;
        let paths: [&dyn ArcLengthPath; 2] = [&a, &b];
        Self::from_paths(config, paths, opts)
    }

    /// Build a session from externally measured paths, in stroke order.
    ///
    /// The paths are only borrowed while sampling; the session keeps no reference to them.
    #[tracing::instrument(skip_all, fields(mode = ?opts.mode))]
    pub fn from_paths(
        config: &LogoConfig,
        paths: [&dyn ArcLengthPath; 2],
        opts: SessionOpts,
    ) -> RevealResult<Self> {
        config.validate()?;
        let [a, b] = paths;
        let strokes = [
            Stroke::build(&config.strokes[0], a)?,
            Stroke::build(&config.strokes[1], b)?,
        ];
        Ok(Self {
            fps: config.composition.fps,
            canvas: config.composition.canvas,
            duration_frames: config.composition.duration_frames,
            layout: config.layout,
            strokes,
            opts,
        })
    }

    /// Frame rate used to drive the springs.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Clip length in frames.
    pub fn duration_frames(&self) -> u64 {
        self.duration_frames
    }

    /// Logo placement inside the canvas.
    pub fn layout(&self) -> LogoLayout {
        self.layout
    }

    /// Strokes in draw order.
    pub fn strokes(&self) -> &[Stroke; 2] {
        &self.strokes
    }

    /// Preview or production mode.
    pub fn mode(&self) -> RenderMode {
        self.opts.mode
    }

    /// Static outlines drawn under the dots, in stroke order.
    pub fn backgrounds(&self) -> [&BackgroundStroke; 2] {
        self.strokes.each_ref().map(Stroke::background)
    }

    /// Visible dots of both strokes at `frame`.
    pub fn render(&self, frame: FrameIndex) -> FrameVisuals {
        FrameVisuals {
            frame,
            strokes: self
                .strokes
                .each_ref()
                .map(|s| s.visuals(frame, self.fps, self.opts.mode)),
        }
    }

    /// Evaluate a frame range, returned in increasing frame order.
    ///
    /// With `parallel` enabled frames are evaluated on a dedicated rayon pool; the output is
    /// identical to sequential evaluation.
    #[tracing::instrument(skip(self), fields(parallel = self.opts.parallel))]
    pub fn render_frames(&self, range: FrameRange) -> RevealResult<Vec<FrameVisuals>> {
        self.check_range(range)?;

        let frames = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            pool.install(|| {
                (range.start.0..range.end.0)
                    .into_par_iter()
                    .map(|f| self.render(FrameIndex(f)))
                    .collect::<Vec<_>>()
            })
        } else {
            range.iter().map(|f| self.render(f)).collect()
        };

        tracing::debug!(frames = frames.len(), "rendered frame range");
        Ok(frames)
    }

    /// Split `range` into consecutive chunks for bounded-memory rendering.
    ///
    /// Chunks hold at most `chunk_size` frames, further capped so that one chunk of
    /// rasterized RGBA8 frames stays within a fixed byte budget.
    pub fn frame_chunks(
        &self,
        range: FrameRange,
    ) -> RevealResult<impl Iterator<Item = FrameRange>> {
        self.check_range(range)?;
        let bytes_per_frame = u64::from(self.canvas.width)
            .saturating_mul(u64::from(self.canvas.height))
            .saturating_mul(4)
            .max(1);
        let max_chunk_by_mem = (MAX_CHUNK_BUFFER_BYTES / bytes_per_frame).max(1);
        let chunk_size = normalized_chunk_size(self.opts.chunk_size).min(max_chunk_by_mem);

        let end = range.end.0;
        Ok((range.start.0..end)
            .step_by(chunk_size as usize)
            .map(move |start| FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(start.saturating_add(chunk_size).min(end)),
            }))
    }

    fn check_range(&self, range: FrameRange) -> RevealResult<()> {
        if range.is_empty() {
            return Err(RevealError::validation(
                "render_frames range must be non-empty",
            ));
        }
        if range.end.0 > self.duration_frames {
            return Err(RevealError::validation(
                "render_frames range must be within composition duration",
            ));
        }
        Ok(())
    }

    /// Map a logo-space point (dot center) into canvas space.
    pub fn canvas_position(&self, p: Point) -> Point {
        p + self.layout.origin(self.canvas)
    }
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> RevealResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RevealError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RevealError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_session.rs"]
mod tests;
