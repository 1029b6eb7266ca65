use kurbo::{Cap, Join, Shape};
use rayon::prelude::*;

use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::measure::parse_svg_path;
use crate::reveal::mapper::DotVisual;
use crate::render::blur::{BlurParams, blur_rgba8_premul};
use crate::render::composite::over_in_place;
use crate::render::frame::FrameRGBA;
use crate::session::render_session::{AnimationSession, FrameVisuals, build_thread_pool};

/// Flattening tolerance for dot circles and stroked outlines.
const TOLERANCE: f64 = 0.1;

/// Options for [`CpuCompositor`].
#[derive(Clone, Copy, Debug)]
pub struct CpuCompositorOpts {
    /// Color the canvas is cleared to before drawing.
    pub background: Rgba8,
}

impl Default for CpuCompositorOpts {
    fn default() -> Self {
        Self {
            background: Rgba8::WHITE,
        }
    }
}

#[derive(Clone, Debug)]
struct Outline {
    /// Stroked outline as a fillable area, in logo space.
    area: vello_cpu::kurbo::BezPath,
    color: Rgba8,
}

/// Rasterizes [`FrameVisuals`] into pixels with `vello_cpu`.
///
/// Painted background outlines are drawn first, then every dot as a filled circle on its own
/// layer. In production mode the dot layer is blurred before it is composited.
#[derive(Clone, Debug)]
pub struct CpuCompositor {
    width: u16,
    height: u16,
    background: Rgba8,
    origin: Vec2,
    outline_offset: Vec2,
    outlines: Vec<Outline>,
}

impl CpuCompositor {
    /// Prepare a compositor for frames of `session`.
    pub fn new(session: &AnimationSession, opts: CpuCompositorOpts) -> RevealResult<Self> {
        let Canvas { width, height } = session.canvas();
        let width = u16::try_from(width)
            .map_err(|_| RevealError::validation("canvas width exceeds u16::MAX"))?;
        let height = u16::try_from(height)
            .map_err(|_| RevealError::validation("canvas height exceeds u16::MAX"))?;

        let mut outlines = Vec::new();
        for bg in session.backgrounds() {
            let Some(color) = bg.color else {
                continue;
            };
            if bg.width <= 0.0 {
                continue;
            }
            let path = parse_svg_path(&bg.svg_path_d)?;
            let style = kurbo::Stroke::new(bg.width)
                .with_caps(Cap::Round)
                .with_join(Join::Round);
            let area = kurbo::stroke(
                path.elements().iter().copied(),
                &style,
                &kurbo::StrokeOpts::default(),
                TOLERANCE,
            );
            outlines.push(Outline {
                area: bezpath_to_cpu(&area),
                color,
            });
        }

        let layout = session.layout();
        let origin = layout.origin(session.canvas());
        Ok(Self {
            width,
            height,
            background: opts.background,
            origin,
            outline_offset: origin + layout.stroke_translate,
            outlines,
        })
    }

    /// Rasterize one frame.
    pub fn render(&self, frame: &FrameVisuals) -> RevealResult<FrameRGBA> {
        let mut base = vello_cpu::Pixmap::new(self.width, self.height);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_paint(color_to_cpu(self.background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        ctx.set_transform(affine_to_cpu(Affine::translate(self.outline_offset)));
        for outline in &self.outlines {
            ctx.set_paint(color_to_cpu(outline.color));
            ctx.fill_path(&outline.area);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut base);

        let dots = frame.strokes.iter().flat_map(|s| s.dots.iter());
        let blur = frame
            .strokes
            .iter()
            .flat_map(|s| s.dots.first())
            .find_map(|d| d.blur_px)
            .map(BlurParams::from_css_px);

        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(affine_to_cpu(Affine::translate(self.origin)));
        for dot in dots {
            draw_dot(&mut ctx, dot);
        }
        ctx.flush();
        ctx.render_to_pixmap(&mut layer);

        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let mut data = base.data_as_u8_slice().to_vec();
        match blur {
            Some(params) if !params.is_identity() => {
                let blurred = blur_rgba8_premul(layer.data_as_u8_slice(), w, h, params)?;
                over_in_place(&mut data, &blurred)?;
            }
            _ => over_in_place(&mut data, layer.data_as_u8_slice())?,
        }

        Ok(FrameRGBA {
            width: w,
            height: h,
            data,
            premultiplied: true,
        })
    }

    /// Rasterize several frames, optionally on a rayon pool. Output order matches input order.
    #[tracing::instrument(skip(self, frames), fields(frames = frames.len()))]
    pub fn render_all(
        &self,
        frames: &[FrameVisuals],
        parallel: bool,
        threads: Option<usize>,
    ) -> RevealResult<Vec<FrameRGBA>> {
        if !parallel {
            return frames.iter().map(|f| self.render(f)).collect();
        }
        let pool = build_thread_pool(threads)?;
        pool.install(|| frames.par_iter().map(|f| self.render(f)).collect())
    }
}

fn draw_dot(ctx: &mut vello_cpu::RenderContext, dot: &DotVisual) {
    let radius = dot.size / 2.0;
    if !(radius.is_finite() && radius > 0.0) {
        return;
    }
    let circle = kurbo::Circle::new(dot.position, radius);
    let mut p = vello_cpu::kurbo::BezPath::new();
    for el in circle.path_elements(TOLERANCE) {
        p.push(el);
    }
    ctx.set_paint(color_to_cpu(dot.color));
    ctx.fill_path(&p);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        out.push(el);
    }
    out
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
