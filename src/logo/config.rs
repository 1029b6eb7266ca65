//! The authored logo: two traced strokes, their palettes, widths and timings.
//!
//! [`LogoConfig::default`] is the logo as shipped. A config can also be read from JSON to
//! render variations; it is validated before a session is mounted from it.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::progress::StrokeTiming;
use crate::animation::spring::SpringConfig;
use crate::foundation::core::{Canvas, Fps, Rgba8, Vec2};
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::sample::SampleOrder;
use crate::reveal::mapper::StrokeStyle;

/// Outer stroke, traced counter-clockwise from its inner end.
pub const STROKE_A_PATH_D: &str = "M154.610453,134 L145.610453,127 L137.610453,123 L126.610453,120 L115.610453,119 L104.610453,119 L88.6104526,122 L76.6104526,125 L64.6104526,130 L54.6104526,136 L46.6104526,142 L38.6104526,149 L31.6104526,157 L25.6104526,165 L21.6104526,172 L16.6104526,180 L11.6104526,189 L6.61045265,203 L4.61045265,214 L3.61045265,227 L2.61045265,238 L3.61045265,249 L6.61045265,260 L12.6104526,272 L21.6104526,284 L33.6104526,296 L49.6104526,304 L65.6104526,308 L86.6104526,309 L110.610453,308 L130.610453,303 L157.610453,295 L186.610453,283 L209.610453,272 L234.610453,257 L253.610453,243 L272.610453,228 L293.610453,209 L310.610453,186 L317.610453,167 L318.610453,147 L313.610453,137 L304.610453,130 L289.610453,126 L265.610453,127 L240.610453,136 L209.610453,151 L195.610453,161 L179.610453,172 L162.610453,185 L149.610453,195 L137.610453,206 L125.610453,218 L112.610453,232 L98.6104526,248 L88.6104526,262 L80.6104526,274 L72.6104526,287 L64.6104526,300 L54.6104526,318 L49.6104526,338 L46.6104526,356 L47.6104526,375 L50.6104526,387 L54.6104526,400 L64.6104526,413 L79.6104526,425 L98.6104526,433 L121.610453,435 L145.610453,434 L167.610453,430 L187.610453,423 L206.610453,415 L227.610453,405 L246.610453,393 L262.610453,382 L277.610453,370 L288.610453,359 C291.497716,355.59476 294.164383,352.261427 296.610453,349 C299.056523,345.738573 301.389856,342.40524 303.610453,339 L306.610453,328 L306.610453,316 L303.610453,304 L297.610453,295 L289.610453,290 L280.610453,289 L267.610453,290 L255.610453,295 L243.610453,303 L231.610453,312 L221.610453,321 L212.610453,330 L203.610453,342 L196.610453,357 L193.610453,367 L191.610453,383 L191.610453,396 L194.610453,409 L202.610453,422 L217.610453,435 L232.610453,440 L250.610453,442 L269.610453,440 L286.610453,434 L301.610453,426 L315.610453,415 L325.610453,404 L333.610453,393 L341.610453,380 L347.610453,366 L351.610453,352 L352.610453,338 L352.610453,320";

/// Leaf stroke on top of the outer stroke.
pub const STROKE_B_PATH_D: &str = "M178.610453,104 L200.610453,100 L212.610453,95 L235.610453,79 L252.610453,58 L262.610453,34 L266.610453,17 L265.610453,0 L238.610453,6 L213.610453,20 C208.943786,24 205.277119,27.3333333 202.610453,30 C199.943786,32.6666667 197.943786,35.3333333 196.610453,38 L189.610453,50 L181.610453,65 L178.610453,80 L177.610453,96 L179.610453,116";

/// Rainbow palette of the outer stroke, in authored order (applied reversed).
pub const RAINBOW: [Rgba8; 10] = [
    Rgba8::rgb(0xa9, 0xd1, 0x5f),
    Rgba8::rgb(0xf3, 0xd8, 0x05),
    Rgba8::rgb(0xf5, 0xa4, 0x1c),
    Rgba8::rgb(0xf5, 0x8f, 0x69),
    Rgba8::rgb(0xee, 0x4b, 0x3a),
    Rgba8::rgb(0xf5, 0x91, 0xa5),
    Rgba8::rgb(0xaa, 0x6a, 0xbe),
    Rgba8::rgb(0x54, 0x53, 0xbb),
    Rgba8::rgb(0x4e, 0x82, 0xd8),
    Rgba8::rgb(0x76, 0xb3, 0xe9),
];

/// Teal palette of the leaf stroke, in authored order (applied reversed).
pub const TEAL: [Rgba8; 2] = [Rgba8::rgb(0x03, 0x7a, 0x95), Rgba8::rgb(0x88, 0xc8, 0xa3)];

/// Frame rate, canvas and length of the rendered clip.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositionMeta {
    /// Frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Clip length in frames.
    pub duration_frames: u64,
}

impl Default for CompositionMeta {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            canvas: Canvas {
                width: 700,
                height: 700,
            },
            duration_frames: 150,
        }
    }
}

/// Placement of the logo inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoLayout {
    /// Logo box width, centered horizontally in the canvas.
    pub box_width: f64,
    /// Logo box height, centered vertically in the canvas.
    pub box_height: f64,
    /// Offset of the background strokes inside the box.
    pub stroke_translate: Vec2,
}

impl Default for LogoLayout {
    fn default() -> Self {
        Self {
            box_width: 382.0,
            box_height: 455.0,
            stroke_translate: Vec2::new(13.389547, 10.0),
        }
    }
}

impl LogoLayout {
    /// Top-left corner of the logo box when centered in `canvas`.
    pub fn origin(&self, canvas: Canvas) -> Vec2 {
        Vec2::new(
            (f64::from(canvas.width) - self.box_width) / 2.0,
            (f64::from(canvas.height) - self.box_height) / 2.0,
        )
    }
}

/// Static outline drawn underneath a stroke's dots.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BackgroundStroke {
    /// SVG path data of the outline.
    pub svg_path_d: String,
    /// Outline width.
    pub width: f64,
    /// Outline paint; `None` leaves the outline unpainted.
    #[serde(default)]
    pub color: Option<Rgba8>,
}

/// Everything needed to animate one stroke.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeConfig {
    /// Human-readable label used in logs.
    pub name: String,
    /// SVG path data the dots are sampled from.
    pub svg_path_d: String,
    /// Whether sampled points are listed from the path's start or end.
    #[serde(default)]
    pub order: SampleOrder,
    /// Width of the static outline under the dots.
    pub background_width: f64,
    /// Paint of the static outline, if any.
    #[serde(default)]
    pub background_color: Option<Rgba8>,
    /// Dot widths and palette.
    pub style: StrokeStyle,
    /// Start delay and spring.
    pub timing: StrokeTiming,
}

impl StrokeConfig {
    /// Static outline descriptor for the compositor.
    pub fn background(&self) -> BackgroundStroke {
        BackgroundStroke {
            svg_path_d: self.svg_path_d.clone(),
            width: self.background_width,
            color: self.background_color,
        }
    }

    fn validate(&self) -> RevealResult<()> {
        let ctx = |e: RevealError| RevealError::validation(format!("stroke '{}': {e}", self.name));
        if self.svg_path_d.trim().is_empty() {
            return Err(ctx(RevealError::validation("svg_path_d must be non-empty")));
        }
        if !self.background_width.is_finite() || self.background_width < 0.0 {
            return Err(ctx(RevealError::validation(
                "background_width must be finite and >= 0",
            )));
        }
        self.style.validate().map_err(ctx)?;
        self.timing.validate().map_err(ctx)?;
        Ok(())
    }
}

/// Full description of the logo animation.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LogoConfig {
    /// Frame rate, canvas and duration.
    #[serde(default)]
    pub composition: CompositionMeta,
    /// Logo placement inside the canvas.
    #[serde(default)]
    pub layout: LogoLayout,
    /// The two strokes, in draw order.
    pub strokes: [StrokeConfig; 2],
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            composition: CompositionMeta::default(),
            layout: LogoLayout::default(),
            strokes: [
                StrokeConfig {
                    name: "outer".to_owned(),
                    svg_path_d: STROKE_A_PATH_D.to_owned(),
                    order: SampleOrder::Reverse,
                    background_width: 24.0,
                    background_color: None,
                    style: StrokeStyle {
                        max_stroke_width: 32.0,
                        palette: RAINBOW.iter().rev().copied().collect(),
                    },
                    timing: StrokeTiming {
                        delay_frames: 20,
                        spring: SpringConfig::with_mass_damping(15.0, 200.0),
                    },
                },
                StrokeConfig {
                    name: "leaf".to_owned(),
                    svg_path_d: STROKE_B_PATH_D.to_owned(),
                    order: SampleOrder::Forward,
                    background_width: 19.0,
                    background_color: None,
                    style: StrokeStyle {
                        max_stroke_width: 22.0,
                        palette: TEAL.iter().rev().copied().collect(),
                    },
                    timing: StrokeTiming {
                        delay_frames: 10,
                        spring: SpringConfig::with_mass_damping(1.0, 200.0),
                    },
                },
            ],
        }
    }
}

impl LogoConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> RevealResult<Self> {
        serde_json::from_reader(r).map_err(|e| RevealError::serde(format!("parse logo config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RevealResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RevealError::validation(format!("open logo config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate composition metadata and both strokes.
    pub fn validate(&self) -> RevealResult<()> {
        let fps = self.composition.fps;
        Fps::new(fps.num, fps.den)?;
        let canvas = self.composition.canvas;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(RevealError::validation("canvas width/height must be > 0"));
        }
        for stroke in &self.strokes {
            stroke.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/config.rs"]
mod tests;
