//! Piecewise-linear mapping between breakpoint ranges.
//!
//! Inputs outside the first/last breakpoint are handled per side by [`Extrapolate`]. Ranges are
//! validated once when an [`Interpolator`] is built so per-point evaluation is infallible.

use crate::foundation::core::Rgba8;
use crate::foundation::error::{RevealError, RevealResult};

/// Behavior for inputs beyond the outermost breakpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the outermost segment's slope.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Extrapolation policy for both sides of a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InterpolateOpts {
    /// Policy for inputs below the first breakpoint.
    pub left: Extrapolate,
    /// Policy for inputs above the last breakpoint.
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Extend on both sides.
    pub const EXTEND: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Extend,
    };

    /// Clamp on both sides.
    pub const CLAMP: Self = Self {
        left: Extrapolate::Clamp,
        right: Extrapolate::Clamp,
    };

    /// Extend on the left, clamp on the right.
    pub const CLAMP_RIGHT: Self = Self {
        left: Extrapolate::Extend,
        right: Extrapolate::Clamp,
    };
}

/// Validated scalar breakpoint mapping.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolator {
    inputs: Vec<f64>,
    outputs: Vec<f64>,
    opts: InterpolateOpts,
}

impl Interpolator {
    /// Build a mapping from `inputs` (strictly increasing) to `outputs` (same length, >= 2).
    pub fn new(inputs: &[f64], outputs: &[f64], opts: InterpolateOpts) -> RevealResult<Self> {
        validate_ranges(inputs, outputs.len())?;
        if outputs.iter().any(|v| !v.is_finite()) {
            return Err(RevealError::validation(
                "interpolate output range must be finite",
            ));
        }
        Ok(Self {
            inputs: inputs.to_vec(),
            outputs: outputs.to_vec(),
            opts,
        })
    }

    /// Map `x` through the breakpoints.
    pub fn eval(&self, x: f64) -> f64 {
        let i = find_segment(&self.inputs, x);
        map_segment(
            x,
            (self.inputs[i], self.inputs[i + 1]),
            (self.outputs[i], self.outputs[i + 1]),
            self.opts,
        )
    }
}

/// One-shot convenience wrapper around [`Interpolator`].
pub fn interpolate(
    x: f64,
    inputs: &[f64],
    outputs: &[f64],
    opts: InterpolateOpts,
) -> RevealResult<f64> {
    Ok(Interpolator::new(inputs, outputs, opts)?.eval(x))
}

/// Breakpoint mapping from a scalar onto a color ramp.
///
/// Each channel is interpolated independently, clamped on both sides and rounded to the
/// nearest integer.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorInterpolator {
    inputs: Vec<f64>,
    colors: Vec<Rgba8>,
}

impl ColorInterpolator {
    /// Build a color ramp over `inputs` (strictly increasing, same length as `colors`, >= 2).
    pub fn new(inputs: &[f64], colors: &[Rgba8]) -> RevealResult<Self> {
        validate_ranges(inputs, colors.len())?;
        Ok(Self {
            inputs: inputs.to_vec(),
            colors: colors.to_vec(),
        })
    }

    /// Sample the ramp at `x`.
    pub fn eval(&self, x: f64) -> Rgba8 {
        let i = find_segment(&self.inputs, x);
        let (a, b) = (self.colors[i], self.colors[i + 1]);
        let span = (self.inputs[i], self.inputs[i + 1]);
        let channel = |ca: u8, cb: u8| -> u8 {
            map_segment(
                x,
                span,
                (f64::from(ca), f64::from(cb)),
                InterpolateOpts::CLAMP,
            )
            .round()
            .clamp(0.0, 255.0) as u8
        };
        Rgba8 {
            r: channel(a.r, b.r),
            g: channel(a.g, b.g),
            b: channel(a.b, b.b),
            a: channel(a.a, b.a),
        }
    }
}

fn validate_ranges(inputs: &[f64], outputs_len: usize) -> RevealResult<()> {
    if inputs.len() < 2 {
        return Err(RevealError::validation(
            "interpolate input range must have at least 2 breakpoints",
        ));
    }
    if inputs.len() != outputs_len {
        return Err(RevealError::validation(
            "interpolate input and output ranges must have the same length",
        ));
    }
    if inputs.iter().any(|v| !v.is_finite()) {
        return Err(RevealError::validation(
            "interpolate input range must be finite",
        ));
    }
    if !inputs.windows(2).all(|w| w[0] < w[1]) {
        return Err(RevealError::validation(
            "interpolate input range must be strictly increasing",
        ));
    }
    Ok(())
}

/// Index of the segment `[inputs[i], inputs[i + 1]]` used for `x`.
///
/// Values left of the range use the first segment, values right of it the last.
fn find_segment(inputs: &[f64], x: f64) -> usize {
    let last = inputs.len() - 1;
    let mut i = 1;
    while i < last {
        if inputs[i] >= x {
            break;
        }
        i += 1;
    }
    i - 1
}

fn map_segment(
    x: f64,
    (in_min, in_max): (f64, f64),
    (out_min, out_max): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    let mut v = x;
    if v < in_min {
        match opts.left {
            Extrapolate::Identity => return v,
            Extrapolate::Clamp => v = in_min,
            Extrapolate::Extend => {}
        }
    }
    if v > in_max {
        match opts.right {
            Extrapolate::Identity => return v,
            Extrapolate::Clamp => v = in_max,
            Extrapolate::Extend => {}
        }
    }
    if out_min == out_max {
        return out_min;
    }
    let t = (v - in_min) / (in_max - in_min);
    t * (out_max - out_min) + out_min
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
