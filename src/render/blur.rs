//! Separable gaussian blur over premultiplied RGBA8 buffers.
//!
//! Weights are quantized to Q16 fixed point so the output is bit-identical across platforms
//! and thread counts.

use crate::foundation::error::{RevealError, RevealResult};

const Q16_ONE: u32 = 1 << 16;

/// Kernel size for a CSS-style `blur(px)` filter, where `px` is the gaussian standard deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurParams {
    /// Kernel half-width in pixels.
    pub radius: u32,
    /// Gaussian standard deviation in pixels.
    pub sigma: f32,
}

impl BlurParams {
    /// Kernel covering three standard deviations of a `blur(px)` filter.
    ///
    /// Non-positive or non-finite values yield a zero radius (no blur).
    pub fn from_css_px(px: f64) -> Self {
        if !px.is_finite() || px <= 0.0 {
            return Self {
                radius: 0,
                sigma: 0.0,
            };
        }
        Self {
            radius: (px * 3.0).ceil() as u32,
            sigma: px as f32,
        }
    }

    /// Return `true` when applying these params leaves the image unchanged.
    pub fn is_identity(self) -> bool {
        self.radius == 0
    }
}

/// Blur a tightly packed `width * height` premultiplied RGBA8 buffer.
///
/// Edges are extended by clamping sample coordinates. A zero `radius` copies the input.
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    params: BlurParams,
) -> RevealResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| RevealError::evaluation("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(RevealError::evaluation(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if params.is_identity() || expected_len == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(params)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let (w, h) = (width as usize, height as usize);
    convolve(src, &mut tmp, w, h, Axis::Horizontal, &kernel);
    convolve(&tmp, &mut out, w, h, Axis::Vertical, &kernel);
    Ok(out)
}

fn gaussian_kernel_q16(params: BlurParams) -> RevealResult<Vec<u32>> {
    let BlurParams { radius, sigma } = params;
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(RevealError::validation("blur sigma must be > 0"));
    }

    let r = radius as i64;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(RevealError::evaluation("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|&wf| ((wf / sum) * f64::from(Q16_ONE)).round().clamp(0.0, f64::from(Q16_ONE)) as u32)
        .collect();

    // Push the rounding residue into the center tap so weights sum to exactly 1.0.
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = i64::from(Q16_ONE) - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, i64::from(Q16_ONE)) as u32;
    }
    Ok(weights)
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn convolve(src: &[u8], dst: &mut [u8], w: usize, h: usize, axis: Axis, k: &[u32]) {
    let radius = (k.len() / 2) as isize;
    let (extent, step) = match axis {
        Axis::Horizontal => (w, 1),
        Axis::Vertical => (h, w),
    };
    let last = extent as isize - 1;

    for y in 0..h {
        for x in 0..w {
            let along = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            } as isize;
            let line_start = (y * w + x) - (along as usize) * step;

            let mut acc = [0u64; 4];
            for (ki, &kw) in k.iter().enumerate() {
                let s = (along + ki as isize - radius).clamp(0, last) as usize;
                let idx = (line_start + s * step) * 4;
                for (c, a) in acc.iter_mut().enumerate() {
                    *a += u64::from(kw) * u64::from(src[idx + c]);
                }
            }

            let out_idx = (y * w + x) * 4;
            for (c, a) in acc.into_iter().enumerate() {
                dst[out_idx + c] = q16_to_u8(a);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    let v = (acc + 32768) >> 16;
    v.min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/blur.rs"]
mod tests;
