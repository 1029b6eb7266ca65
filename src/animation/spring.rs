//! Stepped damped-spring simulation driving a value from 0 toward 1.
//!
//! Time advances one frame at a time from frame 0, and each step applies the closed-form
//! solution of the spring ODE starting from the previous step's position and velocity. Because
//! the result only depends on `(frame, fps, config)`, frames can be sampled in any order.

use crate::foundation::core::Fps;
use crate::foundation::error::{RevealError, RevealResult};

/// Longest simulated step in milliseconds.
const MAX_STEP_MS: f64 = 64.0;

/// Bound on `|x|` below which `target - x` rounds to `target` for a target of 1.
const SETTLED_OFFSET: f64 = 1.0 / (1u64 << 60) as f64;

/// Physical parameters of a spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Mass attached to the spring, must be > 0.
    pub mass: f64,
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness, must be > 0.
    pub stiffness: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
        }
    }
}

impl SpringConfig {
    /// Default stiffness with the given `mass` and `damping`.
    pub fn with_mass_damping(mass: f64, damping: f64) -> Self {
        Self {
            mass,
            damping,
            ..Self::default()
        }
    }

    /// Validate that the parameters describe a physical spring.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(RevealError::validation("spring mass must be finite and > 0"));
        }
        if !self.stiffness.is_finite() || self.stiffness <= 0.0 {
            return Err(RevealError::validation(
                "spring stiffness must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(RevealError::validation(
                "spring damping must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`; `>= 1` means no overshoot.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct SpringState {
    position: f64,
    velocity: f64,
    last_ms: f64,
}

impl SpringState {
    /// Whether every later step yields exactly `target`.
    ///
    /// At `position == target` the spring's energy is `m v^2 / 2`, and with `damping >= 0` it
    /// never grows, so any later offset is bounded by `|v| * sqrt(m / k)`.
    fn is_settled(&self, target: f64, config: SpringConfig) -> bool {
        self.position == target
            && self.velocity.abs() * (config.mass / config.stiffness).sqrt() < SETTLED_OFFSET
    }
}

/// Spring position at `frame` (may be negative or fractional), starting at rest at 0.
///
/// Frames before 0 return exactly 0. Once the simulation comes to rest on the target the
/// remaining steps are skipped, so the cost is bounded for arbitrarily late frames.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    const TARGET: f64 = 1.0;

    let frame = if frame.is_nan() { 0.0 } else { frame.max(0.0) };
    let whole = frame.floor();
    let rest = frame - whole;
    let frame_ms = fps.frame_duration_ms();

    let mut state = SpringState {
        position: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };
    let steps = whole as u64;
    for f in 0..=steps {
        if state.is_settled(TARGET, config) {
            return TARGET;
        }
        let f = if f == steps {
            f as f64 + rest
        } else {
            f as f64
        };
        state = advance(state, f * frame_ms, TARGET, config);
    }
    state.position
}

fn advance(state: SpringState, now_ms: f64, target: f64, config: SpringConfig) -> SpringState {
    let dt = (now_ms - state.last_ms).min(MAX_STEP_MS) / 1000.0;
    let c = config.damping;
    let m = config.mass;
    let k = config.stiffness;

    let v0 = -state.velocity;
    let x0 = target - state.position;
    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();

    let (position, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * dt).exp();
        let (sin1, cos1) = (omega1 * dt).sin_cos();
        let a = (v0 + zeta * omega0 * x0) / omega1;
        let offset = envelope * (a * sin1 + x0 * cos1);
        let velocity =
            zeta * omega0 * offset - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (target - offset, velocity)
    } else {
        let envelope = (-omega0 * dt).exp();
        let position = target - envelope * (x0 + (v0 + omega0 * x0) * dt);
        let velocity = envelope * (v0 * (dt * omega0 - 1.0) + dt * x0 * omega0 * omega0);
        (position, velocity)
    };

    SpringState {
        position,
        velocity,
        last_ms: now_ms,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
