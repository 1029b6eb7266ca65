use std::sync::Arc;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{RevealError, RevealResult};
use crate::geometry::measure::ArcLengthPath;
use crate::logo::config::LogoConfig;
use crate::session::render_session::{AnimationSession, FrameVisuals, SessionOpts};

/// Readiness of a [`Mount`].
#[derive(Clone, Debug)]
pub enum MountState {
    /// Path geometry is not measurable yet; frames are rejected.
    Pending,
    /// Geometry was sampled; frames can be evaluated.
    Ready(Arc<AnimationSession>),
}

/// Two-phase lifecycle gating frame evaluation on path geometry.
///
/// A mount starts [`MountState::Pending`] and moves to [`MountState::Ready`] the first time
/// both paths are available. Later polls never re-sample.
#[derive(Debug)]
pub struct Mount {
    config: LogoConfig,
    opts: SessionOpts,
    state: MountState,
}

impl Mount {
    /// Create a pending mount for a validated `config`.
    pub fn new(config: LogoConfig, opts: SessionOpts) -> RevealResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            opts,
            state: MountState::Pending,
        })
    }

    /// Current state.
    pub fn state(&self) -> &MountState {
        &self.state
    }

    /// Return `true` once a session exists.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, MountState::Ready(_))
    }

    /// Offer path geometry; `None` means "not measurable yet".
    ///
    /// Returns whether the mount is ready afterwards. Once ready, further calls return `true`
    /// without touching the paths.
    pub fn poll(
        &mut self,
        a: Option<&dyn ArcLengthPath>,
        b: Option<&dyn ArcLengthPath>,
    ) -> RevealResult<bool> {
        if self.is_ready() {
            return Ok(true);
        }
        let (Some(a), Some(b)) = (a, b) else {
            tracing::debug!("path geometry not measurable yet; staying pending");
            return Ok(false);
        };
        let session = AnimationSession::from_paths(&self.config, [a, b], self.opts.clone())?;
        self.state = MountState::Ready(Arc::new(session));
        tracing::debug!("mount ready");
        Ok(true)
    }

    /// Measure the SVG path data embedded in the config and become ready.
    pub fn poll_config(&mut self) -> RevealResult<bool> {
        if self.is_ready() {
            return Ok(true);
        }
        let session = AnimationSession::from_config(&self.config, self.opts.clone())?;
        self.state = MountState::Ready(Arc::new(session));
        Ok(true)
    }

    /// Shared handle to the session, or [`RevealError::NotReady`] while pending.
    pub fn session(&self) -> RevealResult<Arc<AnimationSession>> {
        match &self.state {
            MountState::Ready(session) => Ok(Arc::clone(session)),
            MountState::Pending => Err(RevealError::not_ready(
                "path geometry has not been measured",
            )),
        }
    }

    /// Evaluate `frame`, rejecting the request while pending.
    pub fn render(&self, frame: FrameIndex) -> RevealResult<FrameVisuals> {
        match &self.state {
            MountState::Ready(session) => Ok(session.render(frame)),
            MountState::Pending => Err(RevealError::not_ready(format!(
                "cannot render frame {} before path geometry is measured",
                frame.0
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/mount.rs"]
mod tests;
