/// Pending/ready lifecycle around [`render_session::AnimationSession`].
pub mod mount;
/// Immutable per-logo animation state and frame evaluation.
pub mod render_session;
