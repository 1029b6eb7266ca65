mod color;
/// Frame, timing, canvas and color primitives.
pub mod core;
/// Error taxonomy and result alias.
pub mod error;
