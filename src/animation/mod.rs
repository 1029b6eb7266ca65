pub mod interpolate;
/// Spring output remapped to per-stroke reveal progress.
pub mod progress;
pub mod spring;
