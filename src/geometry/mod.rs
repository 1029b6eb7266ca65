/// Arc-length measurement of vector paths.
pub mod measure;
/// Unit-spaced point sampling along a path.
pub mod sample;
/// Moving-average smoothing of sampled points.
pub mod smooth;
