pub mod blur;
/// Premultiplied RGBA8 blending.
pub mod composite;
/// `vello_cpu` compositor for frame visuals.
pub mod cpu;
/// Rasterized frame buffers.
pub mod frame;
