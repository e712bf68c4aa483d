/// One acquired swapchain image plus the encoder recording into it.
///
/// Presentation happens when the surface texture is dropped after
/// [`Gpu::submit`](super::Gpu::submit), so keep this short-lived.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
