/// Knobs for creating the [`Gpu`](super::Gpu).
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Pick an sRGB swapchain format when the surface offers one.
    pub prefer_srgb: bool,

    /// Swap behaviour. The frame loop paces itself, so FIFO only adds the
    /// display's vsync on top.
    pub present_mode: wgpu::PresentMode,

    /// Requested alpha mode; falls back to the first supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,
    pub required_limits: wgpu::Limits,

    /// Hint only; backends may ignore it.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_limits_fit_the_background_strip() {
        // 7 frames of 768 px in one row.
        let strip_width = 7 * 768;
        let limits = GpuInit::default().required_limits;
        assert!(limits.max_texture_dimension_2d >= strip_width);
    }
}
