use super::SurfaceErrorAction;

/// Picks the swapchain format: the first sRGB 8-bit format if preferred and
/// offered, otherwise whatever the surface lists first.
pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    const SRGB: [wgpu::TextureFormat; 2] = [
        wgpu::TextureFormat::Bgra8UnormSrgb,
        wgpu::TextureFormat::Rgba8UnormSrgb,
    ];

    if prefer_srgb {
        if let Some(f) = SRGB.into_iter().find(|f| formats.contains(f)) {
            return Some(f);
        }
    }
    formats.first().copied()
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Maps a surface error to the action the runtime takes. Reconfiguration
/// itself is done by the caller.
pub(crate) fn action_for(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn prefers_srgb_when_offered() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(Fmt::Rgba8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(Fmt::Bgra8Unorm));
        assert_eq!(choose_surface_format(&[Fmt::Rgb10a2Unorm], true), Some(Fmt::Rgb10a2Unorm));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn requested_alpha_mode_used_only_if_supported() {
        let supported = [Alpha::Opaque, Alpha::PreMultiplied];
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PreMultiplied)), Alpha::PreMultiplied);
        assert_eq!(choose_alpha_mode(&supported, Some(Alpha::PostMultiplied)), Alpha::Opaque);
        assert_eq!(choose_alpha_mode(&[], None), Alpha::Auto);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn surface_error_actions() {
        assert_eq!(action_for(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(action_for(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(action_for(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(action_for(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
    }
}
