/// Straight-alpha sRGB color, one byte per channel.
///
/// This is the color format the game speaks (text color, clear color).
/// Renderers convert to linear space when they need to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(0xFF, 0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgba(0x00, 0x00, 0x00, 0xFF);
    pub const TRANSPARENT: Color = Color::rgba(0x00, 0x00, 0x00, 0x00);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Same color with alpha scaled by `coverage` (0..=255).
    ///
    /// Used when compositing rasterized glyph coverage.
    #[inline]
    pub fn with_coverage(self, coverage: u8) -> [u8; 4] {
        let a = (u16::from(self.a) * u16::from(coverage) + 127) / 255;
        [self.r, self.g, self.b, a as u8]
    }

    /// Linear-space clear color for an sRGB render target.
    pub fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: srgb_to_linear(self.r),
            g: srgb_to_linear(self.g),
            b: srgb_to_linear(self.b),
            a: f64::from(self.a) / 255.0,
        }
    }
}

fn srgb_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_and_black_map_to_linear_extremes() {
        let w = Color::WHITE.to_wgpu();
        assert!((w.r - 1.0).abs() < 1e-9 && (w.a - 1.0).abs() < 1e-9);
        let b = Color::BLACK.to_wgpu();
        assert_eq!(b.r, 0.0);
        assert!((b.a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mid_grey_is_darker_in_linear_space() {
        let g = Color::rgb(128, 128, 128).to_wgpu();
        assert!(g.r > 0.2 && g.r < 0.23);
    }

    #[test]
    fn coverage_scales_alpha_only() {
        assert_eq!(Color::WHITE.with_coverage(255), [255, 255, 255, 255]);
        assert_eq!(Color::WHITE.with_coverage(0), [255, 255, 255, 0]);
        assert_eq!(Color::rgba(10, 20, 30, 128).with_coverage(255), [10, 20, 30, 128]);
    }
}
