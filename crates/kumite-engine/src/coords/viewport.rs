/// Size of the drawable area in logical pixels.
///
/// The sprite shader divides destination positions by this to reach NDC.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport size clamped to at least one pixel per axis, ready for upload.
    #[inline]
    pub fn to_uniform(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
