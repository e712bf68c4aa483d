/// Axis-aligned rectangle in whole pixels (top-left origin, +Y down).
///
/// Used both for destination quads on screen and for clip regions inside a
/// texture.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle at the origin covering `w × h`.
    #[inline]
    pub const fn sized(w: u32, h: u32) -> Self {
        Self::new(0, 0, w, h)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Exclusive right edge.
    #[inline]
    pub fn right(self) -> i32 {
        self.x + self.w as i32
    }

    /// Exclusive bottom edge.
    #[inline]
    pub fn bottom(self) -> i32 {
        self.y + self.h as i32
    }

    /// Same size, moved so the top-left corner sits at `(x, y)`.
    #[inline]
    pub fn at(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Normalized `[min, max]` texture coordinates of this rect inside a
    /// `width × height` image.
    pub fn uv_in(self, width: u32, height: u32) -> ([f32; 2], [f32; 2]) {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        (
            [self.x as f32 / w, self.y as f32 / h],
            [self.right() as f32 / w, self.bottom() as f32 / h],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: i32, y: i32, w: u32, h: u32) -> PixelRect { PixelRect::new(x, y, w, h) }

    // ── uv ────────────────────────────────────────────────────────────────

    #[test]
    fn uv_of_second_sprite_cell() {
        let (min, max) = r(107, 0, 106, 200).uv_in(642, 200);
        assert!((min[0] - 107.0 / 642.0).abs() < 1e-6);
        assert_eq!(min[1], 0.0);
        assert!((max[0] - 213.0 / 642.0).abs() < 1e-6);
        assert_eq!(max[1], 1.0);
    }

    #[test]
    fn uv_of_full_image_is_unit_square() {
        assert_eq!(r(0, 0, 64, 32).uv_in(64, 32), ([0.0, 0.0], [1.0, 1.0]));
    }

    #[test]
    fn at_moves_without_resizing() {
        assert_eq!(r(3, 4, 5, 6).at(-1, 2), r(-1, 2, 5, 6));
    }
}
