use crate::coords::PixelRect;

/// One recorded textured quad.
///
/// `src` is the region of the texture to sample (in texels), `dst` the
/// on-screen rectangle (in pixels).
#[derive(Debug)]
pub struct Sprite<'a, H> {
    pub texture: &'a H,
    pub texture_size: (u32, u32),
    pub src: PixelRect,
    pub dst: PixelRect,
}

impl<H> Sprite<'_, H> {
    /// Normalized texture coordinates of `src`.
    #[inline]
    pub fn uv(&self) -> ([f32; 2], [f32; 2]) {
        self.src.uv_in(self.texture_size.0, self.texture_size.1)
    }
}

impl<H> Clone for Sprite<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Sprite<'_, H> {}

/// Draw stream for one frame, in paint order (first pushed is drawn first,
/// i.e. back-most).
///
/// The batch borrows the texture handles it references, so textures cannot
/// be released while a frame that uses them is still being recorded.
#[derive(Debug)]
pub struct SpriteBatch<'a, H> {
    sprites: Vec<Sprite<'a, H>>,
}

impl<'a, H> SpriteBatch<'a, H> {
    pub fn new() -> Self {
        Self { sprites: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { sprites: Vec::with_capacity(capacity) }
    }

    /// Records a sprite. Zero-area destinations are dropped.
    pub fn push(&mut self, sprite: Sprite<'a, H>) {
        if sprite.dst.is_empty() {
            return;
        }
        self.sprites.push(sprite);
    }

    #[inline]
    pub fn sprites(&self) -> &[Sprite<'a, H>] {
        &self.sprites
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl<H> Default for SpriteBatch<'_, H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_paint_order() {
        let (bg, fg) = ("bg", "fg");
        let mut batch = SpriteBatch::new();
        batch.push(Sprite { texture: &bg, texture_size: (4, 4), src: PixelRect::sized(4, 4), dst: PixelRect::sized(4, 4) });
        batch.push(Sprite { texture: &fg, texture_size: (2, 2), src: PixelRect::sized(2, 2), dst: PixelRect::new(1, 1, 2, 2) });

        let order: Vec<&str> = batch.sprites().iter().map(|s| *s.texture).collect();
        assert_eq!(order, ["bg", "fg"]);
    }

    #[test]
    fn zero_area_sprite_is_dropped() {
        let tex = ();
        let mut batch = SpriteBatch::new();
        batch.push(Sprite { texture: &tex, texture_size: (0, 0), src: PixelRect::default(), dst: PixelRect::default() });
        assert!(batch.is_empty());
    }
}
