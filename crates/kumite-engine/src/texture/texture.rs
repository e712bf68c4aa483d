use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::coords::PixelRect;
use crate::paint::Color;
use crate::scene::{Sprite, SpriteBatch};
use crate::text::{FontId, FontSystem, TextError};

/// Error returned by the [`Texture`] loaders.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    #[error("unable to load image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unable to render text surface: {0}")]
    Text(#[from] TextError),
    #[error("unable to create texture ({width}x{height}): {reason}")]
    Upload {
        width: u32,
        height: u32,
        reason: String,
    },
}

/// Turns decoded pixels into an owned, renderable handle.
///
/// Dropping the handle releases the underlying resource.
pub trait TextureUploader {
    type Handle;

    fn upload(&mut self, image: &RgbaImage) -> Result<Self::Handle, TextureError>;
}

/// A single image (or rendered line of text) ready to draw.
///
/// Invariant: either no handle and `0 × 0`, or a live handle whose
/// dimensions match the decoded source. Every load releases the previous
/// handle first, so a failed load leaves the texture empty.
#[derive(Debug)]
pub struct Texture<H> {
    handle: Option<H>,
    width: u32,
    height: u32,
}

impl<H> Texture<H> {
    pub const fn empty() -> Self {
        Self { handle: None, width: 0, height: 0 }
    }

    /// Decodes the image at `path` and uploads it.
    pub fn load_from_file<U>(
        &mut self,
        path: impl AsRef<Path>,
        uploader: &mut U,
    ) -> Result<(), TextureError>
    where
        U: TextureUploader<Handle = H>,
    {
        self.free();

        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| TextureError::Decode { path: path.to_path_buf(), source })?
            .to_rgba8();

        self.load_from_image(&image, uploader)
    }

    /// Rasterizes `text` with a preloaded font and uploads the result.
    pub fn load_from_text<U>(
        &mut self,
        fonts: &mut FontSystem,
        font: FontId,
        text: &str,
        px: f32,
        color: Color,
        uploader: &mut U,
    ) -> Result<(), TextureError>
    where
        U: TextureUploader<Handle = H>,
    {
        self.free();

        let image = fonts.rasterize(text, font, px, color)?;
        self.load_from_image(&image, uploader)
    }

    pub fn load_from_image<U>(&mut self, image: &RgbaImage, uploader: &mut U) -> Result<(), TextureError>
    where
        U: TextureUploader<Handle = H>,
    {
        self.free();

        let handle = uploader.upload(image)?;
        self.handle = Some(handle);
        self.width = image.width();
        self.height = image.height();
        Ok(())
    }

    /// Releases the handle, if any.
    pub fn free(&mut self) {
        self.handle = None;
        self.width = 0;
        self.height = 0;
    }

    /// Records a draw with the top-left corner at `(x, y)`.
    ///
    /// With `clip`, only that sub-rectangle is drawn, at its own size.
    /// Drawing an empty texture records nothing.
    pub fn draw<'a>(&'a self, x: i32, y: i32, clip: Option<PixelRect>, batch: &mut SpriteBatch<'a, H>) {
        let Some(handle) = self.handle.as_ref() else {
            return;
        };

        let src = clip.unwrap_or(PixelRect::sized(self.width, self.height));
        batch.push(Sprite {
            texture: handle,
            texture_size: (self.width, self.height),
            src,
            dst: src.at(x, y),
        });
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }
}

impl<H> Default for Texture<H> {
    fn default() -> Self {
        Self::empty()
    }
}
