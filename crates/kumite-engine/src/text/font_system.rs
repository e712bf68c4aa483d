use std::path::{Path, PathBuf};

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};
use image::RgbaImage;

use crate::paint::Color;

/// Error returned when loading a font.
#[derive(Debug, thiserror::Error)]
pub enum FontLoadError {
    #[error("unable to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font parse error: {0}")]
    Parse(String),
}

/// Error returned when rasterizing text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    #[error("unknown font {0:?}")]
    UnknownFont(FontId),
    #[error("text has zero width")]
    ZeroWidth,
}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts and rasterizes text with them.
///
/// Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
    layout: Layout<()>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self {
            fonts: Vec::new(),
            layout: Layout::new(CoordinateSystem::PositiveYDown),
        }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError::Parse(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        Ok(id)
    }

    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId, FontLoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| FontLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_font(&bytes)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Drops every loaded font. Previously issued `FontId`s become invalid.
    pub fn clear(&mut self) {
        self.fonts.clear();
    }

    /// Rasterizes a single line of `text` at `px` pixels into a tightly sized
    /// RGBA image. Glyph coverage goes into alpha; RGB is `color`.
    pub fn rasterize(
        &mut self,
        text: &str,
        id: FontId,
        px: f32,
        color: Color,
    ) -> Result<RgbaImage, TextError> {
        let font = self.fonts.get(id.0).ok_or(TextError::UnknownFont(id))?;

        self.layout.reset(&LayoutSettings::default());
        self.layout.append(&[font], &TextStyle::new(text, px, 0));

        let glyphs = self.layout.glyphs();

        // Pen extent after each glyph, so trailing spaces still count.
        let width = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, px);
                let pen = g.x - m.xmin as f32 + m.advance_width;
                pen.max(g.x + g.width as f32)
            })
            .fold(0.0f32, f32::max)
            .ceil() as u32;
        let height = self.layout.height().ceil() as u32;

        if width == 0 || height == 0 {
            return Err(TextError::ZeroWidth);
        }

        let mut image = RgbaImage::from_pixel(width, height, image::Rgba(Color::TRANSPARENT.to_array()));

        for g in glyphs {
            if !g.char_data.rasterize() || g.width == 0 || g.height == 0 {
                continue;
            }
            let (metrics, coverage) = font.rasterize_config(g.key);
            let gx = g.x.round() as i64;
            let gy = g.y.round() as i64;

            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let cov = coverage[row * metrics.width + col];
                    if cov == 0 {
                        continue;
                    }
                    let x = gx + col as i64;
                    let y = gy + row as i64;
                    if x < 0 || y < 0 || x >= i64::from(width) || y >= i64::from(height) {
                        continue;
                    }
                    let dst = image.get_pixel_mut(x as u32, y as u32);
                    // Overlapping glyph boxes keep the stronger coverage.
                    let existing = dst.0[3];
                    let candidate = color.with_coverage(cov);
                    if candidate[3] > existing {
                        dst.0 = candidate;
                    }
                }
            }
        }

        Ok(image)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(matches!(err, FontLoadError::Parse(_)));
        assert!(fonts.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font_file("no/such/Inktype.ttf").unwrap_err();
        match err {
            FontLoadError::Io { path, .. } => assert_eq!(path, PathBuf::from("no/such/Inktype.ttf")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rasterize_with_unknown_font_fails() {
        let mut fonts = FontSystem::new();
        let err = fonts.rasterize("FPS: 60", FontId(3), 16.0, Color::WHITE).unwrap_err();
        assert_eq!(err, TextError::UnknownFont(FontId(3)));
    }
}
