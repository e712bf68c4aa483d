use kumite_engine::audio::{Music, SoundEffect};
use kumite_engine::paint::Color;
use kumite_engine::text::{FontId, FontSystem};
use kumite_engine::texture::{Texture, TextureUploader};

use crate::config::AssetPaths;
use crate::keymap::Action;

/// The four one-shot sound effects.
#[derive(Default)]
pub struct SoundBank {
    pub punch: Option<SoundEffect>,
    pub kick: Option<SoundEffect>,
    pub hadoken: Option<SoundEffect>,
    pub shoryuken: Option<SoundEffect>,
}

impl SoundBank {
    /// The effect an action plays, if it plays one and it loaded.
    pub fn for_action(&self, action: Action) -> Option<&SoundEffect> {
        match action {
            Action::Punch => self.punch.as_ref(),
            Action::Kick => self.kick.as_ref(),
            Action::Hadoken => self.hadoken.as_ref(),
            Action::Shoryuken => self.shoryuken.as_ref(),
            Action::ToggleMusic | Action::HaltMusic => None,
        }
    }
}

/// Everything loaded from disk, plus the per-frame FPS text texture.
///
/// Each asset loads independently. A failure is logged and leaves that
/// asset empty; the game keeps running without it.
pub struct Assets<H> {
    pub fps_text: Texture<H>,
    pub fonts: FontSystem,
    pub font: Option<FontId>,
    pub background: Texture<H>,
    pub sprite_sheet: Texture<H>,
    pub sounds: SoundBank,
    pub music: Option<Music>,
}

impl<H> Assets<H> {
    pub fn empty() -> Self {
        Self {
            fps_text: Texture::empty(),
            fonts: FontSystem::new(),
            font: None,
            background: Texture::empty(),
            sprite_sheet: Texture::empty(),
            sounds: SoundBank::default(),
            music: None,
        }
    }

    pub fn load<U>(paths: &AssetPaths, uploader: &mut U) -> Self
    where
        U: TextureUploader<Handle = H>,
    {
        let mut assets = Self::empty();

        assets.music = logged("music", Music::from_file(&paths.music));
        assets.sounds = SoundBank {
            punch: logged("punch sound", SoundEffect::from_file(&paths.punch)),
            kick: logged("kick sound", SoundEffect::from_file(&paths.kick)),
            hadoken: logged("hadoken sound", SoundEffect::from_file(&paths.hadoken)),
            shoryuken: logged("shoryuken sound", SoundEffect::from_file(&paths.shoryuken)),
        };

        if let Err(e) = assets.sprite_sheet.load_from_file(&paths.sprite_sheet, uploader) {
            log::error!("failed to load sprite sheet: {e}");
        }
        if let Err(e) = assets.background.load_from_file(&paths.background, uploader) {
            log::error!("failed to load background: {e}");
        }
        assets.font = logged("font", assets.fonts.load_font_file(&paths.font));

        log::info!(
            "assets loaded: sprite sheet {}x{}, background {}x{}, font {}, music {}",
            assets.sprite_sheet.width(),
            assets.sprite_sheet.height(),
            assets.background.width(),
            assets.background.height(),
            if assets.font.is_some() { "ok" } else { "missing" },
            if assets.music.is_some() { "ok" } else { "missing" },
        );
        assets
    }

    /// Re-renders the FPS overlay. Without a font the overlay stays empty.
    pub fn render_fps_text<U>(
        &mut self,
        text: &str,
        px: f32,
        color: Color,
        uploader: &mut U,
    ) -> Result<(), kumite_engine::texture::TextureError>
    where
        U: TextureUploader<Handle = H>,
    {
        let Some(font) = self.font else {
            self.fps_text.free();
            return Ok(());
        };
        self.fps_text
            .load_from_text(&mut self.fonts, font, text, px, color, uploader)
    }
}

fn logged<T, E: std::fmt::Display>(what: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::error!("failed to load {what}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use image::RgbaImage;
    use kumite_engine::texture::TextureError;

    use super::*;

    struct FakeUploader;

    impl TextureUploader for FakeUploader {
        type Handle = (u32, u32);

        fn upload(&mut self, image: &RgbaImage) -> Result<(u32, u32), TextureError> {
            Ok(image.dimensions())
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kumite-assets-{}-{name}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn missing_directory_degrades_to_empty_assets() {
        let paths = AssetPaths::in_dir("definitely/not/here");
        let assets = Assets::load(&paths, &mut FakeUploader);

        assert!(!assets.sprite_sheet.is_loaded());
        assert!(!assets.background.is_loaded());
        assert!(assets.font.is_none());
        assert!(assets.music.is_none());
        assert!(assets.sounds.punch.is_none());
    }

    #[test]
    fn images_load_independently_of_audio() {
        let dir = scratch_dir("images");
        RgbaImage::new(642, 200).save(dir.join("spritesheet.png")).expect("write sheet");
        RgbaImage::new(5376, 384).save(dir.join("bgSprite.png")).expect("write bg");

        let assets = Assets::load(&AssetPaths::in_dir(&dir), &mut FakeUploader);

        assert_eq!(assets.sprite_sheet.handle(), Some(&(642, 200)));
        assert_eq!((assets.background.width(), assets.background.height()), (5376, 384));
        assert!(assets.music.is_none());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn fps_text_without_font_stays_empty() {
        let mut assets = Assets::empty();
        assets
            .render_fps_text("FPS: 60", 16.0, Color::WHITE, &mut FakeUploader)
            .unwrap();
        assert!(!assets.fps_text.is_loaded());
    }

    #[test]
    fn music_actions_have_no_sound_effect() {
        let bank = SoundBank::default();
        assert!(bank.for_action(Action::ToggleMusic).is_none());
        assert!(bank.for_action(Action::HaltMusic).is_none());
    }
}
