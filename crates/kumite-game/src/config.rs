use std::path::PathBuf;

use kumite_engine::device::GpuInit;
use kumite_engine::paint::Color;
use kumite_engine::window::RuntimeConfig;
use winit::dpi::LogicalSize;

use crate::clips::SheetLayout;

/// Everything the game needs to know before it opens the window.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub screen_width: u32,
    pub screen_height: u32,

    pub target_fps: u32,
    /// Averages above this are treated as bogus and shown as 0.
    pub fps_ceiling: f32,

    pub foreground: SheetLayout,
    pub background: SheetLayout,

    pub font_px: f32,
    pub text_color: Color,
    pub clear_color: Color,

    pub assets: AssetPaths,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Fight!".to_string(),
            screen_width: 768,
            screen_height: 384,
            target_fps: 60,
            fps_ceiling: 500_000.0,
            foreground: SheetLayout { frames: 6, repeat: 4, stride: 107, frame_width: 106, frame_height: 200 },
            background: SheetLayout { frames: 7, repeat: 7, stride: 768, frame_width: 768, frame_height: 384 },
            font_px: 16.0,
            text_color: Color::WHITE,
            clear_color: Color::WHITE,
            assets: AssetPaths::default(),
        }
    }
}

impl GameConfig {
    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            size: LogicalSize::new(self.screen_width, self.screen_height),
            resizable: false,
        }
    }

    pub fn gpu(&self) -> GpuInit {
        GpuInit::default()
    }
}

/// Asset files, relative to the working directory.
#[derive(Debug, Clone)]
pub struct AssetPaths {
    pub music: PathBuf,
    pub punch: PathBuf,
    pub kick: PathBuf,
    pub hadoken: PathBuf,
    pub shoryuken: PathBuf,
    pub sprite_sheet: PathBuf,
    pub background: PathBuf,
    pub font: PathBuf,
}

impl AssetPaths {
    /// The default file names, resolved against `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            music: dir.join("Ken_Theme.mp3"),
            punch: dir.join("Punch.mp3"),
            kick: dir.join("Kick.mp3"),
            hadoken: dir.join("Hadoken.mp3"),
            shoryuken: dir.join("Shoriuken-.mp3"),
            sprite_sheet: dir.join("spritesheet.png"),
            background: dir.join("bgSprite.png"),
            font: dir.join("Inktype.ttf"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::in_dir("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_fight_window() {
        let config = GameConfig::default();
        let runtime = config.runtime();

        assert_eq!(runtime.title, "Fight!");
        assert_eq!((runtime.size.width, runtime.size.height), (768, 384));
        assert!(!runtime.resizable);
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn default_asset_paths_are_relative_file_names() {
        let paths = AssetPaths::default();
        assert_eq!(paths.music, PathBuf::from("Ken_Theme.mp3"));
        assert_eq!(paths.shoryuken, PathBuf::from("Shoriuken-.mp3"));
        assert_eq!(paths.font, PathBuf::from("Inktype.ttf"));
    }
}
