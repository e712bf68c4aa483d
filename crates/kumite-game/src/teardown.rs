use std::fmt;

use kumite_engine::audio::Mixer;

use crate::assets::Assets;

/// One step of shutdown, in the order they run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TeardownStage {
    FpsText,
    Font,
    Background,
    SpriteSheet,
    SoundEffects,
    Music,
    Mixer,
    Renderer,
}

impl fmt::Display for TeardownStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeardownStage::FpsText => "fps text",
            TeardownStage::Font => "font",
            TeardownStage::Background => "background texture",
            TeardownStage::SpriteSheet => "sprite sheet texture",
            TeardownStage::SoundEffects => "sound effects",
            TeardownStage::Music => "music",
            TeardownStage::Mixer => "mixer",
            TeardownStage::Renderer => "renderer",
        };
        f.write_str(name)
    }
}

/// Releases the game's resources one stage at a time and returns the stages
/// in the order they ran. The window and GPU device go afterwards, in the
/// runtime.
pub fn teardown<H, R>(
    assets: Assets<H>,
    mut mixer: Option<Mixer>,
    renderer: Option<R>,
) -> Vec<TeardownStage> {
    let Assets {
        mut fps_text,
        mut fonts,
        font: _,
        mut background,
        mut sprite_sheet,
        sounds,
        music,
    } = assets;

    let mut done = Vec::with_capacity(8);
    let mut stage = |s: TeardownStage| {
        log::debug!("released {s}");
        done.push(s);
    };

    fps_text.free();
    stage(TeardownStage::FpsText);

    fonts.clear();
    stage(TeardownStage::Font);

    background.free();
    stage(TeardownStage::Background);

    sprite_sheet.free();
    stage(TeardownStage::SpriteSheet);

    drop(sounds);
    stage(TeardownStage::SoundEffects);

    // Freeing the track stops it.
    if let Some(m) = mixer.as_mut() {
        m.halt_music();
    }
    drop(music);
    stage(TeardownStage::Music);

    drop(mixer);
    stage(TeardownStage::Mixer);

    drop(renderer);
    stage(TeardownStage::Renderer);

    done
}
