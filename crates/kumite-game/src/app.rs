use std::time::Duration;

use kumite_engine::audio::Mixer;
use kumite_engine::core::{App, AppControl, FrameCtx, StartCtx};
use kumite_engine::input::InputEvent;
use kumite_engine::paint::Color;
use kumite_engine::render::{GpuTexture, SpriteRenderer};
use kumite_engine::scene::SpriteBatch;
use kumite_engine::time::MonotonicClock;

use crate::assets::Assets;
use crate::config::GameConfig;
use crate::frame_loop::{FrameLoop, LoopStatus, Platform, SceneFrame};
use crate::keymap::{Action, KeyMap};
use crate::teardown::teardown;

/// The running game: owns every resource it loads and hands them to the
/// frame loop through [`GamePlatform`].
pub struct Game {
    config: GameConfig,
    frame_loop: Option<FrameLoop<MonotonicClock>>,
    assets: Assets<GpuTexture>,
    mixer: Option<Mixer>,
    renderer: Option<SpriteRenderer>,
    fps_text_errors: FailureStreak,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            frame_loop: None,
            assets: Assets::empty(),
            mixer: None,
            renderer: None,
            fps_text_errors: FailureStreak::default(),
        }
    }
}

impl App for Game {
    fn on_start(&mut self, ctx: &mut StartCtx<'_, '_>) {
        let renderer = SpriteRenderer::new(ctx.gpu.device());
        {
            let mut uploader = renderer.uploader(ctx.gpu.device(), ctx.gpu.queue());
            self.assets = Assets::load(&self.config.assets, &mut uploader);
        }
        self.renderer = Some(renderer);

        self.mixer = match Mixer::open() {
            Ok(mixer) => Some(mixer),
            Err(e) => {
                log::error!("audio disabled: {e}");
                None
            }
        };

        if let (Some(mixer), Some(music)) = (self.mixer.as_mut(), self.assets.music.as_ref()) {
            if let Err(e) = mixer.play_music(music) {
                log::error!("unable to start music: {e}");
            }
        }

        let keymap = KeyMap::default();
        log::debug!("key bindings: {:?}", keymap.bindings());
        self.frame_loop = Some(FrameLoop::new(&self.config, keymap, MonotonicClock::new()));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (Some(frame_loop), Some(renderer)) = (self.frame_loop.as_mut(), self.renderer.as_mut()) else {
            return AppControl::Exit;
        };

        let mut platform = GamePlatform {
            ctx,
            assets: &mut self.assets,
            mixer: self.mixer.as_mut(),
            renderer,
            text_px: self.config.font_px,
            text_color: self.config.text_color,
            fps_text_errors: &mut self.fps_text_errors,
            control: AppControl::Continue,
        };

        let status = frame_loop.step(&mut platform);
        if status == LoopStatus::Quit || platform.control == AppControl::Exit {
            AppControl::Exit
        } else {
            AppControl::Continue
        }
    }

    fn on_exit(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            log::info!("rendered {} frames", frame_loop.frames_rendered());
        }

        let assets = std::mem::replace(&mut self.assets, Assets::empty());
        let stages = teardown(assets, self.mixer.take(), self.renderer.take());
        log::info!("shutdown complete ({} stages)", stages.len());
    }
}

/// [`Platform`] over the live window, GPU and audio device.
struct GamePlatform<'a, 'f, 'w> {
    ctx: &'a mut FrameCtx<'f, 'w>,
    assets: &'a mut Assets<GpuTexture>,
    mixer: Option<&'a mut Mixer>,
    renderer: &'a mut SpriteRenderer,
    text_px: f32,
    text_color: Color,
    fps_text_errors: &'a mut FailureStreak,
    control: AppControl,
}

impl Platform for GamePlatform<'_, '_, '_> {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.ctx.events.poll()
    }

    fn perform(&mut self, action: Action) {
        let Some(mixer) = self.mixer.as_deref_mut() else {
            return;
        };

        match action {
            Action::ToggleMusic => match mixer.toggle_music(self.assets.music.as_ref()) {
                Ok(state) => log::info!("music {state:?}"),
                Err(e) => log::warn!("music toggle failed: {e}"),
            },
            Action::HaltMusic => mixer.halt_music(),
            Action::Punch | Action::Kick | Action::Hadoken | Action::Shoryuken => {
                if let Some(effect) = self.assets.sounds.for_action(action) {
                    if let Err(e) = mixer.play_effect(effect) {
                        log::warn!("unable to play {}: {e}", effect.path().display());
                    }
                }
            }
        }
    }

    fn set_fps_text(&mut self, text: &str) {
        let mut uploader = self.renderer.uploader(self.ctx.gpu.device(), self.ctx.gpu.queue());
        let result = self.assets.render_fps_text(text, self.text_px, self.text_color, &mut uploader);
        // Logged once per run of failures rather than every frame.
        if self.fps_text_errors.record(result.is_ok()) {
            if let Err(e) = result {
                log::error!("unable to render FPS text: {e}");
            }
        }
    }

    fn present(&mut self, frame: &SceneFrame) {
        let mut batch = SpriteBatch::with_capacity(3);
        let (bg, fg) = (frame.background, frame.foreground);
        self.assets.background.draw(bg.at.0, bg.at.1, Some(bg.clip), &mut batch);
        self.assets.sprite_sheet.draw(fg.at.0, fg.at.1, Some(fg.clip), &mut batch);
        self.assets.fps_text.draw(frame.fps_at.0, frame.fps_at.1, None, &mut batch);

        let renderer = &mut *self.renderer;
        let control = self
            .ctx
            .render(frame.clear, |rctx, target| renderer.render(rctx, target, &batch));
        if control == AppControl::Exit {
            self.control = AppControl::Exit;
        }
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Tracks consecutive failures of a per-frame operation so only the first
/// failure of each run is reported.
#[derive(Debug, Default)]
struct FailureStreak {
    failing: bool,
}

impl FailureStreak {
    /// Records one attempt. Returns `true` when this failure starts a new
    /// run and should be reported.
    fn record(&mut self, ok: bool) -> bool {
        let report = !ok && !self.failing;
        self.failing = !ok;
        report
    }
}
