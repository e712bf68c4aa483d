use std::time::Duration;

use kumite_engine::coords::PixelRect;
use kumite_engine::input::InputEvent;
use kumite_engine::paint::Color;
use kumite_engine::time::{average_fps, format_fps, Clock, FramePacer, Stopwatch};

use crate::clips::FrameCounter;
use crate::config::GameConfig;
use crate::keymap::{Action, KeyMap};

/// What the frame loop needs from the outside world.
///
/// The window/GPU/audio implementation lives in `app`; tests drive the loop
/// with a recording fake.
pub trait Platform {
    /// Next pending input event, oldest first.
    fn poll_event(&mut self) -> Option<InputEvent>;

    fn perform(&mut self, action: Action);

    /// Re-render the FPS overlay with `text`.
    fn set_fps_text(&mut self, text: &str);

    /// Clear, draw the frame back to front, present.
    fn present(&mut self, frame: &SceneFrame);

    fn sleep(&mut self, duration: Duration);
}

/// One frame's worth of drawing, back to front.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneFrame {
    pub clear: Color,
    pub background: Placement,
    pub foreground: Placement,
    /// Top-left of the FPS overlay.
    pub fps_at: (i32, i32),
}

/// A sprite-sheet clip and where its top-left corner goes on screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    pub clip: PixelRect,
    pub at: (i32, i32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopStatus {
    Continue,
    Quit,
}

/// Fixed-rate animation loop: input, FPS overlay, draw, cap, advance.
pub struct FrameLoop<C: Clock> {
    fps_timer: Stopwatch<C>,
    cap_timer: Stopwatch<C>,
    frames_rendered: u64,

    foreground: FrameCounter,
    background: FrameCounter,
    foreground_clips: Vec<PixelRect>,
    background_clips: Vec<PixelRect>,

    keymap: KeyMap,
    pacer: FramePacer,
    fps_ceiling: f32,
    screen: (u32, u32),
    clear: Color,

    quit: bool,
}

impl<C: Clock + Clone> FrameLoop<C> {
    /// Builds the loop and starts the FPS stopwatch.
    pub fn new(config: &GameConfig, keymap: KeyMap, clock: C) -> Self {
        let mut fps_timer = Stopwatch::new(clock.clone());
        fps_timer.start();

        Self {
            fps_timer,
            cap_timer: Stopwatch::new(clock),
            frames_rendered: 0,
            foreground: FrameCounter::new(&config.foreground),
            background: FrameCounter::new(&config.background),
            foreground_clips: config.foreground.clips(),
            background_clips: config.background.clips(),
            keymap,
            pacer: FramePacer::new(config.target_fps),
            fps_ceiling: config.fps_ceiling,
            screen: (config.screen_width, config.screen_height),
            clear: config.clear_color,
            quit: false,
        }
    }
}

impl<C: Clock> FrameLoop<C> {
    /// Runs one iteration. An iteration that sees `Quit` still completes;
    /// the caller stops on [`LoopStatus::Quit`].
    pub fn step<P: Platform>(&mut self, platform: &mut P) -> LoopStatus {
        self.cap_timer.start();

        while let Some(event) = platform.poll_event() {
            match event {
                InputEvent::Quit => {
                    log::info!("quit requested");
                    self.quit = true;
                }
                other => {
                    if let Some(action) = other.pressed_key().and_then(|k| self.keymap.lookup(k)) {
                        log::debug!("{action:?}");
                        platform.perform(action);
                    }
                }
            }
        }

        let fps = average_fps(self.frames_rendered, self.fps_timer.elapsed(), self.fps_ceiling);
        platform.set_fps_text(&format!("FPS: {}", format_fps(fps)));

        let frame = self.scene();
        platform.present(&frame);
        self.frames_rendered += 1;

        if let Some(rest) = self.pacer.remaining(self.cap_timer.elapsed()) {
            platform.sleep(rest);
        }

        self.foreground.advance();
        self.background.advance();

        if self.quit { LoopStatus::Quit } else { LoopStatus::Continue }
    }

    /// The frame for the current counter values.
    pub fn scene(&self) -> SceneFrame {
        let (screen_w, screen_h) = (self.screen.0 as i32, self.screen.1 as i32);

        let bg_clip = self.background_clips[self.background.frame()];
        let fg_clip = self.foreground_clips[self.foreground.frame()];

        SceneFrame {
            clear: self.clear,
            background: Placement { clip: bg_clip, at: (0, 0) },
            foreground: Placement {
                clip: fg_clip,
                at: (
                    (screen_w - fg_clip.w as i32) / 4 - 50,
                    screen_h - fg_clip.h as i32,
                ),
            },
            fps_at: (0, 0),
        }
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

#[cfg(test)]
impl<C: Clock> FrameLoop<C> {
    fn foreground(&self) -> FrameCounter {
        self.foreground
    }

    fn background(&self) -> FrameCounter {
        self.background
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use kumite_engine::input::{Key, KeyState};
    use kumite_engine::time::ManualClock;

    use super::*;

    /// Records every call; `present` and `sleep` advance the shared clock.
    struct FakePlatform {
        clock: ManualClock,
        work_per_frame: Duration,
        pending: VecDeque<Vec<InputEvent>>,
        performed: Vec<Action>,
        fps_texts: Vec<String>,
        presented: Vec<SceneFrame>,
        slept: Vec<Duration>,
    }

    impl FakePlatform {
        fn new(clock: ManualClock, work_ms: u64) -> Self {
            Self {
                clock,
                work_per_frame: Duration::from_millis(work_ms),
                pending: VecDeque::new(),
                performed: Vec::new(),
                fps_texts: Vec::new(),
                presented: Vec::new(),
                slept: Vec::new(),
            }
        }

        /// Queue `events` for the next iteration.
        fn queue(&mut self, events: Vec<InputEvent>) {
            self.pending.push_back(events);
        }
    }

    impl Platform for FakePlatform {
        fn poll_event(&mut self) -> Option<InputEvent> {
            let batch = self.pending.front_mut()?;
            if batch.is_empty() {
                self.pending.pop_front();
                return None;
            }
            Some(batch.remove(0))
        }

        fn perform(&mut self, action: Action) {
            self.performed.push(action);
        }

        fn set_fps_text(&mut self, text: &str) {
            self.fps_texts.push(text.to_string());
        }

        fn present(&mut self, frame: &SceneFrame) {
            self.clock.advance(self.work_per_frame);
            self.presented.push(*frame);
        }

        fn sleep(&mut self, duration: Duration) {
            self.clock.advance(duration);
            self.slept.push(duration);
        }
    }

    fn setup(work_ms: u64) -> (FrameLoop<ManualClock>, FakePlatform) {
        let clock = ManualClock::new();
        let frame_loop = FrameLoop::new(&GameConfig::default(), KeyMap::default(), clock.clone());
        (frame_loop, FakePlatform::new(clock, work_ms))
    }

    // ── pacing ────────────────────────────────────────────────────────────

    #[test]
    fn short_frame_sleeps_rest_of_budget() {
        let (mut fl, mut p) = setup(5);
        fl.step(&mut p);
        assert_eq!(p.slept, vec![Duration::from_millis(11)]);
    }

    #[test]
    fn slow_frame_does_not_sleep() {
        let (mut fl, mut p) = setup(20);
        fl.step(&mut p);
        fl.step(&mut p);
        assert!(p.slept.is_empty());
        assert_eq!(fl.frames_rendered(), 2);
    }

    // ── fps ───────────────────────────────────────────────────────────────

    #[test]
    fn first_frame_reports_zero_fps() {
        let (mut fl, mut p) = setup(5);
        fl.step(&mut p);
        assert_eq!(p.fps_texts[0], "FPS: 0");
    }

    #[test]
    fn steady_16ms_frames_average_to_62_5() {
        let (mut fl, mut p) = setup(5);
        for _ in 0..3 {
            fl.step(&mut p);
        }
        // Two frames over 32 ms.
        assert_eq!(p.fps_texts[2], "FPS: 62.5");
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn key_presses_dispatch_actions_in_order() {
        let (mut fl, mut p) = setup(1);
        p.queue(vec![
            InputEvent::key_down(Key::J),
            InputEvent::key_up(Key::J),
            InputEvent::key_down(Key::K),
            InputEvent::Key { key: Key::J, state: KeyState::Pressed, repeat: true },
            InputEvent::key_down(Key::Enter),
        ]);

        assert_eq!(fl.step(&mut p), LoopStatus::Continue);
        assert_eq!(p.performed, vec![Action::Punch, Action::Punch, Action::ToggleMusic]);
    }

    #[test]
    fn quit_completes_the_iteration() {
        let (mut fl, mut p) = setup(1);
        p.queue(vec![InputEvent::Quit, InputEvent::key_down(Key::U)]);

        assert_eq!(fl.step(&mut p), LoopStatus::Quit);
        assert_eq!(p.performed, vec![Action::Kick]);
        assert_eq!(p.presented.len(), 1);
        assert_eq!(fl.frames_rendered(), 1);
        assert_eq!(fl.foreground().value(), 1);
    }

    // ── scene ─────────────────────────────────────────────────────────────

    #[test]
    fn first_scene_layout() {
        let (fl, _) = setup(1);
        let frame = fl.scene();

        assert_eq!(frame.clear, Color::WHITE);
        assert_eq!(frame.background, Placement { clip: PixelRect::new(0, 0, 768, 384), at: (0, 0) });
        assert_eq!(frame.foreground, Placement { clip: PixelRect::new(0, 0, 106, 200), at: (115, 184) });
        assert_eq!(frame.fps_at, (0, 0));
    }

    #[test]
    fn counters_advance_and_wrap() {
        let (mut fl, mut p) = setup(1);
        for _ in 0..4 {
            fl.step(&mut p);
        }
        assert_eq!(fl.scene().foreground.clip.x, 107);
        assert_eq!(fl.scene().background.clip.x, 0);

        for _ in 4..24 {
            fl.step(&mut p);
        }
        assert_eq!(fl.foreground().value(), 0);
        assert_eq!(fl.background().frame(), 3);
        assert_eq!(p.presented[23].foreground.clip.x, 5 * 107);
    }
}
