use kumite_engine::coords::PixelRect;

/// A horizontal strip of equally sized animation frames.
///
/// Frame `i` starts at `x = i * stride`; each frame is shown for `repeat`
/// consecutive loop iterations.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SheetLayout {
    pub frames: u32,
    pub repeat: u32,
    pub stride: u32,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl SheetLayout {
    pub fn clip(&self, frame: u32) -> PixelRect {
        PixelRect::new((frame * self.stride) as i32, 0, self.frame_width, self.frame_height)
    }

    /// All clips, precomputed once at startup.
    pub fn clips(&self) -> Vec<PixelRect> {
        (0..self.frames).map(|i| self.clip(i)).collect()
    }

    /// Number of loop iterations for one full cycle.
    pub fn period(&self) -> u32 {
        self.frames.max(1) * self.repeat.max(1)
    }
}

/// Loop-iteration counter that wraps after one animation cycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameCounter {
    value: u32,
    period: u32,
    repeat: u32,
}

impl FrameCounter {
    pub fn new(layout: &SheetLayout) -> Self {
        Self {
            value: 0,
            period: layout.period(),
            repeat: layout.repeat.max(1),
        }
    }

    #[cfg(test)]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Index of the clip to show this iteration.
    #[inline]
    pub fn frame(&self) -> usize {
        (self.value / self.repeat) as usize
    }

    pub fn advance(&mut self) {
        self.value += 1;
        if self.value >= self.period {
            self.value = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::config::GameConfig;

    fn frames_over_cycle(layout: &SheetLayout) -> Vec<usize> {
        let mut counter = FrameCounter::new(layout);
        (0..layout.period())
            .map(|_| {
                let f = counter.frame();
                counter.advance();
                f
            })
            .collect()
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn foreground_clips_step_by_107() {
        let clips = GameConfig::default().foreground.clips();
        assert_eq!(clips.len(), 6);
        assert_eq!(clips[0], PixelRect::new(0, 0, 106, 200));
        assert_eq!(clips[5], PixelRect::new(535, 0, 106, 200));
    }

    #[test]
    fn background_clips_fill_the_screen() {
        let clips = GameConfig::default().background.clips();
        assert_eq!(clips.len(), 7);
        assert_eq!(clips[3], PixelRect::new(2304, 0, 768, 384));
    }

    // ── counters ──────────────────────────────────────────────────────────

    #[test]
    fn foreground_cycles_six_clips_four_iterations_each() {
        let layout = GameConfig::default().foreground;
        let frames = frames_over_cycle(&layout);

        assert_eq!(frames.len(), 24);
        assert_eq!(frames.iter().collect::<BTreeSet<_>>().len(), 6);
        assert_eq!(&frames[..5], &[0, 0, 0, 0, 1]);
        assert_eq!(frames[23], 5);
    }

    #[test]
    fn background_cycles_seven_clips_seven_iterations_each() {
        let layout = GameConfig::default().background;
        let frames = frames_over_cycle(&layout);

        assert_eq!(frames.len(), 49);
        assert_eq!(frames.iter().collect::<BTreeSet<_>>().len(), 7);
        assert_eq!(frames[48], 6);
    }

    #[test]
    fn counter_wraps_to_zero_after_full_cycle() {
        let layout = GameConfig::default().foreground;
        let mut counter = FrameCounter::new(&layout);
        for _ in 0..layout.period() {
            counter.advance();
        }
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.frame(), 0);
    }
}
