use std::time::Duration;

/// Fixed-rate frame pacing.
///
/// The frame budget is `1000 / target_fps` whole milliseconds (16 ms at
/// 60 FPS). A frame that finishes early sleeps for the rest of the budget; a
/// late frame is not compensated and nothing is skipped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FramePacer {
    ticks_per_frame: u64,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        Self {
            ticks_per_frame: 1_000 / u64::from(target_fps.max(1)),
        }
    }

    /// Per-frame budget in milliseconds.
    #[inline]
    pub fn ticks_per_frame(&self) -> u64 {
        self.ticks_per_frame
    }

    /// How long to sleep after a frame that took `frame_time`.
    ///
    /// `frame_time` is truncated to whole milliseconds before comparing.
    pub fn remaining(&self, frame_time: Duration) -> Option<Duration> {
        let ticks = frame_time.as_millis() as u64;
        if ticks < self.ticks_per_frame {
            Some(Duration::from_millis(self.ticks_per_frame - ticks))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget_is_sixteen_ms() {
        assert_eq!(FramePacer::new(60).ticks_per_frame(), 16);
    }

    #[test]
    fn five_ms_frame_sleeps_eleven() {
        let pacer = FramePacer::new(60);
        assert_eq!(
            pacer.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(11))
        );
    }

    #[test]
    fn sub_millisecond_remainder_is_truncated() {
        let pacer = FramePacer::new(60);
        assert_eq!(
            pacer.remaining(Duration::from_micros(5_900)),
            Some(Duration::from_millis(11))
        );
    }

    #[test]
    fn late_frame_does_not_sleep() {
        let pacer = FramePacer::new(60);
        assert_eq!(pacer.remaining(Duration::from_millis(16)), None);
        assert_eq!(pacer.remaining(Duration::from_millis(40)), None);
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        assert_eq!(FramePacer::new(0).ticks_per_frame(), 1_000);
    }
}
