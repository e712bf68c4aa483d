use std::time::Duration;

use super::clock::{Clock, MonotonicClock};

/// Start/stop/pause stopwatch over an injected [`Clock`].
///
/// States: stopped, running, running-paused. Every operation is total; calls
/// that make no sense in the current state are ignored.
///
/// - stopped: `elapsed()` is zero
/// - running: `elapsed()` is `now - start_mark`
/// - paused: `elapsed()` is frozen at the value captured by `pause()`
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    clock: C,
    running: bool,
    paused: bool,
    start_mark: Duration,
    paused_elapsed: Duration,
}

impl<C: Clock> Stopwatch<C> {
    /// Creates a stopped stopwatch.
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            running: false,
            paused: false,
            start_mark: Duration::ZERO,
            paused_elapsed: Duration::ZERO,
        }
    }

    /// Starts (or restarts) counting from zero.
    pub fn start(&mut self) {
        self.running = true;
        self.paused = false;
        self.start_mark = self.clock.now();
        self.paused_elapsed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.paused = false;
        self.start_mark = Duration::ZERO;
        self.paused_elapsed = Duration::ZERO;
    }

    pub fn pause(&mut self) {
        if !self.running || self.paused {
            return;
        }
        self.paused = true;
        self.paused_elapsed = self.clock.now().saturating_sub(self.start_mark);
        self.start_mark = Duration::ZERO;
    }

    pub fn unpause(&mut self) {
        if !self.running || !self.paused {
            return;
        }
        self.paused = false;
        self.start_mark = self.clock.now().saturating_sub(self.paused_elapsed);
        self.paused_elapsed = Duration::ZERO;
    }

    pub fn elapsed(&self) -> Duration {
        if !self.running {
            Duration::ZERO
        } else if self.paused {
            self.paused_elapsed
        } else {
            self.clock.now().saturating_sub(self.start_mark)
        }
    }

    /// Elapsed time truncated to whole milliseconds.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.running && self.paused
    }
}

impl Default for Stopwatch<MonotonicClock> {
    fn default() -> Self {
        Self::new(MonotonicClock::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;

    fn watch() -> (ManualClock, Stopwatch<ManualClock>) {
        let clock = ManualClock::new();
        clock.advance_ms(1_000);
        (clock.clone(), Stopwatch::new(clock))
    }

    // ── stopped ───────────────────────────────────────────────────────────

    #[test]
    fn new_stopwatch_reads_zero() {
        let (clock, sw) = watch();
        clock.advance_ms(500);
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_started());
        assert!(!sw.is_paused());
    }

    #[test]
    fn stop_resets_to_zero() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(30);
        sw.stop();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        clock.advance_ms(30);
        assert_eq!(sw.elapsed(), Duration::ZERO);
    }

    #[test]
    fn stop_from_paused_resets_to_zero() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(30);
        sw.pause();
        sw.stop();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_paused());
    }

    // ── running ───────────────────────────────────────────────────────────

    #[test]
    fn running_tracks_clock() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(16);
        assert_eq!(sw.elapsed_ms(), 16);
        clock.advance_ms(4);
        assert_eq!(sw.elapsed_ms(), 20);
    }

    #[test]
    fn running_is_non_decreasing() {
        let (clock, mut sw) = watch();
        sw.start();
        let mut last = sw.elapsed();
        for step in [0, 1, 0, 7, 3, 0, 12] {
            clock.advance_ms(step);
            let now = sw.elapsed();
            assert!(now >= last);
            last = now;
        }
    }

    #[test]
    fn start_restarts_from_zero() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(50);
        sw.start();
        assert_eq!(sw.elapsed(), Duration::ZERO);
        clock.advance_ms(5);
        assert_eq!(sw.elapsed_ms(), 5);
    }

    #[test]
    fn start_while_paused_clears_pause() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(10);
        sw.pause();
        sw.start();
        assert!(!sw.is_paused());
        clock.advance_ms(3);
        assert_eq!(sw.elapsed_ms(), 3);
    }

    // ── paused ────────────────────────────────────────────────────────────

    #[test]
    fn pause_freezes_elapsed() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(25);
        sw.pause();
        assert!(sw.is_paused());
        clock.advance_ms(100);
        assert_eq!(sw.elapsed_ms(), 25);
    }

    #[test]
    fn double_pause_is_noop() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(25);
        sw.pause();
        clock.advance_ms(10);
        sw.pause();
        assert_eq!(sw.elapsed_ms(), 25);
    }

    #[test]
    fn unpause_resumes_from_frozen_value() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(25);
        sw.pause();
        clock.advance_ms(1_000);
        sw.unpause();
        assert_eq!(sw.elapsed_ms(), 25);
        clock.advance_ms(5);
        assert_eq!(sw.elapsed_ms(), 30);
    }

    #[test]
    fn unpause_while_running_is_noop() {
        let (clock, mut sw) = watch();
        sw.start();
        clock.advance_ms(12);
        sw.unpause();
        assert_eq!(sw.elapsed_ms(), 12);
        assert!(!sw.is_paused());
    }

    #[test]
    fn pause_and_unpause_ignored_when_stopped() {
        let (clock, mut sw) = watch();
        sw.pause();
        assert!(!sw.is_paused());
        sw.unpause();
        clock.advance_ms(10);
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_started());
    }
}
