use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
///
/// `now()` returns the time elapsed since an arbitrary, fixed epoch. Only
/// differences between readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock time source backed by `std::time::Instant`.
///
/// Copies share the same epoch, so readings from different copies can be
/// compared.
#[derive(Debug, Copy, Clone)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}

/// Manually driven clock.
///
/// Clones share the same underlying reading, which makes it possible to hand
/// one copy to a `Stopwatch` and advance time from the outside. Used by tests
/// and headless simulations.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Duration {
        self.now.get()
    }
}
