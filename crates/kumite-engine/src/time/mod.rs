//! Time subsystem.
//!
//! Stopwatches, frame pacing and FPS averaging over an injectable [`Clock`],
//! so the frame loop can be driven by a `ManualClock` in tests.

mod clock;
mod fps;
mod pacing;
mod stopwatch;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use fps::{average_fps, format_fps};
pub use pacing::FramePacer;
pub use stopwatch::Stopwatch;
