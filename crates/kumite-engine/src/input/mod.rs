//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `platform` translates window system events into `InputEvent`s.

pub(crate) mod platform;
mod queue;
mod types;

pub use queue::EventQueue;
pub use types::{InputEvent, Key, KeyState};
