//! Window runtime.
//!
//! Owns the `winit` event loop and the single game window, wires them to the
//! GPU layer and drives an [`App`](crate::core::App).

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
