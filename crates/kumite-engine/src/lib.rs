//! kumite engine crate.
//!
//! Window + GPU runtime, sprite rendering, text rasterization, audio and
//! frame timing used by the game binary.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod audio;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod texture;
