//! Paint model shared between the game and the renderer.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
