//! Font loading and text rasterization (fontdue).

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, TextError};
