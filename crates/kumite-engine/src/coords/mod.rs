//! Coordinate and geometry types shared by the renderer and the game.
//!
//! Canonical CPU space:
//! - whole pixels, window size fixed at creation
//! - origin top-left
//! - +X right, +Y down
//!
//! The sprite shader converts to NDC using a viewport uniform.

mod rect;
mod viewport;

pub use rect::PixelRect;
pub use viewport::Viewport;
