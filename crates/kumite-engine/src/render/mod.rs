//! GPU rendering subsystem.
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod sprite;

pub use ctx::{RenderCtx, RenderTarget};
pub use sprite::{GpuTexture, GpuUploader, SpriteRenderer};
