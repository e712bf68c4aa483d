//! Texture wrapper.
//!
//! [`Texture`] owns one decoded image or rendered line of text as a
//! renderable handle. The handle type comes from a [`TextureUploader`]; the
//! GPU implementation lives in `render::sprite`.

mod texture;

pub use texture::{Texture, TextureError, TextureUploader};
