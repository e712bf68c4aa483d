//! Renderer-agnostic draw stream.
//!
//! The game records sprites into a [`SpriteBatch`]; `render::SpriteRenderer`
//! turns the batch into GPU commands. Keeping the batch generic over the
//! texture handle lets the game's drawing code run in tests without a GPU.

mod batch;

pub use batch::{Sprite, SpriteBatch};
