//! Audio playback (rodio).
//!
//! - [`SoundEffect`] / [`Music`] hold encoded files in memory
//! - [`Mixer`] owns the output device and the looping music channel
//! - [`MusicState`] is the pure play/pause/resume decision

mod clip;
mod mixer;
mod state;

use std::path::PathBuf;

pub use clip::{Music, SoundEffect};
pub use mixer::Mixer;
pub use state::{MusicCommand, MusicState};

/// Audio failures. All of them are recoverable: the game keeps running
/// without the sound in question.
#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("audio device unavailable: {0}")]
    Device(String),
    #[error("playback failed: {0}")]
    Playback(String),
    #[error("no music loaded")]
    NoMusic,
    #[error("built without audio support")]
    Unavailable,
}
