use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::AudioError;

/// Encoded audio held in memory, validated as decodable at load time.
#[derive(Debug, Clone)]
pub(crate) struct EncodedAudio {
    pub(crate) path: PathBuf,
    pub(crate) bytes: Arc<[u8]>,
}

impl EncodedAudio {
    fn read(path: &Path) -> Result<Self, AudioError> {
        let bytes: Arc<[u8]> = std::fs::read(path)
            .map_err(|source| AudioError::Io { path: path.to_path_buf(), source })?
            .into();

        let audio = Self { path: path.to_path_buf(), bytes };
        audio.validate()?;
        Ok(audio)
    }

    #[cfg(feature = "audio")]
    pub(crate) fn decoder(
        &self,
    ) -> Result<rodio::Decoder<std::io::Cursor<Arc<[u8]>>>, AudioError> {
        rodio::Decoder::new(std::io::Cursor::new(self.bytes.clone())).map_err(|e| {
            AudioError::Decode { path: self.path.clone(), reason: e.to_string() }
        })
    }

    #[cfg(feature = "audio")]
    fn validate(&self) -> Result<(), AudioError> {
        self.decoder().map(|_| ())
    }

    #[cfg(not(feature = "audio"))]
    fn validate(&self) -> Result<(), AudioError> {
        if self.bytes.is_empty() {
            return Err(AudioError::Decode { path: self.path.clone(), reason: "empty file".into() });
        }
        Ok(())
    }
}

/// Short, fire-and-forget sound (punch, kick, ...).
#[derive(Debug, Clone)]
pub struct SoundEffect {
    pub(crate) audio: EncodedAudio,
}

impl SoundEffect {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        Ok(Self { audio: EncodedAudio::read(path.as_ref())? })
    }

    pub fn path(&self) -> &Path {
        &self.audio.path
    }
}

/// Background track. Played on its own channel, looping.
#[derive(Debug, Clone)]
pub struct Music {
    pub(crate) audio: EncodedAudio,
}

impl Music {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AudioError> {
        Ok(Self { audio: EncodedAudio::read(path.as_ref())? })
    }

    pub fn path(&self) -> &Path {
        &self.audio.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let err = SoundEffect::from_file("no/such/Punch.mp3").unwrap_err();
        match err {
            AudioError::Io { path, .. } => assert_eq!(path, PathBuf::from("no/such/Punch.mp3")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn undecodable_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("kumite-{}-noise.mp3", std::process::id()));
        std::fs::write(&path, b"").expect("write test file");

        let err = Music::from_file(&path).unwrap_err();
        assert!(matches!(err, AudioError::Decode { .. }));

        let _ = std::fs::remove_file(path);
    }
}
