use super::{AudioError, MusicCommand, MusicState, Music, SoundEffect};

/// Audio output: one looping music channel plus any number of overlapping
/// sound effects.
///
/// Decoding and mixing run on the backend's own thread; every call here
/// returns immediately.
pub struct Mixer {
    #[cfg(feature = "audio")]
    _stream: rodio::OutputStream,
    #[cfg(feature = "audio")]
    handle: rodio::OutputStreamHandle,
    #[cfg(feature = "audio")]
    music: Option<rodio::Sink>,
}

#[cfg(feature = "audio")]
impl Mixer {
    /// Opens the default output device.
    pub fn open() -> Result<Self, AudioError> {
        let (stream, handle) =
            rodio::OutputStream::try_default().map_err(|e| AudioError::Device(e.to_string()))?;
        log::debug!("audio output opened");
        Ok(Self { _stream: stream, handle, music: None })
    }

    /// Plays `effect` once on a free voice.
    pub fn play_effect(&self, effect: &SoundEffect) -> Result<(), AudioError> {
        use rodio::Source;

        let source = effect.audio.decoder()?;
        self.handle
            .play_raw(source.convert_samples())
            .map_err(|e| AudioError::Playback(e.to_string()))
    }

    /// Starts `music` from the beginning, looping forever. Replaces whatever
    /// was on the music channel.
    pub fn play_music(&mut self, music: &Music) -> Result<(), AudioError> {
        use rodio::Source;

        self.halt_music();

        let source = music.audio.decoder()?;
        let sink = rodio::Sink::try_new(&self.handle)
            .map_err(|e| AudioError::Playback(e.to_string()))?;
        sink.append(source.repeat_infinite());
        self.music = Some(sink);
        Ok(())
    }

    pub fn pause_music(&self) {
        if let Some(sink) = &self.music {
            sink.pause();
        }
    }

    pub fn resume_music(&self) {
        if let Some(sink) = &self.music {
            sink.play();
        }
    }

    pub fn halt_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }

    pub fn music_state(&self) -> MusicState {
        match &self.music {
            None => MusicState::Stopped,
            Some(sink) if sink.empty() => MusicState::Stopped,
            Some(sink) if sink.is_paused() => MusicState::Paused,
            Some(_) => MusicState::Playing,
        }
    }
}

#[cfg(not(feature = "audio"))]
impl Mixer {
    pub fn open() -> Result<Self, AudioError> {
        Err(AudioError::Unavailable)
    }

    pub fn play_effect(&self, _effect: &SoundEffect) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    pub fn play_music(&mut self, _music: &Music) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }

    pub fn pause_music(&self) {}

    pub fn resume_music(&self) {}

    pub fn halt_music(&mut self) {}

    pub fn music_state(&self) -> MusicState {
        MusicState::Stopped
    }
}

impl Mixer {
    /// Start if stopped, pause if playing, resume if paused.
    ///
    /// Starting needs a track; with `music == None` a stopped channel stays
    /// stopped.
    pub fn toggle_music(&mut self, music: Option<&Music>) -> Result<MusicState, AudioError> {
        match self.music_state().toggle() {
            MusicCommand::Play => match music {
                Some(m) => self.play_music(m)?,
                None => return Err(AudioError::NoMusic),
            },
            MusicCommand::Pause => self.pause_music(),
            MusicCommand::Resume => self.resume_music(),
        }
        Ok(self.music_state())
    }
}
