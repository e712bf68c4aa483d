/// Observable state of the music channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MusicState {
    Stopped,
    Playing,
    Paused,
}

/// What a play/pause toggle should do from a given state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MusicCommand {
    /// Start the track from the beginning.
    Play,
    Pause,
    Resume,
}

impl MusicState {
    /// Start if stopped, pause if playing, resume if paused.
    pub fn toggle(self) -> MusicCommand {
        match self {
            MusicState::Stopped => MusicCommand::Play,
            MusicState::Playing => MusicCommand::Pause,
            MusicState::Paused => MusicCommand::Resume,
        }
    }
}
