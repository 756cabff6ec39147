use serde::{Deserialize, Serialize};
use tracing::debug;

/// Audio cues the engine emits as values. The engine never touches an audio
/// device; whoever owns the loop forwards cues to a [`SoundPlayer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundCue {
    Incorrect,
    Correct,
    WordGuessed,
    WordNotGuessed,
}

impl SoundCue {
    /// Name of the backing audio asset.
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundCue::Incorrect => "incorrect",
            SoundCue::Correct => "correct",
            SoundCue::WordGuessed => "word-guessed",
            SoundCue::WordNotGuessed => "word-not-guessed",
        }
    }
}

/// Fire-and-forget playback. Starting a cue stops any cue still playing, and
/// playback failure is logged, never returned.
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

/// Player that records cues to the log instead of a device.
#[derive(Debug, Default)]
pub struct LoggedSounds;

impl SoundPlayer for LoggedSounds {
    fn play(&mut self, cue: SoundCue) {
        debug!(cue = cue.asset_name(), "sound cue");
    }
}
