//! Audio collaborator - fire-and-forget sound cues

use crate::types::Sound;

/// Plays sound cues emitted by the round
pub trait AudioPlayer {
    fn play_sound(&mut self, sound: Sound);
}

/// Discards every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioPlayer for SilentAudio {
    fn play_sound(&mut self, _sound: Sound) {}
}

/// Keeps every cue in order (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    played: Vec<Sound>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> &[Sound] {
        &self.played
    }

    pub fn clear(&mut self) {
        self.played.clear();
    }
}

impl AudioPlayer for RecordingAudio {
    fn play_sound(&mut self, sound: Sound) {
        self.played.push(sound);
    }
}
