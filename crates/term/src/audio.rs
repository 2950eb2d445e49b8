//! Terminal audio: the bell is the only speaker a terminal has.

use std::io::{self, Write};

use crate::core::AudioPlayer;
use crate::types::Sound;

/// Rings the terminal bell for match cues.
///
/// Selection and fall cues are silent; ringing on every tick of a cascade
/// would be noise.
#[derive(Debug)]
pub struct BellAudio {
    enabled: bool,
    rung: u32,
}

impl BellAudio {
    pub fn new(enabled: bool) -> Self {
        Self { enabled, rung: 0 }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Number of times the bell has rung
    pub fn rung(&self) -> u32 {
        self.rung
    }

    /// Whether a cue rings the bell
    pub fn rings_for(sound: Sound) -> bool {
        matches!(sound, Sound::Match1 | Sound::Match2 | Sound::Match3)
    }
}

impl AudioPlayer for BellAudio {
    fn play_sound(&mut self, sound: Sound) {
        if !self.enabled || !Self::rings_for(sound) {
            return;
        }
        self.rung += 1;
        let mut out = io::stdout();
        if let Err(err) = out.write_all(b"\x07").and_then(|()| out.flush()) {
            log::debug!("bell failed: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_match_cues_ring() {
        assert!(BellAudio::rings_for(Sound::Match1));
        assert!(BellAudio::rings_for(Sound::Match3));
        assert!(!BellAudio::rings_for(Sound::Select));
        assert!(!BellAudio::rings_for(Sound::Fall));
    }

    #[test]
    fn disabled_bell_stays_quiet() {
        let mut bell = BellAudio::new(false);
        bell.play_sound(Sound::Match2);
        assert_eq!(bell.rung(), 0);
    }
}
