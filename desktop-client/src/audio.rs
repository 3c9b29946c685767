use common::log;
use common::session::{AudioCue, AudioSink};

/// Sound output adapter. Cues are logged instead of played; swapping in
/// a real playback backend only means replacing this sink.
pub struct LogAudioPlayer {
    enabled: bool,
}

impl LogAudioPlayer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }
}

impl AudioSink for LogAudioPlayer {
    fn play(&self, cue: AudioCue) {
        if !self.enabled {
            return;
        }
        let label = match cue {
            AudioCue::Eat => "eat",
            AudioCue::GameOver => "game over",
            AudioCue::MenuMusicStart => "menu music start",
            AudioCue::MenuMusicStop => "menu music stop",
        };
        log!("Audio cue: {}", label);
    }
}
