//! Terminal audio cues.
//!
//! The simulation emits [`AudioCue`]s; this maps them to the terminal bell,
//! fire-and-forget. The flap cue stays silent: at one flap per cooldown the
//! bell would ring several times a second.

use crate::game::types::AudioCue;
use std::io::{self, Write};

/// Play a cue. Failures are ignored; the game never waits on audio.
pub fn play(cue: AudioCue) {
    match cue {
        AudioCue::Flap => {}
        AudioCue::Point | AudioCue::Hit => {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(b"\x07");
            let _ = stdout.flush();
        }
    }
}
