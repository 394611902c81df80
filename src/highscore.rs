//! High-score persistence: a single decimal integer in a plaintext file
//! under `~/.flappy/`, overwritten whenever a run beats the stored score.

use crate::constants::HIGH_SCORE_FILE;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the ~/.flappy/ directory path, creating it if needed.
pub fn flappy_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".flappy");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Full path of the high-score file.
pub fn high_score_path() -> io::Result<PathBuf> {
    Ok(flappy_dir()?.join(HIGH_SCORE_FILE))
}

/// Read a high score from the given file. Missing or unparsable content
/// defaults to 0; corruption is never surfaced to the player.
pub fn read_high_score_from(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => text.trim().parse().unwrap_or(0),
        Err(_) => 0,
    }
}

/// Overwrite the given file with the score as a decimal integer.
pub fn write_high_score_to(path: &Path, score: u32) -> io::Result<()> {
    fs::write(path, score.to_string())
}

/// Read the stored high score, defaulting to 0 when anything is off.
pub fn read_high_score() -> u32 {
    match high_score_path() {
        Ok(path) => read_high_score_from(&path),
        Err(_) => 0,
    }
}

/// Persist a new high score.
pub fn write_high_score(score: u32) -> io::Result<()> {
    write_high_score_to(&high_score_path()?, score)
}
