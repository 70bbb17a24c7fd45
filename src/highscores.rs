//! High score persistence
//!
//! A plain-text file holding one decimal integer. A missing or unreadable file
//! counts as a high score of 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::sim::GameEvent;

/// Default file name, relative to the working directory
pub const DEFAULT_HIGH_SCORE_FILE: &str = "highscore.txt";

/// Where the high score lives on disk
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored high score, falling back to 0
    pub fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::info!("No high score at {} ({}), starting from 0", self.path.display(), e);
                return 0;
            }
        };

        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return 0;
        }
        match trimmed.parse() {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable high score {:?} in {}: {}",
                    trimmed,
                    self.path.display(),
                    e
                );
                0
            }
        }
    }

    /// Overwrite the file with `score`
    pub fn save(&self, score: u32) -> io::Result<()> {
        fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }

    /// Save once for every `NewHighScore` in a frame's events.
    /// Returns how many saves were made.
    pub fn persist_events(&self, events: &[GameEvent]) -> io::Result<usize> {
        let mut saved = 0;
        for event in events {
            if let GameEvent::NewHighScore(score) = event {
                self.save(*score)?;
                saved += 1;
            }
        }
        Ok(saved)
    }
}
