//! Game settings and preferences
//!
//! Read from a JSON file next to the game. Every field is optional in the file;
//! anything missing keeps its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::highscores::DEFAULT_HIGH_SCORE_FILE;

/// Settings file used when `NEON_BREAKER_SETTINGS` is not set
pub const DEFAULT_SETTINGS_FILE: &str = "neon-breaker.json";

/// Environment variable overriding the settings file location
pub const SETTINGS_ENV_VAR: &str = "NEON_BREAKER_SETTINGS";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Files ===
    /// Plain-text high score file
    pub high_score_file: PathBuf,
    /// Directory holding bounce.wav, brick.wav, ...
    pub sound_dir: PathBuf,
    /// Log output (the terminal belongs to the renderer)
    pub log_file: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Gameplay ===
    /// Fixed RNG seed for a reproducible run
    pub seed: Option<u64>,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score_file: PathBuf::from(DEFAULT_HIGH_SCORE_FILE),
            sound_dir: PathBuf::from("sounds"),
            log_file: PathBuf::from("neon-breaker.log"),

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,

            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings file location (env override or default)
    pub fn path() -> PathBuf {
        std::env::var_os(SETTINGS_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
    }

    /// Read `path` without logging. `Ok(None)` when there is no readable file.
    pub fn read(path: &Path) -> Result<Option<Self>, serde_json::Error> {
        let Ok(json) = fs::read_to_string(path) else {
            return Ok(None);
        };
        serde_json::from_str::<Settings>(&json).map(|s| Some(s.sanitized()))
    }

    /// Turn a [`Settings::read`] result into settings, logging what happened
    pub fn resolve(path: &Path, read: Result<Option<Self>, serde_json::Error>) -> Self {
        match read {
            Ok(Some(settings)) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Ok(None) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp volumes into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }
}
