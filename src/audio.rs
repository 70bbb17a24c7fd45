//! Sound effects
//!
//! Clips are loaded from the sound directory at startup. Missing or unreadable
//! files, a missing output device, or a build without the `audio` feature all
//! degrade to silence; sound never stops the game.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Ball hits a wall or the paddle
    Bounce,
    /// Ball breaks a brick
    BrickBreak,
    /// Power-up caught
    PowerUpCollect,
    /// Ball fell past the paddle
    LifeLost,
    /// Level cleared
    LevelWin,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 5] = [
        SoundEffect::Bounce,
        SoundEffect::BrickBreak,
        SoundEffect::PowerUpCollect,
        SoundEffect::LifeLost,
        SoundEffect::LevelWin,
    ];

    /// File name inside the sound directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Bounce => "bounce.wav",
            SoundEffect::BrickBreak => "brick.wav",
            SoundEffect::PowerUpCollect => "powerup.wav",
            SoundEffect::LifeLost => "lose.wav",
            SoundEffect::LevelWin => "win.wav",
        }
    }

    /// Sound triggered by a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Bounce => Some(SoundEffect::Bounce),
            GameEvent::BrickBroken => Some(SoundEffect::BrickBreak),
            GameEvent::PowerUpCollected(_) => Some(SoundEffect::PowerUpCollect),
            GameEvent::LifeLost => Some(SoundEffect::LifeLost),
            GameEvent::LevelCleared { .. } => Some(SoundEffect::LevelWin),
            GameEvent::GameStarted
            | GameEvent::GameOver
            | GameEvent::GameWon
            | GameEvent::NewHighScore(_) => None,
        }
    }
}

#[cfg(feature = "audio")]
mod backend {
    use std::io::Cursor;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    pub struct Output {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl Output {
        pub fn open() -> Option<Self> {
            match OutputStream::try_default() {
                Ok((stream, handle)) => Some(Self {
                    _stream: stream,
                    handle,
                }),
                Err(e) => {
                    log::warn!("No audio output ({}), sound disabled", e);
                    None
                }
            }
        }

        pub fn decodes(bytes: &[u8]) -> bool {
            Decoder::new(Cursor::new(bytes.to_vec())).is_ok()
        }

        pub fn play(&self, bytes: &[u8], volume: f32) {
            let Ok(source) = Decoder::new(Cursor::new(bytes.to_vec())) else {
                return;
            };
            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.set_volume(volume);
                sink.append(source);
                sink.detach();
            }
        }
    }
}

#[cfg(not(feature = "audio"))]
mod backend {
    pub struct Output;

    impl Output {
        pub fn open() -> Option<Self> {
            log::info!("Built without the `audio` feature, sound disabled");
            None
        }

        pub fn decodes(_bytes: &[u8]) -> bool {
            true
        }

        pub fn play(&self, _bytes: &[u8], _volume: f32) {}
    }
}

/// Read every clip that exists in `dir`. Missing or undecodable files are skipped.
pub fn load_clips(dir: &Path) -> HashMap<SoundEffect, Vec<u8>> {
    let mut clips = HashMap::new();
    for effect in SoundEffect::ALL {
        let path = dir.join(effect.file_name());
        match fs::read(&path) {
            Ok(bytes) if backend::Output::decodes(&bytes) => {
                clips.insert(effect, bytes);
            }
            Ok(_) => log::warn!("Cannot decode {}, playing silence", path.display()),
            Err(e) => log::warn!("Cannot read {} ({}), playing silence", path.display(), e),
        }
    }
    clips
}

/// Audio manager for the game
pub struct AudioManager {
    output: Option<backend::Output>,
    clips: HashMap<SoundEffect, Vec<u8>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        let output = backend::Output::open();
        let clips = if output.is_some() {
            load_clips(&settings.sound_dir)
        } else {
            HashMap::new()
        };
        log::info!("Audio ready ({} of {} clips)", clips.len(), SoundEffect::ALL.len());

        Self {
            output,
            clips,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let (Some(output), Some(clip)) = (&self.output, self.clips.get(&effect)) else {
            log::trace!("Silent {:?}", effect);
            return;
        };
        output.play(clip, vol);
    }

    /// Play the sounds for a frame's events, in order
    pub fn handle_events(&self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
