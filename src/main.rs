//! Neon Breaker entry point
//!
//! Sets up logging, loads settings and the high score, then runs the game loop
//! in the terminal until the player quits.

use std::fs::File;
use std::io;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use neon_breaker::audio::AudioManager;
use neon_breaker::consts::FPS;
use neon_breaker::platform::{FrameClock, KeyTracker, poll_events};
use neon_breaker::renderer::TerminalRenderer;
use neon_breaker::sim::{GameState, tick};
use neon_breaker::{HighScoreStore, Settings};

/// Log to a file; the terminal belongs to the renderer
fn init_logging(log_file: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(log_file) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            // No writable log file: drop log output rather than corrupt the screen
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

fn session_seed(settings: &Settings) -> u64 {
    settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    })
}

fn save_high_score(store: &HighScoreStore, score: u32) {
    if let Err(e) = store.save(score) {
        log::warn!("Failed to save high score to {}: {}", store.path().display(), e);
    }
}

fn run(settings: &Settings) -> io::Result<()> {
    let store = HighScoreStore::new(&settings.high_score_file);
    let seed = session_seed(settings);
    let mut state = GameState::new(seed, store.load());
    log::info!("Session seed {}, high score {}", seed, state.high_score);

    let audio = AudioManager::new(settings);
    let mut keys = KeyTracker::new();
    let mut clock = FrameClock::new(FPS);
    let mut renderer = TerminalRenderer::new(io::stdout())?;

    let result = loop {
        if let Err(e) = poll_events(&mut keys, state.frame) {
            break Err(e);
        }
        if keys.quit_requested() {
            log::info!("Quit requested");
            break Ok(());
        }

        let input = keys.frame_input(state.frame);
        let events = tick(&mut state, &input);
        audio.handle_events(&events);
        if let Err(e) = store.persist_events(&events) {
            log::warn!("Failed to save high score to {}: {}", store.path().display(), e);
        }

        let fps = settings.show_fps.then(|| clock.fps());
        if let Err(e) = renderer.draw(&state, fps) {
            break Err(e);
        }
        clock.wait();
    };

    // Quit always saves, even when the terminal cannot be restored
    save_high_score(&store, state.high_score);
    renderer.restore()?;
    result
}

fn main() -> io::Result<()> {
    // Settings name the log file; the load outcome is logged once the logger is up
    let path = Settings::path();
    let read = Settings::read(&path);
    let log_file = match &read {
        Ok(Some(settings)) => settings.log_file.clone(),
        Ok(None) | Err(_) => Settings::default().log_file,
    };
    init_logging(&log_file);
    log::info!("Neon Breaker starting");
    let settings = Settings::resolve(&path, read);

    let result = run(&settings);
    if let Err(e) = &result {
        log::error!("Exiting with error: {}", e);
    }
    result
}
