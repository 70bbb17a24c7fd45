//! Paddle Ball: Neon Breaker - a breakout game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, power-ups, game state)
//! - `renderer`: Terminal rendering of a read-only game state
//! - `platform`: Keyboard input and frame pacing
//! - `audio`: Sound effect triggers (silent when assets are missing)
//! - `highscores`: Single integer high score persisted to a text file
//! - `settings`: JSON settings file

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScoreStore;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Target frame rate; one simulation tick per frame
    pub const FPS: u32 = 60;

    /// Playfield dimensions (pixels, origin top-left, y grows downward)
    pub const WIDTH: f32 = 500.0;
    pub const HEIGHT: f32 = 500.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Paddle sits this far above the bottom edge
    pub const PADDLE_BOTTOM_OFFSET: f32 = 40.0;

    /// Brick grid layout
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: usize = 7;
    pub const BRICK_COLUMN_SPACING: f32 = 70.0;
    pub const BRICK_ROW_SPACING: f32 = 30.0;
    pub const BRICK_GRID_LEFT: f32 = 25.0;
    pub const BRICK_GRID_TOP: f32 = 50.0;
    /// Points per destroyed brick
    pub const BRICK_SCORE: u32 = 5;

    /// Lives at the start of a run
    pub const STARTING_LIVES: u32 = 3;
    /// Last level; clearing it wins the game
    pub const MAX_LEVEL: u32 = 5;

    /// Power-up defaults
    pub const POWERUP_SIZE: f32 = 20.0;
    pub const POWERUP_FALL_SPEED: f32 = 3.0;
    pub const POWERUP_DROP_CHANCE: f32 = 0.25;
    pub const WIDE_PADDLE_BONUS: f32 = 40.0;

    /// Explosive mode lasts 5 seconds
    pub const EXPLOSIVE_DURATION_FRAMES: u32 = 300;
    /// Extra bricks destroyed around the hit brick while explosive
    pub const EXPLOSIVE_EXTRA_BRICKS: usize = 3;
    pub const EXPLOSIVE_RADIUS: f32 = 80.0;
}
