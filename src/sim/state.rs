//! Game state and core simulation types
//!
//! Everything the loop mutates lives in [`GameState`], owned by the caller and
//! passed by reference to the tick functions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Rect, ball_bounds};
use super::level::{LevelParams, create_bricks, level_parameters, rows_for_level};
use crate::consts::*;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the confirm key
    NotStarted,
    /// Active gameplay
    Playing,
    /// All lives lost
    GameOver,
    /// Final level cleared
    GameWin,
}

impl GamePhase {
    /// Physics only runs while playing
    pub fn is_active(&self) -> bool {
        matches!(self, GamePhase::Playing)
    }

    /// Phases that accept the confirm key to begin a fresh run
    pub fn accepts_start(&self) -> bool {
        !self.is_active()
    }
}

/// Something that happened during a tick, for audio and persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh run began
    GameStarted,
    /// Ball bounced off a wall or the paddle
    Bounce,
    /// Ball broke a brick (one per frame, chain kills are silent)
    BrickBroken,
    /// Paddle caught a power-up
    PowerUpCollected(PowerUpKind),
    /// Ball fell past the bottom edge
    LifeLost,
    /// Advanced to the given level
    LevelCleared { level: u32 },
    /// Run ended with no lives left
    GameOver,
    /// Run ended by clearing the final level
    GameWon,
    /// High score was beaten; the value must be persisted
    NewHighScore(u32),
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the playfield center heading up, with a random horizontal direction
    pub fn serve(speed: f32, rng: &mut impl Rng) -> Self {
        let direction = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Self {
            pos: Vec2::new((WIDTH / 2.0).floor(), (HEIGHT / 2.0).floor()),
            vel: Vec2::new(speed * direction, -speed),
            radius: BALL_RADIUS,
        }
    }

    /// Collision box
    pub fn bounds(&self) -> Rect {
        ball_bounds(self.pos, self.radius)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    /// Pixels per frame
    pub speed: f32,
}

impl Paddle {
    /// Centered paddle for the given level parameters
    pub fn for_level(params: &LevelParams) -> Self {
        Self {
            pos: Vec2::new(
                ((WIDTH - params.paddle_width) / 2.0).floor(),
                HEIGHT - PADDLE_BOTTOM_OFFSET,
            ),
            width: params.paddle_width,
            speed: params.paddle_speed,
        }
    }

    pub fn as_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, PADDLE_HEIGHT)
    }

    /// Move horizontally by `direction * speed`, staying inside the playfield
    pub fn shift(&mut self, direction: f32) {
        self.pos.x = (self.pos.x + direction * self.speed).clamp(0.0, self.max_x());
    }

    /// Grow the paddle (capped at the playfield width)
    pub fn widen(&mut self, amount: f32) {
        self.width = (self.width + amount).min(WIDTH);
        self.pos.x = self.pos.x.clamp(0.0, self.max_x());
    }

    fn max_x(&self) -> f32 {
        (WIDTH - self.width).max(0.0)
    }
}

/// A brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brick {
    pub rect: Rect,
}

impl Brick {
    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Widen the paddle
    Wide,
    /// Extra life
    Life,
    /// Explosive ball for a few seconds
    Bomb,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Wide, PowerUpKind::Life, PowerUpKind::Bomb];

    /// Single-character label drawn on the capsule
    pub fn label(&self) -> char {
        match self {
            PowerUpKind::Wide => 'W',
            PowerUpKind::Life => '+',
            PowerUpKind::Bomb => 'B',
        }
    }
}

/// A falling power-up capsule
#[derive(Debug, Clone, PartialEq)]
pub struct PowerUp {
    /// Center position
    pub pos: Vec2,
    pub kind: PowerUpKind,
}

impl PowerUp {
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(POWERUP_SIZE))
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u32,
    /// Best score, loaded from disk at startup
    pub high_score: u32,
    /// Frames of explosive mode left (0 = off)
    pub explosive_ticks: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks in grid order (row-major)
    pub bricks: Vec<Brick>,
    /// Falling power-ups in spawn order
    pub powerups: Vec<PowerUp>,
    /// Frame counter, advances in every phase
    pub frame: u64,
}

impl GameState {
    /// Create a session on the title screen
    pub fn new(seed: u64, high_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let params = level_parameters(1);
        let ball = Ball::serve(params.ball_speed, &mut rng);

        let mut state = Self {
            seed,
            rng,
            phase: GamePhase::NotStarted,
            score: 0,
            level: 1,
            lives: STARTING_LIVES,
            high_score,
            explosive_ticks: 0,
            ball,
            paddle: Paddle::for_level(&params),
            bricks: Vec::new(),
            powerups: Vec::new(),
            frame: 0,
        };
        state.reset_game();
        state
    }

    /// Reinitialise the run: score, level, lives, bricks, power-ups, ball and paddle.
    /// The high score and frame counter are kept.
    pub fn reset_game(&mut self) {
        self.score = 0;
        self.level = 1;
        self.lives = STARTING_LIVES;
        self.explosive_ticks = 0;
        self.bricks = create_bricks(rows_for_level(self.level));
        self.powerups.clear();
        self.reset_ball_and_paddle();
    }

    /// Re-serve the ball and recenter the paddle using the current level's parameters
    pub fn reset_ball_and_paddle(&mut self) {
        let params = level_parameters(self.level);
        self.paddle = Paddle::for_level(&params);
        self.ball = Ball::serve(params.ball_speed, &mut self.rng);
    }

    /// Full reset and switch to playing
    pub fn start_run(&mut self) {
        self.reset_game();
        self.phase = GamePhase::Playing;
        log::info!("Run started (high score {})", self.high_score);
    }

    pub fn explosive_active(&self) -> bool {
        self.explosive_ticks > 0
    }

    /// Whole seconds of explosive mode left, for the HUD
    pub fn bomb_seconds(&self) -> u32 {
        self.explosive_ticks / FPS
    }

    /// Promote the current score to high score if it beats it.
    /// Returns the new value when it changed.
    pub fn record_high_score(&mut self) -> Option<u32> {
        if self.score > self.high_score {
            self.high_score = self.score;
            log::info!("New high score: {}", self.score);
            Some(self.score)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_on_title_screen() {
        let state = GameState::new(7, 120);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.high_score, 120);
        assert_eq!(state.bricks.len(), 35);
        assert!(state.powerups.is_empty());
        assert!(!state.explosive_active());
    }

    #[test]
    fn test_serve_position_and_velocity() {
        let state = GameState::new(1, 0);
        assert_eq!(state.ball.pos, Vec2::new(250.0, 250.0));
        assert_eq!(state.ball.vel.y, -4.0);
        assert_eq!(state.ball.vel.x.abs(), 4.0);
        assert_eq!(state.ball.radius, BALL_RADIUS);
    }

    #[test]
    fn test_paddle_centered_for_level() {
        let paddle = Paddle::for_level(&level_parameters(1));
        assert_eq!(paddle.pos, Vec2::new(200.0, 460.0));
        assert_eq!(paddle.width, 100.0);

        let paddle = Paddle::for_level(&level_parameters(4));
        assert_eq!(paddle.width, 70.0);
        assert_eq!(paddle.pos.x, 215.0);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let mut paddle = Paddle::for_level(&level_parameters(1));
        for _ in 0..100 {
            paddle.shift(-1.0);
        }
        assert_eq!(paddle.pos.x, 0.0);

        for _ in 0..100 {
            paddle.shift(1.0);
        }
        assert_eq!(paddle.pos.x, WIDTH - paddle.width);
    }

    #[test]
    fn test_paddle_widen_caps_at_width() {
        let mut paddle = Paddle::for_level(&level_parameters(1));
        paddle.widen(WIDE_PADDLE_BONUS);
        assert_eq!(paddle.width, 140.0);

        paddle.width = 480.0;
        paddle.pos.x = 10.0;
        paddle.widen(WIDE_PADDLE_BONUS);
        assert_eq!(paddle.width, WIDTH);
        assert_eq!(paddle.pos.x, 0.0);
    }

    #[test]
    fn test_reset_game_keeps_high_score() {
        let mut state = GameState::new(3, 50);
        state.score = 80;
        state.level = 4;
        state.lives = 1;
        state.explosive_ticks = 100;
        state.bricks.clear();
        state.powerups.push(PowerUp {
            pos: Vec2::new(10.0, 10.0),
            kind: PowerUpKind::Life,
        });

        state.reset_game();

        assert_eq!(state.score, 0);
        assert_eq!(state.level, 1);
        assert_eq!(state.lives, 3);
        assert_eq!(state.high_score, 50);
        assert_eq!(state.explosive_ticks, 0);
        assert_eq!(state.bricks.len(), 35);
        assert!(state.powerups.is_empty());
    }

    #[test]
    fn test_record_high_score() {
        let mut state = GameState::new(3, 50);
        state.score = 40;
        assert_eq!(state.record_high_score(), None);
        assert_eq!(state.high_score, 50);

        state.score = 60;
        assert_eq!(state.record_high_score(), Some(60));
        assert_eq!(state.high_score, 60);

        // Equal score is not a new record
        assert_eq!(state.record_high_score(), None);
    }

    #[test]
    fn test_bomb_seconds() {
        let mut state = GameState::new(3, 0);
        state.explosive_ticks = EXPLOSIVE_DURATION_FRAMES;
        assert_eq!(state.bomb_seconds(), 5);
        state.explosive_ticks = 59;
        assert_eq!(state.bomb_seconds(), 0);
    }

    #[test]
    fn test_powerup_labels() {
        let labels: Vec<char> = PowerUpKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels, vec!['W', '+', 'B']);
    }
}
