//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame
//! - Seeded RNG only
//! - Stable iteration order (grid order for bricks, spawn order for power-ups)
//! - No rendering, audio or file I/O; side effects are reported as events

pub mod collision;
pub mod level;
pub mod powerup;
pub mod state;
pub mod tick;

pub use collision::{Rect, WallContact, ball_bounds, reflect_velocity, wall_contact};
pub use level::{LevelParams, create_bricks, level_parameters, rows_for_level};
pub use powerup::apply_powerup;
pub use state::{Ball, Brick, GameEvent, GamePhase, GameState, Paddle, PowerUp, PowerUpKind};
pub use tick::{TickInput, tick};
