//! Level layout and difficulty curve
//!
//! Pure functions of the level number; no RNG.

use super::collision::Rect;
use super::state::Brick;
use crate::consts::*;

/// Per-level tuning derived from the level number
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelParams {
    pub paddle_width: f32,
    /// Pixels per frame
    pub paddle_speed: f32,
    /// Per-axis ball speed (pixels per frame)
    pub ball_speed: f32,
}

/// Paddle shrinks and everything speeds up as levels progress
pub fn level_parameters(level: u32) -> LevelParams {
    let level = level.max(1);
    let paddle_width = 100u32.saturating_sub((level - 1) * 10).max(60);
    let paddle_speed = (7 + level / 2).min(10);
    let ball_speed = (4 + (level - 1) / 2).min(6);

    LevelParams {
        paddle_width: paddle_width as f32,
        paddle_speed: paddle_speed as f32,
        ball_speed: ball_speed as f32,
    }
}

/// Brick rows for a level (5 on level 1, one more per level)
pub fn rows_for_level(level: u32) -> usize {
    4 + level as usize
}

/// Build a `rows x 7` grid of bricks in row-major order
pub fn create_bricks(rows: usize) -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(rows * BRICK_COLUMNS);
    for row in 0..rows {
        for col in 0..BRICK_COLUMNS {
            bricks.push(Brick {
                rect: Rect::new(
                    col as f32 * BRICK_COLUMN_SPACING + BRICK_GRID_LEFT,
                    row as f32 * BRICK_ROW_SPACING + BRICK_GRID_TOP,
                    BRICK_WIDTH,
                    BRICK_HEIGHT,
                ),
            });
        }
    }
    bricks
}
