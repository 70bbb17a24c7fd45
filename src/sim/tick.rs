//! Fixed timestep simulation tick
//!
//! One call per frame. Physics runs only while playing; every other phase just
//! waits for the confirm key.

use super::collision::{below_playfield, reflect_velocity, wall_contact};
use super::level::{create_bricks, rows_for_level};
use super::powerup::{roll_drop, tick_explosive, update_powerups};
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left key held
    pub left: bool,
    /// Right key held
    pub right: bool,
    /// Confirm key pressed this frame (start/restart)
    pub confirm: bool,
}

/// Advance the game by one frame and return what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.frame += 1;

    if input.confirm && state.phase.accepts_start() {
        state.start_run();
        events.push(GameEvent::GameStarted);
    }

    match state.phase {
        // The frame the run starts is already a playing frame
        GamePhase::Playing => step_playing(state, input, &mut events),
        GamePhase::NotStarted | GamePhase::GameOver | GamePhase::GameWin => {}
    }

    events
}

fn step_playing(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    if input.left {
        state.paddle.shift(-1.0);
    }
    if input.right {
        state.paddle.shift(1.0);
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel;

    let contact = wall_contact(ball.pos, ball.radius);
    ball.vel = reflect_velocity(ball.vel, contact);
    if contact.side {
        events.push(GameEvent::Bounce);
    }
    if contact.top {
        events.push(GameEvent::Bounce);
    }

    let paddle = state.paddle.as_rect();
    if ball.bounds().overlaps(&paddle) && ball.vel.y > 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::Bounce);
    }

    // Timer runs down before the brick scan
    tick_explosive(state);

    collide_bricks(state, events);
    update_powerups(state, events);

    if below_playfield(state.ball.pos) {
        lose_life(state, events);
    }

    if state.phase.is_active() && state.bricks.is_empty() {
        clear_level(state, events);
    }
}

/// First brick (in grid order) under the ball breaks; explosive mode takes
/// out a few neighbours too
fn collide_bricks(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let ball_box = state.ball.bounds();
    let Some(index) = state.bricks.iter().position(|b| b.rect.overlaps(&ball_box)) else {
        return;
    };

    let brick = state.bricks.remove(index);
    let center = brick.center();
    state.ball.vel.y = -state.ball.vel.y;
    state.score += BRICK_SCORE;

    if let Some(powerup) = roll_drop(&mut state.rng, center) {
        log::debug!("Power-up {:?} dropped at {}", powerup.kind, center);
        state.powerups.push(powerup);
    }
    events.push(GameEvent::BrickBroken);

    if state.explosive_active() {
        let destroyed = destroy_nearby_bricks(state, center);
        state.score += destroyed as u32 * BRICK_SCORE;
    }
}

/// Remove up to `EXPLOSIVE_EXTRA_BRICKS` bricks (grid order) whose centers are
/// within `EXPLOSIVE_RADIUS` of `origin`. Returns how many were removed.
fn destroy_nearby_bricks(state: &mut GameState, origin: glam::Vec2) -> usize {
    let doomed: Vec<usize> = state
        .bricks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.center().distance(origin) < EXPLOSIVE_RADIUS)
        .map(|(i, _)| i)
        .take(EXPLOSIVE_EXTRA_BRICKS)
        .collect();

    let mut index = 0;
    state.bricks.retain(|_| {
        let keep = !doomed.contains(&index);
        index += 1;
        keep
    });
    doomed.len()
}

fn lose_life(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.lives = state.lives.saturating_sub(1);
    events.push(GameEvent::LifeLost);

    if state.lives == 0 {
        log::info!("Game over at level {} with score {}", state.level, state.score);
        state.phase = GamePhase::GameOver;
        events.push(GameEvent::GameOver);
        if let Some(score) = state.record_high_score() {
            events.push(GameEvent::NewHighScore(score));
        }
    } else {
        log::debug!("Life lost, {} left", state.lives);
        state.reset_ball_and_paddle();
    }
}

fn clear_level(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.level += 1;
    // Past the last level there is no grid to build
    if state.level > MAX_LEVEL {
        log::info!("All levels cleared with score {}", state.score);
        state.phase = GamePhase::GameWin;
        events.push(GameEvent::GameWon);
        if let Some(score) = state.record_high_score() {
            events.push(GameEvent::NewHighScore(score));
        }
        return;
    }

    state.bricks = create_bricks(rows_for_level(state.level));
    state.reset_ball_and_paddle();
    log::info!("Level {} ({} bricks)", state.level, state.bricks.len());
    events.push(GameEvent::LevelCleared { level: state.level });
}
