//! Power-up lifecycle: drop roll, falling, pickup, effects, explosive timer

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, PowerUp, PowerUpKind};
use crate::consts::*;

/// Roll for a power-up drop at `at` (a destroyed brick's center)
pub fn roll_drop(rng: &mut impl Rng, at: Vec2) -> Option<PowerUp> {
    if rng.random::<f32>() < POWERUP_DROP_CHANCE {
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        Some(PowerUp { pos: at, kind })
    } else {
        None
    }
}

/// Move every power-up down one frame, consume the ones touching the paddle and
/// discard the ones that fell off the bottom.
pub fn update_powerups(state: &mut GameState, events: &mut Vec<GameEvent>) {
    // Pickups this frame are tested against the paddle as it is before any effect
    let paddle = state.paddle.as_rect();
    let mut caught = Vec::new();

    state.powerups.retain_mut(|pu| {
        pu.pos.y += POWERUP_FALL_SPEED;
        if pu.bounds().overlaps(&paddle) {
            caught.push(pu.kind);
            false
        } else {
            pu.pos.y <= HEIGHT
        }
    });

    for kind in caught {
        apply_powerup(state, kind);
        events.push(GameEvent::PowerUpCollected(kind));
    }
}

/// Apply a caught power-up's effect
pub fn apply_powerup(state: &mut GameState, kind: PowerUpKind) {
    log::debug!("Power-up collected: {:?}", kind);
    match kind {
        PowerUpKind::Wide => state.paddle.widen(WIDE_PADDLE_BONUS),
        PowerUpKind::Life => state.lives += 1,
        // Re-arming restarts the countdown, it never stacks
        PowerUpKind::Bomb => state.explosive_ticks = EXPLOSIVE_DURATION_FRAMES,
    }
}

/// Count explosive mode down by one frame
pub fn tick_explosive(state: &mut GameState) {
    if state.explosive_ticks > 0 {
        state.explosive_ticks -= 1;
        if state.explosive_ticks == 0 {
            log::debug!("Explosive mode expired");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42, 0);
        state.start_run();
        state
    }

    /// A power-up that lands on the paddle center after one fall step
    fn on_paddle(state: &GameState, kind: PowerUpKind) -> PowerUp {
        let paddle = state.paddle.as_rect();
        PowerUp {
            pos: Vec2::new(paddle.center().x, paddle.top() - 10.0),
            kind,
        }
    }

    #[test]
    fn test_drop_rate_roughly_a_quarter() {
        let mut rng = Pcg32::seed_from_u64(9);
        let drops = (0..10_000)
            .filter_map(|_| roll_drop(&mut rng, Vec2::ZERO))
            .collect::<Vec<_>>();

        assert!(drops.len() > 2_200 && drops.len() < 2_800, "{}", drops.len());
        for kind in PowerUpKind::ALL {
            assert!(drops.iter().any(|p| p.kind == kind));
        }
    }

    #[test]
    fn test_drop_spawns_at_position() {
        let mut rng = Pcg32::seed_from_u64(1);
        let at = Vec2::new(55.0, 60.0);
        let drop = std::iter::repeat_with(|| roll_drop(&mut rng, at))
            .flatten()
            .next()
            .unwrap();
        assert_eq!(drop.pos, at);
    }

    #[test]
    fn test_powerup_falls() {
        let mut state = playing_state();
        state.powerups.push(PowerUp {
            pos: Vec2::new(50.0, 100.0),
            kind: PowerUpKind::Life,
        });
        let mut events = Vec::new();

        update_powerups(&mut state, &mut events);

        assert_eq!(state.powerups[0].pos, Vec2::new(50.0, 103.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_powerup_discarded_past_bottom() {
        let mut state = playing_state();
        state.powerups.push(PowerUp {
            pos: Vec2::new(20.0, 498.0),
            kind: PowerUpKind::Life,
        });
        let mut events = Vec::new();

        update_powerups(&mut state, &mut events);

        assert!(state.powerups.is_empty());
        assert!(events.is_empty());
        assert_eq!(state.lives, 3);
    }

    #[test]
    fn test_catch_wide() {
        let mut state = playing_state();
        let pu = on_paddle(&state, PowerUpKind::Wide);
        state.powerups.push(pu);
        let mut events = Vec::new();

        update_powerups(&mut state, &mut events);

        assert!(state.powerups.is_empty());
        assert_eq!(state.paddle.width, 140.0);
        assert_eq!(events, vec![GameEvent::PowerUpCollected(PowerUpKind::Wide)]);
    }

    #[test]
    fn test_catch_life() {
        let mut state = playing_state();
        let pu = on_paddle(&state, PowerUpKind::Life);
        state.powerups.push(pu);
        let mut events = Vec::new();

        update_powerups(&mut state, &mut events);

        assert_eq!(state.lives, 4);
        assert_eq!(events, vec![GameEvent::PowerUpCollected(PowerUpKind::Life)]);
    }

    #[test]
    fn test_bomb_retrigger_resets_timer() {
        let mut state = playing_state();
        apply_powerup(&mut state, PowerUpKind::Bomb);
        assert_eq!(state.explosive_ticks, 300);

        for _ in 0..120 {
            tick_explosive(&mut state);
        }
        assert_eq!(state.explosive_ticks, 180);

        apply_powerup(&mut state, PowerUpKind::Bomb);
        assert_eq!(state.explosive_ticks, 300);
    }

    #[test]
    fn test_explosive_expires() {
        let mut state = playing_state();
        state.explosive_ticks = 2;

        tick_explosive(&mut state);
        assert!(state.explosive_active());
        tick_explosive(&mut state);
        assert!(!state.explosive_active());
        tick_explosive(&mut state);
        assert_eq!(state.explosive_ticks, 0);
    }

    #[test]
    fn test_two_wides_same_frame_use_pre_frame_paddle() {
        let mut state = playing_state();
        let pu = on_paddle(&state, PowerUpKind::Wide);
        state.powerups.push(pu.clone());
        state.powerups.push(pu);
        let mut events = Vec::new();

        update_powerups(&mut state, &mut events);

        assert_eq!(state.paddle.width, 180.0);
        assert_eq!(events.len(), 2);
    }
}
