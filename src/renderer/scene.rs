//! Draws a read-only [`GameState`] into a canvas plus text overlays
//!
//! Nothing here touches the terminal, so every frame can be checked in tests.

use crate::consts::*;
use crate::sim::{GamePhase, GameState, PowerUpKind, Rect};

use super::canvas::{Canvas, Rgb};

/// Playfield pixels per canvas pixel
pub const PIXEL_SIZE: f32 = 5.0;
/// Canvas size covering the whole playfield
pub const CANVAS_WIDTH: usize = (WIDTH / PIXEL_SIZE) as usize;
pub const CANVAS_HEIGHT: usize = (HEIGHT / PIXEL_SIZE) as usize;
/// Text lines drawn above the playfield
pub const HUD_ROWS: usize = 2;

pub const TITLE_COLOR: Rgb = Rgb(255, 0, 255);
pub const PROMPT_COLOR: Rgb = Rgb(0, 255, 255);
pub const HIGH_SCORE_COLOR: Rgb = Rgb(255, 255, 0);
pub const BOMB_COLOR: Rgb = Rgb(255, 150, 0);
pub const WIN_COLOR: Rgb = Rgb(0, 255, 0);
const PADDLE_COLOR: Rgb = Rgb::WHITE;
const BALL_COLOR: Rgb = Rgb(255, 0, 0);
const EXPLOSIVE_BALL_COLOR: Rgb = Rgb(255, 100, 0);
const BRICK_COLOR: Rgb = Rgb(0, 200, 255);

pub const TITLE: &str = "Paddle Ball: Neon Breaker";

/// Capsule color per power-up
pub fn powerup_color(kind: PowerUpKind) -> Rgb {
    match kind {
        PowerUpKind::Wide => Rgb(0, 255, 0),
        PowerUpKind::Life => Rgb(255, 255, 0),
        PowerUpKind::Bomb => Rgb(255, 0, 0),
    }
}

/// Slowly pulsing purple background
pub fn neon_background(frame: u64) -> Rgb {
    let t = frame as f32;
    let r = 50 + (50.0 * (t * 0.02).sin()) as i32;
    let b = 70 + (50.0 * (t * 0.015).cos()) as i32;
    Rgb(r.clamp(0, 255) as u8, 0, b.clamp(0, 255) as u8)
}

/// A string placed on the terminal grid
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Terminal column
    pub col: u16,
    /// Terminal row, counted from the top of the screen
    pub row: u16,
    pub text: String,
    pub color: Rgb,
}

impl TextLine {
    fn at(col: usize, row: usize, text: impl Into<String>, color: Rgb) -> Self {
        Self {
            col: col as u16,
            row: row as u16,
            text: text.into(),
            color,
        }
    }

    /// Horizontally centered over the playfield
    fn centered(row: usize, text: impl Into<String>, color: Rgb) -> Self {
        let text = text.into();
        let col = CANVAS_WIDTH.saturating_sub(text.chars().count()) / 2;
        Self::at(col, row, text, color)
    }
}

fn to_px(v: f32) -> i32 {
    (v / PIXEL_SIZE).floor() as i32
}

/// Terminal row of a playfield y coordinate
fn to_row(y: f32) -> usize {
    HUD_ROWS + (y.max(0.0) / (PIXEL_SIZE * 2.0)) as usize
}

fn to_col(x: f32) -> usize {
    (x.max(0.0) / PIXEL_SIZE) as usize
}

fn fill_rect(canvas: &mut Canvas, rect: &Rect, c: Rgb) {
    let x = to_px(rect.left());
    let y = to_px(rect.top());
    let w = (to_px(rect.right()) - x).max(1);
    let h = (to_px(rect.bottom()) - y).max(1);
    canvas.fill_rect(x, y, w, h, c);
}

/// Rasterise the playfield: background, bricks, paddle, ball, power-ups
pub fn draw_playfield(canvas: &mut Canvas, state: &GameState) {
    canvas.fill(neon_background(state.frame));
    if state.phase == GamePhase::NotStarted {
        return;
    }

    for brick in &state.bricks {
        fill_rect(canvas, &brick.rect, BRICK_COLOR);
    }

    fill_rect(canvas, &state.paddle.as_rect(), PADDLE_COLOR);

    let ball_color = if state.explosive_active() {
        EXPLOSIVE_BALL_COLOR
    } else {
        BALL_COLOR
    };
    canvas.fill_circle(
        to_px(state.ball.pos.x),
        to_px(state.ball.pos.y),
        to_px(state.ball.radius),
        ball_color,
    );

    for pu in &state.powerups {
        canvas.fill_circle(
            to_px(pu.pos.x),
            to_px(pu.pos.y),
            to_px(POWERUP_SIZE / 2.0),
            powerup_color(pu.kind),
        );
    }
}

/// Score, level, lives, high score, bomb timer and optional FPS
pub fn hud_lines(state: &GameState, fps: Option<u32>) -> Vec<TextLine> {
    if state.phase == GamePhase::NotStarted {
        return Vec::new();
    }

    let mut lines = vec![
        TextLine::at(0, 0, format!("Score: {}", state.score), Rgb::WHITE),
        TextLine::at(to_col(200.0), 0, format!("Level: {}", state.level), Rgb::WHITE),
        TextLine::at(to_col(WIDTH - 100.0), 0, format!("Lives: {}", state.lives), Rgb::WHITE),
        TextLine::at(
            to_col(150.0),
            1,
            format!("High Score: {}", state.high_score),
            HIGH_SCORE_COLOR,
        ),
    ];
    if state.explosive_active() {
        lines.push(TextLine::at(
            0,
            1,
            format!("BOMB: {}s", state.bomb_seconds()),
            BOMB_COLOR,
        ));
    }
    if let Some(fps) = fps {
        lines.push(TextLine::at(to_col(WIDTH - 100.0), 1, format!("FPS: {}", fps), Rgb::WHITE));
    }
    lines
}

/// Text drawn over the playfield: title screen, power-up labels, end banners
pub fn overlay_lines(state: &GameState) -> Vec<TextLine> {
    match state.phase {
        GamePhase::NotStarted => vec![
            TextLine::centered(to_row(200.0), TITLE, TITLE_COLOR),
            TextLine::centered(to_row(250.0), "Press SPACE to start", PROMPT_COLOR),
            TextLine::centered(
                to_row(280.0),
                format!("High Score: {}", state.high_score),
                HIGH_SCORE_COLOR,
            ),
        ],
        phase => {
            let mut lines: Vec<TextLine> = state
                .powerups
                .iter()
                .filter(|pu| pu.pos.y >= 0.0 && pu.pos.y < HEIGHT)
                .map(|pu| {
                    TextLine::at(
                        to_col(pu.pos.x),
                        to_row(pu.pos.y),
                        pu.kind.label().to_string(),
                        Rgb::BLACK,
                    )
                })
                .collect();

            let banner_row = to_row(HEIGHT / 2.0);
            match phase {
                GamePhase::GameOver => {
                    lines.push(TextLine::centered(banner_row, "Game Over! Press SPACE", Rgb::WHITE))
                }
                GamePhase::GameWin => {
                    lines.push(TextLine::centered(banner_row, "YOU WIN! Press SPACE", WIN_COLOR))
                }
                GamePhase::NotStarted | GamePhase::Playing => {}
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::sim::PowerUp;

    fn playing() -> GameState {
        let mut state = GameState::new(5, 90);
        state.start_run();
        state
    }

    #[test]
    fn test_canvas_covers_playfield() {
        assert_eq!(CANVAS_WIDTH, 100);
        assert_eq!(CANVAS_HEIGHT, 100);
    }

    #[test]
    fn test_background_pulses() {
        assert_eq!(neon_background(0), Rgb(50, 0, 120));
        assert_ne!(neon_background(0), neon_background(100));
    }

    #[test]
    fn test_title_screen_is_background_only() {
        let state = GameState::new(5, 90);
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        draw_playfield(&mut canvas, &state);

        let bg = neon_background(state.frame);
        assert!((0..CANVAS_HEIGHT).all(|y| (0..CANVAS_WIDTH).all(|x| canvas.get(x, y) == bg)));

        let overlay = overlay_lines(&state);
        assert_eq!(overlay[0].text, TITLE);
        assert_eq!(overlay[2].text, "High Score: 90");
        assert!(hud_lines(&state, None).is_empty());
    }

    #[test]
    fn test_entities_drawn() {
        let state = playing();
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        draw_playfield(&mut canvas, &state);

        // First brick at (25, 50) -> pixel (5, 10)
        assert_eq!(canvas.get(5, 10), BRICK_COLOR);
        // Paddle at (200, 460) -> pixel (40, 92)
        assert_eq!(canvas.get(40, 92), PADDLE_COLOR);
        // Ball at (250, 250) -> pixel (50, 50)
        assert_eq!(canvas.get(50, 50), BALL_COLOR);
    }

    #[test]
    fn test_explosive_ball_color() {
        let mut state = playing();
        state.explosive_ticks = 10;
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        draw_playfield(&mut canvas, &state);
        assert_eq!(canvas.get(50, 50), EXPLOSIVE_BALL_COLOR);
    }

    #[test]
    fn test_hud_values() {
        let mut state = playing();
        state.score = 35;
        state.explosive_ticks = 150;

        let hud = hud_lines(&state, Some(60));
        let texts: Vec<&str> = hud.iter().map(|l| l.text.as_str()).collect();

        assert!(texts.contains(&"Score: 35"));
        assert!(texts.contains(&"Level: 1"));
        assert!(texts.contains(&"Lives: 3"));
        assert!(texts.contains(&"High Score: 90"));
        assert!(texts.contains(&"BOMB: 2s"));
        assert!(texts.contains(&"FPS: 60"));
    }

    #[test]
    fn test_win_hud_shows_level_past_last() {
        let mut state = playing();
        state.phase = GamePhase::GameWin;
        state.level = MAX_LEVEL + 1;
        state.bricks.clear();

        let hud = hud_lines(&state, None);
        assert!(hud.iter().any(|l| l.text == "Level: 6"));
    }

    #[test]
    fn test_powerup_labels_and_banners() {
        let mut state = playing();
        state.powerups.push(PowerUp {
            pos: Vec2::new(100.0, 200.0),
            kind: PowerUpKind::Life,
        });

        let overlay = overlay_lines(&state);
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay[0].text, "+");
        assert_eq!((overlay[0].col, overlay[0].row), (20, 22));

        state.phase = GamePhase::GameOver;
        assert!(overlay_lines(&state).iter().any(|l| l.text == "Game Over! Press SPACE"));

        state.phase = GamePhase::GameWin;
        assert!(overlay_lines(&state).iter().any(|l| l.text == "YOU WIN! Press SPACE"));
    }
}
