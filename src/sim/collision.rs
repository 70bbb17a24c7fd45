//! Collision detection for axis-aligned rectangles
//!
//! The ball is drawn as a circle but collides as its bounding box, a square of
//! side `2 * radius`. Bricks, the paddle and power-ups are plain rectangles.

use glam::Vec2;

use crate::consts::{HEIGHT, WIDTH};

/// An axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Bounding box of a ball centered at `pos`
pub fn ball_bounds(pos: Vec2, radius: f32) -> Rect {
    Rect::from_center(pos, Vec2::splat(radius * 2.0))
}

/// Which walls a ball is touching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right edge
    pub side: bool,
    /// Top edge (the bottom edge is open)
    pub top: bool,
}

/// Check a ball against the three closed walls of the playfield
pub fn wall_contact(pos: Vec2, radius: f32) -> WallContact {
    WallContact {
        side: pos.x <= radius || pos.x >= WIDTH - radius,
        top: pos.y <= radius,
    }
}

/// Reflect velocity off the touched walls by flipping the matching component
pub fn reflect_velocity(vel: Vec2, contact: WallContact) -> Vec2 {
    Vec2::new(
        if contact.side { -vel.x } else { vel.x },
        if contact.top { -vel.y } else { vel.y },
    )
}

/// True once the ball center has dropped to or past the bottom edge
pub fn below_playfield(pos: Vec2) -> bool {
    pos.y >= HEIGHT
}
