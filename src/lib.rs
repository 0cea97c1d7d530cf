//! Garden Dodge - steer a creature around scattered obstacles
//!
//! Core modules:
//! - `sim`: Entities, obstacle placement, player movement, collisions, scene
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `platform`: Browser input plumbing
//! - `settings`: Data-driven game configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError, SpriteSheet};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (fixed by the host page)
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 40.0;
    /// Per-tick displacement while chasing the pointer
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Closer than this to the pointer the player holds still
    pub const PLAYER_DEADBAND: f32 = 5.0;

    /// Obstacle defaults
    pub const OBSTACLE_COUNT: usize = 10;
    pub const OBSTACLE_RADIUS: f32 = 40.0;
    /// Band at the top of the canvas kept free for background art
    pub const TOP_MARGIN: f32 = 260.0;
    /// Extra clearance between obstacles on top of their radii
    pub const SPACING_BUFFER: f32 = 150.0;
    /// Rejection sampling budget
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 500;

    /// Sprite sheet layout
    pub const SPRITE_COLUMNS: u32 = 4;
    pub const SPRITE_ROWS: u32 = 3;
    pub const SPRITE_CELL_SIZE: f32 = 250.0;
    /// Vertical offset so the art's base sits on the collision circle
    pub const SPRITE_LIFT: f32 = 70.0;

    /// Opacity of filled collision circles
    pub const CIRCLE_OPACITY: f32 = 0.5;
}

/// Axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    d.x.hypot(d.y)
}

/// Unit vector pointing from `from` to `to`
///
/// Coincident points yield the zero vector instead of NaN.
#[inline]
pub fn direction(from: Vec2, to: Vec2) -> Vec2 {
    let d = to - from;
    let len = d.x.hypot(d.y);
    if len > 0.0 { d / len } else { Vec2::ZERO }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean() {
        assert_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(Vec2::new(3.0, 4.0), Vec2::new(0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_direction_is_unit() {
        let dir = direction(Vec2::new(10.0, 10.0), Vec2::new(13.0, 14.0));
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir.x - 0.6).abs() < 1e-6);
        assert!((dir.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_direction_coincident_points() {
        let p = Vec2::new(640.0, 360.0);
        assert_eq!(direction(p, p), Vec2::ZERO);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
    }
}
