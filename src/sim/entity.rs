//! Entity model
//!
//! Player and obstacles share a collision `Circle` by composition; anything
//! that exposes one is `Collidable`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::settings::SpriteSheet;
use crate::{Rect, direction, distance};

/// Circular collision bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Collision radius (independent of any sprite size)
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Anything with circular collision bounds
pub trait Collidable {
    fn circle(&self) -> Circle;

    #[inline]
    fn center(&self) -> Vec2 {
        self.circle().center
    }

    #[inline]
    fn collision_radius(&self) -> f32 {
        self.circle().radius
    }
}

impl Collidable for Circle {
    #[inline]
    fn circle(&self) -> Circle {
        *self
    }
}

/// The pointer-chasing player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Circle,
    /// Displacement applied on the last update
    pub velocity: Vec2,
    /// Maximum displacement per tick
    pub speed_limit: f32,
    /// Distance to the target under which the player stops
    pub deadband: f32,
}

impl Player {
    pub fn new(center: Vec2, radius: f32, speed_limit: f32, deadband: f32) -> Self {
        Self {
            body: Circle::new(center, radius),
            velocity: Vec2::ZERO,
            speed_limit,
            deadband,
        }
    }

    /// Step toward `target` at constant speed
    ///
    /// With `speed_limit > deadband` the player can step past the target and
    /// come back on the next tick; that jitter is kept as is.
    pub fn update(&mut self, target: Vec2) {
        let dist = distance(self.body.center, target);
        self.velocity = if dist > self.deadband {
            direction(self.body.center, target) * self.speed_limit
        } else {
            Vec2::ZERO
        };
        self.body.center += self.velocity;
    }
}

impl Collidable for Player {
    #[inline]
    fn circle(&self) -> Circle {
        self.body
    }
}

/// Cell of the sprite sheet an obstacle is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteFrame {
    pub column: u32,
    pub row: u32,
}

/// A static obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub body: Circle,
    pub frame: SpriteFrame,
    /// Top-left corner where the sprite cell is drawn
    pub sprite_origin: Vec2,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32, frame: SpriteFrame, sheet: &SpriteSheet) -> Self {
        let sprite_origin = Vec2::new(
            center.x - sheet.cell_width * 0.5,
            center.y - sheet.cell_height * 0.5 - sheet.lift,
        );
        Self {
            body: Circle::new(center, radius),
            frame,
            sprite_origin,
        }
    }

    /// Source region of this obstacle's cell in the sheet
    pub fn sprite_source(&self, sheet: &SpriteSheet) -> Rect {
        sheet.region(self.frame.column, self.frame.row)
    }

    /// Destination rectangle on the canvas
    pub fn sprite_dest(&self, sheet: &SpriteSheet) -> Rect {
        Rect::new(
            self.sprite_origin.x,
            self.sprite_origin.y,
            sheet.cell_width,
            sheet.cell_height,
        )
    }
}

impl Collidable for Obstacle {
    #[inline]
    fn circle(&self) -> Circle {
        self.body
    }
}
