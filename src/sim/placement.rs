//! Obstacle placement by rejection sampling
//!
//! Candidates are drawn uniformly over the whole area and thrown away when they
//! land in a margin or too close to an already accepted obstacle. The attempt
//! budget is hard: running out yields fewer obstacles, never an error.

use glam::Vec2;
use rand::Rng;

use super::collision::is_clear_of;
use super::entity::{Collidable, Obstacle, SpriteFrame};
use crate::Rect;
use crate::settings::{Settings, SpriteSheet};

/// Where obstacles may go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementArea {
    pub bounds: Rect,
    /// Band below the top edge that stays empty
    pub top_margin: f32,
}

impl PlacementArea {
    /// Whether a circle of `radius` centered at `center` respects the margins
    ///
    /// Every edge keeps `radius * 2` clear; the top additionally keeps `top_margin`.
    pub fn admits(&self, center: Vec2, radius: f32) -> bool {
        let margin = radius * 2.0;
        let b = &self.bounds;
        center.x >= b.left() + margin
            && center.x <= b.right() - margin
            && center.y >= b.top() + self.top_margin + margin
            && center.y <= b.bottom() - margin
    }
}

/// Inputs to one placement run
#[derive(Debug, Clone)]
pub struct PlacementParams {
    pub count: usize,
    pub area: PlacementArea,
    pub radius: f32,
    /// Clearance kept between obstacles beyond their radii
    pub spacing_buffer: f32,
    pub max_attempts: u32,
    pub sheet: SpriteSheet,
}

impl PlacementParams {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            count: settings.obstacle_count,
            area: PlacementArea {
                bounds: settings.canvas(),
                top_margin: settings.top_margin,
            },
            radius: settings.obstacle_radius,
            spacing_buffer: settings.spacing_buffer,
            max_attempts: settings.max_attempts,
            sheet: settings.sprite.clone(),
        }
    }
}

/// Scatter up to `params.count` non-overlapping obstacles
pub fn generate<R: Rng + ?Sized>(params: &PlacementParams, rng: &mut R) -> Vec<Obstacle> {
    // Never more acceptances than attempts
    let capacity = params.count.min(params.max_attempts as usize);
    let mut placed: Vec<Obstacle> = Vec::with_capacity(capacity);
    if params.count == 0 {
        return placed;
    }

    let bounds = params.area.bounds;
    let mut attempts = 0u32;
    while placed.len() < params.count && attempts < params.max_attempts {
        attempts += 1;

        let center = Vec2::new(
            bounds.left() + rng.random::<f32>() * bounds.width,
            bounds.top() + rng.random::<f32>() * bounds.height,
        );
        let frame = SpriteFrame {
            column: rng.random_range(0..params.sheet.columns.max(1)),
            row: rng.random_range(0..params.sheet.rows.max(1)),
        };
        let candidate = Obstacle::new(center, params.radius, frame, &params.sheet);

        if !params.area.admits(candidate.center(), candidate.collision_radius()) {
            continue;
        }
        if placed
            .iter()
            .all(|other| is_clear_of(&candidate, other, params.spacing_buffer))
        {
            placed.push(candidate);
        }
    }

    if placed.len() < params.count {
        log::debug!(
            "Placed {}/{} obstacles before exhausting {} attempts",
            placed.len(),
            params.count,
            params.max_attempts
        );
    } else {
        log::debug!("Placed {} obstacles in {} attempts", placed.len(), attempts);
    }

    placed
}
