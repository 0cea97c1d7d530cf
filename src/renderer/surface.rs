//! Drawing primitives consumed by the game

use glam::Vec2;

use crate::Rect;

/// A 2D drawing target
pub trait DrawSurface {
    /// Erase a rectangle
    fn clear_rect(&mut self, rect: Rect);
    /// Filled circle at the given opacity (0-1)
    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32);
    /// Circle outline
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    /// Straight line segment
    fn line(&mut self, from: Vec2, to: Vec2);
    /// Copy `source` from the obstacle sprite sheet into `dest`
    fn draw_sprite(&mut self, source: Rect, dest: Rect);
    /// Whether a sprite sheet is available for `draw_sprite`
    fn has_sprites(&self) -> bool;
}

/// One recorded drawing call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillCircle {
        center: Vec2,
        radius: f32,
        opacity: f32,
    },
    StrokeCircle {
        center: Vec2,
        radius: f32,
    },
    Line {
        from: Vec2,
        to: Vec2,
    },
    Sprite {
        source: Rect,
        dest: Rect,
    },
}

/// Surface that records commands instead of drawing (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    sprites: bool,
}

impl RecordingSurface {
    pub fn new(sprites: bool) -> Self {
        Self {
            commands: Vec::new(),
            sprites,
        }
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            opacity,
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.commands
            .push(DrawCommand::StrokeCircle { center, radius });
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line { from, to });
    }

    fn draw_sprite(&mut self, source: Rect, dest: Rect) {
        self.commands.push(DrawCommand::Sprite { source, dest });
    }

    fn has_sprites(&self) -> bool {
        self.sprites
    }
}
