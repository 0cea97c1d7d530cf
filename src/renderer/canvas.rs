//! Canvas 2D drawing surface (WASM only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::surface::DrawSurface;
use crate::Rect;

/// Fill and stroke color used for every primitive
const INK: &str = "white";

/// `DrawSurface` over a browser `CanvasRenderingContext2d`
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprite_sheet: Option<HtmlImageElement>,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d, sprite_sheet: Option<HtmlImageElement>) -> Self {
        ctx.set_fill_style_str(INK);
        ctx.set_stroke_style_str(INK);
        Self { ctx, sprite_sheet }
    }

    fn circle_path(&self, center: Vec2, radius: f32) -> Result<(), JsValue> {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
    }
}

impl DrawSurface for CanvasSurface {
    fn clear_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, opacity: f32) {
        if let Err(e) = self.circle_path(center, radius) {
            log::warn!("Circle path failed: {:?}", e);
            return;
        }
        self.ctx.save();
        self.ctx.set_global_alpha(opacity as f64);
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        if let Err(e) = self.circle_path(center, radius) {
            log::warn!("Circle path failed: {:?}", e);
            return;
        }
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn draw_sprite(&mut self, source: Rect, dest: Rect) {
        let Some(image) = &self.sprite_sheet else {
            return;
        };
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                image,
                source.x as f64,
                source.y as f64,
                source.width as f64,
                source.height as f64,
                dest.x as f64,
                dest.y as f64,
                dest.width as f64,
                dest.height as f64,
            );
        if let Err(e) = drawn {
            log::warn!("Sprite draw failed: {:?}", e);
        }
    }

    fn has_sprites(&self) -> bool {
        self.sprite_sheet.is_some()
    }
}
