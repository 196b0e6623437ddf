use blockwright_core::color::Rgb;
use blockwright_render::Canvas;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::WebError;

/// [`Canvas`] over a browser 2D context. Coordinates are CSS pixels; the
/// backing store is scaled by the device pixel ratio.
pub struct Canvas2d {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, WebError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(WebError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| WebError::NoContext)?;
        ctx.set_line_join("round");
        Ok(Self {
            ctx,
            width: f64::from(canvas.width()),
            height: f64::from(canvas.height()),
        })
    }

    /// Call after the backing store changed size, which also resets the
    /// context transform.
    pub fn resize(&mut self, css_width: f64, css_height: f64, dpr: f64) {
        self.width = css_width;
        self.height = css_height;
        if let Err(e) = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
            log::warn!("canvas: set_transform failed: {e:?}");
        }
        self.ctx.set_line_join("round");
    }

    fn trace(&self, points: &[Vec2]) -> bool {
        let Some((first, rest)) = points.split_first() else {
            return false;
        };
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(first.x), f64::from(first.y));
        for p in rest {
            self.ctx.line_to(f64::from(p.x), f64::from(p.y));
        }
        self.ctx.close_path();
        true
    }
}

impl Canvas for Canvas2d {
    fn clear(&mut self, color: Rgb) {
        self.ctx.set_fill_style_str(&color.to_hex());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgb) {
        if self.trace(points) {
            self.ctx.set_fill_style_str(&color.to_hex());
            self.ctx.fill();
        }
    }

    fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb, width: f32) {
        if self.trace(points) {
            self.ctx.set_stroke_style_str(&color.to_hex());
            self.ctx.set_line_width(f64::from(width));
            self.ctx.stroke();
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgb, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(from.x), f64::from(from.y));
        self.ctx.line_to(f64::from(to.x), f64::from(to.y));
        self.ctx.set_stroke_style_str(&color.to_hex());
        self.ctx.set_line_width(f64::from(width));
        self.ctx.stroke();
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.ctx.set_global_alpha(f64::from(alpha));
    }
}
