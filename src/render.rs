use crate::core::{FieldCanvas, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D backend for the particle field.
pub struct Canvas2d {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl FieldCanvas for Canvas2d {
    fn resize(&mut self, width: f32, height: f32) {
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, alpha: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.fill();
    }

    fn begin_links(&mut self, color: Rgba, alpha: f32, width: f32) {
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
