//! 2D canvas renderer (wasm32 only)

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{BACKGROUND, Renderer, Viewport, tile_color};
use crate::sim::{GameState, Status};

/// Paints the visible part of the level onto a canvas
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    /// Pixels per grid unit
    scale: f64,
}

impl CanvasRenderer {
    /// Wrap a canvas, or `None` if it has no 2D context
    pub fn new(canvas: HtmlCanvasElement, scale: f64) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        let viewport = Viewport::for_canvas(canvas.width() as f64, canvas.height() as f64, scale);
        Some(Self {
            canvas,
            ctx,
            viewport,
            scale,
        })
    }

    fn draw_background(&self, state: &GameState) {
        self.ctx.set_fill_style_str(&BACKGROUND.to_css());
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );

        let level = state.level();
        let (cols, rows) = self.viewport.visible_cells(level);
        for y in rows {
            for x in cols.clone() {
                let Some(color) = tile_color(level.tile_at(x as i64, y as i64)) else {
                    continue;
                };
                self.ctx.set_fill_style_str(&color.to_css());
                self.ctx.fill_rect(
                    (x as f64 - self.viewport.left) * self.scale,
                    (y as f64 - self.viewport.top) * self.scale,
                    self.scale,
                    self.scale,
                );
            }
        }
    }

    fn draw_actors(&self, state: &GameState) {
        for actor in state.actors() {
            let pos = actor.pos();
            let size = actor.size();
            self.ctx.set_fill_style_str(&actor.color().to_css());
            self.ctx.fill_rect(
                (pos.x - self.viewport.left) * self.scale,
                (pos.y - self.viewport.top) * self.scale,
                size.x * self.scale,
                size.y * self.scale,
            );
        }
    }

    fn draw_banner(&self, status: Status) {
        let text = match status {
            Status::Playing => return,
            Status::Won => "Level complete!",
            Status::Lost => "Ouch!",
        };
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.6)");
        self.ctx.set_font("bold 24px sans-serif");
        self.ctx.set_text_align("center");
        let x = self.canvas.width() as f64 / 2.0;
        let y = self.canvas.height() as f64 / 2.0;
        if let Err(e) = self.ctx.fill_text(text, x, y) {
            log::warn!("Banner draw failed: {:?}", e);
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, state: &GameState) {
        self.viewport.follow(state);
        self.draw_background(state);
        self.draw_actors(state);
        self.draw_banner(state.status());
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }
}
