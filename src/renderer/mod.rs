//! Canvas 2D rendering
//!
//! Reads the world each frame and strokes outlines; nothing flows back into
//! the simulation.

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::sim::World;

const BACKGROUND: &str = "white";
const SHIP_COLOR: &str = "#00ADD8";
const ASTEROID_COLOR: &str = "#5DC9E2";
const MISSILE_COLOR: &str = "#00ADD8";
const MISSILE_RADIUS: f64 = 1.0;

/// Draws a [`World`] onto a 2D canvas context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            ctx,
            width: canvas.width() as f64,
            height: canvas.height() as f64,
        })
    }

    /// Render one frame
    pub fn render(&self, world: &World) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, self.width, self.height);
        ctx.set_line_width(1.0);

        self.stroke_polygon(&world.ship.outline(), SHIP_COLOR);

        for asteroid in &world.asteroids {
            self.stroke_polygon(&asteroid.outline(), ASTEROID_COLOR);
        }

        ctx.set_stroke_style_str(MISSILE_COLOR);
        for missile in &world.missiles {
            ctx.begin_path();
            let _ = ctx.arc(
                missile.pos.x as f64,
                missile.pos.y as f64,
                MISSILE_RADIUS,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.stroke();
        }
    }

    fn stroke_polygon(&self, points: &[Vec2], color: &str) {
        let Some(last) = points.last() else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(color);
        ctx.begin_path();
        ctx.move_to(last.x as f64, last.y as f64);
        for p in points {
            ctx.line_to(p.x as f64, p.y as f64);
        }
        ctx.stroke();
    }
}
