//! Canvas 2D backend

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::shapes::{DrawCmd, HUD_FONT};

/// Replays draw lists on a `<canvas>` 2D context
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Size the canvas to the board and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, width: u32, height: u32) -> Option<Self> {
        canvas.set_width(width);
        canvas.set_height(height);

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        ctx.set_font(HUD_FONT);
        ctx.set_text_baseline("top");

        Some(Self { ctx })
    }

    pub fn draw(&self, cmds: &[DrawCmd]) {
        let ctx = &self.ctx;
        for cmd in cmds {
            match cmd {
                DrawCmd::Fill { rect, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill_rect(
                        rect.min.x as f64,
                        rect.min.y as f64,
                        rect.width() as f64,
                        rect.height() as f64,
                    );
                }
                DrawCmd::Outline { rect, color } => {
                    ctx.set_stroke_style_str(&color.to_css());
                    ctx.stroke_rect(
                        rect.min.x as f64,
                        rect.min.y as f64,
                        rect.width() as f64,
                        rect.height() as f64,
                    );
                }
                DrawCmd::Dot { pos, radius, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.begin_path();
                    if ctx
                        .arc(
                            pos.x as f64,
                            pos.y as f64,
                            *radius as f64,
                            0.0,
                            std::f64::consts::TAU,
                        )
                        .is_ok()
                    {
                        ctx.fill();
                    }
                }
                DrawCmd::Text { text, pos, color } => {
                    ctx.set_fill_style_str(&color.to_css());
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
