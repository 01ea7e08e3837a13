use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use tilehop_core::frame::FrameRenderer;
use tilehop_core::game_trait::{GameEvent, TickGame};
use tilehop_platformer::CoinPlatformer;

use crate::scene::{DrawCmd, build_draw_list};

/// Canvas2D renderer plus the status text element beside the canvas.
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    status: Option<Element>,
    last_status: String,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement, status: Option<Element>) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("get_context failed: {e:?}"))?
            .ok_or_else(|| "canvas has no 2d context".to_string())?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "2d context has unexpected type".to_string())?;
        Ok(Self {
            ctx,
            status,
            last_status: String::new(),
        })
    }

    fn draw(&self, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match *cmd {
                DrawCmd::Clear { width, height } => self.ctx.clear_rect(0.0, 0.0, width, height),
                DrawCmd::FillRect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    self.ctx.set_fill_style_str(color);
                    self.ctx.fill_rect(x, y, width, height);
                },
            }
        }
    }

    fn update_status(&mut self, game: &CoinPlatformer) {
        let line = game.status_line();
        if line == self.last_status {
            return;
        }
        if let Some(el) = &self.status {
            el.set_text_content(Some(&line));
        }
        self.last_status = line;
    }
}

impl FrameRenderer<CoinPlatformer> for CanvasRenderer {
    fn render(&mut self, game: &CoinPlatformer, events: &[GameEvent]) {
        self.draw(&build_draw_list(game));
        // Won repeats every tick; only touch the DOM when the text changes.
        if self.last_status.is_empty() || !events.is_empty() {
            self.update_status(game);
        }
    }
}
