use tilehop_core::frame::{FrameDriver, FrameRenderer};
use tilehop_core::game_trait::GameEvent;
use tilehop_core::input::{InputState, KeyBindings};
use tilehop_platformer::CoinPlatformer;
use tilehop_platformer::config::PlatformerConfig;

use crate::diag::console_warn;

/// `config/tilehop.toml`, baked in at build time. The browser has no
/// filesystem to read it from.
const EMBEDDED_CONFIG: &str = include_str!("../../../config/tilehop.toml");

/// Config for the browser host: the embedded TOML, or defaults if it fails to
/// parse or validate.
pub fn host_config() -> PlatformerConfig {
    match PlatformerConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(cfg) => cfg,
        Err(e) => {
            console_warn!("Embedded config rejected: {e}, using defaults");
            PlatformerConfig::default()
        },
    }
}

/// Browser-side application: the frame driver plus the live keyboard state
/// that key listeners write into between frames.
pub struct App<R> {
    driver: FrameDriver<CoinPlatformer, R>,
    pub input: InputState,
}

impl<R: FrameRenderer<CoinPlatformer>> App<R> {
    pub fn new(game: CoinPlatformer, renderer: R) -> Self {
        Self {
            driver: FrameDriver::new(game, renderer),
            input: InputState::new(),
        }
    }

    /// One display frame: snapshot input once, then tick and render.
    pub fn frame(&mut self) -> Vec<GameEvent> {
        let snapshot = self.input.snapshot(self.driver.game().bindings());
        self.driver.step(&snapshot)
    }

    pub fn bindings(&self) -> &KeyBindings {
        self.driver.game().bindings()
    }

    pub fn game(&self) -> &CoinPlatformer {
        self.driver.game()
    }

    pub fn frames(&self) -> u64 {
        self.driver.frame()
    }
}

/// App shared between the frame loop and DOM event listeners.
#[cfg(target_family = "wasm")]
pub type SharedApp = std::rc::Rc<std::cell::RefCell<App<crate::renderer::CanvasRenderer>>>;

#[cfg(target_family = "wasm")]
pub fn run() {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::HtmlCanvasElement;

    use tilehop_core::game_trait::TickGame;

    use crate::diag::console_log;
    use crate::renderer::CanvasRenderer;

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let game = match CoinPlatformer::new(host_config()) {
        Ok(g) => g,
        Err(e) => {
            console_warn!("Game setup failed: {e}");
            return;
        },
    };

    let Some(canvas) = document
        .get_element_by_id(crate::CANVAS_ID)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        console_warn!("No <canvas id=\"{}\"> found", crate::CANVAS_ID);
        return;
    };

    document.set_title(&game.metadata().name);

    let tile = game.physics().tile_size;
    canvas.set_width(game.level().pixel_width(tile) as u32);
    canvas.set_height(game.level().pixel_height(tile) as u32);

    let status = document.get_element_by_id(crate::STATUS_ID);
    let renderer = match CanvasRenderer::new(&canvas, status) {
        Ok(r) => r,
        Err(e) => {
            console_warn!("Renderer setup failed: {e}");
            return;
        },
    };

    let app = Rc::new(RefCell::new(App::new(game, renderer)));
    crate::bridge::attach_input_listeners(&app);

    request_animation_frame(app);
    console_log!("Tilehop running");
}

#[cfg(target_family = "wasm")]
fn request_animation_frame(app: SharedApp) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        game_loop(app);
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

#[cfg(target_family = "wasm")]
fn game_loop(app: SharedApp) {
    app.borrow_mut().frame();
    request_animation_frame(app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilehop_core::frame::NullRenderer;

    fn app() -> App<NullRenderer> {
        App::new(
            CoinPlatformer::new(PlatformerConfig::default()).unwrap(),
            NullRenderer,
        )
    }

    #[test]
    fn held_key_moves_player_each_frame() {
        let mut app = app();
        app.input.on_key_down("ArrowRight".into());
        app.frame();
        app.frame();
        assert_eq!(app.game().state().player.x, 56.0);
        assert_eq!(app.frames(), 2);
    }

    #[test]
    fn release_between_frames_stops_movement() {
        let mut app = app();
        app.input.on_key_down("ArrowRight".into());
        app.frame();
        app.input.on_key_up("ArrowRight");
        app.frame();
        assert_eq!(app.game().state().player.x, 53.0);
    }

    #[test]
    fn both_directions_held_moves_left() {
        let mut app = app();
        app.input.on_key_down("ArrowRight".into());
        app.input.on_key_down("ArrowLeft".into());
        app.frame();
        assert_eq!(app.game().state().player.x, 47.0);
    }

    #[test]
    fn embedded_config_parses_to_defaults() {
        assert!(PlatformerConfig::from_toml_str(EMBEDDED_CONFIG).is_ok());
        assert_eq!(host_config(), PlatformerConfig::default());
    }

    #[test]
    fn game_keys_are_bound() {
        let app = app();
        assert!(app.bindings().is_bound("Space"));
        assert!(!app.bindings().is_bound("Escape"));
    }
}
