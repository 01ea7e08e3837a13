mod app;
mod bridge;
mod diag;
pub mod renderer;
pub mod scene;

pub use app::{App, host_config};

use wasm_bindgen::prelude::*;

/// Id of the `<canvas>` the game draws into.
pub const CANVAS_ID: &str = "gameCanvas";
/// Id of the element that shows the coin status text.
pub const STATUS_ID: &str = "status";

/// WASM entry point.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(target_family = "wasm")]
    {
        console_error_panic_hook::set_once();
        app::run();
    }
}
