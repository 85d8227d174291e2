//! Browser entry point for the spring-driven Bezier curve page.
//!
//! Finds the canvas and controls, builds the [`canvas::engine::Engine`],
//! wires DOM events into it, and spawns the frame loop on the
//! `requestAnimationFrame` scheduler. All behaviour lives in the `canvas`
//! crate; this crate is only glue.

pub mod app;
pub mod dom;
pub mod events;
pub mod mapping;
pub mod overlay;
pub mod scheduler;
pub mod widgets;

use canvas::config::CurveConfig;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::App;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = dom::window()?;
    let document = dom::document(&window)?;

    // The log level comes from the configuration, so parse it before the
    // logger exists and report any problem afterwards.
    let loaded = dom::read_config(&document);
    let config = loaded.as_ref().map_or_else(|_| CurveConfig::default(), Clone::clone);
    if console_log::init_with_level(config.log_level()).is_err() {
        log::debug!("logger already installed");
    }
    if let Err(e) = &loaded {
        log::warn!("{e}; using default configuration");
    }
    log::info!("springcurve starting");

    let app = match App::mount(&window, &document, &config) {
        Ok(app) => app,
        Err(e) => {
            log::error!("mount failed: {e}");
            return Err(e.into());
        }
    };
    spawn_local(app.run(window));
    Ok(())
}
