//! DOM lookups and canvas setup.

use canvas::camera::Viewport;
use canvas::config::CurveConfig;
use canvas::error::CanvasError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use crate::mapping::config_from_text;

pub const CANVAS_ID: &str = "bezierCanvas";
pub const CONFIG_ID: &str = "curveConfig";

pub fn window() -> Result<Window, CanvasError> {
    web_sys::window().ok_or_else(|| CanvasError::Js("no global window".into()))
}

pub fn document(window: &Window) -> Result<Document, CanvasError> {
    window.document().ok_or_else(|| CanvasError::Js("window has no document".into()))
}

/// Required element `#id`, cast to `T`.
pub fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, CanvasError> {
    let el = document.get_element_by_id(id).ok_or_else(|| CanvasError::MissingElement(id.to_owned()))?;
    el.dyn_into::<T>().map_err(|_| CanvasError::Js(format!("#{id} is not the expected element type")))
}

/// Optional element `#id`; absent or mistyped elements are logged and skipped.
pub fn optional_element<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    match element(document, id) {
        Ok(el) => Some(el),
        Err(e) => {
            log::debug!("{e}; control disabled");
            None
        }
    }
}

/// Read the `<script type="application/json" id="curveConfig">` block.
pub fn read_config(document: &Document) -> Result<CurveConfig, CanvasError> {
    let text = document.get_element_by_id(CONFIG_ID).and_then(|el| el.text_content());
    config_from_text(text.as_deref())
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| CanvasError::Js("2d context unavailable".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|obj| CanvasError::from(JsValue::from(obj)))
}

/// Size the canvas backing store to its parent's box, in whole pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fit_canvas_to_parent(canvas: &HtmlCanvasElement) -> Viewport {
    let rect = match canvas.parent_element() {
        Some(parent) => parent.get_bounding_client_rect(),
        None => canvas.get_bounding_client_rect(),
    };
    let viewport = Viewport::new(rect.width(), rect.height());
    // Viewport sizes are whole numbers >= 1.
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
    viewport
}
