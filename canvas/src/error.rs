//! Errors raised at the browser and configuration edges.
//!
//! The simulation itself never fails; these only surface from drawing calls,
//! DOM lookups in the host, and configuration parsing.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    /// A browser API call returned an exception.
    #[error("browser call failed: {0}")]
    Js(String),
    /// A required DOM element id was not found.
    #[error("missing element: #{0}")]
    MissingElement(String),
    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<CanvasError> for JsValue {
    fn from(err: CanvasError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
