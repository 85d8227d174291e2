//! Pure conversions between DOM values and engine types.

#[cfg(test)]
#[path = "mapping_test.rs"]
mod mapping_test;

use canvas::config::CurveConfig;
use canvas::error::CanvasError;
use canvas::math::Vec2;

/// Event offset coordinates as a screen-space point.
pub fn offset_point(offset_x: i32, offset_y: i32) -> Vec2 {
    Vec2::new(f64::from(offset_x), f64::from(offset_y))
}

/// CSS `display` value for an overlay element.
pub fn display_value(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// A numeric input's value, or `None` when it is empty or not a number.
pub fn finite_value(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Parse the inline configuration block. A missing or blank block is the
/// default configuration.
///
/// # Errors
///
/// Returns [`CanvasError::Config`] when the block is present but malformed.
pub fn config_from_text(text: Option<&str>) -> Result<CurveConfig, CanvasError> {
    match text.map(str::trim) {
        None | Some("") => Ok(CurveConfig::default()),
        Some(json) => CurveConfig::from_json(json),
    }
}
