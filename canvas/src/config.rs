//! Start-up configuration.
//!
//! Every field has a default, so an empty object (or no configuration at all)
//! yields a usable setup. Once the page is running the widgets own these
//! values; configuration only seeds them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::controls::DisplayToggles;
use crate::error::CanvasError;
use crate::spring::SpringParams;

pub const DEFAULT_STIFFNESS: f64 = 120.0;
pub const DEFAULT_DAMPING: f64 = 22.0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub show_tangents: bool,
    pub show_points: bool,
    pub show_fps: bool,
    pub show_coords: bool,
    pub log_level: String,
}

impl Default for CurveConfig {
    fn default() -> Self {
        let toggles = DisplayToggles::default();
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            show_tangents: toggles.tangents,
            show_points: toggles.points,
            show_fps: toggles.fps,
            show_coords: toggles.coords,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl CurveConfig {
    /// Parse from JSON text; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] when the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, CanvasError> {
        Ok(serde_json::from_str(text)?)
    }

    #[must_use]
    pub fn spring_params(&self) -> SpringParams {
        SpringParams::new(self.stiffness, self.damping)
    }

    #[must_use]
    pub fn toggles(&self) -> DisplayToggles {
        DisplayToggles {
            tangents: self.show_tangents,
            points: self.show_points,
            fps: self.show_fps,
            coords: self.show_coords,
        }
    }

    /// The configured log level, falling back to `Info` on unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
