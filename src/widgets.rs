//! Page controls: sliders, checkboxes, and reset buttons.
//!
//! Every control is optional. A page without, say, the damping slider still
//! runs with the configured value.

use canvas::config::CurveConfig;
use canvas::controls::DisplayToggles;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::dom::optional_element;

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

pub const ZOOM_SLIDER_ID: &str = "zoomSlider";
pub const STIFFNESS_SLIDER_ID: &str = "springSlider";
pub const DAMPING_SLIDER_ID: &str = "dampingSlider";
pub const SHOW_TANGENTS_ID: &str = "showTangents";
pub const SHOW_POINTS_ID: &str = "showPoints";
pub const SHOW_FPS_ID: &str = "showFPS";
pub const SHOW_COORDS_ID: &str = "showCoords";
pub const RESET_ID: &str = "resetBtn";
pub const RESET_VIEW_ID: &str = "resetViewBtn";

/// Which display flag a checkbox drives.
#[derive(Debug, Clone, Copy)]
pub enum Toggle {
    Tangents,
    Points,
    Fps,
    Coords,
}

impl Toggle {
    pub const ALL: [Toggle; 4] = [Toggle::Tangents, Toggle::Points, Toggle::Fps, Toggle::Coords];

    pub fn element_id(self) -> &'static str {
        match self {
            Toggle::Tangents => SHOW_TANGENTS_ID,
            Toggle::Points => SHOW_POINTS_ID,
            Toggle::Fps => SHOW_FPS_ID,
            Toggle::Coords => SHOW_COORDS_ID,
        }
    }

    pub fn get(self, toggles: DisplayToggles) -> bool {
        match self {
            Toggle::Tangents => toggles.tangents,
            Toggle::Points => toggles.points,
            Toggle::Fps => toggles.fps,
            Toggle::Coords => toggles.coords,
        }
    }

    pub fn set(self, toggles: &mut DisplayToggles, on: bool) {
        let flag = match self {
            Toggle::Tangents => &mut toggles.tangents,
            Toggle::Points => &mut toggles.points,
            Toggle::Fps => &mut toggles.fps,
            Toggle::Coords => &mut toggles.coords,
        };
        *flag = on;
    }
}

pub struct Widgets {
    pub zoom: Option<HtmlInputElement>,
    pub stiffness: Option<HtmlInputElement>,
    pub damping: Option<HtmlInputElement>,
    pub checkboxes: Vec<(Toggle, HtmlInputElement)>,
    pub reset: Option<HtmlElement>,
    pub reset_view: Option<HtmlElement>,
}

impl Widgets {
    pub fn find(document: &Document) -> Self {
        Self {
            zoom: optional_element(document, ZOOM_SLIDER_ID),
            stiffness: optional_element(document, STIFFNESS_SLIDER_ID),
            damping: optional_element(document, DAMPING_SLIDER_ID),
            checkboxes: Toggle::ALL
                .into_iter()
                .filter_map(|t| optional_element(document, t.element_id()).map(|el| (t, el)))
                .collect(),
            reset: optional_element(document, RESET_ID),
            reset_view: optional_element(document, RESET_VIEW_ID),
        }
    }

    /// Write the starting values into the controls.
    pub fn seed(&self, config: &CurveConfig, zoom: f64) {
        self.sync_zoom(zoom);
        if let Some(slider) = &self.stiffness {
            slider.set_value_as_number(config.stiffness);
        }
        if let Some(slider) = &self.damping {
            slider.set_value_as_number(config.damping);
        }
        let toggles = config.toggles();
        for (toggle, checkbox) in &self.checkboxes {
            checkbox.set_checked(toggle.get(toggles));
        }
    }

    pub fn sync_zoom(&self, zoom: f64) {
        if let Some(slider) = &self.zoom {
            slider.set_value_as_number(zoom);
        }
    }
}
