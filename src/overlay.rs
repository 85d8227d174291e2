//! FPS and coordinates panels as DOM elements.
//!
//! The frame loop pushes text every frame; writes are skipped when nothing
//! changed so the DOM is only touched on real updates.

use canvas::render::Overlay;
use web_sys::{Document, HtmlElement};

use crate::dom::optional_element;
use crate::mapping::display_value;

pub const FPS_ID: &str = "fpsDisplay";
pub const COORDS_ID: &str = "coordsDisplay";

struct Panel {
    el: HtmlElement,
    visible: Option<bool>,
    text: String,
}

impl Panel {
    fn new(el: HtmlElement) -> Self {
        Self { el, visible: None, text: String::new() }
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == Some(visible) {
            return;
        }
        self.visible = Some(visible);
        if let Err(e) = self.el.style().set_property("display", display_value(visible)) {
            log::warn!("overlay display update failed: {e:?}");
        }
    }

    fn set_text(&mut self, text: String) {
        if self.text == text {
            return;
        }
        self.el.set_inner_text(&text);
        self.text = text;
    }
}

/// Overlay backed by `#fpsDisplay` and `#coordsDisplay`. Either may be absent.
pub struct DomOverlay {
    fps: Option<Panel>,
    coords: Option<Panel>,
}

impl DomOverlay {
    pub fn find(document: &Document) -> Self {
        Self {
            fps: optional_element::<HtmlElement>(document, FPS_ID).map(Panel::new),
            coords: optional_element::<HtmlElement>(document, COORDS_ID).map(Panel::new),
        }
    }
}

impl Overlay for DomOverlay {
    fn set_fps_visible(&mut self, visible: bool) {
        if let Some(panel) = self.fps.as_mut() {
            panel.set_visible(visible);
        }
    }

    fn set_fps_text(&mut self, text: &str) {
        if let Some(panel) = self.fps.as_mut() {
            panel.set_text(text.to_owned());
        }
    }

    fn set_coords_visible(&mut self, visible: bool) {
        if let Some(panel) = self.coords.as_mut() {
            panel.set_visible(visible);
        }
    }

    fn set_coords_text(&mut self, lines: &[String]) {
        if let Some(panel) = self.coords.as_mut() {
            panel.set_text(lines.join("\n"));
        }
    }
}
