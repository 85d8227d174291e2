//! Test doubles for the drawing surface and text overlay.

use std::cell::RefCell;

use crate::camera::Viewport;
use crate::error::CanvasError;
use crate::math::Vec2;
use crate::render::{Overlay, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Clear(Viewport),
    Save,
    Restore,
    Translate(f64, f64),
    Scale(f64, f64),
    Stroke { points: Vec<Vec2>, color: String, width: f64 },
    Circle { center: Vec2, radius: f64, color: String },
    Text { text: String, at: Vec2, color: String, font: String },
}

/// Records every call; optionally fails the first call of a given kind.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: RefCell<Vec<Call>>,
    pub fail_on: Option<&'static str>,
}

impl RecordingSurface {
    pub fn failing_on(kind: &'static str) -> Self {
        Self { fail_on: Some(kind), ..Default::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, kind: &'static str, call: Call) -> Result<(), CanvasError> {
        self.calls.borrow_mut().push(call);
        if self.fail_on == Some(kind) {
            return Err(CanvasError::Js(format!("{kind} failed")));
        }
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn clear(&self, viewport: Viewport) -> Result<(), CanvasError> {
        self.record("clear", Call::Clear(viewport))
    }

    fn save(&self) {
        self.calls.borrow_mut().push(Call::Save);
    }

    fn restore(&self) {
        self.calls.borrow_mut().push(Call::Restore);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), CanvasError> {
        self.record("translate", Call::Translate(x, y))
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), CanvasError> {
        self.record("scale", Call::Scale(x, y))
    }

    fn stroke_polyline(&self, points: &[Vec2], color: &str, width: f64) -> Result<(), CanvasError> {
        self.record("stroke", Call::Stroke { points: points.to_vec(), color: color.into(), width })
    }

    fn fill_circle(&self, center: Vec2, radius: f64, color: &str) -> Result<(), CanvasError> {
        self.record("circle", Call::Circle { center, radius, color: color.into() })
    }

    fn fill_text(&self, text: &str, at: Vec2, color: &str, font: &str) -> Result<(), CanvasError> {
        self.record("text", Call::Text { text: text.into(), at, color: color.into(), font: font.into() })
    }
}

#[derive(Debug, Default)]
pub struct RecordingOverlay {
    pub fps_visible: Option<bool>,
    pub fps_text: Option<String>,
    pub coords_visible: Option<bool>,
    pub coords_text: Option<Vec<String>>,
    pub fps_writes: usize,
}

impl Overlay for RecordingOverlay {
    fn set_fps_visible(&mut self, visible: bool) {
        self.fps_visible = Some(visible);
    }

    fn set_fps_text(&mut self, text: &str) {
        self.fps_writes += 1;
        self.fps_text = Some(text.to_owned());
    }

    fn set_coords_visible(&mut self, visible: bool) {
        self.coords_visible = Some(visible);
    }

    fn set_coords_text(&mut self, lines: &[String]) {
        self.coords_text = Some(lines.to_vec());
    }
}
