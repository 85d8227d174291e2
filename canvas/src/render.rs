//! Rendering: draws the curve scene onto a 2D drawing surface.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`],
//! and only through the [`Surface`] impl below. Scene drawing receives
//! read-only views of the control points, camera, and toggles and produces
//! pixels; it does not mutate any application state.
//!
//! All fallible surface calls propagate errors via `Result<(), CanvasError>`.
//! The caller ([`crate::frame::RenderLoop::frame`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::camera::{Camera, Viewport};
use crate::consts::{
    ANCHOR_COLOR, CONTROL_COLOR, CONTROL_RADIUS_SCALE, CURVE_COLOR, CURVE_SEGMENTS, LABEL_COLOR, LABEL_OFFSET_X,
    LABEL_OFFSET_Y, TANGENT_COLOR, TANGENT_SEGMENTS,
};
use crate::controls::{ControlPointSet, DisplayToggles};
use crate::error::CanvasError;
use crate::math::Vec2;

/// The drawing primitives the scene needs.
///
/// Fallible methods return [`CanvasError::Js`] when the underlying canvas
/// call throws.
pub trait Surface {
    /// Clear the whole canvas in device space.
    ///
    /// # Errors
    ///
    /// Fails if the transform cannot be reset.
    fn clear(&self, viewport: Viewport) -> Result<(), CanvasError>;
    /// Push the current transform and style state.
    fn save(&self);
    /// Pop the state pushed by the matching [`Surface::save`].
    fn restore(&self);
    /// # Errors
    ///
    /// Fails if the canvas rejects the transform.
    fn translate(&self, x: f64, y: f64) -> Result<(), CanvasError>;
    /// # Errors
    ///
    /// Fails if the canvas rejects the transform.
    fn scale(&self, x: f64, y: f64) -> Result<(), CanvasError>;
    /// Stroke an open polyline through `points`.
    ///
    /// # Errors
    ///
    /// Fails if the path cannot be built or stroked.
    fn stroke_polyline(&self, points: &[Vec2], color: &str, width: f64) -> Result<(), CanvasError>;
    /// # Errors
    ///
    /// Fails if the arc cannot be added to the path.
    fn fill_circle(&self, center: Vec2, radius: f64, color: &str) -> Result<(), CanvasError>;
    /// Fill `text` with its top-left corner at `at`.
    ///
    /// # Errors
    ///
    /// Fails if the canvas cannot draw the text.
    fn fill_text(&self, text: &str, at: Vec2, color: &str, font: &str) -> Result<(), CanvasError>;
}

/// Text outputs that live outside the canvas.
pub trait Overlay {
    fn set_fps_visible(&mut self, visible: bool);
    fn set_fps_text(&mut self, text: &str);
    fn set_coords_visible(&mut self, visible: bool);
    fn set_coords_text(&mut self, lines: &[String]);
}

impl Surface for CanvasRenderingContext2d {
    fn clear(&self, viewport: Viewport) -> Result<(), CanvasError> {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.clear_rect(0.0, 0.0, viewport.width, viewport.height);
        Ok(())
    }

    fn save(&self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&self, x: f64, y: f64) -> Result<(), CanvasError> {
        CanvasRenderingContext2d::translate(self, x, y)?;
        Ok(())
    }

    fn scale(&self, x: f64, y: f64) -> Result<(), CanvasError> {
        CanvasRenderingContext2d::scale(self, x, y)?;
        Ok(())
    }

    fn stroke_polyline(&self, points: &[Vec2], color: &str, width: f64) -> Result<(), CanvasError> {
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(first.x, first.y);
        for p in rest {
            self.line_to(p.x, p.y);
        }
        self.stroke();
        Ok(())
    }

    fn fill_circle(&self, center: Vec2, radius: f64, color: &str) -> Result<(), CanvasError> {
        self.set_fill_style_str(color);
        self.begin_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
        self.fill();
        Ok(())
    }

    fn fill_text(&self, text: &str, at: Vec2, color: &str, font: &str) -> Result<(), CanvasError> {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_baseline("top");
        CanvasRenderingContext2d::fill_text(self, text, at.x, at.y)?;
        Ok(())
    }
}

/// Size-dependent stroke widths and radii, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneMetrics {
    pub curve_width: f64,
    pub tangent_width: f64,
    pub tangent_half_len: f64,
    pub anchor_radius: f64,
    pub control_radius: f64,
}

impl SceneMetrics {
    #[must_use]
    pub fn for_viewport(viewport: Viewport) -> Self {
        let min_side = viewport.min_side();
        let anchor_radius = (min_side * 0.01).max(4.0);
        Self {
            curve_width: (min_side * 0.004).max(2.0),
            tangent_width: (min_side * 0.003).max(1.5),
            tangent_half_len: (viewport.width * 0.03).max(15.0),
            anchor_radius,
            control_radius: anchor_radius * CONTROL_RADIUS_SCALE,
        }
    }
}

/// Draw the full scene: curve, then optional tangents, points, and labels.
///
/// The view transform (translate to center + pan, scale by zoom, translate
/// back) is scoped to the drawing calls and undone before returning, even
/// when a drawing call fails.
///
/// # Errors
///
/// Returns `Err` if any surface call fails.
pub fn draw_scene<S: Surface + ?Sized>(
    surface: &S,
    viewport: Viewport,
    camera: &Camera,
    points: &ControlPointSet,
    toggles: DisplayToggles,
) -> Result<(), CanvasError> {
    surface.clear(viewport)?;

    surface.save();
    let result = apply_view_transform(surface, viewport, camera)
        .and_then(|()| draw_layers(surface, viewport, camera, points, toggles));
    surface.restore();
    result
}

fn apply_view_transform<S: Surface + ?Sized>(
    surface: &S,
    viewport: Viewport,
    camera: &Camera,
) -> Result<(), CanvasError> {
    let c = viewport.center();
    surface.translate(c.x + camera.pan_x, c.y + camera.pan_y)?;
    surface.scale(camera.zoom, camera.zoom)?;
    surface.translate(-c.x, -c.y)?;
    Ok(())
}

fn draw_layers<S: Surface + ?Sized>(
    surface: &S,
    viewport: Viewport,
    camera: &Camera,
    points: &ControlPointSet,
    toggles: DisplayToggles,
) -> Result<(), CanvasError> {
    let metrics = SceneMetrics::for_viewport(viewport);
    let curve = points.curve();

    surface.stroke_polyline(&curve.sample(CURVE_SEGMENTS), CURVE_COLOR, metrics.curve_width)?;

    if toggles.tangents {
        for (a, b) in curve.tangent_segments(TANGENT_SEGMENTS, metrics.tangent_half_len) {
            surface.stroke_polyline(&[a, b], TANGENT_COLOR, metrics.tangent_width)?;
        }
    }

    if toggles.points {
        surface.fill_circle(points.p0, metrics.anchor_radius, ANCHOR_COLOR)?;
        surface.fill_circle(points.p3, metrics.anchor_radius, ANCHOR_COLOR)?;
        surface.fill_circle(points.p1.position, metrics.control_radius, CONTROL_COLOR)?;
        surface.fill_circle(points.p2.position, metrics.control_radius, CONTROL_COLOR)?;
    }

    if toggles.coords {
        let font = label_font(camera.zoom);
        for (name, p) in points.labelled() {
            let at = p + Vec2::new(LABEL_OFFSET_X, LABEL_OFFSET_Y);
            surface.fill_text(&point_label(name, p), at, LABEL_COLOR, &font)?;
        }
    }

    Ok(())
}

// =============================================================
// Text formatting
// =============================================================

/// `P1(320,240)`: name plus rounded coordinates.
#[must_use]
pub fn point_label(name: &str, p: Vec2) -> String {
    format!("{name}({},{})", round_px(p.x), round_px(p.y))
}

/// Label font, growing with zoom but never below 10px.
#[must_use]
pub fn label_font(zoom: f64) -> String {
    format!("{}px monospace", (12.0 * zoom).max(10.0))
}

/// `FPS: 60`.
#[must_use]
pub fn fps_text(fps: f64) -> String {
    format!("FPS: {}", round_px(fps))
}

/// Coordinates panel: pointer (screen space) and both control positions.
#[must_use]
pub fn coords_lines(pointer: Vec2, points: &ControlPointSet) -> Vec<String> {
    let pair = |p: Vec2| format!("({}, {})", round_px(p.x), round_px(p.y));
    vec![
        format!("Mouse: {}", pair(pointer)),
        format!("P1: {}", pair(points.p1.position)),
        format!("P2: {}", pair(points.p2.position)),
    ]
}

/// Round for display; never prints `-0`.
fn round_px(v: f64) -> f64 {
    v.round() + 0.0
}
