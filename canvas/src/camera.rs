#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{ZOOM_MAX, ZOOM_MIN};
use crate::math::Vec2;

/// Canvas size in pixels. Never smaller than 1x1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1.0, height: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport from raw element dimensions, flooring to whole pixels.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width: floor_at_least_one(width), height: floor_at_least_one(height) }
    }

    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    #[must_use]
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }
}

fn floor_at_least_one(v: f64) -> f64 {
    if v.is_finite() { v.floor().max(1.0) } else { 1.0 }
}

/// Axis-aligned rectangle in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Move every edge inward by `margin`.
    #[must_use]
    pub fn shrink(&self, margin: f64) -> Self {
        Self {
            min_x: self.min_x + margin,
            min_y: self.min_y + margin,
            max_x: self.max_x - margin,
            max_y: self.max_y - margin,
        }
    }

    /// Clamp `p` into the rectangle, component-wise.
    ///
    /// An axis whose min exceeds its max collapses to the midpoint of the two.
    #[must_use]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(clamp_axis(p.x, self.min_x, self.max_x), clamp_axis(p.y, self.min_y, self.max_y))
    }
}

fn clamp_axis(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        return f64::midpoint(lo, hi);
    }
    v.clamp(lo, hi)
}

/// View state for pan/zoom about the canvas center.
///
/// `pan_x` / `pan_y` are in screen pixels.
/// `zoom` is a scale factor (1.0 = no zoom), kept within [`ZOOM_MIN`, `ZOOM_MAX`].
///
/// The renderer maps world to screen as: translate to `center + pan`, scale by
/// `zoom`, translate back by `-center`. The conversions here are the exact
/// algebraic counterparts of that sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (canvas pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, viewport: Viewport, screen: Vec2) -> Vec2 {
        let c = viewport.center();
        Vec2 {
            x: (screen.x - c.x - self.pan_x) / self.zoom + c.x,
            y: (screen.y - c.y - self.pan_y) / self.zoom + c.y,
        }
    }

    /// Convert a world-space point to screen coordinates (canvas pixels).
    #[must_use]
    pub fn world_to_screen(&self, viewport: Viewport, world: Vec2) -> Vec2 {
        let c = viewport.center();
        Vec2 {
            x: (world.x - c.x) * self.zoom + c.x + self.pan_x,
            y: (world.y - c.y) * self.zoom + c.y + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// The world-space rectangle currently on screen.
    #[must_use]
    pub fn visible_world_bounds(&self, viewport: Viewport) -> Bounds {
        let tl = self.screen_to_world(viewport, Vec2::ZERO);
        let br = self.screen_to_world(viewport, Vec2::new(viewport.width, viewport.height));
        Bounds { min_x: tl.x, min_y: tl.y, max_x: br.x, max_y: br.y }
    }

    /// Set the zoom factor, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Multiply the zoom factor, clamped to the allowed range.
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    pub fn pan_to(&mut self, pan_x: f64, pan_y: f64) {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
    }

    /// Back to identity: zoom 1, no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
