//! The four curve points and the display toggles.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use crate::bezier::CubicBezier;
use crate::camera::Viewport;
use crate::consts::SETTLE_THRESHOLD;
use crate::math::Vec2;
use crate::spring::{SpringParams, SpringPoint};

/// Fixed anchors `p0` / `p3` and spring-driven controls `p1` / `p2`.
///
/// Anchors move only when the set is rebuilt (reset or resize). Control
/// targets are written by the input handlers; the frame loop only integrates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPointSet {
    pub p0: Vec2,
    pub p1: SpringPoint,
    pub p2: SpringPoint,
    pub p3: Vec2,
}

impl ControlPointSet {
    /// Default layout relative to the canvas: anchors at 15% / 85% width on
    /// the horizontal midline, controls at (40%, 40%) and (60%, 60%).
    #[must_use]
    pub fn default_layout(viewport: Viewport) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        Self {
            p0: Vec2::new(w * 0.15, h * 0.5),
            p1: SpringPoint::new(w * 0.4, h * 0.4),
            p2: SpringPoint::new(w * 0.6, h * 0.6),
            p3: Vec2::new(w * 0.85, h * 0.5),
        }
    }

    /// Point both controls at new targets.
    pub fn retarget(&mut self, p1: Vec2, p2: Vec2) {
        self.p1.set_target(p1);
        self.p2.set_target(p2);
    }

    /// Integrate both controls by one step.
    pub fn step(&mut self, dt: f64, params: SpringParams) {
        self.p1.step(dt, params);
        self.p2.step(dt, params);
    }

    /// Both controls have come to rest on their targets.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.p1.is_settled(SETTLE_THRESHOLD) && self.p2.is_settled(SETTLE_THRESHOLD)
    }

    /// The curve as currently displayed.
    #[must_use]
    pub fn curve(&self) -> CubicBezier {
        CubicBezier::new(self.p0, self.p1.position, self.p2.position, self.p3)
    }

    /// Labelled current positions, in drawing order.
    #[must_use]
    pub fn labelled(&self) -> [(&'static str, Vec2); 4] {
        [("P0", self.p0), ("P1", self.p1.position), ("P2", self.p2.position), ("P3", self.p3)]
    }
}

/// Independent visibility flags for the optional layers and overlays.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayToggles {
    pub tangents: bool,
    pub points: bool,
    pub fps: bool,
    pub coords: bool,
}

impl Default for DisplayToggles {
    fn default() -> Self {
        Self { tangents: false, points: true, fps: true, coords: false }
    }
}
