//! Damped spring driving a single control point toward its target.
//!
//! Integration is semi-implicit Euler with no sub-stepping: velocity is
//! advanced first and the new velocity moves the position. The caller clamps
//! `dt` (see [`crate::consts::MAX_FRAME_DT`]) to keep the step stable.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use crate::math::Vec2;

/// Spring constant and damping coefficient shared by every control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub stiffness: f64,
    pub damping: f64,
}

impl SpringParams {
    #[must_use]
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self { stiffness, damping }
    }

    /// Whether the damping is at or above critical (`c >= 2 * sqrt(k)`), so
    /// the point approaches its target without oscillating.
    #[must_use]
    pub fn is_overdamped(&self) -> bool {
        self.damping >= 2.0 * self.stiffness.sqrt()
    }
}

/// A point pulled toward `target` by a spring and slowed by damping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringPoint {
    pub position: Vec2,
    pub velocity: Vec2,
    pub target: Vec2,
}

impl SpringPoint {
    /// A point at rest on its own target.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        let at = Vec2::new(x, y);
        Self { position: at, velocity: Vec2::ZERO, target: at }
    }

    /// Advance the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f64, stiffness: f64, damping: f64) {
        let displacement = self.position - self.target;
        let spring_force = displacement.scale(-stiffness);
        let damping_force = self.velocity.scale(-damping);
        let acceleration = spring_force + damping_force;

        self.velocity = self.velocity + acceleration.scale(dt);
        self.position = self.position + self.velocity.scale(dt);
    }

    /// Advance using a shared parameter set.
    pub fn step(&mut self, dt: f64, params: SpringParams) {
        self.update(dt, params.stiffness, params.damping);
    }

    /// Snap to `(x, y)` and come to rest there.
    pub fn reset(&mut self, x: f64, y: f64) {
        let at = Vec2::new(x, y);
        self.position = at;
        self.target = at;
        self.velocity = Vec2::ZERO;
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// Both the distance to target and the speed are below `threshold`.
    #[must_use]
    pub fn is_settled(&self, threshold: f64) -> bool {
        (self.position - self.target).length() < threshold && self.velocity.length() < threshold
    }
}
