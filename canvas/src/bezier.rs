//! Cubic Bezier evaluation.

#[cfg(test)]
#[path = "bezier_test.rs"]
mod bezier_test;

use crate::math::Vec2;

/// A cubic Bezier from `p0` to `p3` shaped by `p1` and `p2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    #[must_use]
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Point on the curve at `t` (Bernstein blend). Exact at `t = 0` and `t = 1`.
    #[must_use]
    pub fn position(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Vec2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }

    /// First derivative at `t`. Not normalized; may be zero where control
    /// points coincide.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vec2 {
        let u = 1.0 - t;
        (self.p1 - self.p0).scale(3.0 * u * u)
            + (self.p2 - self.p1).scale(6.0 * u * t)
            + (self.p3 - self.p2).scale(3.0 * t * t)
    }

    /// `segments + 1` points at evenly spaced `t`, from `t = 0` through `t = 1`.
    #[must_use]
    pub fn sample(&self, segments: usize) -> Vec<Vec2> {
        param_steps(segments).map(|t| self.position(t)).collect()
    }

    /// Short line segments centred on the curve and aligned with its
    /// direction, one per sampled `t`. Where the tangent vanishes the segment
    /// degenerates to a point.
    #[must_use]
    pub fn tangent_segments(&self, segments: usize, half_len: f64) -> Vec<(Vec2, Vec2)> {
        param_steps(segments)
            .map(|t| {
                let p = self.position(t);
                let dir = self.tangent(t).normalize().scale(half_len);
                (p - dir, p + dir)
            })
            .collect()
    }
}

#[allow(clippy::cast_precision_loss)]
fn param_steps(segments: usize) -> impl Iterator<Item = f64> {
    let n = segments.max(1);
    (0..=n).map(move |i| i as f64 / n as f64)
}
