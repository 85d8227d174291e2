//! Control-point targeting from the pointer position.
//!
//! The controls sit symmetrically around the cursor: `p1` up-left and `p2`
//! down-right by a fixed on-screen offset. Both are kept inside the visible
//! area, at least the edge margin away from every side.

#[cfg(test)]
#[path = "interaction_test.rs"]
mod interaction_test;

use crate::camera::{Bounds, Camera, Viewport};
use crate::consts::{EDGE_MARGIN_PX, TARGET_OFFSET_MIN_PX, TARGET_OFFSET_X_FRAC, TARGET_OFFSET_Y_FRAC};
use crate::math::Vec2;

/// Cursor-to-control offset in world units.
///
/// On screen this is `max(20, 8% of width)` by `max(20, 10% of height)`
/// pixels regardless of zoom.
#[must_use]
pub fn target_offset(viewport: Viewport, camera: &Camera) -> Vec2 {
    let px = Vec2::new(
        TARGET_OFFSET_MIN_PX.max(viewport.width * TARGET_OFFSET_X_FRAC),
        TARGET_OFFSET_MIN_PX.max(viewport.height * TARGET_OFFSET_Y_FRAC),
    );
    Vec2::new(camera.screen_dist_to_world(px.x), camera.screen_dist_to_world(px.y))
}

/// World-space rectangle the control targets are clamped into.
#[must_use]
pub fn target_bounds(viewport: Viewport, camera: &Camera) -> Bounds {
    camera
        .visible_world_bounds(viewport)
        .shrink(camera.screen_dist_to_world(EDGE_MARGIN_PX))
}

/// Targets for `(p1, p2)` around `world`, clamped into `bounds` when given.
#[must_use]
pub fn control_targets(world: Vec2, offset: Vec2, bounds: Option<&Bounds>) -> (Vec2, Vec2) {
    let p1 = world - offset;
    let p2 = world + offset;
    match bounds {
        Some(b) => (b.clamp(p1), b.clamp(p2)),
        None => (p1, p2),
    }
}

/// Convert a screen point to clamped `(p1, p2)` targets.
#[must_use]
pub fn targets_for_screen_point(screen: Vec2, viewport: Viewport, camera: &Camera) -> (Vec2, Vec2) {
    let world = camera.screen_to_world(viewport, screen);
    let bounds = target_bounds(viewport, camera);
    control_targets(world, target_offset(viewport, camera), Some(&bounds))
}
