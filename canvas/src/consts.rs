//! Shared numeric constants for the canvas crate.

// ── View ────────────────────────────────────────────────────────

/// Smallest allowed zoom factor.
pub const ZOOM_MIN: f64 = 0.5;

/// Largest allowed zoom factor.
pub const ZOOM_MAX: f64 = 10.0;

/// Zoom multiplier applied per wheel-up event.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom multiplier applied per wheel-down event.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// ── Frame loop ──────────────────────────────────────────────────

/// Upper bound on the integration step, in seconds.
pub const MAX_FRAME_DT: f64 = 0.03;

/// Weight kept from the previous FPS estimate on each frame.
pub const FPS_SMOOTHING: f64 = 0.9;

/// FPS estimate before the first frame is measured.
pub const FPS_INITIAL: f64 = 60.0;

/// Distance to target and speed, in world units, below which a control
/// point counts as at rest.
pub const SETTLE_THRESHOLD: f64 = 0.01;

// ── Control-point targeting (screen pixels unless noted) ───────

/// Minimum on-screen offset between the cursor and each control point.
pub const TARGET_OFFSET_MIN_PX: f64 = 20.0;

/// Horizontal offset as a fraction of canvas width.
pub const TARGET_OFFSET_X_FRAC: f64 = 0.08;

/// Vertical offset as a fraction of canvas height.
pub const TARGET_OFFSET_Y_FRAC: f64 = 0.10;

/// Distance control points keep from the viewport edge.
pub const EDGE_MARGIN_PX: f64 = 30.0;

// ── Sampling ────────────────────────────────────────────────────

/// Segments used to draw the curve body (t step 0.01).
pub const CURVE_SEGMENTS: usize = 100;

/// Segments between tangent markers (t step 0.05).
pub const TANGENT_SEGMENTS: usize = 20;

// ── Styling ─────────────────────────────────────────────────────

pub const CURVE_COLOR: &str = "#ffffff";
pub const TANGENT_COLOR: &str = "#facc15";
pub const ANCHOR_COLOR: &str = "#22d3ee";
pub const CONTROL_COLOR: &str = "#fb923c";
pub const LABEL_COLOR: &str = "#0f0";

/// Control points are drawn this much larger than anchors.
pub const CONTROL_RADIUS_SCALE: f64 = 1.3;

/// Label placement relative to its point, in world units.
pub const LABEL_OFFSET_X: f64 = 15.0;
pub const LABEL_OFFSET_Y: f64 = -20.0;
