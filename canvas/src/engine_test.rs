#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Helpers
// =============================================================

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Vec2, b: Vec2) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn no_modifiers() -> Modifiers {
    Modifiers::default()
}

fn ctrl_modifier() -> Modifiers {
    Modifiers { ctrl: true, ..Default::default() }
}

fn pt(x: f64, y: f64) -> Vec2 {
    Vec2::new(x, y)
}

fn space() -> Key {
    Key("Space".into())
}

fn wheel_down() -> WheelDelta {
    WheelDelta { dx: 0.0, dy: 100.0 }
}

fn wheel_up() -> WheelDelta {
    WheelDelta { dx: 0.0, dy: -100.0 }
}

fn core_800x600() -> EngineCore {
    let mut core = EngineCore::default();
    core.resize(800.0, 600.0);
    core
}

// =============================================================
// Construction and lifecycle
// =============================================================

#[test]
fn new_takes_params_and_toggles_from_config() {
    let config = CurveConfig { stiffness: 50.0, damping: 9.0, show_tangents: true, ..Default::default() };
    let core = EngineCore::new(&config);
    assert_eq!(core.params, SpringParams::new(50.0, 9.0));
    assert!(core.toggles.tangents);
    assert_eq!(core.camera(), Camera::default());
}

#[test]
fn default_layout_after_resize() {
    let core = core_800x600();
    assert_eq!(core.points.p0, pt(120.0, 300.0));
    assert_eq!(core.points.p3, pt(680.0, 300.0));
    assert!(point_approx_eq(core.points.p1.position, pt(320.0, 240.0)));
    assert!(point_approx_eq(core.points.p2.position, pt(480.0, 360.0)));
}

#[test]
fn resize_discards_spring_motion() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(700.0, 500.0), no_modifiers());
    core.step(0.016);
    assert_ne!(core.points.p1.velocity, Vec2::ZERO);

    core.resize(400.0, 200.0);
    assert_eq!(core.viewport, Viewport::new(400.0, 200.0));
    assert_eq!(core.points.p1.velocity, Vec2::ZERO);
    assert_eq!(core.points.p1.target, core.points.p1.position);
    assert_eq!(core.points.p0, pt(60.0, 100.0));
}

#[test]
fn resize_floors_fractional_sizes() {
    let mut core = EngineCore::default();
    core.resize(800.7, 0.2);
    assert_eq!(core.viewport, Viewport { width: 800.0, height: 1.0 });
}

#[test]
fn reset_restores_layout_and_view() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(10.0, 10.0), no_modifiers());
    core.step(0.03);
    core.set_zoom(3.0);
    core.camera.pan_to(50.0, -20.0);

    let actions = core.reset();
    assert_eq!(actions, vec![Action::SyncZoomSlider(1.0)]);
    assert_eq!(core.camera(), Camera::default());
    assert_eq!(core.points, ControlPointSet::default_layout(core.viewport));
}

#[test]
fn reset_to_size_lays_out_for_the_new_measurement() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(10.0, 10.0), no_modifiers());
    core.step(0.03);
    core.set_zoom(3.0);

    let actions = core.reset_to_size(400.0, 200.0);
    assert_eq!(actions, vec![Action::SyncZoomSlider(1.0)]);
    assert_eq!(core.viewport, Viewport::new(400.0, 200.0));
    assert_eq!(core.camera(), Camera::default());
    assert_eq!(core.points, ControlPointSet::default_layout(Viewport::new(400.0, 200.0)));
    assert_eq!(core.points.p0, pt(60.0, 100.0));
}

#[test]
fn reset_view_keeps_points() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(10.0, 10.0), no_modifiers());
    core.step(0.03);
    let points = core.points;
    core.set_zoom(4.0);

    let actions = core.reset_view();
    assert_eq!(actions, vec![Action::SyncZoomSlider(1.0)]);
    assert_eq!(core.camera().zoom, 1.0);
    assert_eq!(core.points, points);
}

// =============================================================
// Targeting
// =============================================================

#[test]
fn double_click_at_centre_sets_symmetric_targets() {
    let mut core = core_800x600();
    let actions = core.on_double_click(pt(400.0, 300.0));
    assert!(actions.is_empty());
    assert!(point_approx_eq(core.points.p1.target, pt(400.0 - 64.0, 300.0 - 60.0)));
    assert!(point_approx_eq(core.points.p2.target, pt(400.0 + 64.0, 300.0 + 60.0)));
    // Positions only move once the springs are stepped.
    assert!(point_approx_eq(core.points.p1.position, pt(320.0, 240.0)));
}

#[test]
fn double_click_near_edge_is_clamped() {
    let mut core = core_800x600();
    core.on_double_click(pt(5.0, 5.0));
    assert_eq!(core.points.p1.target, pt(30.0, 30.0));
}

#[test]
fn pointer_move_retargets_and_records_pointer() {
    let mut core = core_800x600();
    let actions = core.on_pointer_move(pt(400.0, 300.0), no_modifiers());
    assert!(actions.is_empty());
    assert_eq!(core.input.last_pointer, pt(400.0, 300.0));
    assert!(point_approx_eq(core.points.p1.target, pt(336.0, 240.0)));
    assert!(point_approx_eq(core.points.p2.target, pt(464.0, 360.0)));
}

#[test]
fn pointer_move_targets_follow_zoom_and_pan() {
    let mut core = core_800x600();
    core.set_zoom(2.0);
    core.camera.pan_to(100.0, 0.0);
    core.on_pointer_move(pt(500.0, 300.0), no_modifiers());
    // World cursor: (500 - 400 - 100) / 2 + 400 = 400; offsets halve.
    assert!(point_approx_eq(core.points.p1.target, pt(368.0, 270.0)));
    assert!(point_approx_eq(core.points.p2.target, pt(432.0, 330.0)));
}

#[test]
fn pointer_far_outside_lands_on_margin() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(5000.0, -5000.0), no_modifiers());
    assert_eq!(core.points.p1.target, pt(770.0, 30.0));
    assert_eq!(core.points.p2.target, pt(770.0, 30.0));
}

#[test]
fn zoomed_and_panned_targets_stay_inside_visible_margin() {
    let mut core = core_800x600();
    for _ in 0..40 {
        core.on_wheel(pt(400.0, 300.0), wheel_up(), ctrl_modifier());
    }
    assert_eq!(core.camera().zoom, 10.0);

    core.on_pointer_down(pt(400.0, 300.0), Button::Middle, no_modifiers());
    core.on_pointer_move(pt(450.0, 320.0), no_modifiers());
    core.on_pointer_up(pt(450.0, 320.0), Button::Middle, no_modifiers());
    assert_eq!((core.camera.pan_x, core.camera.pan_y), (50.0, 20.0));

    core.on_pointer_move(pt(0.0, 0.0), no_modifiers());
    let bounds = crate::interaction::target_bounds(core.viewport, &core.camera);
    assert_eq!(bounds.clamp(core.points.p1.target), core.points.p1.target);
    assert_eq!(bounds.clamp(core.points.p2.target), core.points.p2.target);

    for _ in 0..300 {
        core.step(0.016);
    }
    let screen = core.camera.world_to_screen(core.viewport, core.points.p1.position);
    for edge_dist in [screen.x, screen.y, 800.0 - screen.x, 600.0 - screen.y] {
        assert!(edge_dist >= 29.9, "{screen:?}");
    }
}

// =============================================================
// Panning
// =============================================================

#[test]
fn middle_button_pans() {
    let mut core = core_800x600();
    let actions = core.on_pointer_down(pt(100.0, 100.0), Button::Middle, no_modifiers());
    assert_eq!(actions, vec![Action::CapturePointer]);
    assert!(core.is_panning());

    core.on_pointer_move(pt(130.0, 80.0), no_modifiers());
    assert_eq!((core.camera.pan_x, core.camera.pan_y), (30.0, -20.0));

    let actions = core.on_pointer_up(pt(130.0, 80.0), Button::Middle, no_modifiers());
    assert_eq!(actions, vec![Action::ReleasePointer]);
    assert!(!core.is_panning());
}

#[test]
fn primary_button_alone_does_not_pan() {
    let mut core = core_800x600();
    let actions = core.on_pointer_down(pt(100.0, 100.0), Button::Primary, no_modifiers());
    assert!(actions.is_empty());
    assert!(!core.is_panning());
    assert!(core.on_pointer_up(pt(100.0, 100.0), Button::Primary, no_modifiers()).is_empty());
}

#[test]
fn space_plus_primary_pans() {
    let mut core = core_800x600();
    assert_eq!(core.on_key_down(&space(), no_modifiers()), vec![Action::PreventDefault]);
    core.on_pointer_down(pt(0.0, 0.0), Button::Primary, no_modifiers());
    assert!(core.is_panning());
    core.on_key_up(&space(), no_modifiers());
    assert!(!core.input.space_held);
    // Releasing the key mid-drag does not end the gesture.
    assert!(core.is_panning());
}

#[test]
fn other_keys_are_ignored() {
    let mut core = core_800x600();
    assert!(core.on_key_down(&Key("KeyA".into()), no_modifiers()).is_empty());
    assert!(!core.input.space_held);
}

#[test]
fn pan_accumulates_across_gestures() {
    let mut core = core_800x600();
    core.on_pointer_down(pt(0.0, 0.0), Button::Middle, no_modifiers());
    core.on_pointer_move(pt(10.0, 10.0), no_modifiers());
    core.on_pointer_up(pt(10.0, 10.0), Button::Middle, no_modifiers());

    core.on_pointer_down(pt(200.0, 200.0), Button::Middle, no_modifiers());
    core.on_pointer_move(pt(205.0, 190.0), no_modifiers());
    assert_eq!((core.camera.pan_x, core.camera.pan_y), (15.0, 0.0));
}

#[test]
fn panning_suppresses_retargeting() {
    let mut core = core_800x600();
    let before = core.points;
    core.input.last_pointer = pt(1.0, 2.0);
    core.on_pointer_down(pt(400.0, 300.0), Button::Middle, no_modifiers());
    core.on_pointer_move(pt(600.0, 100.0), no_modifiers());
    assert_eq!(core.points, before);
    assert_eq!(core.input.last_pointer, pt(1.0, 2.0));
}

// =============================================================
// Zoom
// =============================================================

#[test]
fn wheel_without_ctrl_is_ignored() {
    let mut core = core_800x600();
    assert!(core.on_wheel(pt(0.0, 0.0), wheel_up(), no_modifiers()).is_empty());
    assert_eq!(core.camera().zoom, 1.0);
}

#[test]
fn ctrl_wheel_zooms_and_syncs_slider() {
    let mut core = core_800x600();
    let actions = core.on_wheel(pt(0.0, 0.0), wheel_up(), ctrl_modifier());
    assert!(approx_eq(core.camera().zoom, 1.1));
    assert_eq!(actions[0], Action::PreventDefault);
    assert_eq!(actions[1], Action::SyncZoomSlider(core.camera().zoom));

    core.on_wheel(pt(0.0, 0.0), wheel_down(), ctrl_modifier());
    assert!(approx_eq(core.camera().zoom, 1.1 * 0.9));
}

#[test]
fn wheel_zoom_never_leaves_range() {
    let mut core = core_800x600();
    for _ in 0..200 {
        core.on_wheel(pt(0.0, 0.0), wheel_down(), ctrl_modifier());
        assert!(core.camera().zoom >= 0.5);
    }
    assert_eq!(core.camera().zoom, 0.5);
    for _ in 0..200 {
        core.on_wheel(pt(0.0, 0.0), wheel_up(), ctrl_modifier());
        assert!(core.camera().zoom <= 10.0);
    }
    assert_eq!(core.camera().zoom, 10.0);
}

#[test]
fn slider_sets_zoom() {
    let mut core = core_800x600();
    core.set_zoom(2.5);
    assert_eq!(core.camera().zoom, 2.5);
}

// =============================================================
// Parameters and stepping
// =============================================================

#[test]
fn stiffness_and_damping_are_independent() {
    let mut core = core_800x600();
    core.set_stiffness(300.0);
    core.set_damping(5.0);
    assert_eq!(core.params, SpringParams::new(300.0, 5.0));
    assert!(!core.params.is_overdamped());
    core.set_params(SpringParams::new(1.0, 2.0));
    assert_eq!(core.params, SpringParams::new(1.0, 2.0));
}

#[test]
fn step_uses_current_params() {
    let mut a = core_800x600();
    let mut b = core_800x600();
    b.set_stiffness(400.0);
    for core in [&mut a, &mut b] {
        core.on_pointer_move(pt(400.0, 300.0), no_modifiers());
        core.step(0.016);
    }
    assert!(b.points.p1.position.x > a.points.p1.position.x);
}

#[test]
fn zero_dt_step_is_a_no_op() {
    let mut core = core_800x600();
    core.on_pointer_move(pt(400.0, 300.0), no_modifiers());
    let before = core.points;
    core.step(0.0);
    assert_eq!(core.points, before);
}

// =============================================================
// Shared handle
// =============================================================

#[test]
fn engine_handle_shares_state_between_clones() {
    let engine = Engine::new(core_800x600());
    let other = engine.clone();
    other.with(|core| core.set_zoom(3.0));
    assert_eq!(engine.snapshot().camera().zoom, 3.0);
}

#[test]
fn engine_with_returns_handler_actions() {
    let engine = Engine::new(core_800x600());
    let actions = engine.with(|core| core.on_pointer_down(pt(0.0, 0.0), Button::Middle, no_modifiers()));
    assert_eq!(actions, vec![Action::CapturePointer]);
    assert!(engine.snapshot().is_panning());
}
