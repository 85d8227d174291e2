use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::{Camera, Viewport};
use crate::config::CurveConfig;
use crate::consts::{ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::controls::{ControlPointSet, DisplayToggles};
use crate::frame::RenderLoop;
use crate::input::{Button, Gesture, InteractionState, Key, Modifiers, WheelDelta};
use crate::interaction::targets_for_screen_point;
use crate::math::Vec2;
use crate::render::{Overlay, Surface};
use crate::spring::SpringParams;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects the host performs on the engine's behalf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Write this value into the zoom slider.
    SyncZoomSlider(f64),
    /// Route subsequent pointer events for this pointer to the canvas.
    CapturePointer,
    /// Undo [`Action::CapturePointer`].
    ReleasePointer,
    /// Suppress the browser's default handling of the event.
    PreventDefault,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Owns the view, the interaction state, and the curve points. Input handlers
/// mutate it between frames; the frame loop reads it and integrates the
/// springs. Separated from the browser so it can be tested natively.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub viewport: Viewport,
    pub camera: Camera,
    pub input: InteractionState,
    pub points: ControlPointSet,
    pub params: SpringParams,
    pub toggles: DisplayToggles,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(&CurveConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: &CurveConfig) -> Self {
        let viewport = Viewport::default();
        Self {
            viewport,
            camera: Camera::default(),
            input: InteractionState::default(),
            points: ControlPointSet::default_layout(viewport),
            params: config.spring_params(),
            toggles: config.toggles(),
        }
    }

    // --- Lifecycle ---

    /// Adopt a new canvas size and rebuild the default layout.
    ///
    /// In-flight spring motion is discarded.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = Viewport::new(width, height);
        self.points = ControlPointSet::default_layout(self.viewport);
        log::debug!("resize to {}x{}", self.viewport.width, self.viewport.height);
    }

    /// Default layout and identity view.
    pub fn reset(&mut self) -> Vec<Action> {
        self.points = ControlPointSet::default_layout(self.viewport);
        log::debug!("reset control points");
        self.reset_view()
    }

    /// Re-measure to `width` x `height`, then [`EngineCore::reset`].
    ///
    /// Used by the reset button, which re-reads the canvas size first.
    pub fn reset_to_size(&mut self, width: f64, height: f64) -> Vec<Action> {
        self.resize(width, height);
        self.reset()
    }

    /// Identity view only; control points are left where they are.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.camera.reset();
        log::debug!("reset view");
        vec![Action::SyncZoomSlider(self.camera.zoom)]
    }

    /// Advance both springs by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        self.points.step(dt, self.params);
    }

    // --- Widget inputs ---

    /// Zoom slider moved.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.camera.set_zoom(zoom);
    }

    pub fn set_params(&mut self, params: SpringParams) {
        self.params = params;
        log::debug!(
            "spring k={} c={} overdamped={}",
            params.stiffness,
            params.damping,
            params.is_overdamped()
        );
    }

    pub fn set_stiffness(&mut self, stiffness: f64) {
        self.set_params(SpringParams { stiffness, ..self.params });
    }

    pub fn set_damping(&mut self, damping: f64) {
        self.set_params(SpringParams { damping, ..self.params });
    }

    pub fn set_toggles(&mut self, toggles: DisplayToggles) {
        self.toggles = toggles;
    }

    // --- Pointer / wheel / keyboard ---

    pub fn on_pointer_down(&mut self, screen_pt: Vec2, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if !self.input.starts_pan(button) {
            return Vec::new();
        }
        self.input.gesture = Gesture::Panning {
            start_pointer: screen_pt,
            start_pan: Vec2::new(self.camera.pan_x, self.camera.pan_y),
        };
        log::debug!("pan start at ({}, {})", screen_pt.x, screen_pt.y);
        vec![Action::CapturePointer]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Vec2, _modifiers: Modifiers) -> Vec<Action> {
        if let Gesture::Panning { start_pointer, start_pan } = self.input.gesture {
            let pan = start_pan + (screen_pt - start_pointer);
            self.camera.pan_to(pan.x, pan.y);
            return Vec::new();
        }

        self.input.last_pointer = screen_pt;
        self.retarget_at(screen_pt);
        Vec::new()
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Vec2, _button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_panning() {
            return Vec::new();
        }
        self.input.gesture = Gesture::Idle;
        log::debug!("pan end at ({}, {})", self.camera.pan_x, self.camera.pan_y);
        vec![Action::ReleasePointer]
    }

    /// Jump both targets to the double-clicked point. Uses the same clamped
    /// targeting as pointer moves.
    pub fn on_double_click(&mut self, screen_pt: Vec2) -> Vec<Action> {
        self.retarget_at(screen_pt);
        log::debug!("double-click retarget at ({}, {})", screen_pt.x, screen_pt.y);
        Vec::new()
    }

    /// Ctrl + wheel zooms by a fixed step per event; plain wheel is ignored.
    pub fn on_wheel(&mut self, _screen_pt: Vec2, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.ctrl {
            return Vec::new();
        }
        let factor = if delta.dy > 0.0 { ZOOM_OUT_FACTOR } else { ZOOM_IN_FACTOR };
        self.camera.zoom_by(factor);
        log::debug!("zoom {}", self.camera.zoom);
        vec![Action::PreventDefault, Action::SyncZoomSlider(self.camera.zoom)]
    }

    pub fn on_key_down(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_pan_key() {
            return Vec::new();
        }
        self.input.space_held = true;
        vec![Action::PreventDefault]
    }

    pub fn on_key_up(&mut self, key: &Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_pan_key() {
            self.input.space_held = false;
        }
        Vec::new()
    }

    fn retarget_at(&mut self, screen_pt: Vec2) {
        let (p1, p2) = targets_for_screen_point(screen_pt, self.viewport, &self.camera);
        self.points.retarget(p1, p2);
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.input.is_panning()
    }
}

/// Shared handle to the engine state.
///
/// Event callbacks and the frame loop each hold a clone. Everything runs on
/// one thread and every borrow ends before the callback returns, so the
/// `RefCell` is never contended.
#[derive(Clone, Default)]
pub struct Engine {
    core: Rc<RefCell<EngineCore>>,
}

impl Engine {
    #[must_use]
    pub fn new(core: EngineCore) -> Self {
        Self { core: Rc::new(RefCell::new(core)) }
    }

    /// Run `f` with exclusive access to the state.
    pub fn with<R>(&self, f: impl FnOnce(&mut EngineCore) -> R) -> R {
        f(&mut self.core.borrow_mut())
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> EngineCore {
        self.core.borrow().clone()
    }

    /// Build the frame loop that draws this engine onto `surface`.
    #[must_use]
    pub fn render_loop<S: Surface, O: Overlay>(&self, surface: S, overlay: O) -> RenderLoop<S, O> {
        RenderLoop::new(self.clone(), surface, overlay)
    }
}
