//! Input model: modifier keys, mouse buttons, and the pan gesture state.
//!
//! This module defines the types consumed by the input handlers on
//! [`crate::engine::EngineCore`]. `Modifiers` and `Button` capture the user's
//! intent at the time of a pointer event. `InteractionState` is the transient
//! state tracked between events: the active gesture, whether the pan key is
//! held, and where the pointer was last seen.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::math::Vec2;

/// Key name (as reported by the browser's `KeyboardEvent.code`) that turns a
/// primary-button press into a pan.
pub const PAN_KEY: &str = "Space";

/// Modifier keys held when the event fired. Only `ctrl` changes behavior
/// (it turns the wheel into zoom).
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer button that went down or up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left button, pen contact, or touch.
    Primary,
    /// Wheel click; always pans.
    Middle,
    Secondary,
}

impl Button {
    /// Map a DOM `PointerEvent.button` id.
    #[must_use]
    pub fn from_dom(id: i16) -> Self {
        match id {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Browser key code such as `"Space"` or `"KeyR"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_pan_key(&self) -> bool {
        self.0 == PAN_KEY
    }
}

/// Scroll amounts from a wheel event, in pixels. Positive `dy` scrolls down.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    pub dx: f64,
    pub dy: f64,
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture; pointer moves retarget the control points.
    #[default]
    Idle,
    /// The user is dragging the view.
    Panning {
        /// Screen-space pointer position when the drag began.
        start_pointer: Vec2,
        /// `(pan_x, pan_y)` when the drag began.
        start_pan: Vec2,
    },
}

/// Transient interaction state, mutated only by input events.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionState {
    pub gesture: Gesture,
    /// The pan key is currently held down.
    pub space_held: bool,
    /// Screen-space position of the most recent non-pan pointer move.
    pub last_pointer: Vec2,
}

impl InteractionState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.gesture, Gesture::Panning { .. })
    }

    /// Whether a press with `button` should begin a pan.
    #[must_use]
    pub fn starts_pan(&self, button: Button) -> bool {
        button == Button::Middle || self.space_held
    }
}
