//! DOM event wiring.
//!
//! Each listener translates its event into engine types, calls the matching
//! [`EngineCore`] handler inside one borrow, and then carries out the
//! returned [`Action`]s. Listeners live as long as the page, so their
//! closures are leaked with `forget`.

use std::rc::Rc;

use canvas::engine::{Action, Engine, EngineCore};
use canvas::error::CanvasError;
use canvas::input::{Button, Key, Modifiers, WheelDelta};
use canvas::math::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Event, EventTarget, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent, PointerEvent, WheelEvent,
    Window,
};

use crate::dom::fit_canvas_to_parent;
use crate::mapping::{finite_value, offset_point};
use crate::widgets::Widgets;

/// Attach `handler` for `kind` events on `target`.
fn listen<E>(target: &EventTarget, kind: &'static str, mut handler: impl FnMut(E) + 'static) -> Result<(), CanvasError>
where
    E: JsCast + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| match ev.dyn_into::<E>() {
        Ok(ev) => handler(ev),
        Err(_) => log::warn!("unexpected event type for {kind}"),
    });
    target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Carries out engine actions against the page.
struct Effects {
    canvas: HtmlCanvasElement,
    zoom_slider: Option<HtmlInputElement>,
}

impl Effects {
    fn apply(&self, actions: Vec<Action>, event: &Event, pointer_id: Option<i32>) {
        for action in actions {
            match action {
                Action::SyncZoomSlider(zoom) => {
                    if let Some(slider) = &self.zoom_slider {
                        slider.set_value_as_number(zoom);
                    }
                }
                Action::CapturePointer => {
                    if let Some(id) = pointer_id {
                        if let Err(e) = self.canvas.set_pointer_capture(id) {
                            log::warn!("pointer capture failed: {e:?}");
                        }
                    }
                }
                Action::ReleasePointer => {
                    if let Some(id) = pointer_id {
                        // Capture is already gone if the pointer left the page.
                        if let Err(e) = self.canvas.release_pointer_capture(id) {
                            log::debug!("pointer release skipped: {e:?}");
                        }
                    }
                }
                Action::PreventDefault => event.prevent_default(),
            }
        }
    }
}

/// Route a pointer event into the engine.
fn on_pointer(
    engine: &Engine,
    effects: &Effects,
    ev: &PointerEvent,
    handle: fn(&mut EngineCore, &PointerEvent) -> Vec<Action>,
) {
    let actions = engine.with(|core| handle(core, ev));
    effects.apply(actions, ev, Some(ev.pointer_id()));
}

fn mouse_modifiers(ev: &MouseEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}

fn key_modifiers(ev: &KeyboardEvent) -> Modifiers {
    Modifiers { shift: ev.shift_key(), ctrl: ev.ctrl_key(), alt: ev.alt_key(), meta: ev.meta_key() }
}

fn pointer_parts(ev: &MouseEvent) -> (Vec2, Modifiers) {
    (offset_point(ev.offset_x(), ev.offset_y()), mouse_modifiers(ev))
}

/// Wire canvas pointer input, window keyboard and resize, and the page controls.
pub fn wire(window: &Window, canvas: &HtmlCanvasElement, engine: &Engine, widgets: &Widgets) -> Result<(), CanvasError> {
    if let Err(e) = canvas.style().set_property("touch-action", "none") {
        log::warn!("touch-action not set: {e:?}");
    }

    let effects = Rc::new(Effects { canvas: canvas.clone(), zoom_slider: widgets.zoom.clone() });
    wire_pointer(canvas, engine, &effects)?;
    wire_keyboard(window, engine, &effects)?;
    wire_resize(window, canvas, engine)?;
    wire_controls(widgets, engine, &effects)?;
    Ok(())
}

fn wire_pointer(canvas: &HtmlCanvasElement, engine: &Engine, effects: &Rc<Effects>) -> Result<(), CanvasError> {
    let target: &EventTarget = canvas.as_ref();

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "pointerdown", move |ev: PointerEvent| {
        on_pointer(&e, &fx, &ev, |core, ev| {
            let (pt, mods) = pointer_parts(ev);
            core.on_pointer_down(pt, Button::from_dom(ev.button()), mods)
        });
    })?;

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "pointermove", move |ev: PointerEvent| {
        on_pointer(&e, &fx, &ev, |core, ev| {
            let (pt, mods) = pointer_parts(ev);
            core.on_pointer_move(pt, mods)
        });
    })?;

    for kind in ["pointerup", "pointercancel"] {
        let (e, fx) = (engine.clone(), Rc::clone(effects));
        listen(target, kind, move |ev: PointerEvent| {
            on_pointer(&e, &fx, &ev, |core, ev| {
                let (pt, mods) = pointer_parts(ev);
                core.on_pointer_up(pt, Button::from_dom(ev.button()), mods)
            });
        })?;
    }

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "dblclick", move |ev: MouseEvent| {
        let (pt, _) = pointer_parts(&ev);
        let actions = e.with(|core| core.on_double_click(pt));
        fx.apply(actions, &ev, None);
    })?;

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "wheel", move |ev: WheelEvent| {
        let (pt, mods) = pointer_parts(&ev);
        let delta = WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
        let actions = e.with(|core| core.on_wheel(pt, delta, mods));
        fx.apply(actions, &ev, None);
    })?;

    Ok(())
}

fn wire_keyboard(window: &Window, engine: &Engine, effects: &Rc<Effects>) -> Result<(), CanvasError> {
    let target: &EventTarget = window.as_ref();

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "keydown", move |ev: KeyboardEvent| {
        let mods = key_modifiers(&ev);
        let actions = e.with(|core| core.on_key_down(&Key(ev.code()), mods));
        fx.apply(actions, &ev, None);
    })?;

    let (e, fx) = (engine.clone(), Rc::clone(effects));
    listen(target, "keyup", move |ev: KeyboardEvent| {
        let mods = key_modifiers(&ev);
        let actions = e.with(|core| core.on_key_up(&Key(ev.code()), mods));
        fx.apply(actions, &ev, None);
    })?;

    Ok(())
}

fn wire_resize(window: &Window, canvas: &HtmlCanvasElement, engine: &Engine) -> Result<(), CanvasError> {
    let (e, canvas) = (engine.clone(), canvas.clone());
    listen(window.as_ref(), "resize", move |_: Event| {
        let viewport = fit_canvas_to_parent(&canvas);
        e.with(|core| core.resize(viewport.width, viewport.height));
    })
}

/// Attach an `input` listener that feeds the slider's numeric value to `set`.
fn wire_slider(
    slider: &HtmlInputElement,
    engine: &Engine,
    set: fn(&mut EngineCore, f64),
) -> Result<(), CanvasError> {
    let (e, input) = (engine.clone(), slider.clone());
    listen(slider.as_ref(), "input", move |_: Event| {
        if let Some(value) = finite_value(input.value_as_number()) {
            e.with(|core| set(core, value));
        }
    })
}

fn wire_controls(widgets: &Widgets, engine: &Engine, effects: &Rc<Effects>) -> Result<(), CanvasError> {
    if let Some(slider) = &widgets.zoom {
        wire_slider(slider, engine, EngineCore::set_zoom)?;
    }
    if let Some(slider) = &widgets.stiffness {
        wire_slider(slider, engine, EngineCore::set_stiffness)?;
    }
    if let Some(slider) = &widgets.damping {
        wire_slider(slider, engine, EngineCore::set_damping)?;
    }

    for (toggle, checkbox) in &widgets.checkboxes {
        let (e, input, toggle) = (engine.clone(), checkbox.clone(), *toggle);
        listen(checkbox.as_ref(), "change", move |_: Event| {
            let on = input.checked();
            e.with(|core| toggle.set(&mut core.toggles, on));
        })?;
    }

    if let Some(button) = &widgets.reset {
        let (e, fx) = (engine.clone(), Rc::clone(effects));
        listen(button.as_ref(), "click", move |ev: Event| {
            let viewport = fit_canvas_to_parent(&fx.canvas);
            let actions = e.with(|core| core.reset_to_size(viewport.width, viewport.height));
            fx.apply(actions, &ev, None);
        })?;
    }
    if let Some(button) = &widgets.reset_view {
        let (e, fx) = (engine.clone(), Rc::clone(effects));
        listen(button.as_ref(), "click", move |ev: Event| {
            let actions = e.with(EngineCore::reset_view);
            fx.apply(actions, &ev, None);
        })?;
    }

    Ok(())
}
