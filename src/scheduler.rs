//! `requestAnimationFrame` as a [`FrameScheduler`].

use canvas::frame::FrameScheduler;
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

pub struct RafScheduler {
    window: Window,
    /// Callback for the most recent request. It must outlive the browser's
    /// call into it, so it is only dropped when the next request replaces it.
    pending: Option<Closure<dyn FnMut(f64)>>,
}

impl RafScheduler {
    pub fn new(window: Window) -> Self {
        Self { window, pending: None }
    }
}

impl FrameScheduler for RafScheduler {
    async fn next_frame(&mut self) -> Option<f64> {
        let (tx, rx) = oneshot::channel::<f64>();
        let cb = Closure::once(move |timestamp: f64| {
            if tx.send(timestamp).is_err() {
                log::debug!("frame dropped: loop no longer waiting");
            }
        });

        if let Err(e) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {e:?}");
            return None;
        }
        self.pending = Some(cb);

        let Ok(timestamp) = rx.await else {
            log::warn!("frame callback dropped before firing");
            return None;
        };
        Some(timestamp)
    }
}
