//! Frame loop: time step, physics, drawing, and overlay text.
//!
//! The loop is driven by a [`FrameScheduler`], which in the browser resolves
//! once per `requestAnimationFrame` callback. Each frame clamps the elapsed
//! time, integrates both springs, redraws the scene, and refreshes the FPS
//! and coordinates overlays. A drawing failure is logged and the loop keeps
//! going.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::consts::{FPS_INITIAL, FPS_SMOOTHING, MAX_FRAME_DT};
use crate::engine::Engine;
use crate::render::{Overlay, Surface, coords_lines, draw_scene, fps_text};

/// Source of frame timestamps.
pub trait FrameScheduler {
    /// Wait for the next frame and return its timestamp in milliseconds, or
    /// `None` once no more frames will be delivered.
    fn next_frame(&mut self) -> impl Future<Output = Option<f64>>;
}

/// Turns timestamps into clamped time steps and a smoothed frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
    fps: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self { last_ms: None, fps: FPS_INITIAL }
    }
}

impl FrameClock {
    /// Seconds since the previous tick, clamped to `[0, MAX_FRAME_DT]`.
    ///
    /// The first tick only records the timestamp and returns `0.0`; the
    /// frame-rate estimate is left untouched until a real interval exists.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        let dt = ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT);
        let instant = if dt > 0.0 { 1.0 / dt } else { 0.0 };
        self.fps = self.fps * FPS_SMOOTHING + instant * (1.0 - FPS_SMOOTHING);
        dt
    }

    /// Exponentially smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// What one frame did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub dt: f64,
    pub fps: f64,
    /// The scene was drawn without error.
    pub drawn: bool,
    /// Both controls were at rest after the step.
    pub settled: bool,
}

pub struct RenderLoop<S: Surface, O: Overlay> {
    engine: Engine,
    surface: S,
    overlay: O,
    clock: FrameClock,
    settled: bool,
}

impl<S: Surface, O: Overlay> RenderLoop<S, O> {
    #[must_use]
    pub fn new(engine: Engine, surface: S, overlay: O) -> Self {
        Self { engine, surface, overlay, clock: FrameClock::default(), settled: true }
    }

    /// Run one frame at timestamp `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let dt = self.clock.tick(now_ms);
        let fps = self.clock.fps();
        let surface = &self.surface;
        let overlay = &mut self.overlay;

        let report = self.engine.with(|core| {
            core.step(dt);
            let settled = core.points.is_settled();

            let drawn = match draw_scene(surface, core.viewport, &core.camera, &core.points, core.toggles) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("frame draw failed: {e}");
                    false
                }
            };

            overlay.set_fps_visible(core.toggles.fps);
            if core.toggles.fps {
                overlay.set_fps_text(&fps_text(fps));
            }
            overlay.set_coords_visible(core.toggles.coords);
            if core.toggles.coords {
                overlay.set_coords_text(&coords_lines(core.input.last_pointer, &core.points));
            }

            FrameReport { dt, fps, drawn, settled }
        });

        if report.settled != self.settled {
            self.settled = report.settled;
            log::debug!("springs {}", if report.settled { "settled" } else { "moving" });
        }
        report
    }

    /// Draw a frame for every timestamp the scheduler yields.
    pub async fn run<F: FrameScheduler>(&mut self, scheduler: &mut F) {
        log::info!("frame loop started");
        while let Some(now_ms) = scheduler.next_frame().await {
            self.frame(now_ms);
        }
        log::info!("frame loop stopped");
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }
}
