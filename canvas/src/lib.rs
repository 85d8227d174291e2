//! Spring-driven cubic Bezier curve engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole model behind the page: two fixed anchors and two spring-driven
//! control points, the pan/zoom view, pointer targeting, and the per-frame
//! loop that integrates the springs and draws the scene. The host layer only
//! wires DOM events into [`engine::EngineCore`] and carries out the returned
//! [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Shared [`engine::Engine`] handle and testable [`engine::EngineCore`] |
//! | [`frame`] | Frame clock and the [`frame::RenderLoop`] |
//! | [`render`] | Scene drawing through the [`render::Surface`] trait |
//! | [`interaction`] | Pointer-to-target rules |
//! | [`controls`] | Anchor/control point set and display toggles |
//! | [`spring`] | Damped spring integration |
//! | [`bezier`] | Cubic Bezier evaluation and sampling |
//! | [`camera`] | Viewport, pan/zoom camera, coordinate conversions |
//! | [`input`] | Input event types and the pan gesture state |
//! | [`math`] | 2D vector |
//! | [`config`] | Start-up configuration |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants and colors |

pub mod bezier;
pub mod camera;
pub mod config;
pub mod consts;
pub mod controls;
pub mod engine;
pub mod error;
pub mod frame;
pub mod input;
pub mod interaction;
pub mod math;
pub mod render;
pub mod spring;

#[cfg(test)]
mod test_support;
