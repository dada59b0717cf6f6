//! 2D rendering
//!
//! The simulation only needs to clear the viewport and fill one circle, so
//! drawing goes through the small [`Surface`] trait. The browser backend wraps
//! a canvas 2D context; [`Recorder`] captures commands for headless runs.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use surface::{DrawCommand, Recorder, Surface, draw_ball};
