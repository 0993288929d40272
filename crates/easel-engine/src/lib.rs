//! Easel engine crate.
//!
//! Procedural geometry, a content-keyed geometry cache and the transform-stack
//! driven submission pipeline behind an immediate-mode drawing API. Rendering
//! itself stays behind the [`render::RenderBackend`] trait.

pub mod canvas;
pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod transform;

pub use canvas::{Canvas, CanvasConfig};
