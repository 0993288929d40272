//! Paint state.
//!
//! Scope:
//! - colour representation (premultiplied alpha)
//! - the brush: fill, stroke and inner stroke settings consulted by every draw call

pub mod brush;
pub mod color;

pub use brush::{Brush, StrokeStyle};
pub use color::Color;
