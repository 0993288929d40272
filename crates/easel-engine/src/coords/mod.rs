//! Sketch-space placement helpers.
//!
//! Sketch space follows the transform stack: +X right, +Y along the stack's Y axis,
//! units are whatever the active world matrix makes of them. Builders always emit
//! geometry centred on the origin; this module turns the caller's corner/centre
//! conventions into a centre and a size for the transform stack.

mod shape_mode;

pub use shape_mode::{Placement, ShapeMode};
