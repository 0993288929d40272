//! Recorded draw streams.
//!
//! Responsibilities:
//! - own copies of submissions (geometry kept alive by `Rc`)
//! - preserve call order per frame
//! - act as a [`RenderBackend`](crate::render::RenderBackend) for tests and replay

mod cmd;
mod list;

pub use cmd::{Channel, DrawCmd};
pub use list::{DrawItem, DrawList};
