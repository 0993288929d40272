//! Transform stack.
//!
//! Drawing calls push, place their shape, capture the world matrix and pop before
//! submitting, so a failed submission never leaves the stack unbalanced.

mod stack;

pub use stack::TransformStack;
