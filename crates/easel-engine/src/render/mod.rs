//! Render submission surface.
//!
//! The engine does not own a GPU. It hands [`Submission`]s to a [`RenderBackend`]:
//! a shape façade (geometry + material), the world matrix it was captured under, the
//! brush colour and the topology. GPU backends turn items into buffers with
//! [`MeshData`] and the wgpu layout of [`Vertex`].

mod backend;
mod item;
mod vertex;

pub use backend::{Pass, RenderBackend, Submission, Topology};
pub use item::{MaterialId, RenderItem, Shape};
pub use vertex::{MeshData, Vertex, premultiplied_blend};
