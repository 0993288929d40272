//! Procedural geometry.
//!
//! Responsibilities:
//! - the immutable mesh record ([`Geometry`]) and its attribute invariants
//! - canonical cache keys and the keyed [`GeometryCache`]
//! - per-shape builders, dispatched through [`Primitive`]
//! - flat/smooth normal helpers, world-space stroke extrusion and wireframe edges
//!
//! Everything here is renderer-agnostic: records hold plain `glam` vectors and the
//! render layer decides how to upload them.

pub mod cache;
pub mod edges;
pub mod extrude;
pub mod key;
pub mod normals;
pub mod primitive;
pub mod record;
pub mod shapes;

pub use cache::{CacheStats, GeometryCache};
pub use key::GeometryKey;
pub use primitive::{Primitive, TruncatedCone};
pub use record::{CornerVertex, Face, Geometry, GeometryId, MeshBuffers, NormalLayout};
