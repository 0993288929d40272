//! Per-shape builders.
//!
//! Each module exposes a `make_*` entry point that goes through the cache, plus a
//! crate-private `build` that fills a [`MeshBuffers`](super::MeshBuffers) in the
//! fixed order faces → vertices → uvs → normals.
//!
//! All shapes are generated in a canonical local frame centred on the origin:
//! - 2D shapes span one unit and live in the z = 0 plane, facing +Z
//! - 3D shapes are unit sized (radius 1 or edge 1) and scaled by the caller

pub mod cuboid;
pub mod ellipse;
pub mod line;
pub mod octahedron;
pub mod plane;
pub mod point;
pub mod polygon;
pub mod rectangle;
pub mod sphere;
pub mod tetrahedron;
pub mod torus;
pub mod triangle;
pub mod truncated_cone;

use glam::{Vec2, Vec3};

use super::Face;

pub use cuboid::make_box;
pub use ellipse::make_ellipse;
pub use line::make_line;
pub use octahedron::make_octahedron;
pub use plane::make_plane;
pub use point::make_point;
pub use polygon::make_polygon;
pub use rectangle::make_rectangle;
pub use sphere::make_sphere;
pub use tetrahedron::make_tetrahedron;
pub use torus::make_torus;
pub use triangle::make_triangle;
pub use truncated_cone::{make_cone, make_cylinder, make_truncated_cone};

/// Splits absolute points into their centroid and centroid-relative offsets.
///
/// Relative offsets are what go into cache keys, so the same outline drawn at two
/// places shares one record.
pub fn recenter<const N: usize>(points: [Vec2; N]) -> (Vec2, [Vec2; N]) {
    let center = points.iter().copied().sum::<Vec2>() / N.max(1) as f32;
    (center, points.map(|p| p - center))
}

pub(crate) const QUAD_FACES: [Face; 2] = [[0, 1, 2], [0, 2, 3]];

pub(crate) const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Lifts 2D outline points into the z = 0 plane.
pub(crate) fn planar(points: &[Vec2]) -> Vec<Vec3> {
    points.iter().map(|p| p.extend(0.0)).collect()
}
