//! Unit box: four vertices per side so every side keeps its own uvs.

use std::rc::Rc;

use glam::Vec3;

use super::QUAD_UVS;
use crate::geometry::normals::{compute_flat_normals, compute_welded_normals};
use crate::geometry::{Face, Geometry, GeometryCache, MeshBuffers, Primitive};

/// Decimal places used to weld coincident corners for smooth shading.
pub const WELD_PRECISION: u32 = 3;

const H: f32 = 0.5;

#[rustfmt::skip]
const POSITIONS: [Vec3; 24] = [
    // front (+z)
    Vec3::new(-H, -H,  H), Vec3::new( H, -H,  H), Vec3::new( H,  H,  H), Vec3::new(-H,  H,  H),
    // back (-z)
    Vec3::new(-H, -H, -H), Vec3::new( H, -H, -H), Vec3::new( H,  H, -H), Vec3::new(-H,  H, -H),
    // left (-x)
    Vec3::new(-H, -H, -H), Vec3::new(-H, -H,  H), Vec3::new(-H,  H,  H), Vec3::new(-H,  H, -H),
    // right (+x)
    Vec3::new( H, -H, -H), Vec3::new( H, -H,  H), Vec3::new( H,  H,  H), Vec3::new( H,  H, -H),
    // top (+y)
    Vec3::new(-H,  H, -H), Vec3::new( H,  H, -H), Vec3::new( H,  H,  H), Vec3::new(-H,  H,  H),
    // bottom (-y)
    Vec3::new(-H, -H, -H), Vec3::new( H, -H, -H), Vec3::new( H, -H,  H), Vec3::new(-H, -H,  H),
];

#[rustfmt::skip]
const FACES: [Face; 12] = [
    [0, 1, 2],    [0, 2, 3],
    [4, 6, 5],    [4, 7, 6],
    [8, 9, 10],   [8, 10, 11],
    [12, 14, 13], [12, 15, 14],
    [16, 18, 17], [16, 19, 18],
    [20, 21, 22], [20, 22, 23],
];

pub fn make_box(cache: &mut GeometryCache, smooth_normals: bool) -> Rc<Geometry> {
    cache.make(&Primitive::Box { smooth_normals })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool) {
    buffers.faces.extend(FACES);
    buffers.positions.extend(POSITIONS);
    buffers.uvs.extend(QUAD_UVS.iter().cycle().take(POSITIONS.len()).copied());
    buffers.normals = if smooth {
        compute_welded_normals(&buffers.positions, &buffers.faces, WELD_PRECISION)
    } else {
        compute_flat_normals(&buffers.positions, &buffers.faces)
    };
}
