use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::apply_normals;
use crate::geometry::{Face, Geometry, GeometryCache, MeshBuffers, Primitive};

#[rustfmt::skip]
const POSITIONS: [Vec3; 6] = [
    Vec3::new( 0.0,  1.0,  0.0), // top
    Vec3::new( 1.0,  0.0,  0.0),
    Vec3::new( 0.0,  0.0,  1.0),
    Vec3::new(-1.0,  0.0,  0.0),
    Vec3::new( 0.0,  0.0, -1.0),
    Vec3::new( 0.0, -1.0,  0.0), // bottom
];

const UVS: [Vec2; 6] = [
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.5, 1.0),
    Vec2::new(0.5, 1.0),
];

#[rustfmt::skip]
const FACES: [Face; 8] = [
    [0, 2, 1], [0, 3, 2], [0, 4, 3], [0, 1, 4],
    [5, 1, 2], [5, 2, 3], [5, 3, 4], [5, 4, 1],
];

pub fn make_octahedron(cache: &mut GeometryCache, smooth_normals: bool) -> Rc<Geometry> {
    cache.make(&Primitive::Octahedron { smooth_normals })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool) {
    buffers.faces.extend(FACES);
    buffers.positions.extend(POSITIONS);
    buffers.uvs.extend(UVS);
    apply_normals(buffers, smooth);
}
