use std::rc::Rc;

use glam::Vec2;

use super::{QUAD_FACES, QUAD_UVS, planar};
use crate::geometry::normals::apply_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

const CORNERS: [Vec2; 4] = [
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
    Vec2::new(-0.5, 0.5),
];

/// Unit square centred on the origin; width and height come from the transform.
pub fn make_rectangle(cache: &mut GeometryCache) -> Rc<Geometry> {
    cache.make(&Primitive::Rectangle)
}

pub(crate) fn build(buffers: &mut MeshBuffers) {
    buffers.faces.extend(QUAD_FACES);
    buffers.positions = planar(&CORNERS);
    buffers.uvs.extend(QUAD_UVS);
    apply_normals(buffers, false);
}
