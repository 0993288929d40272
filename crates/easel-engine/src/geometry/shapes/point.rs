use std::rc::Rc;

use glam::Vec3;

use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Single vertex at the origin, drawn with point topology.
pub fn make_point(cache: &mut GeometryCache) -> Rc<Geometry> {
    cache.make(&Primitive::Point)
}

pub(crate) fn build(buffers: &mut MeshBuffers) {
    buffers.positions.push(Vec3::ZERO);
}
