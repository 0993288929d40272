use std::rc::Rc;

use glam::Vec2;

use super::planar;
use crate::geometry::normals::apply_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Triangle from three centroid-relative vertices (see [`super::recenter`]).
pub fn make_triangle(cache: &mut GeometryCache, vertices: [Vec2; 3]) -> Rc<Geometry> {
    cache.make(&Primitive::Triangle { vertices })
}

pub(crate) fn build(buffers: &mut MeshBuffers, vertices: [Vec2; 3]) {
    buffers.faces.push([0, 1, 2]);
    buffers.positions = planar(&vertices);
    buffers.uvs = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
    apply_normals(buffers, false);
}
