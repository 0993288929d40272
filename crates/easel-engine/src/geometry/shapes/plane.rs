use std::rc::Rc;

use glam::Vec3;

use super::{QUAD_FACES, QUAD_UVS};
use crate::geometry::normals::compute_flat_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

const H: f32 = 0.5;

/// Unit quad in the XY plane facing +Z.
pub fn make_plane(cache: &mut GeometryCache, smooth_normals: bool) -> Rc<Geometry> {
    cache.make(&Primitive::Plane { smooth_normals })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool) {
    buffers.faces.extend(QUAD_FACES);
    buffers.positions.extend([
        Vec3::new(-H, -H, 0.0),
        Vec3::new(H, -H, 0.0),
        Vec3::new(H, H, 0.0),
        Vec3::new(-H, H, 0.0),
    ]);
    buffers.uvs.extend(QUAD_UVS);
    buffers.normals = if smooth {
        vec![Vec3::Z; buffers.positions.len()]
    } else {
        compute_flat_normals(&buffers.positions, &buffers.faces)
    };
}
