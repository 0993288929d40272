use std::rc::Rc;

use glam::Vec2;

use super::{QUAD_FACES, QUAD_UVS, planar};
use crate::geometry::normals::apply_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Arbitrary quad from four centroid-relative vertices, split along the 0-2 diagonal.
pub fn make_polygon(cache: &mut GeometryCache, vertices: [Vec2; 4]) -> Rc<Geometry> {
    cache.make(&Primitive::Polygon { vertices })
}

pub(crate) fn build(buffers: &mut MeshBuffers, vertices: [Vec2; 4]) {
    buffers.faces.extend(QUAD_FACES);
    buffers.positions = planar(&vertices);
    buffers.uvs.extend(QUAD_UVS);
    apply_normals(buffers, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::shapes::recenter;

    #[test]
    fn translated_quads_share_geometry() {
        let mut cache = GeometryCache::new();
        let quad = [Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 2.0), Vec2::new(0.0, 2.0)];
        let moved = quad.map(|p| p + Vec2::splat(8.0));

        let a = make_polygon(&mut cache, recenter(quad).1);
        let b = make_polygon(&mut cache, recenter(moved).1);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.vertex_normals().len(), 6);
    }
}
