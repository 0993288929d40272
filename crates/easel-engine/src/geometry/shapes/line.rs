use std::rc::Rc;

use glam::Vec2;

use super::planar;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Two-vertex segment. `from`/`to` are relative to the segment midpoint.
pub fn make_line(cache: &mut GeometryCache, from: Vec2, to: Vec2) -> Rc<Geometry> {
    cache.make(&Primitive::Line { from, to })
}

pub(crate) fn build(buffers: &mut MeshBuffers, from: Vec2, to: Vec2) {
    buffers.positions = planar(&[from, to]);
    buffers.uvs = vec![Vec2::ZERO, Vec2::X];
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn segment_has_two_vertices() {
        let mut cache = GeometryCache::new();
        let g = make_line(&mut cache, Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0));
        assert_eq!(g.vertex_positions(), &[Vec3::new(-5.0, 0.0, 0.0), Vec3::new(5.0, 0.0, 0.0)]);
        assert!(g.faces().is_empty());
        assert_eq!(g.key(), "line|-5|0|5|0");
    }
}
