use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::apply_normals;
use crate::geometry::{Face, Geometry, GeometryCache, MeshBuffers, Primitive};

const POSITIONS: [Vec3; 4] = [
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(-1.0, -1.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(0.0, -1.0, -1.0),
];

const UVS: [Vec2; 4] = [
    Vec2::new(0.5, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.5, 0.5),
];

const FACES: [Face; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 1], [1, 3, 2]];

/// Four shared vertices spanning [-1, 1] on every axis.
pub fn make_tetrahedron(cache: &mut GeometryCache, smooth_normals: bool) -> Rc<Geometry> {
    cache.make(&Primitive::Tetrahedron { smooth_normals })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool) {
    buffers.faces.extend(FACES);
    buffers.positions.extend(POSITIONS);
    buffers.uvs.extend(UVS);
    apply_normals(buffers, smooth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::normals::face_normal;

    #[test]
    fn closed_and_outward() {
        let inside = POSITIONS.iter().copied().sum::<Vec3>() / 4.0;
        for face in FACES {
            let n = face_normal(&POSITIONS, face);
            let on_face = POSITIONS[face[0] as usize];
            assert!(n.dot(on_face - inside) > 0.0, "face {face:?}");
        }
    }

    #[test]
    fn smooth_and_flat_are_distinct_records() {
        let mut cache = GeometryCache::new();
        let smooth = make_tetrahedron(&mut cache, true);
        let flat = make_tetrahedron(&mut cache, false);

        assert_eq!(smooth.vertex_normals().len(), 4);
        assert_eq!(flat.vertex_normals().len(), 12);
    }
}
