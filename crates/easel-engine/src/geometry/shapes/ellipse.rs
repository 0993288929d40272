use std::f32::consts::TAU;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::apply_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

const RADIUS: f32 = 0.5;

/// Unit-diameter ellipse: a centre vertex (index 0) and `detail` perimeter vertices,
/// fanned counter-clockwise.
pub fn make_ellipse(cache: &mut GeometryCache, detail: u32) -> Rc<Geometry> {
    cache.make(&Primitive::Ellipse { detail })
}

pub(crate) fn build(buffers: &mut MeshBuffers, detail: u32) {
    make_faces(buffers, detail);
    make_vertices(buffers, detail);
    make_uvs(buffers, detail);
    apply_normals(buffers, false);
}

fn make_faces(buffers: &mut MeshBuffers, detail: u32) {
    for t in 0..detail {
        let next = if t + 1 == detail { 1 } else { t + 2 };
        buffers.faces.push([0, t + 1, next]);
    }
}

fn perimeter(detail: u32) -> impl Iterator<Item = Vec2> {
    (1..=detail).map(move |t| Vec2::from_angle(t as f32 / detail as f32 * TAU))
}

fn make_vertices(buffers: &mut MeshBuffers, detail: u32) {
    buffers.positions.push(Vec3::ZERO);
    buffers
        .positions
        .extend(perimeter(detail).map(|dir| (dir * RADIUS).extend(0.0)));
}

fn make_uvs(buffers: &mut MeshBuffers, detail: u32) {
    buffers.uvs.push(Vec2::splat(0.5));
    buffers
        .uvs
        .extend(perimeter(detail).map(|dir| Vec2::splat(0.5) + dir * 0.5));
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fan_wraps_to_first_perimeter_vertex() {
        let mut cache = GeometryCache::new();
        let g = make_ellipse(&mut cache, 8);

        assert_eq!(g.vertex_count(), 9);
        assert_eq!(g.faces().len(), 8);
        assert_eq!(g.faces()[0], [0, 1, 2]);
        assert_eq!(g.faces()[7], [0, 8, 1]);
    }

    #[test]
    fn perimeter_sits_on_half_unit_circle() {
        let mut cache = GeometryCache::new();
        let g = make_ellipse(&mut cache, 25);
        for p in &g.vertex_positions()[1..] {
            assert_abs_diff_eq!(p.length(), RADIUS, epsilon = 1e-6);
        }
        assert!(g.vertex_normals().iter().all(|n| n.z > 0.99));
    }

    #[test]
    fn uvs_stay_in_unit_square() {
        let mut cache = GeometryCache::new();
        let g = make_ellipse(&mut cache, 16);
        assert_eq!(g.vertex_uvs()[0], Vec2::splat(0.5));
        assert!(g.vertex_uvs().iter().all(|uv| (0.0..=1.0).contains(&uv.x) && (0.0..=1.0).contains(&uv.y)));
    }

    #[test]
    fn zero_detail_is_degenerate_not_fatal() {
        let mut cache = GeometryCache::new();
        let g = make_ellipse(&mut cache, 0);
        assert_eq!(g.vertex_count(), 1);
        assert!(g.faces().is_empty());
    }

    #[test]
    fn detail_changes_the_record() {
        let mut cache = GeometryCache::new();
        let a = make_ellipse(&mut cache, 24);
        let b = make_ellipse(&mut cache, 25);
        assert!(!Rc::ptr_eq(&a, &b));
    }
}
