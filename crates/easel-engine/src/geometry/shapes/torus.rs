use std::f32::consts::TAU;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::compute_flat_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Torus with ring radius 1 in the XY plane and tube radius `tube_ratio`.
///
/// Callers scale uniformly by the ring radius, so only the ratio reaches the key
/// (rounded to four decimals).
pub fn make_torus(
    cache: &mut GeometryCache,
    smooth_normals: bool,
    tube_ratio: f32,
    detail_x: u32,
    detail_y: u32,
) -> Rc<Geometry> {
    cache.make(&Primitive::Torus { smooth_normals, tube_ratio, detail_x, detail_y })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool, tube_ratio: f32, detail_x: u32, detail_y: u32) {
    make_faces(buffers, detail_x, detail_y);

    for i in 0..=detail_y {
        let v = i as f32 / detail_y as f32;
        let (sin_phi, cos_phi) = (TAU * v).sin_cos();
        for j in 0..=detail_x {
            let u = j as f32 / detail_x as f32;
            let (sin_theta, cos_theta) = (TAU * u).sin_cos();

            let ring = 1.0 + tube_ratio * cos_phi;
            buffers
                .positions
                .push(Vec3::new(ring * cos_theta, ring * sin_theta, tube_ratio * sin_phi));
            buffers.uvs.push(Vec2::new(u, v));
            if smooth {
                buffers
                    .normals
                    .push(Vec3::new(cos_phi * cos_theta, cos_phi * sin_theta, sin_phi));
            }
        }
    }

    if !smooth {
        buffers.normals = compute_flat_normals(&buffers.positions, &buffers.faces);
    }
}

fn make_faces(buffers: &mut MeshBuffers, detail_x: u32, detail_y: u32) {
    let row = detail_x + 1;
    for i in 0..detail_y {
        for j in 0..detail_x {
            let a = i * row + j;
            let b = a + 1;
            let c = (i + 1) * row + j + 1;
            let d = (i + 1) * row + j;

            buffers.faces.push([a, b, d]);
            buffers.faces.push([d, b, c]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::normals::face_normal;
    use approx::assert_abs_diff_eq;

    #[test]
    fn grid_dimensions() {
        let mut cache = GeometryCache::new();
        let g = make_torus(&mut cache, true, 0.25, 24, 16);
        assert_eq!(g.vertex_count(), 25 * 17);
        assert_eq!(g.faces().len(), 2 * 24 * 16);
    }

    #[test]
    fn normals_point_away_from_tube_centre() {
        let mut cache = GeometryCache::new();
        let g = make_torus(&mut cache, true, 0.3, 12, 8);
        for (p, n) in g.vertex_positions().iter().zip(g.vertex_normals()) {
            let tube_centre = Vec3::new(p.x, p.y, 0.0).normalize();
            assert_abs_diff_eq!((*p - tube_centre).length(), 0.3, epsilon = 1e-5);
            assert_abs_diff_eq!(n.dot((*p - tube_centre).normalize()), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn faces_agree_with_analytic_normals() {
        let mut cache = GeometryCache::new();
        let smooth = make_torus(&mut cache, true, 0.25, 16, 12);
        let positions = smooth.vertex_positions();
        for &face in smooth.faces() {
            let n = face_normal(positions, face);
            let analytic = smooth.vertex_normals()[face[0] as usize];
            assert!(n.dot(analytic) > 0.0, "face {face:?}");
        }
    }

    #[test]
    fn ratio_is_rounded_into_the_key() {
        let mut cache = GeometryCache::new();
        let a = make_torus(&mut cache, true, 0.250_001, 8, 8);
        let b = make_torus(&mut cache, true, 0.25, 8, 8);
        assert!(Rc::ptr_eq(&a, &b));
    }
}
