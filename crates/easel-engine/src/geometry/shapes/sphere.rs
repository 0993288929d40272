use std::f32::consts::{PI, TAU};
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::compute_flat_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive};

/// Unit sphere as a `(detail_x + 1) x (detail_y + 1)` latitude/longitude grid.
///
/// The seam column and both pole rows are duplicated so uvs stay continuous.
pub fn make_sphere(
    cache: &mut GeometryCache,
    smooth_normals: bool,
    detail_x: u32,
    detail_y: u32,
) -> Rc<Geometry> {
    cache.make(&Primitive::Sphere { smooth_normals, detail_x, detail_y })
}

pub(crate) fn build(buffers: &mut MeshBuffers, smooth: bool, detail_x: u32, detail_y: u32) {
    make_faces(buffers, detail_x, detail_y);
    make_vertices(buffers, detail_x, detail_y);
    make_uvs(buffers, detail_x, detail_y);
    buffers.normals = if smooth {
        buffers.positions.iter().map(|p| p.normalize_or_zero()).collect()
    } else {
        compute_flat_normals(&buffers.positions, &buffers.faces)
    };
}

fn make_faces(buffers: &mut MeshBuffers, detail_x: u32, detail_y: u32) {
    let row = detail_x + 1;
    for i in 0..detail_y {
        for j in 0..detail_x {
            let top_left = i * row + j;
            let top_right = top_left + 1;
            let bottom_left = (i + 1) * row + j;
            let bottom_right = bottom_left + 1;

            buffers.faces.push([bottom_left, top_left, top_right]);
            buffers.faces.push([bottom_right, bottom_left, top_right]);
        }
    }
}

fn grid(detail_x: u32, detail_y: u32) -> impl Iterator<Item = Vec2> {
    (0..=detail_y).flat_map(move |i| {
        let v = i as f32 / detail_y as f32;
        (0..=detail_x).map(move |j| Vec2::new(j as f32 / detail_x as f32, v))
    })
}

fn make_vertices(buffers: &mut MeshBuffers, detail_x: u32, detail_y: u32) {
    buffers.positions.extend(grid(detail_x, detail_y).map(|uv| {
        let phi = PI * uv.y - PI / 2.0;
        let theta = TAU * uv.x;
        // Pole rows collapse exactly onto the axis.
        let ring = if uv.y <= 0.0 || uv.y >= 1.0 { 0.0 } else { phi.cos() };
        Vec3::new(ring * theta.sin(), phi.sin(), ring * theta.cos())
    }));
}

fn make_uvs(buffers: &mut MeshBuffers, detail_x: u32, detail_y: u32) {
    buffers.uvs.extend(grid(detail_x, detail_y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::normals::face_normal;
    use approx::assert_abs_diff_eq;

    #[test]
    fn repeated_request_returns_same_record() {
        let mut cache = GeometryCache::new();
        let a = make_sphere(&mut cache, true, 8, 8);
        let b = make_sphere(&mut cache, true, 8, 8);

        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(a.vertex_count(), 81);
        assert_eq!(a.faces().len(), 2 * 8 * 8);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn vertices_lie_on_unit_sphere() {
        let mut cache = GeometryCache::new();
        let g = make_sphere(&mut cache, true, 12, 6);
        for (p, n) in g.vertex_positions().iter().zip(g.vertex_normals()) {
            assert_abs_diff_eq!(p.length(), 1.0, epsilon = 1e-5);
            assert_abs_diff_eq!(p.dot(*n), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn non_degenerate_faces_point_outward() {
        let mut cache = GeometryCache::new();
        let g = make_sphere(&mut cache, false, 12, 8);
        for &face in g.faces() {
            let n = face_normal(g.vertex_positions(), face);
            let center: Vec3 = face.iter().map(|&i| g.vertex_positions()[i as usize]).sum();
            assert!(n == Vec3::ZERO || n.dot(center) > 0.0);
        }
    }
}
