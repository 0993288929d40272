//! Stroke geometry derived from a base shape's outline.
//!
//! Extrusions are built directly in world space (the base outline is transformed by
//! the caller's world matrix first) so the stroke width stays in world units no
//! matter how the shape was scaled. Results are transient records: they depend on
//! the world matrix and are never cached.
//!
//! A positive width grows the outline outward, a negative one inward. Inner strokes
//! emit each vertex pair in reverse order, so both kinds keep the outline's winding.

use std::f32::consts::TAU;

use glam::{Mat4, Vec3};

use super::normals::compute_flat_normals;
use super::record::centroid;
use super::{Face, Geometry};

/// Stroke around an ellipse fan: vertex 0 is the centre, the rest is the ring.
pub fn extrude_ellipse(world: &Mat4, base: &Geometry, width: f32) -> Geometry {
    let positions = base.vertex_positions();
    let (center, ring) = match positions.split_first() {
        Some((center, ring)) => (*center, ring),
        None => (Vec3::ZERO, positions),
    };
    extrude_ring("stroke|ellipse", world, ring, center, width)
}

/// Stroke around a closed outline (rectangle, triangle, quad polygon): every vertex
/// is on the ring and the direction is taken from the outline centroid.
pub fn extrude_polygon(world: &Mat4, base: &Geometry, width: f32) -> Geometry {
    let positions = base.vertex_positions();
    extrude_ring("stroke|polygon", world, positions, centroid(positions), width)
}

/// Offsets every ring vertex away from `center` and stitches the two rings.
pub fn extrude_ring(label: &str, world: &Mat4, ring: &[Vec3], center: Vec3, width: f32) -> Geometry {
    let center = world.transform_point3(center);
    Geometry::transient(label, false, |buffers| {
        buffers.faces = ring_faces(ring.len());
        for &local in ring {
            let inner = world.transform_point3(local);
            let outer = inner + (inner - center).normalize_or_zero() * width;
            if width < 0.0 {
                buffers.positions.extend([outer, inner]);
            } else {
                buffers.positions.extend([inner, outer]);
            }
        }
        buffers.normals = compute_flat_normals(&buffers.positions, &buffers.faces);
    })
}

/// Quad strip over `2 * ring_len` interleaved vertices, closed at the seam.
fn ring_faces(ring_len: usize) -> Vec<Face> {
    let n = (ring_len * 2) as u32;
    (0..n)
        .step_by(2)
        .flat_map(|i| [[i, i + 1, (i + 2) % n], [(i + 2) % n, i + 1, (i + 3) % n]])
        .collect()
}

/// Quad of total thickness `2 * width` around a two-vertex line.
///
/// Lines have no inside, so the sign of `width` is ignored.
pub fn extrude_line(world: &Mat4, base: &Geometry, width: f32) -> Geometry {
    let positions = base.vertex_positions();
    let from = world.transform_point3(positions.first().copied().unwrap_or_default());
    let to = world.transform_point3(positions.get(1).copied().unwrap_or_default());

    Geometry::transient("stroke|line", false, |buffers| {
        let along = (to - from).normalize_or_zero();
        let side = Vec3::Z.cross(along) * width.abs();

        buffers.faces = vec![[0, 1, 2], [0, 2, 3]];
        buffers.positions = vec![from - side, to - side, to + side, from + side];
        buffers.normals = compute_flat_normals(&buffers.positions, &buffers.faces);
    })
}

/// Disc of radius `width` around a point, with `detail` perimeter vertices.
///
/// The sign of `width` is ignored, as for lines.
pub fn extrude_point(world: &Mat4, base: &Geometry, width: f32, detail: u32) -> Geometry {
    let center = world.transform_point3(base.vertex_positions().first().copied().unwrap_or_default());

    Geometry::transient("stroke|point", false, |buffers| {
        buffers.positions.push(center);
        for t in 0..detail {
            let (s, c) = (t as f32 / detail as f32 * TAU).sin_cos();
            buffers.positions.push(center + Vec3::new(c, s, 0.0) * width.abs());
        }
        for t in 0..detail {
            let next = if t + 1 == detail { 1 } else { t + 2 };
            buffers.faces.push([0, t + 1, next]);
        }
        buffers.normals = compute_flat_normals(&buffers.positions, &buffers.faces);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryCache;
    use crate::geometry::normals::face_normal;
    use crate::geometry::shapes::{make_ellipse, make_line, make_point, make_rectangle};
    use approx::assert_abs_diff_eq;
    use glam::Vec2;

    // ── ring topology ─────────────────────────────────────────────────────

    #[test]
    fn ring_closes_at_the_seam() {
        let mut cache = GeometryCache::new();
        let base = make_ellipse(&mut cache, 8);
        let stroke = extrude_ellipse(&Mat4::IDENTITY, &base, 2.0);

        assert_eq!(stroke.vertex_count(), 16);
        assert_eq!(stroke.faces().len(), 16);
        assert_eq!(stroke.faces()[14], [14, 15, 0]);
        assert_eq!(stroke.faces()[15], [0, 15, 1]);
        assert!(stroke.faces().iter().flatten().all(|&i| i < 16));
    }

    #[test]
    fn strokes_are_never_cached() {
        let mut cache = GeometryCache::new();
        let base = make_rectangle(&mut cache);
        let a = extrude_polygon(&Mat4::IDENTITY, &base, 1.0);
        let b = extrude_polygon(&Mat4::IDENTITY, &base, 1.0);

        assert_ne!(a.id(), b.id());
        assert!(a.id().is_transient());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn empty_outline_gives_empty_stroke() {
        let stroke = extrude_ring("empty", &Mat4::IDENTITY, &[], Vec3::ZERO, 1.0);
        assert_eq!(stroke.vertex_count(), 0);
        assert!(stroke.faces().is_empty());
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn outer_stroke_width_is_in_world_units() {
        let mut cache = GeometryCache::new();
        let base = make_ellipse(&mut cache, 16);
        let world = Mat4::from_translation(Vec3::new(50.0, 20.0, 0.0)) * Mat4::from_scale(Vec3::splat(100.0));
        let stroke = extrude_ellipse(&world, &base, 4.0);

        let center = Vec3::new(50.0, 20.0, 0.0);
        for pair in stroke.vertex_positions().chunks(2) {
            assert_abs_diff_eq!((pair[0] - center).length(), 50.0, epsilon = 1e-3);
            assert_abs_diff_eq!((pair[1] - center).length(), 54.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn inner_stroke_swaps_pairs_and_keeps_winding() {
        let mut cache = GeometryCache::new();
        let base = make_rectangle(&mut cache);
        let world = Mat4::from_scale(Vec3::new(10.0, 10.0, 1.0));

        let outer = extrude_polygon(&world, &base, 1.0);
        let inner = extrude_polygon(&world, &base, -1.0);

        // The outline vertex comes first for outer strokes, second for inner ones.
        assert!(outer.vertex_positions()[0].length() < outer.vertex_positions()[1].length());
        assert!(inner.vertex_positions()[0].length() < inner.vertex_positions()[1].length());
        assert_abs_diff_eq!(inner.vertex_positions()[1].x, -5.0, epsilon = 1e-6);

        for stroke in [&outer, &inner] {
            for &face in stroke.faces() {
                assert!(face_normal(stroke.vertex_positions(), face).z > 0.0);
            }
        }
    }

    #[test]
    fn line_stroke_is_a_quad_around_the_segment() {
        let mut cache = GeometryCache::new();
        let base = make_line(&mut cache, Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0));
        let stroke = extrude_line(&Mat4::IDENTITY, &base, 2.0);

        assert_eq!(stroke.vertex_count(), 4);
        assert_eq!(stroke.vertex_positions()[0], Vec3::new(-5.0, -2.0, 0.0));
        assert_eq!(stroke.vertex_positions()[2], Vec3::new(5.0, 2.0, 0.0));
        assert_eq!(face_normal(stroke.vertex_positions(), stroke.faces()[0]), Vec3::Z);
    }

    #[test]
    fn line_and_point_strokes_ignore_width_sign() {
        let mut cache = GeometryCache::new();
        let line = make_line(&mut cache, Vec2::new(-5.0, 0.0), Vec2::new(5.0, 0.0));
        let point = make_point(&mut cache);

        let outer = extrude_line(&Mat4::IDENTITY, &line, 2.0);
        let inner = extrude_line(&Mat4::IDENTITY, &line, -2.0);
        assert_eq!(outer.vertex_positions(), inner.vertex_positions());

        let outer = extrude_point(&Mat4::IDENTITY, &point, 1.0, 6);
        let inner = extrude_point(&Mat4::IDENTITY, &point, -1.0, 6);
        assert_eq!(outer.vertex_positions(), inner.vertex_positions());
    }

    #[test]
    fn point_stroke_is_a_disc() {
        let mut cache = GeometryCache::new();
        let base = make_point(&mut cache);
        let world = Mat4::from_translation(Vec3::new(3.0, 4.0, 0.0));
        let stroke = extrude_point(&world, &base, 1.5, 12);

        assert_eq!(stroke.vertex_count(), 13);
        assert_eq!(stroke.faces().len(), 12);
        assert_eq!(stroke.vertex_positions()[0], Vec3::new(3.0, 4.0, 0.0));
        for p in &stroke.vertex_positions()[1..] {
            assert_abs_diff_eq!((*p - Vec3::new(3.0, 4.0, 0.0)).length(), 1.5, epsilon = 1e-5);
        }
    }
}
