//! Flat, smooth and welded normal generation.
//!
//! All helpers are total: degenerate triangles produce zero normals instead of
//! NaNs, and accumulators that cancel out are kept at zero.

use std::collections::HashMap;

use glam::Vec3;

use super::{Face, MeshBuffers};

/// Unit normal of a counter-clockwise triangle, or the raw (zero) cross product
/// when the triangle has no area.
pub fn face_normal(positions: &[Vec3], face: Face) -> Vec3 {
    let [a, b, c] = face.map(|i| positions[i as usize]);
    let n = (b - a).cross(c - a);
    n.try_normalize().unwrap_or_else(|| {
        log::trace!("degenerate face {face:?}");
        n
    })
}

/// One face normal per triangle corner (`3 * faces.len()` entries).
pub fn compute_flat_normals(positions: &[Vec3], faces: &[Face]) -> Vec<Vec3> {
    faces
        .iter()
        .flat_map(|&face| [face_normal(positions, face); 3])
        .collect()
}

/// One normal per vertex: the normalized sum of the adjacent face normals.
pub fn compute_smooth_normals(positions: &[Vec3], faces: &[Face]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for &face in faces {
        let n = face_normal(positions, face);
        for i in face {
            normals[i as usize] += n;
        }
    }
    normalize_all(&mut normals);
    normals
}

pub fn compute_normals(positions: &[Vec3], faces: &[Face], smooth: bool) -> Vec<Vec3> {
    if smooth {
        compute_smooth_normals(positions, faces)
    } else {
        compute_flat_normals(positions, faces)
    }
}

/// Smooth normals shared across vertices that sit at the same position once rounded
/// to `precision` decimals.
///
/// Topology is untouched: every vertex keeps its own slot, but coincident vertices
/// (e.g. the three copies of a box corner) end up with the same normal.
pub fn compute_welded_normals(positions: &[Vec3], faces: &[Face], precision: u32) -> Vec<Vec3> {
    let (slots, slot_count) = weld(positions, precision);

    let mut accum = vec![Vec3::ZERO; slot_count];
    for &face in faces {
        let n = face_normal(positions, face);
        for i in face {
            accum[slots[i as usize]] += n;
        }
    }
    normalize_all(&mut accum);

    slots.into_iter().map(|slot| accum[slot]).collect()
}

/// Maps every vertex to a shared slot by its position rounded to `precision`
/// decimals. Slots are numbered in first-seen order; returns the slots and their count.
pub(crate) fn weld(positions: &[Vec3], precision: u32) -> (Vec<usize>, usize) {
    let scale = 10f32.powi(precision as i32);
    let snap = |p: Vec3| (p * scale).round().as_ivec3().to_array();

    let mut groups: HashMap<[i32; 3], usize> = HashMap::new();
    let slots = positions
        .iter()
        .map(|&p| {
            let next = groups.len();
            *groups.entry(snap(p)).or_insert(next)
        })
        .collect();
    (slots, groups.len())
}

/// Fills `buffers.normals` for the given smoothing mode.
pub(crate) fn apply_normals(buffers: &mut MeshBuffers, smooth: bool) {
    buffers.normals = compute_normals(&buffers.positions, &buffers.faces, smooth);
}

fn normalize_all(normals: &mut [Vec3]) {
    for n in normals {
        if let Some(unit) = n.try_normalize() {
            *n = unit;
        }
    }
}
