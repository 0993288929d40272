//! Feature-edge wireframes, the line stroke of solid shapes.
//!
//! Vertices are welded by position first so the per-face copies of a flat-shaded
//! solid collapse onto one corner. An edge is kept when it borders a single face or
//! when its faces are not coplanar: diagonals splitting a planar quad and the spokes
//! of a cap fan drop out. Zero-area faces contribute nothing.

use std::collections::HashMap;
use std::rc::Rc;

use glam::Vec3;

use super::normals::{face_normal, weld};
use super::{Face, Geometry, GeometryCache, GeometryKey};

/// Weld precision in decimals, applied in the unit frame builders emit.
pub const EDGE_WELD_PRECISION: u32 = 3;

/// Faces whose normals agree this closely lie in one plane.
const COPLANAR_DOT: f32 = 0.9999;

struct Edge {
    ends: [Vec3; 2],
    normals: Vec<Vec3>,
}

impl Edge {
    fn is_feature(&self) -> bool {
        match self.normals.split_first() {
            Some((first, rest)) => rest.is_empty() || rest.iter().any(|n| n.dot(*first) < COPLANAR_DOT),
            None => false,
        }
    }
}

/// Feature edges of a triangle mesh as endpoint pairs, in first-seen order.
pub fn feature_edges(positions: &[Vec3], faces: &[Face], precision: u32) -> Vec<[Vec3; 2]> {
    let (slots, _) = weld(positions, precision);

    let mut edges: Vec<Edge> = Vec::new();
    let mut lookup: HashMap<(usize, usize), usize> = HashMap::new();

    for &face in faces {
        let normal = face_normal(positions, face);
        if !normal.is_normalized() {
            continue;
        }
        for (a, b) in [(face[0], face[1]), (face[1], face[2]), (face[2], face[0])] {
            let (sa, sb) = (slots[a as usize], slots[b as usize]);
            if sa == sb {
                continue;
            }
            let index = *lookup.entry((sa.min(sb), sa.max(sb))).or_insert_with(|| {
                edges.push(Edge {
                    ends: [positions[a as usize], positions[b as usize]],
                    normals: Vec::new(),
                });
                edges.len() - 1
            });
            edges[index].normals.push(normal);
        }
    }

    edges.into_iter().filter(Edge::is_feature).map(|edge| edge.ends).collect()
}

/// Wireframe of `base`: two vertices per feature edge and no faces, meant for a
/// line-list submission with the same world matrix as the base.
///
/// Keyed on the base record, so each cached solid builds its wireframe once.
pub fn make_edges(cache: &mut GeometryCache, base: &Geometry) -> Rc<Geometry> {
    let key = GeometryKey::new("edges").nested(base.key());
    cache.get_or_build(key, false, |buffers| {
        buffers.positions = feature_edges(base.vertex_positions(), base.faces(), EDGE_WELD_PRECISION)
            .into_iter()
            .flatten()
            .collect();
    })
}
