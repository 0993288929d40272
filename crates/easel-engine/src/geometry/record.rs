use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{Vec2, Vec3};

use super::GeometryKey;

/// Triangle as three indices into the position array.
pub type Face = [u32; 3];

const TRANSIENT_BIT: u64 = 1 << 63;

/// Stable identity of a geometry record.
///
/// Cached records derive their id from the cache key, so two caches agree on the
/// id of the same primitive. Transient records (stroke extrusions) draw from a
/// process-wide counter and have the top bit set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GeometryId(u64);

impl GeometryId {
    pub fn from_key(key: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        Self(hasher.finish() & !TRANSIENT_BIT)
    }

    pub fn transient() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed) | TRANSIENT_BIT)
    }

    #[inline]
    pub fn is_transient(self) -> bool {
        self.0 & TRANSIENT_BIT != 0
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// How the normal array of a record lines up with its other attributes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum NormalLayout {
    /// One normal per vertex position; the record can be drawn indexed.
    PerVertex,
    /// One normal per face corner (`3 * faces.len()`); consumers must expand the
    /// position/uv streams per corner before drawing.
    PerFaceCorner,
}

/// Attribute buffers of a mesh while it is being constructed.
///
/// Builders receive `&mut MeshBuffers` inside a creation closure; once the closure
/// returns the buffers are frozen inside a [`Geometry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub faces: Vec<Face>,
}

impl MeshBuffers {
    /// Checks the structural invariants shared by every record.
    pub fn is_consistent(&self, layout: NormalLayout) -> bool {
        let vertex_count = self.positions.len();

        let faces_ok = self
            .faces
            .iter()
            .all(|face| face.iter().all(|&i| (i as usize) < vertex_count));

        let uvs_ok = self.uvs.is_empty() || self.uvs.len() == vertex_count;

        let normals_ok = match layout {
            NormalLayout::PerVertex => self.normals.is_empty() || self.normals.len() == vertex_count,
            NormalLayout::PerFaceCorner => {
                self.normals.is_empty() || self.normals.len() == self.faces.len() * 3
            }
        };

        faces_ok && uvs_ok && normals_ok
    }
}

/// Immutable mesh record: positions, normals, uvs and triangular faces.
///
/// Records are created once per cache key and shared behind `Rc`. Nothing can
/// mutate a record after its creation closure has run.
#[derive(Debug, PartialEq)]
pub struct Geometry {
    id: GeometryId,
    key: String,
    smooth_normals: bool,
    buffers: MeshBuffers,
}

impl Geometry {
    /// Builds a record identified by `key` by running `creation_fn` on empty buffers.
    pub fn new(
        key: impl Into<GeometryKey>,
        smooth_normals: bool,
        creation_fn: impl FnOnce(&mut MeshBuffers),
    ) -> Self {
        let key: GeometryKey = key.into();
        let id = GeometryId::from_key(key.as_str());
        Self::assemble(id, key.into(), smooth_normals, creation_fn)
    }

    /// Builds a one-off record that is never meant to be inserted into a cache.
    ///
    /// `label` only serves diagnostics.
    pub fn transient(
        label: &str,
        smooth_normals: bool,
        creation_fn: impl FnOnce(&mut MeshBuffers),
    ) -> Self {
        Self::assemble(GeometryId::transient(), label.to_owned(), smooth_normals, creation_fn)
    }

    fn assemble(
        id: GeometryId,
        key: String,
        smooth_normals: bool,
        creation_fn: impl FnOnce(&mut MeshBuffers),
    ) -> Self {
        let mut buffers = MeshBuffers::default();
        creation_fn(&mut buffers);

        let geometry = Self { id, key, smooth_normals, buffers };
        debug_assert!(
            geometry.buffers.is_consistent(geometry.normal_layout()),
            "geometry `{}` violates its attribute invariants",
            geometry.key
        );
        geometry
    }

    #[inline]
    pub fn id(&self) -> GeometryId {
        self.id
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn has_smooth_normals(&self) -> bool {
        self.smooth_normals
    }

    #[inline]
    pub fn normal_layout(&self) -> NormalLayout {
        if self.smooth_normals {
            NormalLayout::PerVertex
        } else {
            NormalLayout::PerFaceCorner
        }
    }

    #[inline]
    pub fn vertex_positions(&self) -> &[Vec3] {
        &self.buffers.positions
    }

    #[inline]
    pub fn vertex_normals(&self) -> &[Vec3] {
        &self.buffers.normals
    }

    #[inline]
    pub fn vertex_uvs(&self) -> &[Vec2] {
        &self.buffers.uvs
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.buffers.faces
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.buffers.positions.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.buffers.faces.len() * 3
    }

    /// Flattened triangle index list.
    pub fn indices(&self) -> Vec<u32> {
        self.buffers.faces.iter().flatten().copied().collect()
    }

    /// Arithmetic mean of all vertex positions (local space).
    pub fn centroid(&self) -> Vec3 {
        centroid(&self.buffers.positions)
    }

    /// Per-corner attribute stream (`3 * faces.len()` entries, in face order).
    ///
    /// Works for both layouts; for `PerFaceCorner` this is the only way to pair
    /// normals with positions. Missing normals or uvs come out as zero.
    pub fn expanded_vertices(&self) -> Vec<CornerVertex> {
        let MeshBuffers { positions, normals, uvs, faces } = &self.buffers;
        let layout = self.normal_layout();

        faces
            .iter()
            .flatten()
            .enumerate()
            .map(|(corner, &index)| {
                let index = index as usize;
                let normal = match layout {
                    NormalLayout::PerVertex => normals.get(index),
                    NormalLayout::PerFaceCorner => normals.get(corner),
                };
                CornerVertex {
                    position: positions[index],
                    normal: normal.copied().unwrap_or(Vec3::ZERO),
                    uv: uvs.get(index).copied().unwrap_or(Vec2::ZERO),
                }
            })
            .collect()
    }
}

/// One fully resolved corner of an expanded mesh.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

pub(crate) fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle(buffers: &mut MeshBuffers) {
        buffers.positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        buffers.faces = vec![[0, 1, 2]];
    }

    #[test]
    fn cached_ids_follow_the_key() {
        let a = Geometry::new("triangle|test", false, triangle);
        let b = Geometry::new("triangle|test", false, triangle);
        let c = Geometry::new("triangle|other", false, triangle);

        assert_eq!(a.id(), b.id());
        assert_ne!(a.id(), c.id());
        assert!(!a.id().is_transient());
    }

    #[test]
    fn transient_ids_are_unique() {
        let a = Geometry::transient("stroke", false, triangle);
        let b = Geometry::transient("stroke", false, triangle);

        assert_ne!(a.id(), b.id());
        assert!(a.id().is_transient());
    }

    #[test]
    fn layout_follows_smooth_flag() {
        assert_eq!(Geometry::new("a", true, triangle).normal_layout(), NormalLayout::PerVertex);
        assert_eq!(Geometry::new("b", false, triangle).normal_layout(), NormalLayout::PerFaceCorner);
    }

    #[test]
    fn indices_flatten_faces() {
        let g = Geometry::new("quad", false, |b| {
            b.positions = vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y];
            b.faces = vec![[0, 1, 2], [0, 2, 3]];
        });
        assert_eq!(g.indices(), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(g.index_count(), 6);
    }

    #[test]
    fn consistency_rejects_out_of_range_faces() {
        let buffers = MeshBuffers {
            positions: vec![Vec3::ZERO, Vec3::X],
            faces: vec![[0, 1, 2]],
            ..Default::default()
        };
        assert!(!buffers.is_consistent(NormalLayout::PerVertex));
    }

    #[test]
    fn consistency_checks_corner_normals() {
        let mut buffers = MeshBuffers::default();
        triangle(&mut buffers);
        buffers.normals = vec![Vec3::Z; 3];
        assert!(buffers.is_consistent(NormalLayout::PerFaceCorner));

        buffers.normals.pop();
        assert!(!buffers.is_consistent(NormalLayout::PerFaceCorner));
    }

    #[test]
    fn expansion_pairs_corner_normals() {
        let g = Geometry::new("quad|flat", false, |b| {
            b.positions = vec![Vec3::ZERO, Vec3::X, Vec3::ONE, Vec3::Y];
            b.faces = vec![[0, 1, 2], [0, 2, 3]];
            b.normals = vec![Vec3::Z, Vec3::Z, Vec3::Z, -Vec3::Z, -Vec3::Z, -Vec3::Z];
        });

        let corners = g.expanded_vertices();
        assert_eq!(corners.len(), 6);
        assert_eq!(corners[3].position, Vec3::ZERO);
        assert_eq!(corners[3].normal, -Vec3::Z);
        assert_eq!(corners[5].position, Vec3::Y);
        assert_eq!(corners[5].uv, Vec2::ZERO);
    }

    #[test]
    fn expansion_reads_vertex_normals_when_smooth() {
        let g = Geometry::new("tri|smooth", true, |b| {
            triangle(b);
            b.normals = vec![Vec3::X, Vec3::Y, Vec3::Z];
        });

        let normals: Vec<_> = g.expanded_vertices().iter().map(|c| c.normal).collect();
        assert_eq!(normals, vec![Vec3::X, Vec3::Y, Vec3::Z]);
    }

    #[test]
    fn centroid_of_empty_is_origin() {
        assert_eq!(centroid(&[]), Vec3::ZERO);
        assert_eq!(centroid(&[Vec3::ZERO, Vec3::new(2.0, 4.0, 0.0)]), Vec3::new(1.0, 2.0, 0.0));
    }
}
