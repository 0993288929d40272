use std::collections::HashMap;
use std::rc::Rc;

use super::{Geometry, GeometryKey, MeshBuffers, Primitive};

/// Hit/miss counters for diagnostics.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Keyed store of built geometry.
///
/// At most one record is ever built per key; later requests share it through `Rc`.
/// There is no eviction: records live until [`GeometryCache::clear`] or drop.
#[derive(Debug, Default)]
pub struct GeometryCache {
    geometries: HashMap<String, Rc<Geometry>>,
    stats: CacheStats,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: &str) -> bool {
        self.geometries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<Rc<Geometry>> {
        self.geometries.get(key).cloned()
    }

    /// Inserts `geometry` under its own key unless that key is taken, and returns
    /// whichever record ends up stored.
    pub fn add_new(&mut self, geometry: Geometry) -> Rc<Geometry> {
        let entry = self
            .geometries
            .entry(geometry.key().to_owned())
            .or_insert_with(|| Rc::new(geometry));
        Rc::clone(entry)
    }

    /// Returns the record for `key`, running `creation_fn` only on the first request.
    pub fn get_or_build(
        &mut self,
        key: GeometryKey,
        smooth_normals: bool,
        creation_fn: impl FnOnce(&mut MeshBuffers),
    ) -> Rc<Geometry> {
        if let Some(existing) = self.geometries.get(key.as_str()) {
            self.stats.hits += 1;
            log::trace!("geometry cache hit: {key}");
            return Rc::clone(existing);
        }

        self.stats.misses += 1;
        let geometry = Geometry::new(key, smooth_normals, creation_fn);
        log::debug!(
            "built geometry `{}` ({} vertices, {} faces)",
            geometry.key(),
            geometry.vertex_count(),
            geometry.faces().len()
        );
        self.add_new(geometry)
    }

    /// Builds (or fetches) the geometry described by `primitive`.
    pub fn make(&mut self, primitive: &Primitive) -> Rc<Geometry> {
        self.get_or_build(primitive.key(), primitive.smooth_normals(), |buffers| {
            primitive.build(buffers)
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops every record owned by the cache. Outstanding `Rc`s stay valid.
    pub fn clear(&mut self) {
        log::debug!("clearing geometry cache ({} entries)", self.geometries.len());
        self.geometries.clear();
        self.stats = CacheStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use std::cell::Cell;

    fn unit_triangle(buffers: &mut MeshBuffers) {
        buffers.positions = vec![Vec3::ZERO, Vec3::X, Vec3::Y];
        buffers.faces = vec![[0, 1, 2]];
    }

    // ── lookups ───────────────────────────────────────────────────────────

    #[test]
    fn empty_cache_misses() {
        let cache = GeometryCache::new();
        assert!(!cache.has("box|0"));
        assert!(cache.get("box|0").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn add_new_is_idempotent_on_collision() {
        let mut cache = GeometryCache::new();
        let first = cache.add_new(Geometry::new("tri", false, unit_triangle));
        let second = cache.add_new(Geometry::new("tri", false, |b| {
            b.positions = vec![Vec3::ONE];
        }));

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.vertex_count(), 3);
        assert_eq!(cache.len(), 1);
    }

    // ── get_or_build ──────────────────────────────────────────────────────

    #[test]
    fn builds_once_per_key() {
        let mut cache = GeometryCache::new();
        let builds = Cell::new(0);

        let a = cache.get_or_build(GeometryKey::new("tri"), false, |b| {
            builds.set(builds.get() + 1);
            unit_triangle(b);
        });
        let b = cache.get_or_build(GeometryKey::new("tri"), false, |b| {
            builds.set(builds.get() + 1);
            unit_triangle(b);
        });

        assert_eq!(builds.get(), 1);
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert!(cache.has("tri"));
    }

    #[test]
    fn make_discriminates_parameters() {
        let mut cache = GeometryCache::new();
        let coarse = cache.make(&Primitive::Sphere { smooth_normals: true, detail_x: 4, detail_y: 4 });
        let fine = cache.make(&Primitive::Sphere { smooth_normals: true, detail_x: 8, detail_y: 4 });
        let flat = cache.make(&Primitive::Sphere { smooth_normals: false, detail_x: 4, detail_y: 4 });

        assert!(!Rc::ptr_eq(&coarse, &fine));
        assert!(!Rc::ptr_eq(&coarse, &flat));
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn clear_keeps_outstanding_records_alive() {
        let mut cache = GeometryCache::new();
        let held = cache.make(&Primitive::Rectangle);
        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(held.vertex_count(), 4);
        assert_eq!(cache.stats(), CacheStats::default());
    }
}
