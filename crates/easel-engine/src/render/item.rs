use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::{CornerVertex, Face, Geometry, GeometryId, NormalLayout};

/// Opaque handle to a material owned by the backend.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(pub u32);

/// What a backend needs to draw one mesh: its attributes plus identities it can
/// batch and cache GPU resources by.
pub trait RenderItem {
    fn geometry_id(&self) -> GeometryId;
    fn material_id(&self) -> MaterialId;

    fn has_smooth_normals(&self) -> bool;
    fn normal_layout(&self) -> NormalLayout;

    fn vertex_positions(&self) -> &[Vec3];
    fn vertex_normals(&self) -> &[Vec3];
    fn vertex_uvs(&self) -> &[Vec2];
    fn faces(&self) -> &[Face];

    /// Per-corner attribute stream, see [`Geometry::expanded_vertices`].
    fn expanded_vertices(&self) -> Vec<CornerVertex>;

    fn vertex_count(&self) -> usize {
        self.vertex_positions().len()
    }

    fn index_count(&self) -> usize {
        self.faces().len() * 3
    }
}

/// Call-scoped façade binding a shared geometry record to the active material.
///
/// Shapes borrow the record; backends that need it past the call clone the `Rc`
/// through [`Shape::shared_geometry`].
#[derive(Debug, Copy, Clone)]
pub struct Shape<'a> {
    geometry: &'a Rc<Geometry>,
    material: MaterialId,
}

impl<'a> Shape<'a> {
    #[inline]
    pub fn new(geometry: &'a Rc<Geometry>, material: MaterialId) -> Self {
        Self { geometry, material }
    }

    #[inline]
    pub fn geometry(&self) -> &'a Geometry {
        self.geometry
    }

    #[inline]
    pub fn shared_geometry(&self) -> Rc<Geometry> {
        Rc::clone(self.geometry)
    }
}

impl RenderItem for Shape<'_> {
    fn geometry_id(&self) -> GeometryId {
        self.geometry.id()
    }

    fn material_id(&self) -> MaterialId {
        self.material
    }

    fn has_smooth_normals(&self) -> bool {
        self.geometry.has_smooth_normals()
    }

    fn normal_layout(&self) -> NormalLayout {
        self.geometry.normal_layout()
    }

    fn vertex_positions(&self) -> &[Vec3] {
        self.geometry.vertex_positions()
    }

    fn vertex_normals(&self) -> &[Vec3] {
        self.geometry.vertex_normals()
    }

    fn vertex_uvs(&self) -> &[Vec2] {
        self.geometry.vertex_uvs()
    }

    fn faces(&self) -> &[Face] {
        self.geometry.faces()
    }

    fn expanded_vertices(&self) -> Vec<CornerVertex> {
        self.geometry.expanded_vertices()
    }
}
