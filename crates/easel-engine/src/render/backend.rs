use anyhow::Result;
use glam::Mat4;

use super::{MaterialId, RenderItem, Shape};
use crate::paint::Color;

/// Primitive assembly for a submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Topology {
    Triangles,
    Lines,
    Points,
}

impl Topology {
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Self::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Self::Lines => wgpu::PrimitiveTopology::LineList,
            Self::Points => wgpu::PrimitiveTopology::PointList,
        }
    }
}

/// Which brush setting produced a submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pass {
    Fill,
    Stroke,
    InnerStroke,
}

/// One render item handed to the backend.
///
/// `world` places the shape's local geometry. Stroke extrusions are already in world
/// space and arrive with the identity matrix.
#[derive(Debug, Copy, Clone)]
pub struct Submission<'a> {
    pub topology: Topology,
    pub pass: Pass,
    pub shape: Shape<'a>,
    pub world: Mat4,
    pub color: Color,
}

impl Submission<'_> {
    #[inline]
    pub fn material(&self) -> MaterialId {
        self.shape.material_id()
    }
}

/// Consumer of render items (a GPU batcher, a recorder, ...).
///
/// Errors propagate unchanged out of the drawing call that caused them.
pub trait RenderBackend {
    /// Material the next submissions are drawn with.
    fn active_material(&self) -> Result<MaterialId>;

    fn submit_2d(&mut self, submission: Submission<'_>) -> Result<()>;
    fn submit_3d(&mut self, submission: Submission<'_>) -> Result<()>;
    fn submit_stroke_2d(&mut self, submission: Submission<'_>) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_maps_to_wgpu_lists() {
        assert_eq!(Topology::Triangles.to_wgpu(), wgpu::PrimitiveTopology::TriangleList);
        assert_eq!(Topology::Lines.to_wgpu(), wgpu::PrimitiveTopology::LineList);
        assert_eq!(Topology::Points.to_wgpu(), wgpu::PrimitiveTopology::PointList);
    }
}
