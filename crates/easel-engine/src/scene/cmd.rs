use std::rc::Rc;

use glam::{Mat4, Vec3};

use crate::geometry::Geometry;
use crate::paint::Color;
use crate::render::{MaterialId, MeshData, Pass, Shape, Submission, Topology};

/// Which backend entry point received a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Channel {
    Shapes2d,
    Strokes2d,
    Meshes3d,
}

/// Owned copy of one submission.
///
/// The geometry is kept alive through its `Rc`, so the command stays valid after the
/// cache is cleared.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub channel: Channel,
    pub pass: Pass,
    pub topology: Topology,
    pub geometry: Rc<Geometry>,
    pub material: MaterialId,
    pub world: Mat4,
    pub color: Color,
}

impl DrawCmd {
    pub fn from_submission(channel: Channel, submission: &Submission<'_>) -> Self {
        Self {
            channel,
            pass: submission.pass,
            topology: submission.topology,
            geometry: submission.shape.shared_geometry(),
            material: submission.material(),
            world: submission.world,
            color: submission.color,
        }
    }

    /// Vertex positions moved into world space, the way a CPU batcher uploads them.
    pub fn world_positions(&self) -> Vec<Vec3> {
        self.geometry
            .vertex_positions()
            .iter()
            .map(|&p| self.world.transform_point3(p))
            .collect()
    }

    /// Local-space upload streams for this command's geometry.
    pub fn mesh(&self) -> MeshData {
        MeshData::from_item(&Shape::new(&self.geometry, self.material))
    }
}
