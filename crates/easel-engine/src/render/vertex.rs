//! Interleaved vertex format for GPU backends.

use bytemuck::{Pod, Zeroable};

use super::RenderItem;
use crate::geometry::NormalLayout;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3, 2 => Float32x2];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Blend state matching the premultiplied colours the engine submits.
pub fn premultiplied_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState { color: component, alpha: component }
}

/// Upload-ready vertex and index streams for one render item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Interleaves an item's attributes.
    ///
    /// Smooth items stay indexed. Flat items are expanded per face corner so each
    /// corner can carry its face normal. Items without faces (lines, points) emit
    /// their vertices in order.
    pub fn from_item<I: RenderItem + ?Sized>(item: &I) -> Self {
        if item.faces().is_empty() {
            let uvs = item.vertex_uvs();
            let vertices: Vec<Vertex> = item
                .vertex_positions()
                .iter()
                .enumerate()
                .map(|(i, p)| Vertex {
                    position: p.to_array(),
                    normal: [0.0; 3],
                    uv: uvs.get(i).map_or([0.0; 2], |uv| uv.to_array()),
                })
                .collect();
            let indices = (0..vertices.len() as u32).collect();
            return Self { vertices, indices };
        }

        match item.normal_layout() {
            NormalLayout::PerVertex => {
                let normals = item.vertex_normals();
                let uvs = item.vertex_uvs();
                let vertices = item
                    .vertex_positions()
                    .iter()
                    .enumerate()
                    .map(|(i, p)| Vertex {
                        position: p.to_array(),
                        normal: normals.get(i).map_or([0.0; 3], |n| n.to_array()),
                        uv: uvs.get(i).map_or([0.0; 2], |uv| uv.to_array()),
                    })
                    .collect();
                let indices = item.faces().iter().flatten().copied().collect();
                Self { vertices, indices }
            }
            NormalLayout::PerFaceCorner => {
                let vertices: Vec<Vertex> = item
                    .expanded_vertices()
                    .into_iter()
                    .map(|c| Vertex {
                        position: c.position.to_array(),
                        normal: c.normal.to_array(),
                        uv: c.uv.to_array(),
                    })
                    .collect();
                let indices = (0..vertices.len() as u32).collect();
                Self { vertices, indices }
            }
        }
    }

    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryCache;
    use crate::geometry::shapes::{make_box, make_line, make_sphere};
    use crate::render::{MaterialId, Shape};
    use glam::Vec2;

    #[test]
    fn layout_stride_covers_all_attributes() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.attributes.len(), 3);
        assert_eq!(layout.attributes[2].offset, 24);
    }

    #[test]
    fn smooth_mesh_stays_indexed() {
        let mut cache = GeometryCache::new();
        let sphere = make_sphere(&mut cache, true, 8, 8);
        let mesh = MeshData::from_item(&Shape::new(&sphere, MaterialId(0)));

        assert_eq!(mesh.vertices.len(), 81);
        assert_eq!(mesh.indices.len(), 8 * 8 * 6);
        assert_eq!(mesh.vertex_bytes().len(), 81 * 32);
    }

    #[test]
    fn flat_mesh_is_expanded_per_corner() {
        let mut cache = GeometryCache::new();
        let cube = make_box(&mut cache, false);
        let mesh = MeshData::from_item(&Shape::new(&cube, MaterialId(0)));

        assert_eq!(mesh.vertices.len(), 36);
        assert_eq!(mesh.indices, (0..36).collect::<Vec<u32>>());
        assert_eq!(mesh.vertices[0].normal, [0.0, 0.0, 1.0]);
        assert_eq!(mesh.index_bytes().len(), 36 * 4);
    }

    #[test]
    fn lines_emit_vertices_in_order() {
        let mut cache = GeometryCache::new();
        let line = make_line(&mut cache, Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0));
        let mesh = MeshData::from_item(&Shape::new(&line, MaterialId(0)));

        assert_eq!(mesh.indices, vec![0, 1]);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[1].uv, [1.0, 0.0]);
    }
}
