use glam::Vec2;

use super::shapes::{
    cuboid, ellipse, line, octahedron, plane, point, polygon, rectangle, sphere, tetrahedron,
    torus, triangle, truncated_cone,
};
use super::{GeometryKey, MeshBuffers};

/// Parameters of a truncated cone (cylinders and cones are special cases).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TruncatedCone {
    pub smooth_normals: bool,
    pub bottom_radius: f32,
    pub top_radius: f32,
    pub height: f32,
    pub detail_x: u32,
    pub detail_y: u32,
    pub top_cap: bool,
    pub bottom_cap: bool,
}

/// Every shape the builders know how to generate, with exactly the parameters that
/// shape its buffers.
///
/// 2D shapes are unit sized and centred on the origin. Line, triangle and polygon
/// carry coordinates relative to their own centre; the caller translates them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Primitive {
    Point,
    Line { from: Vec2, to: Vec2 },
    Triangle { vertices: [Vec2; 3] },
    Polygon { vertices: [Vec2; 4] },
    Rectangle,
    Ellipse { detail: u32 },
    Box { smooth_normals: bool },
    Plane { smooth_normals: bool },
    Sphere { smooth_normals: bool, detail_x: u32, detail_y: u32 },
    TruncatedCone(TruncatedCone),
    Torus { smooth_normals: bool, tube_ratio: f32, detail_x: u32, detail_y: u32 },
    Tetrahedron { smooth_normals: bool },
    Octahedron { smooth_normals: bool },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line { .. } => "line",
            Self::Triangle { .. } => "triangle",
            Self::Polygon { .. } => "polygon",
            Self::Rectangle => "rectangle",
            Self::Ellipse { .. } => "ellipse",
            Self::Box { .. } => "box",
            Self::Plane { .. } => "plane",
            Self::Sphere { .. } => "sphere",
            Self::TruncatedCone(_) => "truncated_cone",
            Self::Torus { .. } => "torus",
            Self::Tetrahedron { .. } => "tetrahedron",
            Self::Octahedron { .. } => "octahedron",
        }
    }

    /// 2D shapes are always flat shaded.
    pub fn smooth_normals(&self) -> bool {
        match *self {
            Self::Point
            | Self::Line { .. }
            | Self::Triangle { .. }
            | Self::Polygon { .. }
            | Self::Rectangle
            | Self::Ellipse { .. } => false,
            Self::Box { smooth_normals }
            | Self::Plane { smooth_normals }
            | Self::Sphere { smooth_normals, .. }
            | Self::Torus { smooth_normals, .. }
            | Self::Tetrahedron { smooth_normals }
            | Self::Octahedron { smooth_normals } => smooth_normals,
            Self::TruncatedCone(cone) => cone.smooth_normals,
        }
    }

    pub fn is_3d(&self) -> bool {
        matches!(
            self,
            Self::Box { .. }
                | Self::Plane { .. }
                | Self::Sphere { .. }
                | Self::TruncatedCone(_)
                | Self::Torus { .. }
                | Self::Tetrahedron { .. }
                | Self::Octahedron { .. }
        )
    }

    pub fn key(&self) -> GeometryKey {
        let key = GeometryKey::new(self.kind());
        match *self {
            Self::Point | Self::Rectangle => key,
            Self::Line { from, to } => key.point(from).point(to),
            Self::Triangle { vertices } => key.points(&vertices),
            Self::Polygon { vertices } => key.points(&vertices),
            Self::Ellipse { detail } => key.int(detail),
            Self::Box { smooth_normals }
            | Self::Plane { smooth_normals }
            | Self::Tetrahedron { smooth_normals }
            | Self::Octahedron { smooth_normals } => key.flag(smooth_normals),
            Self::Sphere { smooth_normals, detail_x, detail_y } => {
                key.flag(smooth_normals).int(detail_x).int(detail_y)
            }
            Self::TruncatedCone(c) => key
                .flag(c.smooth_normals)
                .float(c.bottom_radius)
                .float(c.top_radius)
                .float(c.height)
                .int(c.detail_x)
                .int(c.detail_y)
                .flag(c.top_cap)
                .flag(c.bottom_cap),
            Self::Torus { smooth_normals, tube_ratio, detail_x, detail_y } => key
                .flag(smooth_normals)
                .fixed(tube_ratio, 4)
                .int(detail_x)
                .int(detail_y),
        }
    }

    /// Fills `buffers` (faces, then vertices, then uvs, then normals).
    pub fn build(&self, buffers: &mut MeshBuffers) {
        let smooth = self.smooth_normals();
        match *self {
            Self::Point => point::build(buffers),
            Self::Line { from, to } => line::build(buffers, from, to),
            Self::Triangle { vertices } => triangle::build(buffers, vertices),
            Self::Polygon { vertices } => polygon::build(buffers, vertices),
            Self::Rectangle => rectangle::build(buffers),
            Self::Ellipse { detail } => ellipse::build(buffers, detail),
            Self::Box { .. } => cuboid::build(buffers, smooth),
            Self::Plane { .. } => plane::build(buffers, smooth),
            Self::Sphere { detail_x, detail_y, .. } => sphere::build(buffers, smooth, detail_x, detail_y),
            Self::TruncatedCone(ref params) => truncated_cone::build(buffers, params),
            Self::Torus { tube_ratio, detail_x, detail_y, .. } => {
                torus::build(buffers, smooth, tube_ratio, detail_x, detail_y)
            }
            Self::Tetrahedron { .. } => tetrahedron::build(buffers, smooth),
            Self::Octahedron { .. } => octahedron::build(buffers, smooth),
        }
    }
}
