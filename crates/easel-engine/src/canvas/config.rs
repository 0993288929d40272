use crate::coords::ShapeMode;

/// Initial state of a [`Canvas`](super::Canvas).
///
/// Detail levels are the defaults used when a draw call does not pass its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Perimeter vertices of ellipses and circles.
    pub ellipse_detail: u32,

    pub sphere_detail_x: u32,
    pub sphere_detail_y: u32,

    /// Segments around cylinders and cones.
    pub cylinder_detail: u32,
    pub cone_detail: u32,

    /// Segments around the ring (`x`) and around the tube (`y`).
    pub torus_detail_x: u32,
    pub torus_detail_y: u32,

    /// Perimeter vertices of the disc drawn as a point's stroke.
    pub point_stroke_detail: u32,

    /// Smooth (per-vertex) or flat (per-face) normals for 3D shapes.
    pub smooth_normals: bool,

    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            ellipse_detail: 25,
            sphere_detail_x: 24,
            sphere_detail_y: 24,
            cylinder_detail: 24,
            cone_detail: 24,
            torus_detail_x: 24,
            torus_detail_y: 16,
            point_stroke_detail: 12,
            smooth_normals: true,
            rect_mode: ShapeMode::Corner,
            ellipse_mode: ShapeMode::Center,
        }
    }
}
