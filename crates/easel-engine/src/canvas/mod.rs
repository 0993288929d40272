//! Immediate-mode drawing context.
//!
//! A [`Canvas`] owns everything a sketch mutates while drawing: the geometry
//! cache, the transform stack, the brush and the shape modes. Each draw call
//! resolves its placement, fetches (or builds) cached unit geometry, captures the
//! world matrix inside a balanced push/pop and hands the result to the backend.
//!
//! The canvas is single-threaded (`Rc` geometry) and owns its backend.

mod config;
mod shapes_2d;
mod shapes_3d;

pub use config::CanvasConfig;

use std::rc::Rc;

use anyhow::{Context, Result};
use glam::{Mat4, Quat, Vec3};

use crate::coords::ShapeMode;
use crate::geometry::edges::make_edges;
use crate::geometry::{Geometry, GeometryCache};
use crate::paint::{Brush, Color};
use crate::render::{Pass, RenderBackend, Shape, Submission, Topology};
use crate::transform::TransformStack;

/// Backend entry point a submission goes through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Target {
    Flat,
    Stroke,
    Mesh,
}

/// World-space stroke builder for a 2D outline.
type Extruder = fn(&Mat4, &Geometry, f32) -> Geometry;

pub struct Canvas<B> {
    config: CanvasConfig,
    cache: GeometryCache,
    transforms: TransformStack,
    brush: Brush,
    rect_mode: ShapeMode,
    ellipse_mode: ShapeMode,
    smooth_normals: bool,
    frame_index: u64,
    backend: B,
}

impl<B: RenderBackend> Canvas<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(CanvasConfig::default(), backend)
    }

    pub fn with_config(config: CanvasConfig, backend: B) -> Self {
        Self {
            cache: GeometryCache::new(),
            transforms: TransformStack::new(),
            brush: Brush::default(),
            rect_mode: config.rect_mode,
            ellipse_mode: config.ellipse_mode,
            smooth_normals: config.smooth_normals,
            frame_index: 0,
            config,
            backend,
        }
    }

    /// Starts a new frame: the transform stack goes back to identity.
    ///
    /// The geometry cache survives across frames.
    pub fn begin_frame(&mut self) {
        if self.transforms.depth() != 0 {
            log::warn!(
                "frame {} ended with {} unmatched push(es)",
                self.frame_index,
                self.transforms.depth()
            );
        }
        self.transforms.reset();
        self.frame_index += 1;
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    #[inline]
    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &GeometryCache {
        &self.cache
    }

    #[inline]
    pub fn cache_mut(&mut self) -> &mut GeometryCache {
        &mut self.cache
    }

    #[inline]
    pub fn transforms(&self) -> &TransformStack {
        &self.transforms
    }

    #[inline]
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    #[inline]
    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    #[inline]
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    // ── style ─────────────────────────────────────────────────────────────

    pub fn rect_mode(&mut self, mode: ShapeMode) {
        self.rect_mode = mode;
    }

    pub fn ellipse_mode(&mut self, mode: ShapeMode) {
        self.ellipse_mode = mode;
    }

    /// Smooth or flat normals for subsequent 3D shapes.
    pub fn normal_mode(&mut self, smooth: bool) {
        self.smooth_normals = smooth;
    }

    pub fn fill(&mut self, color: Color) {
        self.brush.set_fill(color);
    }

    pub fn no_fill(&mut self) {
        self.brush.no_fill();
    }

    pub fn stroke(&mut self, color: Color) {
        self.brush.set_stroke(color);
    }

    pub fn stroke_weight(&mut self, width: f32) {
        self.brush.set_stroke_width(width);
    }

    pub fn no_stroke(&mut self) {
        self.brush.no_stroke();
    }

    pub fn inner_stroke(&mut self, color: Color) {
        self.brush.set_inner_stroke(color);
    }

    pub fn inner_stroke_weight(&mut self, width: f32) {
        self.brush.set_inner_stroke_width(width);
    }

    pub fn no_inner_stroke(&mut self) {
        self.brush.no_inner_stroke();
    }

    // ── transforms ────────────────────────────────────────────────────────

    pub fn push(&mut self) {
        self.transforms.push();
    }

    pub fn pop(&mut self) {
        self.transforms.pop();
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.transforms.translate(offset);
    }

    /// In-plane rotation (around Z), as used by 2D sketches.
    pub fn rotate(&mut self, angle: f32) {
        self.transforms.rotate_z(angle);
    }

    pub fn rotate_axis(&mut self, angle: f32, axis: Vec3) {
        self.transforms.rotate(angle, axis);
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.transforms.rotate_x(angle);
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.transforms.rotate_y(angle);
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.transforms.scale(factors);
    }

    pub fn transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3) {
        self.transforms.transform(position, rotation, scale);
    }

    #[inline]
    pub fn active_world(&self) -> Mat4 {
        self.transforms.active_world()
    }

    // ── submission ────────────────────────────────────────────────────────

    /// Captures the world matrix for one shape inside a balanced push/pop.
    fn place(&mut self, placement: impl FnOnce(&mut TransformStack)) -> Mat4 {
        self.transforms.push();
        placement(&mut self.transforms);
        let world = self.transforms.active_world();
        self.transforms.pop();
        world
    }

    fn submit(
        &mut self,
        target: Target,
        topology: Topology,
        pass: Pass,
        geometry: &Rc<Geometry>,
        world: Mat4,
        color: Color,
    ) -> Result<()> {
        let material = self.backend.active_material()?;
        let submission = Submission {
            topology,
            pass,
            shape: Shape::new(geometry, material),
            world,
            color,
        };
        match target {
            Target::Flat => self.backend.submit_2d(submission),
            Target::Stroke => self.backend.submit_stroke_2d(submission),
            Target::Mesh => self.backend.submit_3d(submission),
        }
    }

    /// Fill, outer stroke and inner stroke of a closed 2D shape.
    fn draw_outlined(&mut self, geometry: &Rc<Geometry>, world: Mat4, extrude: Extruder) -> Result<()> {
        if let Some(color) = self.brush.fill() {
            self.submit(Target::Flat, Topology::Triangles, Pass::Fill, geometry, world, color)?;
        }
        if let Some(stroke) = self.brush.stroke() {
            let outline = Rc::new(extrude(&world, geometry, stroke.width));
            self.submit(Target::Stroke, Topology::Triangles, Pass::Stroke, &outline, Mat4::IDENTITY, stroke.color)?;
        }
        if let Some(inner) = self.brush.inner_stroke() {
            let outline = Rc::new(extrude(&world, geometry, -inner.width));
            self.submit(
                Target::Stroke,
                Topology::Triangles,
                Pass::InnerStroke,
                &outline,
                Mat4::IDENTITY,
                inner.color,
            )?;
        }
        Ok(())
    }

    /// Filled mesh plus, when stroking, its feature edges as a line list.
    ///
    /// Solids have no outline to inset, so the inner stroke does not apply to them.
    fn draw_mesh(&mut self, kind: &str, geometry: &Rc<Geometry>, world: Mat4) -> Result<()> {
        if let Some(color) = self.brush.fill() {
            self.submit(Target::Mesh, Topology::Triangles, Pass::Fill, geometry, world, color)
                .with_context(|| format!("submitting {kind} fill"))?;
        }
        if let Some(stroke) = self.brush.stroke() {
            let edges = make_edges(&mut self.cache, geometry);
            self.submit(Target::Mesh, Topology::Lines, Pass::Stroke, &edges, world, stroke.color)
                .with_context(|| format!("submitting {kind} edges"))?;
        }
        Ok(())
    }
}
