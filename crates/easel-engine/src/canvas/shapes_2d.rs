use std::rc::Rc;

use anyhow::{Context, Result};
use glam::{Mat4, Vec2, Vec3};

use super::{Canvas, Target};
use crate::geometry::extrude::{extrude_ellipse, extrude_line, extrude_point, extrude_polygon};
use crate::geometry::shapes::{
    make_ellipse, make_line, make_point, make_polygon, make_rectangle, make_triangle, recenter,
};
use crate::render::{Pass, RenderBackend, Topology};

impl<B: RenderBackend> Canvas<B> {
    /// A point is drawn with the stroke colour; its stroke weight is the diameter of
    /// the disc around it.
    pub fn point(&mut self, x: f32, y: f32) -> Result<()> {
        let Some(stroke) = self.brush.stroke() else {
            return Ok(());
        };
        let geometry = make_point(&mut self.cache);
        let world = self.place(|t| t.translate(Vec3::new(x, y, 0.0)));

        self.submit(Target::Flat, Topology::Points, Pass::Stroke, &geometry, world, stroke.color)
            .context("submitting point")?;

        let disc = Rc::new(extrude_point(&world, &geometry, stroke.width / 2.0, self.config.point_stroke_detail));
        self.submit(Target::Stroke, Topology::Triangles, Pass::Stroke, &disc, Mat4::IDENTITY, stroke.color)
            .context("submitting point stroke")
    }

    /// Lines only have a stroke: the raw segment plus a quad of the stroke weight.
    pub fn line(&mut self, from: Vec2, to: Vec2) -> Result<()> {
        let Some(stroke) = self.brush.stroke() else {
            return Ok(());
        };
        let (center, [from, to]) = recenter([from, to]);
        let geometry = make_line(&mut self.cache, from, to);
        let world = self.place(|t| t.translate(center.extend(0.0)));

        self.submit(Target::Flat, Topology::Lines, Pass::Stroke, &geometry, world, stroke.color)
            .context("submitting line")?;

        let quad = Rc::new(extrude_line(&world, &geometry, stroke.width / 2.0));
        self.submit(Target::Stroke, Topology::Triangles, Pass::Stroke, &quad, Mat4::IDENTITY, stroke.color)
            .context("submitting line stroke")
    }

    /// Rectangle interpreted through the current rect mode.
    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()> {
        let placement = self.rect_mode.resolve(x, y, w, h);
        let geometry = make_rectangle(&mut self.cache);
        let world = self.place(|t| {
            t.translate(placement.center.extend(0.0));
            t.scale(placement.size.extend(1.0));
        });
        self.draw_outlined(&geometry, world, extrude_polygon).context("drawing rect")
    }

    pub fn square(&mut self, x: f32, y: f32, size: f32) -> Result<()> {
        self.rect(x, y, size, size)
    }

    /// Ellipse interpreted through the current ellipse mode.
    pub fn ellipse(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<()> {
        self.ellipse_with_detail(x, y, w, h, self.config.ellipse_detail)
    }

    pub fn ellipse_with_detail(&mut self, x: f32, y: f32, w: f32, h: f32, detail: u32) -> Result<()> {
        let placement = self.ellipse_mode.resolve(x, y, w, h);
        let geometry = make_ellipse(&mut self.cache, detail);
        let world = self.place(|t| {
            t.translate(placement.center.extend(0.0));
            t.scale(placement.size.extend(1.0));
        });
        self.draw_outlined(&geometry, world, extrude_ellipse).context("drawing ellipse")
    }

    pub fn circle(&mut self, x: f32, y: f32, diameter: f32) -> Result<()> {
        self.ellipse(x, y, diameter, diameter)
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2) -> Result<()> {
        let (center, vertices) = recenter([a, b, c]);
        let geometry = make_triangle(&mut self.cache, vertices);
        let world = self.place(|t| t.translate(center.extend(0.0)));
        self.draw_outlined(&geometry, world, extrude_polygon).context("drawing triangle")
    }

    /// Quad from four corners, in order.
    pub fn polygon(&mut self, vertices: [Vec2; 4]) -> Result<()> {
        let (center, vertices) = recenter(vertices);
        let geometry = make_polygon(&mut self.cache, vertices);
        let world = self.place(|t| t.translate(center.extend(0.0)));
        self.draw_outlined(&geometry, world, extrude_polygon).context("drawing polygon")
    }
}
