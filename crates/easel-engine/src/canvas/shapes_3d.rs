use anyhow::Result;
use glam::Vec3;

use super::Canvas;
use crate::geometry::shapes::{
    make_box, make_cone, make_cylinder, make_octahedron, make_plane, make_sphere, make_tetrahedron,
    make_torus,
};
use crate::render::RenderBackend;

impl<B: RenderBackend> Canvas<B> {
    /// Box of the given extents centred on the current origin.
    pub fn box_(&mut self, width: f32, height: f32, depth: f32) -> Result<()> {
        let geometry = make_box(&mut self.cache, self.smooth_normals);
        let world = self.place(|t| t.scale(Vec3::new(width, height, depth)));
        self.draw_mesh("box", &geometry, world)
    }

    pub fn plane(&mut self, width: f32, height: f32) -> Result<()> {
        let geometry = make_plane(&mut self.cache, self.smooth_normals);
        let world = self.place(|t| t.scale(Vec3::new(width, height, 1.0)));
        self.draw_mesh("plane", &geometry, world)
    }

    pub fn sphere(&mut self, radius: f32) -> Result<()> {
        self.sphere_with_detail(radius, self.config.sphere_detail_x, self.config.sphere_detail_y)
    }

    pub fn sphere_with_detail(&mut self, radius: f32, detail_x: u32, detail_y: u32) -> Result<()> {
        let geometry = make_sphere(&mut self.cache, self.smooth_normals, detail_x, detail_y);
        let world = self.place(|t| t.scale(Vec3::splat(radius)));
        self.draw_mesh("sphere", &geometry, world)
    }

    /// Capped cylinder standing on the Y axis.
    pub fn cylinder(&mut self, radius: f32, height: f32) -> Result<()> {
        self.cylinder_with(radius, height, self.config.cylinder_detail, true, true)
    }

    pub fn cylinder_with(
        &mut self,
        radius: f32,
        height: f32,
        detail: u32,
        bottom_cap: bool,
        top_cap: bool,
    ) -> Result<()> {
        let geometry = make_cylinder(&mut self.cache, self.smooth_normals, detail, bottom_cap, top_cap);
        let world = self.place(|t| t.scale(Vec3::new(radius, height, radius)));
        self.draw_mesh("cylinder", &geometry, world)
    }

    /// Capped cone with its apex towards +Y.
    pub fn cone(&mut self, radius: f32, height: f32) -> Result<()> {
        self.cone_with(radius, height, self.config.cone_detail, true)
    }

    pub fn cone_with(&mut self, radius: f32, height: f32, detail: u32, cap: bool) -> Result<()> {
        let geometry = make_cone(&mut self.cache, self.smooth_normals, detail, cap);
        let world = self.place(|t| t.scale(Vec3::new(radius, height, radius)));
        self.draw_mesh("cone", &geometry, world)
    }

    /// Torus lying in the XY plane; `tube_radius` is in the same units as `radius`.
    pub fn torus(&mut self, radius: f32, tube_radius: f32) -> Result<()> {
        self.torus_with(radius, tube_radius, self.config.torus_detail_x, self.config.torus_detail_y)
    }

    pub fn torus_with(&mut self, radius: f32, tube_radius: f32, detail_x: u32, detail_y: u32) -> Result<()> {
        let geometry = make_torus(&mut self.cache, self.smooth_normals, tube_radius / radius, detail_x, detail_y);
        let world = self.place(|t| t.scale(Vec3::splat(radius)));
        self.draw_mesh("torus", &geometry, world)
    }

    pub fn tetrahedron(&mut self, width: f32, height: f32) -> Result<()> {
        let geometry = make_tetrahedron(&mut self.cache, self.smooth_normals);
        let world = self.place(|t| t.scale(Vec3::new(width, height, width)));
        self.draw_mesh("tetrahedron", &geometry, world)
    }

    pub fn octahedron(&mut self, width: f32, height: f32) -> Result<()> {
        let geometry = make_octahedron(&mut self.cache, self.smooth_normals);
        let world = self.place(|t| t.scale(Vec3::new(width, height, width)));
        self.draw_mesh("octahedron", &geometry, world)
    }
}
