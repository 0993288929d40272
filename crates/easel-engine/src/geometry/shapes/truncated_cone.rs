//! Truncated cone around the Y axis, centred vertically on the origin.
//!
//! Rings are stacked bottom to top. Each enabled cap adds two rings below/above the
//! sides: an edge ring with the cap normal and a zero-radius centre ring. Every ring
//! has `detail_x + 1` columns; the last one duplicates the seam at u = 1.

use std::f32::consts::TAU;
use std::rc::Rc;

use glam::{Vec2, Vec3};

use crate::geometry::normals::compute_flat_normals;
use crate::geometry::{Geometry, GeometryCache, MeshBuffers, Primitive, TruncatedCone};

pub fn make_truncated_cone(cache: &mut GeometryCache, params: TruncatedCone) -> Rc<Geometry> {
    cache.make(&Primitive::TruncatedCone(params))
}

/// Unit cylinder (radius 1, height 1); scale by `(r, h, r)` to place it.
pub fn make_cylinder(
    cache: &mut GeometryCache,
    smooth_normals: bool,
    detail: u32,
    bottom_cap: bool,
    top_cap: bool,
) -> Rc<Geometry> {
    make_truncated_cone(
        cache,
        TruncatedCone {
            smooth_normals,
            bottom_radius: 1.0,
            top_radius: 1.0,
            height: 1.0,
            detail_x: detail,
            detail_y: 1,
            top_cap,
            bottom_cap,
        },
    )
}

/// Unit cone (base radius 1, height 1, apex up); `cap` closes the base.
pub fn make_cone(cache: &mut GeometryCache, smooth_normals: bool, detail: u32, cap: bool) -> Rc<Geometry> {
    make_truncated_cone(
        cache,
        TruncatedCone {
            smooth_normals,
            bottom_radius: 1.0,
            top_radius: 0.0,
            height: 1.0,
            detail_x: detail,
            detail_y: 1,
            top_cap: false,
            bottom_cap: cap,
        },
    )
}

/// Resolved ring layout shared by every build step.
#[derive(Debug, Copy, Clone)]
struct Rings {
    params: TruncatedCone,
    top_cap: bool,
    first: i64,
    last: i64,
}

impl Rings {
    fn new(params: &TruncatedCone) -> Self {
        // A cap over a zero radius would only stack degenerate rings.
        let top_cap = params.top_cap && params.top_radius != 0.0;
        let detail_y = i64::from(params.detail_y);
        Self {
            params: *params,
            top_cap,
            first: if params.bottom_cap { -2 } else { 0 },
            last: detail_y + if top_cap { 2 } else { 0 },
        }
    }

    fn detail_y(&self) -> i64 {
        i64::from(self.params.detail_y)
    }

    /// Ring index, height fraction `v` and ring radius.
    fn iter(&self) -> impl Iterator<Item = (i64, f32, f32)> + '_ {
        let p = &self.params;
        (self.first..=self.last).map(move |yy| {
            let (v, mut radius) = if yy < 0 {
                (0.0, p.bottom_radius)
            } else if yy > self.detail_y() {
                (1.0, p.top_radius)
            } else {
                let v = yy as f32 / p.detail_y as f32;
                (v, p.bottom_radius + (p.top_radius - p.bottom_radius) * v)
            };
            if yy == -2 || yy == self.detail_y() + 2 {
                radius = 0.0;
            }
            (yy, v, radius)
        })
    }

    /// Vertices per ring, seam column included.
    fn columns(&self) -> u32 {
        self.params.detail_x + 1
    }

    fn angles(&self) -> impl Iterator<Item = (f32, f32)> {
        let detail_x = self.params.detail_x;
        (0..=detail_x).map(move |ii| ii as f32 / detail_x as f32).map(|u| (u, TAU * u))
    }
}

pub(crate) fn build(buffers: &mut MeshBuffers, params: &TruncatedCone) {
    let rings = Rings::new(params);
    make_faces(buffers, &rings);
    make_vertices(buffers, &rings);
    make_uvs(buffers, &rings);
    buffers.normals = if params.smooth_normals {
        smooth_normals(&rings)
    } else {
        compute_flat_normals(&buffers.positions, &buffers.faces)
    };
}

fn make_faces(buffers: &mut MeshBuffers, rings: &Rings) {
    let dx = rings.params.detail_x;
    let cols = rings.columns();
    let mut start = 0;

    if rings.params.bottom_cap {
        for jj in 0..dx {
            buffers.faces.push([start + jj, start + cols + jj + 1, start + cols + jj]);
        }
        start += cols * 2;
    }

    for _ in 0..rings.params.detail_y {
        for ii in 0..dx {
            let next = ii + 1;
            buffers.faces.push([start + ii, start + next, start + cols + next]);
            buffers.faces.push([start + ii, start + cols + next, start + cols + ii]);
        }
        start += cols;
    }

    if rings.top_cap {
        start += cols;
        for ii in 0..dx {
            buffers.faces.push([start + ii, start + ii + 1, start + cols + ii]);
        }
    }
}

fn make_vertices(buffers: &mut MeshBuffers, rings: &Rings) {
    let height = rings.params.height;
    for (_, v, radius) in rings.iter() {
        let y = height * v - height / 2.0;
        for (_, angle) in rings.angles() {
            let (s, c) = angle.sin_cos();
            buffers.positions.push(Vec3::new(s * radius, y, c * radius));
        }
    }
}

fn make_uvs(buffers: &mut MeshBuffers, rings: &Rings) {
    for (_, v, _) in rings.iter() {
        buffers.uvs.extend(rings.angles().map(|(u, _)| Vec2::new(u, v)));
    }
}

fn smooth_normals(rings: &Rings) -> Vec<Vec3> {
    let p = &rings.params;
    let slant = (p.bottom_radius - p.top_radius).atan2(p.height);
    let (sin_slant, cos_slant) = slant.sin_cos();

    let mut normals = Vec::new();
    for (yy, _, _) in rings.iter() {
        for (_, angle) in rings.angles() {
            let (s, c) = angle.sin_cos();
            normals.push(if yy < 0 {
                Vec3::NEG_Y
            } else if yy > rings.detail_y() {
                Vec3::Y
            } else {
                Vec3::new(s * cos_slant, sin_slant, c * cos_slant)
            });
        }
    }
    normals
}
