use glam::Vec2;

/// How the four numbers of `rect`/`ellipse` calls are interpreted.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ShapeMode {
    /// `(x, y)` is the top-left corner, `(c, d)` width and height.
    #[default]
    Corner,
    /// `(x, y)` and `(c, d)` are opposite corners.
    Corners,
    /// `(x, y)` is the centre, `(c, d)` width and height.
    Center,
    /// `(x, y)` is the centre, `(c, d)` half width and half height.
    Radius,
}

/// Centre and (non-negative) size of a shape after mode resolution.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Placement {
    pub center: Vec2,
    pub size: Vec2,
}

impl Placement {
    #[inline]
    pub const fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }
}

impl ShapeMode {
    /// Resolves caller arguments into a centred placement.
    ///
    /// Negative extents are folded the same way for every mode, so the generated
    /// unit geometry is never mirrored.
    pub fn resolve(self, x: f32, y: f32, c: f32, d: f32) -> Placement {
        match self {
            Self::Corner => Placement::new(Vec2::new(x + c / 2.0, y + d / 2.0), Vec2::new(c, d).abs()),
            Self::Corners => Placement::new(
                Vec2::new((x + c) / 2.0, (y + d) / 2.0),
                Vec2::new(c - x, d - y).abs(),
            ),
            Self::Center => Placement::new(Vec2::new(x, y), Vec2::new(c, d).abs()),
            Self::Radius => Placement::new(Vec2::new(x, y), Vec2::new(c, d).abs() * 2.0),
        }
    }
}
