use std::fmt::{self, Write};

use glam::Vec2;

/// Canonical cache key: a shape kind followed by `|`-separated parameters.
///
/// Every parameter that changes the generated buffers must be appended; placement
/// never is. Floats are printed with Rust's shortest round-trip formatting, so two
/// keys only collide when the parameters are bit-identical (`-0.0` is folded into
/// `0.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeometryKey(String);

impl GeometryKey {
    pub fn new(kind: &str) -> Self {
        Self(kind.to_owned())
    }

    pub fn flag(mut self, value: bool) -> Self {
        self.0.push_str(if value { "|1" } else { "|0" });
        self
    }

    pub fn int(mut self, value: u32) -> Self {
        let _ = write!(self.0, "|{value}");
        self
    }

    pub fn float(mut self, value: f32) -> Self {
        let _ = write!(self.0, "|{}", canonical(value));
        self
    }

    /// Appends `value` rounded to `decimals` places.
    pub fn fixed(mut self, value: f32, decimals: usize) -> Self {
        let _ = write!(self.0, "|{:.*}", decimals, canonical(value));
        self
    }

    pub fn point(self, p: Vec2) -> Self {
        self.float(p.x).float(p.y)
    }

    pub fn points(self, points: &[Vec2]) -> Self {
        points.iter().fold(self, |key, &p| key.point(p))
    }

    /// Appends a whole key, for records derived from another record.
    pub fn nested(mut self, inner: &str) -> Self {
        self.0.push('|');
        self.0.push_str(inner);
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[inline]
fn canonical(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value }
}

impl fmt::Display for GeometryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeometryKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GeometryKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<GeometryKey> for String {
    fn from(key: GeometryKey) -> Self {
        key.0
    }
}
