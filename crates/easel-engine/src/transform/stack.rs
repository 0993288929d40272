use glam::{Mat4, Quat, Vec3};

/// Hierarchical model-matrix stack.
///
/// The bottom entry is the frame's base matrix and is never popped. Every operation
/// right-multiplies the top entry, so later calls act in the local frame set up by
/// earlier ones (`translate` then `scale` scales around the translated origin).
#[derive(Debug, Clone, PartialEq)]
pub struct TransformStack {
    matrices: Vec<Mat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    pub fn new() -> Self {
        Self { matrices: vec![Mat4::IDENTITY] }
    }

    /// Drops every pushed entry and resets the base to identity.
    pub fn reset(&mut self) {
        self.matrices.clear();
        self.matrices.push(Mat4::IDENTITY);
    }

    /// Number of outstanding pushes.
    #[inline]
    pub fn depth(&self) -> usize {
        self.matrices.len() - 1
    }

    /// Current world matrix.
    #[inline]
    pub fn active_world(&self) -> Mat4 {
        self.matrices.last().copied().unwrap_or(Mat4::IDENTITY)
    }

    pub fn push(&mut self) {
        let top = self.active_world();
        self.matrices.push(top);
    }

    /// Restores the matrix active before the matching [`push`](Self::push).
    ///
    /// Popping the base entry is a caller bug: it asserts in debug builds and is
    /// logged and ignored otherwise.
    pub fn pop(&mut self) {
        debug_assert!(self.matrices.len() > 1, "TransformStack::pop without matching push");
        if self.matrices.len() > 1 {
            self.matrices.pop();
        } else {
            log::error!("transform stack underflow: pop without matching push ignored");
        }
    }

    /// Right-multiplies the top entry by `m`.
    pub fn apply(&mut self, m: Mat4) {
        if let Some(top) = self.matrices.last_mut() {
            *top *= m;
        }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.apply(Mat4::from_translation(offset));
    }

    /// Rotation of `angle` radians around `axis` (normalized here).
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        if let Some(axis) = axis.try_normalize() {
            self.apply(Mat4::from_axis_angle(axis, angle));
        }
    }

    pub fn rotate_x(&mut self, angle: f32) {
        self.apply(Mat4::from_rotation_x(angle));
    }

    pub fn rotate_y(&mut self, angle: f32) {
        self.apply(Mat4::from_rotation_y(angle));
    }

    /// In-plane rotation used by 2D drawing.
    pub fn rotate_z(&mut self, angle: f32) {
        self.apply(Mat4::from_rotation_z(angle));
    }

    pub fn scale(&mut self, factors: Vec3) {
        self.apply(Mat4::from_scale(factors));
    }

    /// Composite placement: translate by `position`, rotate by `rotation`, then scale.
    pub fn transform(&mut self, position: Vec3, rotation: Quat, scale: Vec3) {
        self.apply(Mat4::from_scale_rotation_translation(scale, rotation, position));
    }
}
