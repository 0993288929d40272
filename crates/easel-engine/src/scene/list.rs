use anyhow::{Result, anyhow};

use super::{Channel, DrawCmd};
use crate::render::{MaterialId, RenderBackend, Submission};

/// A recorded command and its submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: DrawCmd,
}

/// Recording backend: keeps every submission of a frame in call order.
///
/// GPU backends can replay it; tests assert on it. The active material is whatever
/// was last set; with no material set, submissions fail like a backend without a
/// bound shader would.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,
    active_material: Option<MaterialId>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_order: 0,
            active_material: Some(MaterialId::default()),
        }
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity and the active material.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
    }

    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn set_active_material(&mut self, material: Option<MaterialId>) {
        self.active_material = material;
    }

    /// Items recorded through one backend entry point, in call order.
    pub fn iter_channel(&self, channel: Channel) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.cmd.channel == channel)
    }

    fn record(&mut self, channel: Channel, submission: &Submission<'_>) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        log::trace!(
            "recorded {:?} {:?} of `{}`",
            channel,
            submission.pass,
            submission.shape.geometry().key()
        );
        self.items.push(DrawItem {
            order,
            cmd: DrawCmd::from_submission(channel, submission),
        });
    }
}

impl RenderBackend for DrawList {
    fn active_material(&self) -> Result<MaterialId> {
        self.active_material.ok_or_else(|| anyhow!("no active material"))
    }

    fn submit_2d(&mut self, submission: Submission<'_>) -> Result<()> {
        self.record(Channel::Shapes2d, &submission);
        Ok(())
    }

    fn submit_3d(&mut self, submission: Submission<'_>) -> Result<()> {
        self.record(Channel::Meshes3d, &submission);
        Ok(())
    }

    fn submit_stroke_2d(&mut self, submission: Submission<'_>) -> Result<()> {
        self.record(Channel::Strokes2d, &submission);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GeometryCache;
    use crate::geometry::shapes::make_rectangle;
    use crate::paint::Color;
    use crate::render::{Pass, Shape, Topology};
    use glam::{Mat4, Vec3};

    fn submission<'a>(shape: Shape<'a>, world: Mat4) -> Submission<'a> {
        Submission {
            topology: Topology::Triangles,
            pass: Pass::Fill,
            shape,
            world,
            color: Color::WHITE,
        }
    }

    #[test]
    fn records_in_call_order() {
        let mut cache = GeometryCache::new();
        let rect = make_rectangle(&mut cache);
        let mut list = DrawList::new();
        let material = list.active_material().unwrap();

        list.submit_2d(submission(Shape::new(&rect, material), Mat4::IDENTITY)).unwrap();
        list.submit_stroke_2d(submission(Shape::new(&rect, material), Mat4::IDENTITY)).unwrap();
        list.submit_3d(submission(Shape::new(&rect, material), Mat4::IDENTITY)).unwrap();

        let orders: Vec<u32> = list.items().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(list.iter_channel(Channel::Strokes2d).count(), 1);
        assert_eq!(list.items()[2].cmd.channel, Channel::Meshes3d);
    }

    #[test]
    fn clear_resets_order() {
        let mut cache = GeometryCache::new();
        let rect = make_rectangle(&mut cache);
        let mut list = DrawList::new();

        list.submit_2d(submission(Shape::new(&rect, MaterialId(1)), Mat4::IDENTITY)).unwrap();
        list.clear();
        assert!(list.is_empty());

        list.submit_2d(submission(Shape::new(&rect, MaterialId(1)), Mat4::IDENTITY)).unwrap();
        assert_eq!(list.items()[0].order, 0);
        assert_eq!(list.items()[0].cmd.material, MaterialId(1));
    }

    #[test]
    fn missing_material_is_an_error() {
        let mut list = DrawList::new();
        list.set_active_material(None);
        assert!(list.active_material().is_err());

        list.set_active_material(Some(MaterialId(3)));
        assert_eq!(list.active_material().unwrap(), MaterialId(3));
    }

    #[test]
    fn commands_outlive_the_cache() {
        let mut cache = GeometryCache::new();
        let rect = make_rectangle(&mut cache);
        let mut list = DrawList::new();
        let world = Mat4::from_translation(Vec3::new(5.0, 5.0, 0.0)) * Mat4::from_scale(Vec3::new(2.0, 2.0, 1.0));

        list.submit_2d(submission(Shape::new(&rect, MaterialId(0)), world)).unwrap();
        drop(rect);
        cache.clear();

        let cmd = &list.items()[0].cmd;
        assert_eq!(cmd.world_positions()[0], Vec3::new(4.0, 4.0, 0.0));
        assert_eq!(cmd.mesh().vertices.len(), 6);
    }
}
