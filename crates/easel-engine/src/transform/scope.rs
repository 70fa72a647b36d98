use std::ops::{Deref, DerefMut};

use crate::coords::Viewport;
use crate::scene::DrawList;

use super::Camera;

/// Guard that keeps a camera transform installed on a [`DrawList`].
///
/// Commands pushed through the guard are recorded in world coordinates. When
/// the guard is dropped (including during unwinding) the transform stack is
/// truncated back to its depth at creation, so the surface returns to the
/// state it had before the scope began.
pub struct CameraScope<'a> {
    list: &'a mut DrawList,
    depth: usize,
}

impl<'a> CameraScope<'a> {
    fn new(list: &'a mut DrawList, viewport: Viewport, camera: &Camera) -> Self {
        let depth = list.transform_depth();
        log::trace!("camera scope at depth {depth}: {camera:?}");
        let viewport = viewport.with_scale_factor(list.scale_factor());
        list.push_transform(camera.transform(viewport, true));
        Self { list, depth }
    }
}

impl Deref for CameraScope<'_> {
    type Target = DrawList;

    fn deref(&self) -> &DrawList {
        self.list
    }
}

impl DerefMut for CameraScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawList {
        self.list
    }
}

impl Drop for CameraScope<'_> {
    fn drop(&mut self) {
        self.list.truncate_transforms(self.depth);
    }
}

impl DrawList {
    /// Switches the surface into world coordinates for `camera` until the
    /// returned guard is dropped.
    ///
    /// The render-scale prefix uses the list's own scale factor.
    pub fn camera_scope(&mut self, viewport: Viewport, camera: &Camera) -> CameraScope<'_> {
        CameraScope::new(self, viewport, camera)
    }

    /// Runs `draw` with the camera transform active and restores the previous
    /// transform afterwards, even if `draw` panics.
    pub fn with_camera<R>(
        &mut self,
        viewport: Viewport,
        camera: &Camera,
        draw: impl FnOnce(&mut DrawList) -> R,
    ) -> R {
        let mut scope = self.camera_scope(viewport, camera);
        draw(&mut scope)
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{self, AssertUnwindSafe};

    use crate::coords::{Rect, Vec2};
    use crate::paint::Color;
    use crate::scene::{Border, DrawCmd, ZIndex};

    use super::*;

    fn camera() -> Camera {
        Camera::new(10.0, 20.0, 0.3, 2.0)
    }

    #[test]
    fn items_inside_scope_use_camera_transform() {
        let vp = Viewport::new(800.0, 600.0);
        let cam = camera();
        let mut list = DrawList::new();

        list.with_camera(vp, &cam, |surface| {
            surface.push_stroke_rect(ZIndex::WORLD, Rect::new(0.0, 0.0, 1.0, 1.0), Border::new(0.1, Color::WHITE));
            surface.push_solid_circle(ZIndex::WORLD, Vec2::new(10.0, 20.0), 5.0, Color::BLACK);
        });
        list.push_solid_rect(ZIndex::UI, Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);

        let items = list.items();
        assert_eq!(items[0].transform, items[1].transform);
        let DrawCmd::Circle(circle) = &items[1].cmd else {
            panic!("expected circle");
        };
        let p = items[1].transform.transform_point(circle.center);
        assert!(p.distance(vp.center()) < 1e-9);
        assert_eq!(items[2].transform, list.base_transform());
        assert_eq!(list.transform_depth(), 0);
    }

    #[test]
    fn scope_includes_surface_scale_factor() {
        let vp = Viewport::new(100.0, 100.0);
        let cam = Camera::default();
        let mut list = DrawList::new();
        list.set_scale_factor(2.0);

        let t = list.with_camera(vp, &cam, |surface| surface.current_transform());
        let p = t.transform_point(Vec2::new(1.0, 0.0));
        assert!(p.distance(Vec2::new(102.0, 100.0)) < 1e-9);
    }

    #[test]
    fn transform_restored_after_panic() {
        let vp = Viewport::new(800.0, 600.0);
        let cam = camera();
        let mut list = DrawList::new();
        let before = list.current_transform();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            list.with_camera(vp, &cam, |_| panic!("draw failed"));
        }));

        assert!(result.is_err());
        assert_eq!(list.transform_depth(), 0);
        assert_eq!(list.current_transform(), before);
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let vp = Viewport::new(800.0, 600.0);
        let mut list = DrawList::new();
        {
            let mut outer = list.camera_scope(vp, &camera());
            assert_eq!(outer.transform_depth(), 1);
            {
                let inner = outer.camera_scope(vp, &Camera::default());
                assert_eq!(inner.transform_depth(), 2);
            }
            assert_eq!(outer.transform_depth(), 1);
        }
        assert_eq!(list.transform_depth(), 0);
    }
}
