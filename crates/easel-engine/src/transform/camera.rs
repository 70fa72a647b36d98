use crate::coords::{Vec2, Viewport};

use super::Affine2;

/// 2D camera: which world point sits at the viewport centre, how the view is
/// turned, and how many viewport pixels one world unit covers.
///
/// The camera is plain data owned by the application; conversions only read it.
/// `zoom` must stay non-zero (and in practice positive). A zero zoom collapses
/// the view and makes the screen→world mapping undefined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// World-space x of the point shown at the viewport centre.
    pub x: f64,
    /// World-space y of the point shown at the viewport centre.
    pub y: f64,
    /// Radians, positive turns the view clockwise on screen.
    pub rotation: f64,
    /// Viewport pixels per world unit.
    pub zoom: f64,
}

impl Camera {
    #[inline]
    pub const fn new(x: f64, y: f64, rotation: f64, zoom: f64) -> Self {
        Self { x, y, rotation, zoom }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Builds the world→screen map for `viewport`.
    ///
    /// Composition, outermost first:
    /// device scale (only when `for_rendering`) → translate to the viewport
    /// centre → scale by `zoom` → rotate by `-rotation` → translate by the
    /// negated camera position.
    ///
    /// Pass `for_rendering = true` only when the result is installed on a
    /// physical surface; coordinate conversion always uses logical pixels.
    pub fn transform(&self, viewport: Viewport, for_rendering: bool) -> Affine2 {
        let base = if for_rendering {
            Affine2::scale(viewport.scale_factor)
        } else {
            Affine2::IDENTITY
        };

        base.pre_translate(viewport.center())
            .pre_scale(self.zoom)
            .pre_rotate(-self.rotation)
            .pre_translate(-self.center())
    }

    /// Maps a world-space point to logical screen pixels.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2, viewport: Viewport) -> Vec2 {
        self.transform(viewport, false).transform_point(world)
    }

    /// Maps logical screen pixels back to world space, or `None` if the
    /// camera transform is singular (zero zoom).
    #[inline]
    pub fn try_screen_to_world(&self, screen: Vec2, viewport: Viewport) -> Option<Vec2> {
        self.transform(viewport, false)
            .inverse()
            .map(|inv| inv.transform_point(screen))
    }

    /// Maps logical screen pixels back to world space.
    ///
    /// This is the exact inverse of [`world_to_screen`](Self::world_to_screen).
    ///
    /// # Panics
    /// Panics if `zoom` is zero (or not finite); that is a caller bug.
    pub fn screen_to_world(&self, screen: Vec2, viewport: Viewport) -> Vec2 {
        match self.try_screen_to_world(screen, viewport) {
            Some(world) => world,
            None => panic!("Camera::screen_to_world: singular camera transform (zoom = {})", self.zoom),
        }
    }

    /// Moves the camera by a delta measured in screen pixels, so the view
    /// scrolls by exactly that amount regardless of zoom or rotation.
    pub fn pan_screen(&mut self, delta: Vec2) {
        let linear = Affine2::scale(self.zoom).pre_rotate(-self.rotation);
        if let Some(inv) = linear.inverse() {
            let world = inv.transform_vector(delta);
            self.x += world.x;
            self.y += world.y;
        }
    }

    /// Multiplies `zoom` by `factor` while keeping the world point under
    /// `anchor` (screen pixels) in place.
    pub fn zoom_about(&mut self, anchor: Vec2, factor: f64, viewport: Viewport) {
        let Some(world) = self.try_screen_to_world(anchor, viewport) else {
            return;
        };
        self.zoom *= factor;
        let drifted = self.world_to_screen(world, viewport);
        self.pan_screen(drifted - anchor);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Largest uniform zoom at which a `min_width × min_height` world rectangle
/// fits inside `viewport`. See [`Viewport::aspect_fit_zoom`].
#[inline]
pub fn aspect_fit_zoom(viewport: Viewport, min_width: f64, min_height: f64) -> f64 {
    viewport.aspect_fit_zoom(min_width, min_height)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn assert_close(actual: Vec2, expected: Vec2) {
        let scale = 1.0_f64.max(expected.x.abs()).max(expected.y.abs());
        assert!(
            (actual.x - expected.x).abs() <= 1e-9 * scale
                && (actual.y - expected.y).abs() <= 1e-9 * scale,
            "{actual:?} != {expected:?}"
        );
    }

    fn cameras() -> Vec<Camera> {
        vec![
            Camera::default(),
            Camera::new(12.5, -40.0, 0.0, 1.0),
            Camera::new(-3.0, 7.25, PI / 3.0, 2.5),
            Camera::new(1e4, -2e3, -1.1, 0.01),
            Camera::new(0.5, 0.5, 10.0 * PI, 350.0),
        ]
    }

    #[test]
    fn identity_camera_maps_origin_to_viewport_center() {
        let vp = Viewport::new(800.0, 600.0);
        let s = Camera::default().world_to_screen(Vec2::zero(), vp);
        assert_eq!(s, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn camera_position_maps_to_center() {
        let vp = Viewport::new(640.0, 480.0);
        for cam in cameras() {
            assert_close(cam.world_to_screen(cam.center(), vp), vp.center());
        }
    }

    #[test]
    fn round_trips_hold_for_many_cameras() {
        let vp = Viewport::new(1024.0, 768.0);
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(512.0, 384.0),
            Vec2::new(-250.0, 90.5),
            Vec2::new(1e5, -3e4),
        ];
        for cam in cameras() {
            for p in points {
                let w = cam.screen_to_world(p, vp);
                assert_close(cam.screen_to_world(cam.world_to_screen(w, vp), vp), w);

                let s = cam.world_to_screen(p, vp);
                assert_close(cam.world_to_screen(cam.screen_to_world(s, vp), vp), s);
            }
        }
    }

    #[test]
    fn quarter_turn_maps_unit_x_to_screen_up() {
        let vp = Viewport::new(200.0, 100.0);
        let cam = Camera::new(0.0, 0.0, FRAC_PI_2, 1.0);

        let s = cam.world_to_screen(Vec2::new(1.0, 0.0), vp);
        assert_close(s - vp.center(), Vec2::new(0.0, -1.0));

        let back = cam.screen_to_world(vp.center() + Vec2::new(0.0, -1.0), vp);
        assert_close(back, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn zoom_scales_offsets_from_center() {
        let vp = Viewport::new(100.0, 100.0);
        let cam = Camera::new(0.0, 0.0, 0.0, 4.0);
        assert_close(cam.world_to_screen(Vec2::new(2.0, -1.0), vp), Vec2::new(58.0, 46.0));
    }

    #[test]
    fn render_transform_premultiplies_scale_factor() {
        let vp = Viewport::new(100.0, 50.0).with_scale_factor(2.0);
        let cam = Camera::new(3.0, 4.0, 0.7, 1.5);
        let logical = cam.transform(vp, false).transform_point(Vec2::new(9.0, -2.0));
        let physical = cam.transform(vp, true).transform_point(Vec2::new(9.0, -2.0));
        assert_close(physical, logical * 2.0);
        // Conversions ignore the device scale entirely.
        assert_close(cam.world_to_screen(Vec2::new(9.0, -2.0), vp), logical);
    }

    #[test]
    fn zero_zoom_has_no_inverse() {
        let cam = Camera::new(0.0, 0.0, 0.0, 0.0);
        assert!(cam.try_screen_to_world(Vec2::zero(), Viewport::new(10.0, 10.0)).is_none());
    }

    #[test]
    #[should_panic(expected = "singular camera transform")]
    fn zero_zoom_screen_to_world_panics() {
        Camera::new(0.0, 0.0, 0.0, 0.0).screen_to_world(Vec2::zero(), Viewport::new(10.0, 10.0));
    }

    #[test]
    fn pan_screen_scrolls_content_by_delta() {
        let vp = Viewport::new(300.0, 200.0);
        let mut cam = Camera::new(5.0, 5.0, 0.9, 3.0);
        let w = Vec2::new(20.0, -8.0);
        let before = cam.world_to_screen(w, vp);
        cam.pan_screen(Vec2::new(15.0, -6.0));
        let after = cam.world_to_screen(w, vp);
        assert_close(after, before - Vec2::new(15.0, -6.0));
    }

    #[test]
    fn zoom_about_keeps_anchor_fixed() {
        let vp = Viewport::new(300.0, 200.0);
        let mut cam = Camera::new(-2.0, 1.0, 0.4, 1.25);
        let anchor = Vec2::new(40.0, 170.0);
        let world = cam.screen_to_world(anchor, vp);
        cam.zoom_about(anchor, 1.8, vp);
        assert!((cam.zoom - 2.25).abs() < 1e-12);
        assert_close(cam.world_to_screen(world, vp), anchor);
    }

    #[test]
    fn free_aspect_fit_matches_viewport_method() {
        assert_eq!(aspect_fit_zoom(Viewport::new(400.0, 300.0), 100.0, 100.0), 3.0);
    }
}
