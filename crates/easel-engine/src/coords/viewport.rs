use super::Vec2;

/// Drawing-surface size in logical pixels, plus the device-pixel ratio.
///
/// Hosts should build a fresh `Viewport` every frame so resizes are picked up.
/// `scale_factor` only matters on the render path; coordinate conversion works
/// purely in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    /// Physical pixels per logical pixel.
    pub scale_factor: f64,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, scale_factor: 1.0 }
    }

    #[inline]
    pub const fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0
            && self.height > 0.0
            && self.width.is_finite()
            && self.height.is_finite()
            && self.scale_factor > 0.0
    }

    /// Centre of the viewport in logical pixels.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Largest uniform zoom at which a `min_width × min_height` world rectangle
    /// fits entirely inside this viewport.
    ///
    /// The more constrained axis is filled exactly; the other axis gets margin
    /// (letterboxing).
    #[inline]
    pub fn aspect_fit_zoom(self, min_width: f64, min_height: f64) -> f64 {
        (self.width / min_width).min(self.height / min_height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_fit_height_constrained() {
        assert_eq!(Viewport::new(200.0, 100.0).aspect_fit_zoom(100.0, 100.0), 1.0);
    }

    #[test]
    fn aspect_fit_width_constrained() {
        assert_eq!(Viewport::new(100.0, 200.0).aspect_fit_zoom(100.0, 100.0), 1.0);
    }

    #[test]
    fn aspect_fit_picks_smaller_ratio() {
        assert_eq!(Viewport::new(400.0, 300.0).aspect_fit_zoom(100.0, 100.0), 3.0);
    }

    #[test]
    fn default_scale_factor_is_one() {
        let v = Viewport::new(10.0, 10.0);
        assert_eq!(v.scale_factor, 1.0);
        assert!(v.is_valid());
        assert!(!Viewport::default().is_valid());
    }
}
