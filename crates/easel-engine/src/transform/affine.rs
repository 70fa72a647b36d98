use crate::coords::Vec2;

/// 2D affine map in canvas layout:
///
/// ```text
/// | a  c  e |   x' = a·x + c·y + e
/// | b  d  f |   y' = b·x + d·y + f
/// | 0  0  1 |
/// ```
///
/// Composition follows the canvas convention: `m.pre_translate(t)` returns
/// `m · T`, so operations listed later apply to points first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine2 {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn translation(t: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, t.x, t.y)
    }

    #[inline]
    pub const fn scale(s: f64) -> Self {
        Self::new(s, 0.0, 0.0, s, 0.0, 0.0)
    }

    /// Rotation by `radians`. With +Y down this turns clockwise on screen.
    #[inline]
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Matrix product `self · rhs` (`rhs` is applied to points first).
    #[inline]
    pub fn then(self, rhs: Affine2) -> Self {
        Self {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }

    #[inline]
    pub fn pre_translate(self, t: Vec2) -> Self {
        self.then(Self::translation(t))
    }

    #[inline]
    pub fn pre_scale(self, s: f64) -> Self {
        self.then(Self::scale(s))
    }

    #[inline]
    pub fn pre_rotate(self, radians: f64) -> Self {
        self.then(Self::rotation(radians))
    }

    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Applies only the linear part (no translation).
    #[inline]
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    #[inline]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Exact algebraic inverse, or `None` when the map is singular.
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv = 1.0 / det;
        Some(Self {
            a: self.d * inv,
            b: -self.b * inv,
            c: -self.c * inv,
            d: self.a * inv,
            e: (self.c * self.f - self.d * self.e) * inv,
            f: (self.b * self.e - self.a * self.f) * inv,
        })
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|v| v.is_finite())
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12
    }

    #[test]
    fn pre_ops_apply_innermost_first() {
        // translate then scale: the point is scaled before it is translated.
        let m = Affine2::translation(Vec2::new(10.0, 0.0)).pre_scale(2.0);
        assert_eq!(m.transform_point(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));
    }

    #[test]
    fn rotation_quarter_turn_is_clockwise_on_screen() {
        let p = Affine2::rotation(FRAC_PI_2).transform_point(Vec2::new(1.0, 0.0));
        assert!(close(p, Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn inverse_undoes_composite() {
        let m = Affine2::translation(Vec2::new(3.0, -7.0))
            .pre_scale(2.5)
            .pre_rotate(0.3)
            .pre_translate(Vec2::new(-1.0, 4.0));
        let inv = m.inverse().unwrap();
        let p = Vec2::new(12.5, -3.25);
        assert!(close(inv.transform_point(m.transform_point(p)), p));
        assert!(close(m.then(inv).transform_point(p), p));
    }

    #[test]
    fn singular_has_no_inverse() {
        assert!(Affine2::scale(0.0).inverse().is_none());
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let m = Affine2::translation(Vec2::new(100.0, 100.0)).pre_scale(3.0);
        assert_eq!(m.transform_vector(Vec2::new(1.0, 2.0)), Vec2::new(3.0, 6.0));
    }
}
