use super::Vec2;

/// Axis-aligned rectangle (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Rectangle of `size` centred on `center`.
    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self::from_origin_size(center - size / 2.0, size)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Same area with non-negative width and height.
    #[inline]
    pub fn normalized(self) -> Self {
        let lo = Vec2::new(
            self.origin.x.min(self.origin.x + self.size.x),
            self.origin.y.min(self.origin.y + self.size.y),
        );
        Rect::from_origin_size(lo, Vec2::new(self.size.x.abs(), self.size.y.abs()))
    }

    /// Shrinks the rectangle by `amount` on every side. Size never goes negative.
    #[inline]
    pub fn inset(self, amount: f64) -> Self {
        Rect::new(
            self.origin.x + amount,
            self.origin.y + amount,
            (self.size.x - amount * 2.0).max(0.0),
            (self.size.y - amount * 2.0).max(0.0),
        )
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let r = self.normalized();
        let (lo, hi) = (r.min(), r.max());
        (lo.x..hi.x).contains(&p.x) && (lo.y..hi.y).contains(&p.y)
    }

    /// Closed containment: [min, max]. Pointer hit-testing uses this so the
    /// far edges still count as inside.
    #[inline]
    pub fn contains_closed(self, p: Vec2) -> bool {
        let r = self.normalized();
        let (lo, hi) = (r.min(), r.max());
        (lo.x..=hi.x).contains(&p.x) && (lo.y..=hi.y).contains(&p.y)
    }

    #[inline]
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let (a, b) = (self.normalized(), other.normalized());
        let lo = Vec2::new(a.origin.x.max(b.origin.x), a.origin.y.max(b.origin.y));
        let hi = Vec2::new(a.max().x.min(b.max().x), a.max().y.min(b.max().y));
        let size = hi - lo;
        (size.x > 0.0 && size.y > 0.0).then(|| Rect::from_origin_size(lo, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f64, y: f64, w: f64, h: f64) -> Rect { Rect::new(x, y, w, h) }

    // ── normalized ────────────────────────────────────────────────────────

    #[test]
    fn normalized_positive_is_identity() {
        let rect = r(1.0, 2.0, 10.0, 20.0);
        assert_eq!(rect.normalized(), rect);
    }

    #[test]
    fn normalized_negative_width() {
        let n = r(10.0, 0.0, -4.0, 5.0).normalized();
        assert_eq!(n.origin.x, 6.0);
        assert_eq!(n.size.x, 4.0);
    }

    // ── containment ───────────────────────────────────────────────────────

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn contains_closed_includes_far_edges() {
        let rect = r(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_closed(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_closed(Vec2::new(0.0, 0.0)));
        assert!(!rect.contains_closed(Vec2::new(10.5, 5.0)));
        assert!(!rect.contains_closed(Vec2::new(5.0, -0.5)));
    }

    // ── inset / center ────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_every_side() {
        assert_eq!(r(10.0, 20.0, 30.0, 40.0).inset(5.0), r(15.0, 25.0, 20.0, 30.0));
    }

    #[test]
    fn inset_clamps_to_zero_size() {
        let i = r(0.0, 0.0, 4.0, 4.0).inset(5.0);
        assert!(i.is_empty());
        assert_eq!(i.size, Vec2::zero());
    }

    #[test]
    fn from_center_size_round_trips_center() {
        let rect = Rect::from_center_size(Vec2::new(5.0, 5.0), Vec2::new(4.0, 2.0));
        assert_eq!(rect, r(3.0, 4.0, 4.0, 2.0));
        assert_eq!(rect.center(), Vec2::new(5.0, 5.0));
    }

    // ── intersect ─────────────────────────────────────────────────────────

    #[test]
    fn intersect_overlapping() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersect(b), Some(r(5.0, 5.0, 5.0, 5.0)));
    }

    #[test]
    fn intersect_touching_edge_returns_none() {
        let a = r(0.0, 0.0, 10.0, 10.0);
        let b = r(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(b).is_none());
    }
}
