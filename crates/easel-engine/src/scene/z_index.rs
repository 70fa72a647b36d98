/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layer for scene content (camera-space drawing).
    pub const WORLD: ZIndex = ZIndex(0);
    /// Layer for screen-space overlays such as the immediate-mode UI.
    pub const UI: ZIndex = ZIndex(1000);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
