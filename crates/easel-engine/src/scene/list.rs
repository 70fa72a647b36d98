use crate::coords::Rect;
use crate::transform::Affine2;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + clip rect + transform.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Scissor rect in logical pixels. `None` = no clipping (draw everywhere).
    pub clip_rect: Option<Rect>,
    /// Maps the command's coordinates to physical surface pixels.
    pub transform: Affine2,
}

/// Recorded draw stream for a frame: the drawing surface everything paints into.
///
/// Performance characteristics:
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
///
/// # Clipping
///
/// Use [`push_clip`](Self::push_clip) / [`pop_clip`](Self::pop_clip) to scope draw
/// commands to a scissor rect. Clips are intersected with the current parent.
///
/// # Transforms
///
/// Every item records the transform active when it was pushed. With an empty
/// transform stack that is the device scale, so commands are in logical pixels.
/// [`push_transform`](Self::push_transform) installs an absolute transform (it does
/// not compose with the current one); the camera scope uses it to switch the
/// surface into world coordinates.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Stack of active scissor rects (logical pixels).
    /// The top is always the current effective clip, already intersected with all parents.
    clip_stack: Vec<Rect>,

    /// Stack of absolute transforms. Empty = device scale only.
    transform_stack: Vec<Affine2>,

    scale_factor: f64,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_order: 0,
            sorted_indices: Vec::new(),
            sorted_dirty: false,
            clip_stack: Vec::new(),
            transform_stack: Vec::new(),
            scale_factor: 1.0,
        }
    }

    /// Clears recorded items, the clip stack and the transform stack.
    /// Keeps allocated capacity and the scale factor.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.clip_stack.clear();
        self.transform_stack.clear();
    }

    /// Physical pixels per logical pixel of the surface.
    #[inline]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    #[inline]
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        debug_assert!(scale_factor > 0.0, "scale factor must be positive");
        self.scale_factor = scale_factor;
    }

    /// Returns items in insertion order.
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

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current clip rect and transform.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            clip_rect: self.clip_stack.last().copied(),
            transform: self.current_transform(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a scissor region. All draw commands pushed until [`pop_clip`](Self::pop_clip)
    /// are clipped to `rect` (intersected with any parent clip rect).
    ///
    /// Calls must be balanced with `pop_clip`.
    #[inline]
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.clip_stack.last() {
            None => rect,
            // No overlap: zero-area rect so the renderer skips those draw calls.
            Some(&parent) => parent.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };
        self.clip_stack.push(effective);
    }

    /// Ends the most recent scissor region started by `push_clip`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_clip`.
    #[inline]
    pub fn pop_clip(&mut self) {
        debug_assert!(!self.clip_stack.is_empty(), "pop_clip called without matching push_clip");
        self.clip_stack.pop();
    }

    /// Transform applied when the transform stack is empty.
    #[inline]
    pub fn base_transform(&self) -> Affine2 {
        Affine2::scale(self.scale_factor)
    }

    /// Transform that the next pushed command will record.
    #[inline]
    pub fn current_transform(&self) -> Affine2 {
        self.transform_stack.last().copied().unwrap_or_else(|| self.base_transform())
    }

    /// Installs `transform` as the active surface transform until the matching
    /// [`pop_transform`](Self::pop_transform).
    #[inline]
    pub fn push_transform(&mut self, transform: Affine2) {
        self.transform_stack.push(transform);
    }

    /// Restores the transform that was active before the last `push_transform`.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_transform`.
    #[inline]
    pub fn pop_transform(&mut self) {
        debug_assert!(
            !self.transform_stack.is_empty(),
            "pop_transform called without matching push_transform"
        );
        self.transform_stack.pop();
    }

    /// Number of transforms currently pushed.
    #[inline]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    /// Drops pushed transforms until at most `depth` remain.
    #[inline]
    pub(crate) fn truncate_transforms(&mut self, depth: usize) {
        self.transform_stack.truncate(depth);
    }

    /// Returns indices into `items` in paint order (back-to-front).
    ///
    /// This buffer is owned by `DrawList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        // Stable ordering is ensured by SortKey including insertion order.
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.cmp(&self.items[b].key));

        self.sorted_dirty = false;
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
