#![forbid(unsafe_code)]

//! The rendering-surface seam.
//!
//! A carousel renders into some horizontally scrollable container. The
//! engine only needs four things from it: read the scroll offset, write it
//! immediately (drags), request a smooth animated scroll (navigation), and
//! measure the width of one rendered item. [`ScrollSurface`] captures that
//! contract; [`Track`] is a headless in-memory implementation used by the
//! showcase and the test suites.
//!
//! Smooth scrolling is fire-and-forget: the animation is the surface's
//! business and a new request simply supersedes the previous target, so
//! there is nothing to cancel.

use carousel_core::ItemMetrics;

/// A smooth-scroll request issued by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    /// Target offset in pixels.
    pub target: f32,
}

/// Horizontally scrollable container hosting the item strip.
pub trait ScrollSurface {
    /// Current physical scroll offset, in pixels.
    fn scroll_left(&self) -> f32;

    /// Set the scroll offset immediately, with no animation.
    ///
    /// Used by the drag controller on every touch-move. Implementations
    /// clamp to their scrollable range.
    fn set_scroll_left(&mut self, offset: f32);

    /// Request a smooth animated scroll to `offset`.
    ///
    /// Supersedes any in-flight request. The logical slide index may be
    /// updated before the animation lands; it is advisory, not a readback
    /// of this animation.
    fn scroll_to(&mut self, offset: f32);

    /// Measured width of the first rendered item, if any item is rendered.
    fn item_width(&self) -> Option<f32>;
}

/// Headless model of an item strip inside a viewport.
///
/// `len` items of `item_width` pixels, separated by `gap`, inside a
/// `viewport_width` window. Offsets clamp to `[0, max_scroll]` the way a
/// real overflow container does. Smooth requests land immediately (there
/// is no frame clock here) but the last request is kept for observation.
#[derive(Debug, Clone)]
pub struct Track {
    len: usize,
    item_width: f32,
    gap: f32,
    viewport_width: f32,
    offset: f32,
    last_request: Option<ScrollRequest>,
}

impl Track {
    /// Create a track for `len` items.
    #[must_use]
    pub fn new(len: usize, item_width: f32, gap: f32, viewport_width: f32) -> Self {
        Self {
            len,
            item_width: item_width.max(0.0),
            gap: gap.max(0.0),
            viewport_width: viewport_width.max(0.0),
            offset: 0.0,
            last_request: None,
        }
    }

    /// Number of items in the strip.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the strip holds no items.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Geometry of one rendered item.
    #[must_use]
    pub fn metrics(&self) -> ItemMetrics {
        ItemMetrics::new(self.item_width, self.gap)
    }

    /// Total width of the laid-out strip.
    ///
    /// Items separated by gaps, no trailing gap after the last item.
    #[must_use]
    pub fn content_width(&self) -> f32 {
        if self.len == 0 {
            return 0.0;
        }
        let m = self.metrics();
        m.stride() * self.len as f32 - m.gap
    }

    /// Largest reachable scroll offset.
    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    /// Relayout after a breakpoint change: new item width and viewport.
    pub fn relayout(&mut self, item_width: f32, viewport_width: f32) {
        self.item_width = item_width.max(0.0);
        self.viewport_width = viewport_width.max(0.0);
        self.offset = self.offset.clamp(0.0, self.max_scroll());
    }

    /// The most recent smooth-scroll request, if any.
    #[must_use]
    pub const fn last_request(&self) -> Option<ScrollRequest> {
        self.last_request
    }

    fn clamp(&self, offset: f32) -> f32 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll())
    }
}

impl ScrollSurface for Track {
    fn scroll_left(&self) -> f32 {
        self.offset
    }

    fn set_scroll_left(&mut self, offset: f32) {
        self.offset = self.clamp(offset);
    }

    fn scroll_to(&mut self, offset: f32) {
        let target = self.clamp(offset);
        self.last_request = Some(ScrollRequest { target });
        self.offset = target;
    }

    fn item_width(&self) -> Option<f32> {
        if self.len == 0 {
            None
        } else {
            Some(self.item_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_width_has_no_trailing_gap() {
        let t = Track::new(3, 100.0, 24.0, 400.0);
        assert_eq!(t.content_width(), 348.0);
    }

    #[test]
    fn empty_track_measures_nothing() {
        let t = Track::new(0, 100.0, 24.0, 400.0);
        assert_eq!(t.item_width(), None);
        assert_eq!(t.content_width(), 0.0);
        assert_eq!(t.max_scroll(), 0.0);
    }

    #[test]
    fn max_scroll_zero_when_content_fits() {
        let t = Track::new(2, 100.0, 24.0, 800.0);
        assert_eq!(t.max_scroll(), 0.0);
    }

    #[test]
    fn set_scroll_left_clamps_to_range() {
        let mut t = Track::new(10, 100.0, 24.0, 400.0);
        t.set_scroll_left(-50.0);
        assert_eq!(t.scroll_left(), 0.0);
        t.set_scroll_left(1e9);
        assert_eq!(t.scroll_left(), t.max_scroll());
    }

    #[test]
    fn nan_offset_falls_back_to_zero() {
        let mut t = Track::new(10, 100.0, 24.0, 400.0);
        t.set_scroll_left(200.0);
        t.set_scroll_left(f32::NAN);
        assert_eq!(t.scroll_left(), 0.0);
    }

    #[test]
    fn scroll_to_records_request() {
        let mut t = Track::new(10, 100.0, 24.0, 400.0);
        t.scroll_to(248.0);
        assert_eq!(t.last_request(), Some(ScrollRequest { target: 248.0 }));
        assert_eq!(t.scroll_left(), 248.0);
    }

    #[test]
    fn new_request_supersedes_prior() {
        let mut t = Track::new(10, 100.0, 24.0, 400.0);
        t.scroll_to(248.0);
        t.scroll_to(0.0);
        assert_eq!(t.last_request(), Some(ScrollRequest { target: 0.0 }));
    }

    #[test]
    fn relayout_keeps_offset_reachable() {
        let mut t = Track::new(10, 100.0, 24.0, 400.0);
        t.set_scroll_left(t.max_scroll());
        t.relayout(100.0, 2000.0);
        assert!(t.scroll_left() <= t.max_scroll());
    }
}
