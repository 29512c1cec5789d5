#![forbid(unsafe_code)]

//! Logical index ↔ physical offset translation.
//!
//! Slide starts are spaced `items_per_slide * (item_width + gap)` pixels
//! apart, so the forward mapping is a multiply and the inverse a rounded
//! divide. Item width is always measured from the surface at call time —
//! it changes with the breakpoint and must never be assumed.

use carousel_core::ItemMetrics;
use tracing::trace;

use crate::surface::ScrollSurface;

/// Physical offset of the start of `index`-th slide.
#[must_use]
pub fn slide_offset(index: usize, items_per_slide: usize, metrics: ItemMetrics) -> f32 {
    index as f32 * metrics.slide_width(items_per_slide)
}

/// Slide whose start is closest to `offset`, clamped to `[0, total - 1]`.
///
/// Returns 0 when the carousel is empty or the slide width degenerates to
/// zero (nothing rendered yet).
#[must_use]
pub fn nearest_slide(
    offset: f32,
    items_per_slide: usize,
    metrics: ItemMetrics,
    total: usize,
) -> usize {
    if total == 0 {
        return 0;
    }
    let slide_width = metrics.slide_width(items_per_slide);
    if !slide_width.is_finite() || slide_width <= 0.0 {
        return 0;
    }
    let raw = (offset / slide_width).round();
    if raw <= 0.0 {
        return 0;
    }
    (raw as usize).min(total - 1)
}

/// Issue a smooth scroll to the start of `index`-th slide.
///
/// Measures the item width from the surface; if nothing is rendered yet
/// this is a no-op rather than a scroll to a NaN-derived target.
pub fn scroll_to_slide<S: ScrollSurface + ?Sized>(
    surface: &mut S,
    index: usize,
    items_per_slide: usize,
    gap: f32,
) {
    let Some(width) = surface.item_width() else {
        return;
    };
    let metrics = ItemMetrics::new(width, gap);
    let target = slide_offset(index, items_per_slide, metrics);
    trace!(index, items_per_slide, target, "scroll to slide");
    surface.scroll_to(target);
}
