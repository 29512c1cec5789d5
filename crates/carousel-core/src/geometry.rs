#![forbid(unsafe_code)]

//! Pixel geometry for the horizontal item strip.
//!
//! Offsets and widths are `f32` pixels; the host surface reports fractional
//! positions during smooth scrolling so there is no integer grid to snap to.

/// Measured geometry of one rendered item in the strip.
///
/// `width` must come from an actually-rendered item (it varies by breakpoint
/// and content); the engine never assumes a width. `gap` is the fixed
/// inter-item spacing the layout applies between adjacent items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Rendered width of a single item, in pixels.
    pub width: f32,
    /// Fixed gap between adjacent items, in pixels.
    pub gap: f32,
}

impl ItemMetrics {
    /// Create metrics from a measured item width and the layout gap.
    ///
    /// Negative measurements are treated as zero; a surface can report a
    /// zero width before first paint but never a negative one on purpose.
    #[must_use]
    pub fn new(width: f32, gap: f32) -> Self {
        Self {
            width: width.max(0.0),
            gap: gap.max(0.0),
        }
    }

    /// Horizontal extent of one item plus its trailing gap.
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.width + self.gap
    }

    /// Horizontal extent of one slide of `items_per_slide` items.
    ///
    /// The trailing gap is included: slide starts are spaced exactly this
    /// far apart, which is what the scroll translator needs.
    #[must_use]
    pub fn slide_width(&self, items_per_slide: usize) -> f32 {
        self.stride() * items_per_slide as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_adds_gap() {
        let m = ItemMetrics::new(280.0, 24.0);
        assert_eq!(m.stride(), 304.0);
    }

    #[test]
    fn slide_width_scales_by_count() {
        let m = ItemMetrics::new(280.0, 24.0);
        assert_eq!(m.slide_width(4), 1216.0);
        assert_eq!(m.slide_width(1), 304.0);
    }

    #[test]
    fn slide_width_zero_items() {
        let m = ItemMetrics::new(280.0, 24.0);
        assert_eq!(m.slide_width(0), 0.0);
    }

    #[test]
    fn negative_measurements_clamped() {
        let m = ItemMetrics::new(-5.0, -1.0);
        assert_eq!(m.width, 0.0);
        assert_eq!(m.gap, 0.0);
        assert_eq!(m.stride(), 0.0);
    }
}
