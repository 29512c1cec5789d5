#![forbid(unsafe_code)]

//! Responsive breakpoint resolution.
//!
//! Maps a viewport width to a [`ViewportClass`] via two fixed breakpoints,
//! and a class to an items-per-slide count via a [`SlideTiers`] table.
//! Both mappings are deterministic and side-effect-free; classification of
//! an unknown width (before first paint) falls back to the narrow class so
//! the initial layout is always valid.

/// Size class of the containing viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewportClass {
    /// Below the medium breakpoint (phones). One item per slide.
    Narrow,
    /// Between the medium and wide breakpoints (tablets).
    Medium,
    /// At or above the wide breakpoint (desktops).
    Wide,
}

/// The two pixel breakpoints separating the three viewport classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Width at which the viewport stops being narrow.
    pub medium: u32,
    /// Width at which the viewport becomes wide.
    pub wide: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        // Matches the tailwind sm/lg thresholds the layout is designed for.
        Self {
            medium: 640,
            wide: 1024,
        }
    }
}

impl Breakpoints {
    /// Create breakpoints from explicit thresholds.
    ///
    /// `wide` is raised to at least `medium` so classification stays
    /// monotonic in the width.
    #[must_use]
    pub fn new(medium: u32, wide: u32) -> Self {
        Self {
            medium,
            wide: wide.max(medium),
        }
    }

    /// Classify a viewport width.
    ///
    /// `None` means the environment cannot report a width yet; that
    /// classifies as [`ViewportClass::Narrow`], the stable default.
    #[must_use]
    pub fn classify(&self, width: Option<u32>) -> ViewportClass {
        match width {
            Some(w) if w >= self.wide => ViewportClass::Wide,
            Some(w) if w >= self.medium => ViewportClass::Medium,
            _ => ViewportClass::Narrow,
        }
    }
}

/// Items-per-slide for each viewport class.
///
/// Two stock tables exist: [`SlideTiers::cards`] (1/2/4) used by the area
/// and community carousels, and [`SlideTiers::grid`] (1/2/3) used by the
/// restaurant carousels. Every tier is clamped to at least 1 at
/// construction, so a slide can never hold zero items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTiers {
    narrow: usize,
    medium: usize,
    wide: usize,
}

impl Default for SlideTiers {
    fn default() -> Self {
        Self::cards()
    }
}

impl SlideTiers {
    /// Custom tier table. Zero tiers are raised to 1.
    #[must_use]
    pub fn new(narrow: usize, medium: usize, wide: usize) -> Self {
        Self {
            narrow: narrow.max(1),
            medium: medium.max(1),
            wide: wide.max(1),
        }
    }

    /// The 1/2/4 table used by card carousels.
    #[must_use]
    pub const fn cards() -> Self {
        Self {
            narrow: 1,
            medium: 2,
            wide: 4,
        }
    }

    /// The 1/2/3 table used by restaurant carousels.
    #[must_use]
    pub const fn grid() -> Self {
        Self {
            narrow: 1,
            medium: 2,
            wide: 3,
        }
    }

    /// Items per slide for the given class. Always at least 1.
    #[must_use]
    pub const fn items_for(&self, class: ViewportClass) -> usize {
        match class {
            ViewportClass::Narrow => self.narrow,
            ViewportClass::Medium => self.medium,
            ViewportClass::Wide => self.wide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classify_unknown_is_narrow() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(None), ViewportClass::Narrow);
    }

    #[test]
    fn classify_default_thresholds() {
        let bp = Breakpoints::default();
        assert_eq!(bp.classify(Some(0)), ViewportClass::Narrow);
        assert_eq!(bp.classify(Some(639)), ViewportClass::Narrow);
        assert_eq!(bp.classify(Some(640)), ViewportClass::Medium);
        assert_eq!(bp.classify(Some(1023)), ViewportClass::Medium);
        assert_eq!(bp.classify(Some(1024)), ViewportClass::Wide);
        assert_eq!(bp.classify(Some(2560)), ViewportClass::Wide);
    }

    #[test]
    fn new_raises_wide_to_medium() {
        let bp = Breakpoints::new(800, 600);
        assert_eq!(bp.wide, 800);
        assert_eq!(bp.classify(Some(800)), ViewportClass::Wide);
        assert_eq!(bp.classify(Some(799)), ViewportClass::Narrow);
    }

    #[test]
    fn cards_tiers() {
        let t = SlideTiers::cards();
        assert_eq!(t.items_for(ViewportClass::Narrow), 1);
        assert_eq!(t.items_for(ViewportClass::Medium), 2);
        assert_eq!(t.items_for(ViewportClass::Wide), 4);
    }

    #[test]
    fn grid_tiers() {
        let t = SlideTiers::grid();
        assert_eq!(t.items_for(ViewportClass::Narrow), 1);
        assert_eq!(t.items_for(ViewportClass::Medium), 2);
        assert_eq!(t.items_for(ViewportClass::Wide), 3);
    }

    #[test]
    fn zero_tiers_raised_to_one() {
        let t = SlideTiers::new(0, 0, 0);
        assert_eq!(t.items_for(ViewportClass::Narrow), 1);
        assert_eq!(t.items_for(ViewportClass::Medium), 1);
        assert_eq!(t.items_for(ViewportClass::Wide), 1);
    }

    proptest! {
        #[test]
        fn classification_is_monotonic(a in 0u32..4000, b in 0u32..4000) {
            let bp = Breakpoints::default();
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let rank = |c: ViewportClass| match c {
                ViewportClass::Narrow => 0,
                ViewportClass::Medium => 1,
                ViewportClass::Wide => 2,
            };
            prop_assert!(rank(bp.classify(Some(lo))) <= rank(bp.classify(Some(hi))));
        }

        #[test]
        fn items_for_never_zero(n in 0usize..8, m in 0usize..8, w in 0usize..8) {
            let t = SlideTiers::new(n, m, w);
            for class in [ViewportClass::Narrow, ViewportClass::Medium, ViewportClass::Wide] {
                prop_assert!(t.items_for(class) >= 1);
            }
        }
    }
}
