#![forbid(unsafe_code)]

//! The parametrized carousel orchestrator.
//!
//! The original site carried four near-identical copies of this logic
//! (areas, community, featured restaurants, nearby restaurants), differing
//! only in item counts per breakpoint. Here those call sites share one
//! [`Carousel`] configured through [`CarouselConfig`]; content stays with
//! the caller, the engine only ever sees its length.

use carousel_core::{Breakpoints, Event, ItemMetrics, SlideTiers};
use tracing::{debug, debug_span};

use crate::drag::{DragController, DragEndPolicy, DragOutcome};
use crate::scroll::{nearest_slide, scroll_to_slide};
use crate::slides::{SlideState, WrapPolicy, slide_count};
use crate::surface::ScrollSurface;

/// Tunable parameters of one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    tiers: SlideTiers,
    breakpoints: Breakpoints,
    gap: f32,
    wrap_policy: WrapPolicy,
    drag_sensitivity: f32,
    drag_end_policy: DragEndPolicy,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            tiers: SlideTiers::cards(),
            breakpoints: Breakpoints::default(),
            gap: 24.0,
            wrap_policy: WrapPolicy::default(),
            drag_sensitivity: 2.0,
            drag_end_policy: DragEndPolicy::default(),
        }
    }
}

impl CarouselConfig {
    /// Start from the defaults: 1/2/4 tiers, 640/1024 breakpoints, 24 px
    /// gap, bounded navigation, 2x drag sensitivity, snap on drag end.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the items-per-slide table.
    #[must_use]
    pub const fn tiers(mut self, tiers: SlideTiers) -> Self {
        self.tiers = tiers;
        self
    }

    /// Set the viewport breakpoints.
    #[must_use]
    pub const fn breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Set the inter-item gap in pixels.
    #[must_use]
    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    /// Set the boundary navigation policy.
    #[must_use]
    pub const fn wrap_policy(mut self, policy: WrapPolicy) -> Self {
        self.wrap_policy = policy;
        self
    }

    /// Set the drag amplification factor.
    #[must_use]
    pub const fn drag_sensitivity(mut self, sensitivity: f32) -> Self {
        self.drag_sensitivity = sensitivity;
        self
    }

    /// Set what happens to the slide index when a drag ends.
    #[must_use]
    pub const fn drag_end_policy(mut self, policy: DragEndPolicy) -> Self {
        self.drag_end_policy = policy;
        self
    }

    /// Items per slide this configuration yields at a viewport width.
    ///
    /// Hosts use this to lay out the strip for a new width before routing
    /// the resize event to the engine, the same way a stylesheet reflows
    /// ahead of the resize handlers.
    #[must_use]
    pub fn items_at(&self, width: Option<u32>) -> usize {
        self.tiers.items_for(self.breakpoints.classify(width))
    }
}

/// What [`Carousel::handle_event`] did with an event.
///
/// Hosts that forward native touch streams need [`DragOutcome::Moved`]'s
/// `consumed` flag to decide whether to suppress the default scroll
/// gesture, so the drag outcome is passed back out rather than swallowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// A touch event, with what the drag controller made of it.
    Drag(DragOutcome),
    /// A resize was reconciled (whether or not the tier changed).
    Resized,
}

impl EventOutcome {
    /// Whether the host should suppress the event's default handling.
    #[must_use]
    pub const fn consumed(&self) -> bool {
        matches!(self, Self::Drag(DragOutcome::Moved { consumed: true, .. }))
    }
}

/// Enabled-state of the arrow controls, derived from the same policy as
/// the index math so a visually enabled arrow always moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Whether the previous-arrow should accept clicks.
    pub prev_enabled: bool,
    /// Whether the next-arrow should accept clicks.
    pub next_enabled: bool,
}

/// Dot indicator row: one dot per slide, one active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotRow {
    /// Number of dots (equals the slide count).
    pub total: usize,
    /// Index of the highlighted dot.
    pub active: usize,
}

impl DotRow {
    /// Whether the dot at `index` is the highlighted one.
    #[must_use]
    pub const fn is_active(&self, index: usize) -> bool {
        self.total > 0 && index == self.active
    }
}

/// One carousel instance over an external content list of fixed length.
#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    len: usize,
    items_per_slide: usize,
    slides: SlideState,
    drag: DragController,
}

impl Carousel {
    /// Create a carousel before the viewport width is known.
    ///
    /// Unknown width classifies as narrow, so the initial layout shows one
    /// item per slide and is always valid.
    #[must_use]
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self::build(len, config, None)
    }

    /// Create a carousel at a known viewport width.
    #[must_use]
    pub fn with_width(len: usize, config: CarouselConfig, width: u32) -> Self {
        Self::build(len, config, Some(width))
    }

    fn build(len: usize, config: CarouselConfig, width: Option<u32>) -> Self {
        let items_per_slide = config.items_at(width);
        let slides = SlideState::new(slide_count(len, items_per_slide), config.wrap_policy);
        let drag = DragController::new(config.drag_sensitivity);
        Self {
            config,
            len,
            items_per_slide,
            slides,
            drag,
        }
    }

    /// Number of content items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the content list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Items shown per slide at the current viewport class.
    #[must_use]
    pub const fn items_per_slide(&self) -> usize {
        self.items_per_slide
    }

    /// Current slide index.
    #[must_use]
    pub const fn current_slide(&self) -> usize {
        self.slides.current()
    }

    /// Total slide count.
    #[must_use]
    pub const fn total_slides(&self) -> usize {
        self.slides.total()
    }

    /// Whether a touch gesture is mid-flight.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Advance one slide and scroll to it.
    pub fn next<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(index) = self.slides.next() {
            debug!(index, "next slide");
            self.scroll_current(surface, index);
        }
    }

    /// Go back one slide and scroll to it.
    pub fn previous<S: ScrollSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(index) = self.slides.previous() {
            debug!(index, "previous slide");
            self.scroll_current(surface, index);
        }
    }

    /// Jump to a slide (dot indicator click) and scroll to it.
    ///
    /// Out-of-range indices are clamped; empty carousels ignore the jump.
    pub fn goto<S: ScrollSurface + ?Sized>(&mut self, index: usize, surface: &mut S) {
        if let Some(index) = self.slides.goto(index) {
            debug!(index, "goto slide");
            self.scroll_current(surface, index);
        }
    }

    /// Route an input event to the drag controller or the reconciler.
    ///
    /// Returns what happened so the host can react, in particular whether
    /// a mid-drag move consumed the event (see [`EventOutcome::consumed`]).
    pub fn handle_event<S: ScrollSurface + ?Sized>(
        &mut self,
        event: Event,
        surface: &mut S,
    ) -> EventOutcome {
        let _span = debug_span!("carousel_event").entered();
        match event {
            Event::Touch(touch) => {
                // Cancel is treated like a lift at the last offset.
                let outcome = self.drag.on_event(touch, surface);
                if let DragOutcome::Ended { final_offset } = outcome {
                    self.finish_drag(final_offset, surface);
                }
                EventOutcome::Drag(outcome)
            }
            Event::Resize(resize) => {
                self.handle_resize(resize.width, surface);
                EventOutcome::Resized
            }
        }
    }

    /// Recompute the viewport class; on a tier change, reset to slide 0.
    ///
    /// A resize that lands in the same class is a no-op, so pixel-by-pixel
    /// drag-resizes do not thrash state.
    pub fn handle_resize<S: ScrollSurface + ?Sized>(&mut self, width: u32, surface: &mut S) {
        let class = self.config.breakpoints.classify(Some(width));
        let items = self.config.tiers.items_for(class);
        if items == self.items_per_slide {
            return;
        }
        debug!(width, items, "items per slide changed; reset to first slide");
        self.items_per_slide = items;
        self.slides.retotal(slide_count(self.len, items));
        self.slides.reset();
        if !self.slides.is_empty() {
            self.scroll_current(surface, 0);
        }
    }

    /// Arrow enabled-state at the current index.
    #[must_use]
    pub fn controls(&self) -> Controls {
        Controls {
            prev_enabled: self.slides.can_retreat(),
            next_enabled: self.slides.can_advance(),
        }
    }

    /// Dot indicator row for the current state.
    #[must_use]
    pub fn dots(&self) -> DotRow {
        DotRow {
            total: self.slides.total(),
            active: self.slides.current(),
        }
    }

    fn finish_drag<S: ScrollSurface + ?Sized>(&mut self, final_offset: f32, surface: &mut S) {
        match self.config.drag_end_policy {
            DragEndPolicy::KeepOffset => {
                // Original behavior: the index goes stale until the next
                // explicit navigation.
            }
            DragEndPolicy::SnapToSlide => {
                let Some(width) = surface.item_width() else {
                    return;
                };
                let metrics = ItemMetrics::new(width, self.config.gap);
                let index = nearest_slide(
                    final_offset,
                    self.items_per_slide,
                    metrics,
                    self.slides.total(),
                );
                debug!(index, final_offset, "snap to nearest slide");
                self.slides.sync(index);
                self.scroll_current(surface, index);
            }
        }
    }

    fn scroll_current<S: ScrollSurface + ?Sized>(&self, surface: &mut S, index: usize) {
        scroll_to_slide(surface, index, self.items_per_slide, self.config.gap);
    }
}
