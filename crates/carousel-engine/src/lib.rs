#![forbid(unsafe_code)]

//! Slide navigation engine for horizontally scrolling item carousels.
//!
//! One logical component, used with different parameters by every carousel
//! in the site: a content list of `N` opaque items is laid out as a single
//! horizontal strip, grouped into slides of `items_per_slide` items, and
//! navigated by arrow clicks, dot-indicator jumps, touch drags, or viewport
//! resizes.
//!
//! The physical scroll offset of the strip is the single source of visual
//! truth; the logical slide index is a projection onto it, re-synchronized
//! on explicit navigation and (by default) when a drag gesture ends.
//!
//! Module map, leaves first:
//!
//! - [`slides`] — bounded/wrapping slide index state machine
//! - [`surface`] — the [`ScrollSurface`] seam plus the headless [`Track`]
//! - [`scroll`] — logical index ↔ physical offset translation
//! - [`drag`] — touch gesture state machine writing raw offsets
//! - [`reconcile`] — resize subscriptions with RAII teardown
//! - [`carousel`] — the parametrized orchestrator tying them together

pub mod carousel;
pub mod drag;
pub mod reconcile;
pub mod scroll;
pub mod slides;
pub mod surface;

pub use carousel::{Carousel, CarouselConfig, Controls, DotRow, EventOutcome};
pub use drag::{DragController, DragEndPolicy, DragOutcome};
pub use reconcile::{ResizeHub, Subscription};
pub use slides::{SlideState, WrapPolicy, slide_count};
pub use surface::{ScrollRequest, ScrollSurface, Track};
