#![forbid(unsafe_code)]

//! Leaf types for the carousel engine.
//!
//! This crate holds everything the engine consumes but does not own:
//! the canonical input event model ([`event`]), pixel geometry for the
//! horizontal item strip ([`geometry`]), and the responsive breakpoint
//! resolver that maps a viewport width to an items-per-slide count
//! ([`breakpoints`]).

pub mod breakpoints;
pub mod event;
pub mod geometry;

pub use breakpoints::{Breakpoints, SlideTiers, ViewportClass};
pub use event::{Event, ResizeEvent, TouchEvent, TouchPhase};
pub use geometry::ItemMetrics;
