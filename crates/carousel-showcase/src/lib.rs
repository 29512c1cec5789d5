#![forbid(unsafe_code)]

//! Headless showcase for the carousel engine.
//!
//! Reproduces the four carousels of the TasteLagos landing page — Lagos
//! areas, community members, featured restaurants, nearby restaurants —
//! as [`section::Section`]s over the original mock content, driven without
//! any rendering surface beyond the engine's headless track.

pub mod content;
pub mod section;
