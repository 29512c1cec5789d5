#![forbid(unsafe_code)]

//! Touch-drag controller.
//!
//! A two-state machine (Idle / Dragging) that converts horizontal touch
//! movement into direct scroll-offset writes, bypassing the slide index
//! entirely while a gesture is active.
//!
//! The session is torn down unconditionally on `End` or `Cancel`, including
//! mid-gesture abandonment, so a stray `Move` can never act on a stale
//! session. On a device with no touch input none of this ever fires.

use carousel_core::{TouchEvent, TouchPhase};
use tracing::{debug, trace};

use crate::surface::ScrollSurface;

/// What to do with the logical slide index when a drag ends.
///
/// The original site left the index stale after every drag; the
/// offset and the dot indicators disagreed until the next arrow click.
/// Snapping re-derives the index from the physical offset instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragEndPolicy {
    /// Re-sync the index to the nearest slide and scroll to its boundary.
    #[default]
    SnapToSlide,
    /// Leave the offset where the finger put it; the index goes stale
    /// until the next explicit navigation.
    KeepOffset,
}

/// Ephemeral per-gesture state. Exists only between Start and End/Cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    start_x: f32,
    start_scroll_left: f32,
}

/// Result of feeding one touch event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Event did not apply (e.g. a Move with no active session).
    Ignored,
    /// A session began; no scrolling yet.
    Started,
    /// The surface offset was updated. `consumed` means the host must
    /// suppress its default scroll/selection handling for this event.
    Moved {
        /// New physical offset after the write.
        offset: f32,
        /// The event was handled; suppress default behavior.
        consumed: bool,
    },
    /// The session ended. `final_offset` is where the strip came to rest
    /// before any end-policy snapping (which is the orchestrator's job).
    Ended {
        /// Offset at the moment the finger lifted.
        final_offset: f32,
    },
}

/// Converts touch gestures into raw scroll-offset writes.
#[derive(Debug, Clone)]
pub struct DragController {
    session: Option<DragSession>,
    sensitivity: f32,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl DragController {
    /// Create a controller with the given drag amplification factor.
    ///
    /// Non-positive or non-finite factors fall back to the 2x default.
    #[must_use]
    pub fn new(sensitivity: f32) -> Self {
        let sensitivity = if sensitivity.is_finite() && sensitivity > 0.0 {
            sensitivity
        } else {
            2.0
        };
        Self {
            session: None,
            sensitivity,
        }
    }

    /// Drag amplification factor.
    #[must_use]
    pub const fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Whether a gesture is currently active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Feed one touch event, writing offsets to `surface` as needed.
    pub fn on_event<S: ScrollSurface + ?Sized>(
        &mut self,
        touch: TouchEvent,
        surface: &mut S,
    ) -> DragOutcome {
        match touch.phase {
            TouchPhase::Start => {
                // A second Start restarts the session from the new anchor.
                self.session = Some(DragSession {
                    start_x: touch.x,
                    start_scroll_left: surface.scroll_left(),
                });
                debug!(start_x = touch.x, "drag start");
                DragOutcome::Started
            }
            TouchPhase::Move => {
                let Some(session) = self.session else {
                    return DragOutcome::Ignored;
                };
                let walk = (session.start_x - touch.x) * self.sensitivity;
                surface.set_scroll_left(session.start_scroll_left + walk);
                let offset = surface.scroll_left();
                trace!(x = touch.x, walk, offset, "drag move");
                DragOutcome::Moved {
                    offset,
                    consumed: true,
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.session.take().is_none() {
                    return DragOutcome::Ignored;
                }
                let final_offset = surface.scroll_left();
                debug!(final_offset, "drag end");
                DragOutcome::Ended { final_offset }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Track;

    fn track() -> Track {
        // 10 items, 100px wide, 24px gap, 400px viewport: max_scroll = 816.
        Track::new(10, 100.0, 24.0, 400.0)
    }

    #[test]
    fn drag_walk_arithmetic() {
        // start at x=300 with scrollLeft=100, move to x=250, 2x sensitivity
        // -> offset = 100 + (300 - 250) * 2 = 200
        let mut t = track();
        t.set_scroll_left(100.0);
        let mut drag = DragController::default();
        assert_eq!(drag.on_event(TouchEvent::start(300.0), &mut t), DragOutcome::Started);
        let outcome = drag.on_event(TouchEvent::moved(250.0), &mut t);
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                offset: 200.0,
                consumed: true
            }
        );
        assert_eq!(t.scroll_left(), 200.0);
    }

    #[test]
    fn move_without_start_is_ignored() {
        let mut t = track();
        let mut drag = DragController::default();
        assert_eq!(drag.on_event(TouchEvent::moved(50.0), &mut t), DragOutcome::Ignored);
        assert_eq!(t.scroll_left(), 0.0);
    }

    #[test]
    fn end_tears_down_session() {
        let mut t = track();
        let mut drag = DragController::default();
        drag.on_event(TouchEvent::start(300.0), &mut t);
        assert!(drag.is_dragging());
        drag.on_event(TouchEvent::end(), &mut t);
        assert!(!drag.is_dragging());
        // A move after end does nothing.
        assert_eq!(drag.on_event(TouchEvent::moved(0.0), &mut t), DragOutcome::Ignored);
    }

    #[test]
    fn cancel_tears_down_session() {
        let mut t = track();
        let mut drag = DragController::default();
        drag.on_event(TouchEvent::start(300.0), &mut t);
        drag.on_event(TouchEvent::cancel(), &mut t);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn end_without_session_is_ignored() {
        let mut t = track();
        let mut drag = DragController::default();
        assert_eq!(drag.on_event(TouchEvent::end(), &mut t), DragOutcome::Ignored);
    }

    #[test]
    fn moves_are_anchored_to_session_start() {
        let mut t = track();
        let mut drag = DragController::default();
        drag.on_event(TouchEvent::start(300.0), &mut t);
        drag.on_event(TouchEvent::moved(280.0), &mut t);
        // Each move recomputes from the anchor, not the previous move.
        let outcome = drag.on_event(TouchEvent::moved(200.0), &mut t);
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                offset: 200.0,
                consumed: true
            }
        );
    }

    #[test]
    fn drag_respects_surface_clamping() {
        let mut t = track();
        let mut drag = DragController::default();
        drag.on_event(TouchEvent::start(300.0), &mut t);
        // Dragging rightwards from offset 0 would go negative; surface clamps.
        let outcome = drag.on_event(TouchEvent::moved(500.0), &mut t);
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                offset: 0.0,
                consumed: true
            }
        );
    }

    #[test]
    fn second_start_rebases_anchor() {
        let mut t = track();
        let mut drag = DragController::default();
        drag.on_event(TouchEvent::start(300.0), &mut t);
        drag.on_event(TouchEvent::moved(250.0), &mut t);
        // offset now 100; a fresh start anchors there.
        drag.on_event(TouchEvent::start(400.0), &mut t);
        let outcome = drag.on_event(TouchEvent::moved(390.0), &mut t);
        assert_eq!(
            outcome,
            DragOutcome::Moved {
                offset: 120.0,
                consumed: true
            }
        );
    }

    #[test]
    fn bad_sensitivity_falls_back() {
        assert_eq!(DragController::new(0.0).sensitivity(), 2.0);
        assert_eq!(DragController::new(-1.0).sensitivity(), 2.0);
        assert_eq!(DragController::new(f32::NAN).sensitivity(), 2.0);
        assert_eq!(DragController::new(1.5).sensitivity(), 1.5);
    }
}
