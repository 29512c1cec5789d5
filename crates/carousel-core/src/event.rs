#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! The engine reacts to exactly two kinds of outside input: touch gestures
//! on the scroll surface and viewport resizes. Arrow and dot clicks are not
//! events — call sites invoke the carousel's navigation methods directly.
//!
//! # Design Notes
//!
//! - Touch coordinates are the first touch point's horizontal position in
//!   pixels, as reported by the host surface.
//! - `End` and `Cancel` phases carry no meaningful coordinate; the field is
//!   kept so a whole gesture can be replayed as a uniform event stream.

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A touch gesture phase on the scroll surface.
    Touch(TouchEvent),

    /// The containing viewport was resized.
    Resize(ResizeEvent),
}

/// Phase of a touch gesture.
///
/// A well-formed gesture is one `Start`, zero or more `Move`s, and exactly
/// one `End` or `Cancel`. The drag controller tolerates malformed streams
/// (a `Move` with no prior `Start` is ignored; a second `Start` restarts
/// the session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger made contact with the surface.
    Start,
    /// The finger moved while in contact.
    Move,
    /// The finger lifted; the gesture completed normally.
    End,
    /// The gesture was interrupted by the host (focus loss, system gesture).
    Cancel,
}

/// A touch event on the scroll surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Gesture phase.
    pub phase: TouchPhase,
    /// Horizontal position of the first touch point, in pixels.
    pub x: f32,
}

impl TouchEvent {
    /// Touch-start at the given x position.
    #[must_use]
    pub const fn start(x: f32) -> Self {
        Self {
            phase: TouchPhase::Start,
            x,
        }
    }

    /// Touch-move to the given x position.
    #[must_use]
    pub const fn moved(x: f32) -> Self {
        Self {
            phase: TouchPhase::Move,
            x,
        }
    }

    /// Touch-end. The coordinate of the lift is irrelevant to the engine.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            phase: TouchPhase::End,
            x: 0.0,
        }
    }

    /// Touch-cancel.
    #[must_use]
    pub const fn cancel() -> Self {
        Self {
            phase: TouchPhase::Cancel,
            x: 0.0,
        }
    }
}

/// A viewport resize event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeEvent {
    /// New viewport width in pixels.
    pub width: u32,
}

impl ResizeEvent {
    /// Create a resize event for the given width.
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self { width }
    }
}

impl From<TouchEvent> for Event {
    fn from(t: TouchEvent) -> Self {
        Self::Touch(t)
    }
}

impl From<ResizeEvent> for Event {
    fn from(r: ResizeEvent) -> Self {
        Self::Resize(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_constructors_set_phase() {
        assert_eq!(TouchEvent::start(10.0).phase, TouchPhase::Start);
        assert_eq!(TouchEvent::moved(5.0).phase, TouchPhase::Move);
        assert_eq!(TouchEvent::end().phase, TouchPhase::End);
        assert_eq!(TouchEvent::cancel().phase, TouchPhase::Cancel);
    }

    #[test]
    fn touch_start_carries_x() {
        let t = TouchEvent::start(300.0);
        assert_eq!(t.x, 300.0);
    }

    #[test]
    fn event_from_touch() {
        let e: Event = TouchEvent::start(1.0).into();
        assert!(matches!(e, Event::Touch(t) if t.phase == TouchPhase::Start));
    }

    #[test]
    fn event_from_resize() {
        let e: Event = ResizeEvent::new(800).into();
        assert_eq!(e, Event::Resize(ResizeEvent { width: 800 }));
    }
}
