#![forbid(unsafe_code)]

//! Slide index state machine.
//!
//! Tracks `current` bounded by `total` and applies one navigation policy
//! uniformly. The original site disabled its boundary buttons while the
//! index math still wrapped around, so a swallowed click at either end
//! depended on which code path fired first; here the policy is a single
//! value consulted by both the index math and the control enabled-state.
//!
//! # Invariants
//!
//! 1. `current < total`, except `current == 0` when `total == 0`.
//! 2. Navigation on an empty state (`total == 0`) is a no-op, never a panic.
//! 3. `next` followed by `previous` restores `current` (both policies).

/// How navigation behaves at the first and last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapPolicy {
    /// Saturate at the boundaries; boundary controls report disabled.
    #[default]
    Bounded,
    /// Wrap around modularly; controls stay enabled whenever `total > 1`.
    Wrap,
}

/// Number of slides needed to show `len` items, `items_per_slide` at a time.
///
/// Ceiling division: zero iff `len == 0`. An `items_per_slide` of zero is
/// treated as 1 rather than dividing by zero.
#[must_use]
pub const fn slide_count(len: usize, items_per_slide: usize) -> usize {
    let per = if items_per_slide == 0 {
        1
    } else {
        items_per_slide
    };
    len.div_ceil(per)
}

/// Logical slide position of one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    current: usize,
    total: usize,
    policy: WrapPolicy,
}

impl SlideState {
    /// Create a state at slide 0 with the given slide count and policy.
    #[must_use]
    pub const fn new(total: usize, policy: WrapPolicy) -> Self {
        Self {
            current: 0,
            total,
            policy,
        }
    }

    /// Current slide index. 0 when the carousel is empty.
    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Total slide count.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// The navigation policy in force.
    #[must_use]
    pub const fn policy(&self) -> WrapPolicy {
        self.policy
    }

    /// Whether the carousel has anywhere to navigate to.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Advance one slide. Returns the new index if the state changed.
    pub fn next(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        let next = match self.policy {
            WrapPolicy::Wrap => (self.current + 1) % self.total,
            WrapPolicy::Bounded => (self.current + 1).min(self.total - 1),
        };
        if next == self.current {
            return None;
        }
        self.current = next;
        Some(next)
    }

    /// Go back one slide. Returns the new index if the state changed.
    pub fn previous(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        let prev = match self.policy {
            WrapPolicy::Wrap => {
                if self.current == 0 {
                    self.total - 1
                } else {
                    self.current - 1
                }
            }
            WrapPolicy::Bounded => self.current.saturating_sub(1),
        };
        if prev == self.current {
            return None;
        }
        self.current = prev;
        Some(prev)
    }

    /// Jump directly to a slide.
    ///
    /// Out-of-range input is clamped to `[0, total - 1]`; an empty state
    /// ignores the jump. Returns the new index if the state changed.
    pub fn goto(&mut self, index: usize) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        let target = index.min(self.total - 1);
        if target == self.current {
            return None;
        }
        self.current = target;
        Some(target)
    }

    /// Whether a `next` would move. Drives the next-arrow enabled state.
    #[must_use]
    pub const fn can_advance(&self) -> bool {
        match self.policy {
            WrapPolicy::Wrap => self.total > 1,
            WrapPolicy::Bounded => self.total > 0 && self.current + 1 < self.total,
        }
    }

    /// Whether a `previous` would move. Drives the prev-arrow enabled state.
    #[must_use]
    pub const fn can_retreat(&self) -> bool {
        match self.policy {
            WrapPolicy::Wrap => self.total > 1,
            WrapPolicy::Bounded => self.current > 0,
        }
    }

    /// Replace the slide count, clamping `current` back into range.
    pub fn retotal(&mut self, total: usize) {
        self.total = total;
        if total == 0 {
            self.current = 0;
        } else if self.current >= total {
            self.current = total - 1;
        }
    }

    /// Reset to the first slide.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Set `current` without a navigation action.
    ///
    /// Used when the index is being re-derived from the physical scroll
    /// offset (snap after a drag). Clamped like [`SlideState::goto`] but
    /// never reported as a transition.
    pub fn sync(&mut self, index: usize) {
        if self.total == 0 {
            self.current = 0;
        } else {
            self.current = index.min(self.total - 1);
        }
    }
}
