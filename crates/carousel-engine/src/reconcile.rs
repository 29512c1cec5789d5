#![forbid(unsafe_code)]

//! Resize subscriptions with guaranteed teardown.
//!
//! Each mounted carousel wants to hear about viewport resizes; the original
//! attached a window-level listener per mount and relied on a cleanup
//! callback to detach it. Here the listener's lifetime IS the returned
//! [`Subscription`]: dropping the guard deregisters the listener, so
//! repeated mount/unmount cycles cannot accumulate handlers.
//!
//! Single-threaded by design — dispatch happens on the UI event loop, so
//! the registry is `Rc`/`RefCell`, not a synchronized structure.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::debug;

type Callback = Rc<RefCell<dyn FnMut(u32)>>;

struct Entry {
    alive: Rc<Cell<bool>>,
    callback: Callback,
}

/// Registry of resize listeners for one event loop.
#[derive(Default)]
pub struct ResizeHub {
    entries: RefCell<Vec<Entry>>,
}

impl ResizeHub {
    /// Create an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It fires on every [`ResizeHub::dispatch`] until
    /// the returned guard is dropped.
    #[must_use = "dropping the subscription detaches the listener"]
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(u32) + 'static,
    {
        let alive = Rc::new(Cell::new(true));
        self.entries.borrow_mut().push(Entry {
            alive: Rc::clone(&alive),
            callback: Rc::new(RefCell::new(callback)),
        });
        Subscription { alive }
    }

    /// Number of live listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.alive.get())
            .count()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a resize to every live listener, in registration order.
    ///
    /// Listeners dropped before (or during) this call do not fire. Dead
    /// entries are swept out before delivery.
    pub fn dispatch(&self, width: u32) {
        self.entries.borrow_mut().retain(|e| e.alive.get());

        // Snapshot so a callback may subscribe or drop listeners without
        // holding the registry borrow.
        let snapshot: Vec<(Rc<Cell<bool>>, Callback)> = self
            .entries
            .borrow()
            .iter()
            .map(|e| (Rc::clone(&e.alive), Rc::clone(&e.callback)))
            .collect();

        debug!(width, listeners = snapshot.len(), "dispatch resize");
        for (alive, callback) in snapshot {
            if alive.get() {
                (callback.borrow_mut())(width);
            }
        }
    }
}

/// RAII guard for one registered resize listener.
///
/// Dropping it deregisters the listener; there is no other way to detach.
pub struct Subscription {
    alive: Rc<Cell<bool>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("alive", &self.alive.get())
            .finish()
    }
}
