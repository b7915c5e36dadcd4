//! Outside-click detection.
//!
//! [`ClickListeners`] is the single global subscription point for pointer
//! clicks, the terminal equivalent of listening on the document. A control
//! subscribes with a boundary predicate and a callback; the callback runs
//! once for every dispatched click the predicate says is outside.
//!
//! Subscriptions are scoped: [`Subscription`] removes its listener when
//! dropped, so a control that is torn down or rebuilt never leaves a stale
//! or duplicated handler behind.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, TryLockError, Weak};

use crate::event::MouseButton;

/// A pointer click in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
}

impl ClickEvent {
    pub fn new(x: u16, y: u16, button: MouseButton) -> Self {
        Self { x, y, button }
    }

    pub fn left(x: u16, y: u16) -> Self {
        Self::new(x, y, MouseButton::Left)
    }
}

type Boundary = Arc<dyn Fn(u16, u16) -> bool + Send + Sync>;
type Callback = Arc<Mutex<dyn FnMut(&ClickEvent) + Send>>;

struct Listener {
    id: u64,
    inside: Boundary,
    callback: Callback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<Listener>,
}

impl Registry {
    fn contains(&self, id: u64) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Global click subscription point. Clones share the same listeners.
#[derive(Clone, Default)]
pub struct ClickListeners {
    registry: Arc<Mutex<Registry>>,
}

impl ClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for clicks where `inside(x, y)` is false.
    ///
    /// The listener lives until the returned [`Subscription`] is dropped.
    pub fn subscribe<B, F>(&self, inside: B, callback: F) -> Subscription
    where
        B: Fn(u16, u16) -> bool + Send + Sync + 'static,
        F: FnMut(&ClickEvent) + Send + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push(Listener {
            id,
            inside: Arc::new(inside),
            callback: Arc::new(Mutex::new(callback)),
        });
        log::debug!(
            "ClickListeners::subscribe id={} total={}",
            id,
            registry.listeners.len()
        );

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a click to every listener it falls outside of.
    ///
    /// Returns how many callbacks ran. The registry is not locked while
    /// callbacks run, so a callback may drop subscriptions (including its
    /// own); a listener removed mid-dispatch does not fire.
    ///
    /// A callback may dispatch again. The nested click skips every listener
    /// whose callback is still running, so a listener never re-enters itself.
    pub fn dispatch(&self, click: ClickEvent) -> usize {
        let targets: Vec<(u64, Callback)> = lock(&self.registry)
            .listeners
            .iter()
            .filter(|l| !(l.inside)(click.x, click.y))
            .map(|l| (l.id, Arc::clone(&l.callback)))
            .collect();

        let mut fired = 0;
        for (id, callback) in targets {
            if !lock(&self.registry).contains(id) {
                continue;
            }
            let mut guard = match callback.try_lock() {
                Ok(guard) => guard,
                Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
                Err(TryLockError::WouldBlock) => {
                    log::debug!("ClickListeners::dispatch id={} already running, skipped", id);
                    continue;
                }
            };
            (*guard)(&click);
            fired += 1;
        }
        fired
    }

    pub fn len(&self) -> usize {
        lock(&self.registry).listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ClickListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickListeners")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Guard for a registered click listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes the listener"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Unsubscribe now. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let mut registry = lock(&registry);
        registry.listeners.retain(|l| l.id != self.id);
        log::debug!(
            "Subscription::drop id={} remaining={}",
            self.id,
            registry.listeners.len()
        );
    }
}
