//! Scoped listener registration.
//!
//! The dispatcher observes two document-wide signals: scroll offset and key
//! presses. Registration goes through an [`EventSource`] and is tied to a
//! [`ListenerGuard`]; dropping the guard unregisters the listener, so a
//! mount/unmount cycle can never leave a listener behind.
//!
//! Each registration carries a liveness flag shared with its guard. Dropping
//! the guard clears the flag first, so the listener is inactive even when the
//! source is borrowed at that moment and cannot be updated in place. Dead
//! entries are pruned on the source's next mutation.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Document-wide signal a listener subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Scroll,
    KeyDown,
}

/// Handle returned by [`EventSource::add_listener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Host-side registry of active listeners.
pub trait EventSource {
    /// Registers a `kind` listener that counts as active while `alive` is set.
    fn add_listener(&mut self, kind: ListenerKind, alive: Rc<Cell<bool>>) -> ListenerId;

    /// Returns `false` if `id` was not registered.
    fn remove_listener(&mut self, id: ListenerId) -> bool;
}

#[derive(Debug)]
struct Registration {
    kind: ListenerKind,
    alive: Rc<Cell<bool>>,
}

/// In-process [`EventSource`] used by the console host.
///
/// The host consults [`ListenerRegistry::is_listening`] before forwarding a
/// scroll or key event to the dispatcher.
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: HashMap<ListenerId, Registration>,
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether at least one live listener of `kind` is registered.
    #[must_use]
    pub fn is_listening(&self, kind: ListenerKind) -> bool {
        self.live().any(|r| r.kind == kind)
    }

    /// Number of live listeners.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.live().count()
    }

    fn live(&self) -> impl Iterator<Item = &Registration> {
        self.active.values().filter(|r| r.alive.get())
    }

    fn prune(&mut self) {
        let before = self.active.len();
        self.active.retain(|_, r| r.alive.get());
        let pruned = before - self.active.len();
        if pruned > 0 {
            tracing::debug!(pruned, "dropped listeners pruned");
        }
    }
}

impl EventSource for ListenerRegistry {
    fn add_listener(&mut self, kind: ListenerKind, alive: Rc<Cell<bool>>) -> ListenerId {
        self.prune();
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.insert(id, Registration { kind, alive });
        tracing::debug!(?kind, id = id.0, "listener added");
        id
    }

    fn remove_listener(&mut self, id: ListenerId) -> bool {
        let removed = self.active.remove(&id).is_some();
        self.prune();
        tracing::debug!(id = id.0, removed, "listener removed");
        removed
    }
}

/// Registration that lasts until the guard is dropped.
pub struct ListenerGuard<S: EventSource> {
    source: Rc<RefCell<S>>,
    id: ListenerId,
    kind: ListenerKind,
    alive: Rc<Cell<bool>>,
}

impl<S: EventSource> ListenerGuard<S> {
    /// Registers a `kind` listener on `source`.
    pub fn register(source: &Rc<RefCell<S>>, kind: ListenerKind) -> Self {
        let alive = Rc::new(Cell::new(true));
        let id = source.borrow_mut().add_listener(kind, Rc::clone(&alive));
        Self {
            source: Rc::clone(source),
            id,
            kind,
            alive,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }
}

impl<S: EventSource> Drop for ListenerGuard<S> {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Ok(mut source) = self.source.try_borrow_mut() {
            source.remove_listener(self.id);
        } else {
            tracing::debug!(kind = ?self.kind, id = self.id.0, "event source busy, removal deferred");
        }
    }
}

impl<S: EventSource> std::fmt::Debug for ListenerGuard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live() -> Rc<Cell<bool>> {
        Rc::new(Cell::new(true))
    }

    #[test]
    fn dropping_guard_unregisters() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));

        let guard = ListenerGuard::register(&registry, ListenerKind::KeyDown);
        assert!(registry.borrow().is_listening(ListenerKind::KeyDown));
        assert!(!registry.borrow().is_listening(ListenerKind::Scroll));

        drop(guard);
        assert_eq!(registry.borrow().active_count(), 0);
    }

    #[test]
    fn dropping_guard_while_source_is_borrowed_still_unregisters() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let guard = ListenerGuard::register(&registry, ListenerKind::Scroll);

        {
            let borrowed = registry.borrow();
            drop(guard);
            assert!(!borrowed.is_listening(ListenerKind::Scroll));
        }

        assert_eq!(registry.borrow().active_count(), 0);

        let _next = ListenerGuard::register(&registry, ListenerKind::KeyDown);
        assert_eq!(registry.borrow().active.len(), 1);
    }

    #[test]
    fn repeated_mounts_do_not_accumulate() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));

        for _ in 0..5 {
            let _scroll = ListenerGuard::register(&registry, ListenerKind::Scroll);
            let _keys = ListenerGuard::register(&registry, ListenerKind::KeyDown);
            assert_eq!(registry.borrow().active_count(), 2);
        }

        assert_eq!(registry.borrow().active_count(), 0);
    }

    #[test]
    fn removing_twice_reports_false() {
        let mut registry = ListenerRegistry::new();
        let id = registry.add_listener(ListenerKind::Scroll, live());
        assert!(registry.remove_listener(id));
        assert!(!registry.remove_listener(id));
    }
}
