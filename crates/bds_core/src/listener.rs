//! Listener registries with scoped subscriptions
//!
//! A [`ListenerRegistry`] stands in for a global event source such as the
//! document's `mousemove`/`mouseup` stream or a resize observer. Subscribing
//! returns a [`ListenerGuard`]; dropping the guard unsubscribes, so a
//! component that owns its guards can never leak a listener past its own
//! lifetime, whatever path tears it down.
//!
//! ```text
//! host event loop
//!     ↓ registry.dispatch(&event)
//! ListenerRegistry (snapshot of live listeners)
//!     ↓ FnMut(&E)
//! component handler
//! ```
//!
//! Uses `Rc` since UI is single-threaded.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<E> = Rc<RefCell<dyn FnMut(&E)>>;

/// Identifier of a registered listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct RegistryInner<E> {
    next_id: u64,
    listeners: Vec<(ListenerId, Callback<E>)>,
}

impl<E> RegistryInner<E> {
    fn contains(&self, id: ListenerId) -> bool {
        self.listeners.iter().any(|(listener_id, _)| *listener_id == id)
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        before != self.listeners.len()
    }
}

/// A source of events of type `E` that handlers can subscribe to
pub struct ListenerRegistry<E: 'static> {
    inner: Rc<RefCell<RegistryInner<E>>>,
}

impl<E: 'static> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Subscribe `handler`. The subscription lives as long as the guard.
    #[must_use = "dropping the guard immediately unsubscribes the listener"]
    pub fn subscribe<F>(&self, handler: F) -> ListenerGuard
    where
        F: FnMut(&E) + 'static,
    {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = ListenerId(inner.next_id);
            inner.next_id += 1;
            let callback: Callback<E> = Rc::new(RefCell::new(handler));
            inner.listeners.push((id, callback));
            id
        };

        let weak: Weak<RefCell<RegistryInner<E>>> = Rc::downgrade(&self.inner);
        ListenerGuard {
            id,
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().remove(id);
                }
            })),
        }
    }

    /// Deliver `event` to every listener registered at call time
    ///
    /// Listeners are snapshotted first, so handlers may subscribe or drop
    /// guards while being called. A listener removed earlier in the same
    /// dispatch is skipped. Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &E) -> usize {
        let snapshot: Vec<(ListenerId, Callback<E>)> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect();

        let mut delivered = 0;
        for (id, callback) in snapshot {
            if !self.inner.borrow().contains(id) {
                continue;
            }
            match callback.try_borrow_mut() {
                Ok(mut handler) => {
                    (&mut *handler)(event);
                    delivered += 1;
                }
                Err(_) => {
                    tracing::warn!(?id, "skipping re-entrant listener dispatch");
                }
            }
        }
        delivered
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<E: 'static> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Clone for ListenerRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E: 'static> fmt::Debug for ListenerRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Keeps a subscription alive; unsubscribes on drop
pub struct ListenerGuard {
    id: ListenerId,
    detach: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Unsubscribe now
    pub fn release(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.detach_now();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("id", &self.id)
            .field("attached", &self.detach.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_dispatch_reaches_subscribers() {
        let registry = ListenerRegistry::<i32>::new();
        let total = Rc::new(Cell::new(0));

        let sink = Rc::clone(&total);
        let _guard = registry.subscribe(move |value| sink.set(sink.get() + *value));

        assert_eq!(registry.dispatch(&3), 1);
        assert_eq!(registry.dispatch(&4), 1);
        assert_eq!(total.get(), 7);
    }

    #[test]
    fn test_guard_drop_unsubscribes() {
        let registry = ListenerRegistry::<()>::new();
        let calls = Rc::new(Cell::new(0));

        let sink = Rc::clone(&calls);
        let guard = registry.subscribe(move |_| sink.set(sink.get() + 1));
        assert_eq!(registry.len(), 1);

        drop(guard);
        assert!(registry.is_empty());
        assert_eq!(registry.dispatch(&()), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_guard_dropped_inside_dispatch() {
        let registry = ListenerRegistry::<()>::new();
        let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let own_slot = Rc::clone(&slot);
        let sink = Rc::clone(&calls);
        let guard = registry.subscribe(move |_| {
            sink.set(sink.get() + 1);
            own_slot.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(guard);

        registry.dispatch(&());
        registry.dispatch(&());
        assert_eq!(calls.get(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_guard_outlives_registry() {
        let registry = ListenerRegistry::<()>::new();
        let guard = registry.subscribe(|_| {});
        drop(registry);
        guard.release();
    }
}
