//! Wiring a carousel to host event sources
//!
//! A mounted carousel listens to document-level pointer events (so a drag
//! keeps tracking once the pointer leaves the list), resize and intersection
//! observers, and the list's transition end. [`mount`] subscribes to all of
//! them and returns a [`MountGuard`]; dropping it unsubscribes everything.
//!
//! Handlers hold a weak handle, so a mounted carousel is still freed when
//! the host drops its last handle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use bds_core::{
    Clock, IntersectionEntry, ListenerGuard, ListenerRegistry, PointerEvent, ResizeEntry,
};
use smallvec::SmallVec;

use crate::carousel::Carousel;
use crate::context::CarouselHandle;

/// Event sources provided by the host
#[derive(Clone, Debug, Default)]
pub struct HostEvents {
    /// Document pointer moves, ups and leaves
    pub pointer: ListenerRegistry<PointerEvent>,
    /// Resize observer notifications
    pub resize: ListenerRegistry<ResizeEntry>,
    /// Intersection observer notifications
    pub intersection: ListenerRegistry<IntersectionEntry>,
    /// `transitionend` of the list, carrying the element id
    pub transition_end: ListenerRegistry<String>,
}

impl HostEvents {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Subscriptions of one mounted carousel
#[derive(Debug)]
pub struct MountGuard {
    guards: SmallVec<[ListenerGuard; 4]>,
}

impl MountGuard {
    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    /// Unsubscribe everything now
    pub fn unmount(self) {
        drop(self);
    }
}

/// Subscribe `handle` to the host's event sources
#[must_use = "dropping the guard immediately unmounts the carousel"]
pub fn mount<C: Clock + Clone + 'static>(
    handle: &CarouselHandle<C>,
    host: &HostEvents,
) -> MountGuard {
    let mut guards = SmallVec::new();

    guards.push(host.pointer.subscribe(forward(
        handle,
        |carousel: &mut Carousel<C>, event: &PointerEvent| carousel.document_pointer(event),
    )));
    guards.push(host.resize.subscribe(forward(
        handle,
        |carousel: &mut Carousel<C>, entry: &ResizeEntry| carousel.observe_resize(entry),
    )));
    guards.push(host.intersection.subscribe(forward(
        handle,
        |carousel: &mut Carousel<C>, entry: &IntersectionEntry| carousel.intersect(entry),
    )));

    let list_id = handle.borrow().config().list_id();
    guards.push(host.transition_end.subscribe(forward(
        handle,
        move |carousel: &mut Carousel<C>, target: &String| {
            if *target == list_id {
                carousel.transition_end();
            }
        },
    )));

    tracing::debug!(id = %handle.borrow().config().id, "carousel mounted");
    MountGuard { guards }
}

/// Listener that borrows the carousel mutably and hands it `event`
fn forward<C, E, F>(handle: &CarouselHandle<C>, mut apply: F) -> impl FnMut(&E) + 'static
where
    C: Clock + Clone + 'static,
    E: 'static,
    F: FnMut(&mut Carousel<C>, &E) + 'static,
{
    let weak: Weak<RefCell<Carousel<C>>> = Rc::downgrade(handle);
    move |event: &E| {
        let Some(handle) = weak.upgrade() else {
            return;
        };
        let Ok(mut carousel) = handle.try_borrow_mut() else {
            tracing::warn!("carousel busy, dropping host event");
            return;
        };
        apply(&mut carousel, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CarouselConfig, CarouselLabels};
    use crate::constants::RESIZE_DEBOUNCE;
    use bds_core::ManualClock;

    fn handle(clock: ManualClock) -> CarouselHandle<ManualClock> {
        let labels = CarouselLabels {
            next_button: "Next".into(),
            prev_button: "Previous".into(),
            pause_button: "Pause".into(),
            resume_button: "Resume".into(),
            pagination: "Pagination".into(),
            pagination_indicator: "Page %s of %s".into(),
        };
        let carousel = Carousel::with_clock(CarouselConfig::new("c", labels), 20, clock).unwrap();
        let handle = carousel.into_handle();
        handle.borrow_mut().resize(948.0);
        handle
    }

    #[test]
    fn test_document_drag_through_host() {
        let host = HostEvents::new();
        let handle = handle(ManualClock::new());
        let _mounted = mount(&handle, &host);

        assert!(handle
            .borrow_mut()
            .list_pointer_down(&PointerEvent::mouse_down(500.0)));
        host.pointer.dispatch(&PointerEvent::mouse_move(100.0));
        assert_eq!(handle.borrow().offset(), 400.0);

        host.pointer.dispatch(&PointerEvent::mouse_up(100.0));
        assert_eq!(handle.borrow().target_index(), 3);
        assert_eq!(handle.borrow().translate_x(), -948.0);
    }

    #[test]
    fn test_event_dropped_while_carousel_borrowed() {
        let host = HostEvents::new();
        let handle = handle(ManualClock::new());
        let _mounted = mount(&handle, &host);

        let carousel = handle.borrow_mut();
        assert_eq!(host.pointer.dispatch(&PointerEvent::mouse_move(100.0)), 1);
        drop(carousel);

        assert_eq!(handle.borrow().offset(), 0.0);
    }

    #[test]
    fn test_resize_and_transition_end_through_host() {
        let clock = ManualClock::new();
        let host = HostEvents::new();
        let handle = handle(clock.clone());
        let _mounted = mount(&handle, &host);

        host.resize.dispatch(&ResizeEntry::new("c__container", 1896.0));
        clock.advance(RESIZE_DEBOUNCE);
        handle.borrow_mut().tick();
        assert_eq!(handle.borrow().items_per_page(), 6);

        handle.borrow_mut().navigate_by_page(3);
        assert!(!handle.borrow().show_prev_button());
        host.transition_end.dispatch(&"c__list".to_string());
        assert!(handle.borrow().show_prev_button());
    }

    #[test]
    fn test_unmount_releases_listeners() {
        let host = HostEvents::new();
        let handle = handle(ManualClock::new());
        let mounted = mount(&handle, &host);
        assert_eq!(mounted.len(), 4);
        assert_eq!(host.pointer.len(), 1);

        mounted.unmount();
        assert!(host.pointer.is_empty());
        assert!(host.resize.is_empty());
        assert!(host.intersection.is_empty());
        assert!(host.transition_end.is_empty());
    }

    #[test]
    fn test_dropped_handle_ignores_events() {
        let host = HostEvents::new();
        let handle = handle(ManualClock::new());
        let _mounted = mount(&handle, &host);
        drop(handle);

        assert_eq!(host.pointer.dispatch(&PointerEvent::mouse_move(10.0)), 1);
    }
}
