//! Carousel handles and the provider scope
//!
//! Descendant components (items, nav buttons, pagination) reach the
//! carousel that renders them through a [`CarouselHandle`]. A host that
//! builds its tree top-down can push the handle onto a thread-local
//! provider stack for the duration of a subtree and let descendants look
//! it up with [`CarouselContext::current`].
//!
//! ```text
//! CarouselProvider::enter(handle)      ← pushes
//!     item / pagination builders
//!         CarouselContext::current()   ← innermost handle
//! guard dropped                        ← pops
//! ```
//!
//! Uses `Rc` since UI is single-threaded.

use std::any::Any;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use bds_core::{Clock, SystemClock};

use crate::carousel::Carousel;
use crate::error::{CarouselError, Result};

/// Shared handle to one carousel
pub type CarouselHandle<C = SystemClock> = Rc<RefCell<Carousel<C>>>;

thread_local! {
    static PROVIDERS: RefCell<Vec<Rc<dyn Any>>> = const { RefCell::new(Vec::new()) };
}

impl<C: Clock + Clone + 'static> Carousel<C> {
    /// Wrap the carousel in a shared handle
    pub fn into_handle(self) -> CarouselHandle<C> {
        Rc::new(RefCell::new(self))
    }
}

/// Provider scope for one carousel
pub struct CarouselProvider;

impl CarouselProvider {
    /// Make `handle` the current carousel until the guard drops
    #[must_use = "the provider scope ends when the guard is dropped"]
    pub fn enter<C: Clock + Clone + 'static>(handle: &CarouselHandle<C>) -> ProviderGuard {
        let erased: Rc<dyn Any> = handle.clone();
        let depth = PROVIDERS.with(|providers| {
            let mut providers = providers.borrow_mut();
            providers.push(erased);
            providers.len()
        });
        tracing::trace!(depth, "carousel provider entered");
        ProviderGuard {
            depth,
            _not_send: PhantomData,
        }
    }

    /// Run `f` with `handle` as the current carousel
    pub fn provide<C, R, F>(handle: &CarouselHandle<C>, f: F) -> R
    where
        C: Clock + Clone + 'static,
        F: FnOnce() -> R,
    {
        let _guard = Self::enter(handle);
        f()
    }
}

/// Ends a provider scope on drop
#[derive(Debug)]
pub struct ProviderGuard {
    depth: usize,
    _not_send: PhantomData<Rc<()>>,
}

impl Drop for ProviderGuard {
    fn drop(&mut self) {
        PROVIDERS.with(|providers| {
            // Guards drop innermost first; truncate also covers leaked inner guards
            providers.borrow_mut().truncate(self.depth - 1);
        });
    }
}

/// Lookup of the innermost provided carousel
pub struct CarouselContext<C = SystemClock> {
    _clock: PhantomData<C>,
}

impl<C: Clock + Clone + 'static> CarouselContext<C> {
    /// Innermost carousel with clock `C`
    ///
    /// Fails with [`CarouselError::MissingProvider`] outside any provider
    /// scope, or when the innermost carousel runs on another clock type.
    pub fn current() -> Result<CarouselHandle<C>> {
        let provided = PROVIDERS.with(|providers| providers.borrow().last().cloned());
        provided
            .and_then(|any| any.downcast::<RefCell<Carousel<C>>>().ok())
            .ok_or(CarouselError::MissingProvider)
    }

    /// Whether any carousel is currently provided
    pub fn is_provided() -> bool {
        PROVIDERS.with(|providers| !providers.borrow().is_empty())
    }
}
