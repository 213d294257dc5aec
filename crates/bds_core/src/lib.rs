//! BDS Core
//!
//! Foundational primitives shared by the BDS headless components:
//!
//! - **Timers**: pausable single-shot countdowns and debouncers driven by an
//!   injectable [`Clock`]
//! - **Listener registries**: document-level subscriptions released by scoped guards
//! - **Input events**: pointer, keyboard, wheel, resize and intersection payloads
//! - **State machines**: the [`StateTransitions`] trait used by widget FSMs
//! - **Button descriptors**: the props handed to Button / ButtonCircular renderers
//!
//! Everything here is single-threaded. Components hold state behind `Rc`
//! handles and the host pushes events in from its own event loop.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use bds_core::{ManualClock, Timer};
//!
//! let clock = ManualClock::new();
//! let mut timer = Timer::new(clock.clone(), Duration::from_millis(5000));
//!
//! timer.start();
//! clock.advance(Duration::from_millis(2000));
//! timer.pause();
//!
//! clock.advance(Duration::from_secs(60));
//! assert!(!timer.poll());
//!
//! timer.resume();
//! clock.advance(Duration::from_millis(3000));
//! assert!(timer.poll());
//! ```

pub mod button;
pub mod events;
pub mod fsm;
pub mod listener;
pub mod timer;

pub use button::{
    ButtonCircularProps, ButtonCircularSize, ButtonCircularVariant, ButtonProps, ButtonSize,
    ButtonVariant,
};
pub use events::{
    event_types, EventType, IntersectionEntry, Key, PointerEvent, PointerSource, ResizeEntry,
    WheelEvent,
};
pub use fsm::StateTransitions;
pub use listener::{ListenerGuard, ListenerRegistry};
pub use timer::{Clock, Debouncer, ManualClock, SystemClock, Timer};
