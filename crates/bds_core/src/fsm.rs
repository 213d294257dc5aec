//! Event-driven state machines
//!
//! Widgets describe their interaction states as small enums and implement
//! [`StateTransitions`] to map `(state, event)` pairs to the next state.
//!
//! # Example
//!
//! ```rust
//! use bds_core::event_types::*;
//! use bds_core::{EventType, StateTransitions};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum HoverState {
//!     #[default]
//!     Idle,
//!     Hovered,
//! }
//!
//! impl StateTransitions for HoverState {
//!     fn on_event(&self, event: EventType) -> Option<Self> {
//!         match (self, event) {
//!             (HoverState::Idle, POINTER_ENTER) => Some(HoverState::Hovered),
//!             (HoverState::Hovered, POINTER_LEAVE) => Some(HoverState::Idle),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut state = HoverState::default();
//! assert!(state.apply(POINTER_ENTER));
//! assert_eq!(state, HoverState::Hovered);
//! assert!(!state.apply(POINTER_ENTER));
//! ```

use std::fmt::Debug;
use std::hash::Hash;

use crate::events::EventType;

/// Trait for widget state enums
pub trait StateTransitions: Clone + Copy + PartialEq + Eq + Hash + Debug + 'static {
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;

    /// Apply `event` in place. Returns true if the state changed.
    fn apply(&mut self, event: EventType) -> bool {
        match self.on_event(event) {
            Some(next) if next != *self => {
                tracing::trace!(from = ?self, to = ?next, event, "state transition");
                *self = next;
                true
            }
            _ => false,
        }
    }
}
