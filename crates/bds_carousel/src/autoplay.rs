//! Autoplay orchestration
//!
//! Autoplay advances the carousel one page per interval while it is on
//! screen. Hovering the list pauses the countdown without losing the time
//! already elapsed; the footer button stops and restarts it.
//!
//! ```text
//!           VISIBLE / CLICK            POINTER_ENTER
//!   Idle ─────────────────► Playing ─────────────────► Paused
//!    ▲                      │  ▲                        │
//!    │   HIDDEN / CLICK     │  └───── POINTER_LEAVE ────┘
//!    └──────────────────────┴── HIDDEN / CLICK ─────────┘
//! ```
//!
//! The orchestrator owns the [`Timer`] and keeps it in step with the state:
//! entering `Playing` from `Idle` starts a fresh countdown, `Paused` banks
//! the elapsed time, leaving `Paused` resumes it and `Idle` clears it.

use std::time::Duration;

use bds_core::event_types;
use bds_core::{Clock, EventType, StateTransitions, Timer};
use serde::Serialize;

/// Events specific to autoplay
pub mod autoplay_events {
    use bds_core::EventType;

    /// The carousel crossed the visibility threshold
    pub const VISIBLE: EventType = 100;
    /// The carousel dropped below the visibility threshold
    pub const HIDDEN: EventType = 101;
}

use autoplay_events::{HIDDEN, VISIBLE};

/// Autoplay states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutoplayState {
    #[default]
    Idle,
    Playing,
    Paused,
}

impl StateTransitions for AutoplayState {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            (AutoplayState::Idle, VISIBLE) => Some(AutoplayState::Playing),
            (AutoplayState::Idle, event_types::CLICK) => Some(AutoplayState::Playing),

            (AutoplayState::Playing, event_types::POINTER_ENTER) => Some(AutoplayState::Paused),
            (AutoplayState::Playing, HIDDEN) => Some(AutoplayState::Idle),
            (AutoplayState::Playing, event_types::CLICK) => Some(AutoplayState::Idle),

            (AutoplayState::Paused, event_types::POINTER_LEAVE) => Some(AutoplayState::Playing),
            (AutoplayState::Paused, HIDDEN) => Some(AutoplayState::Idle),
            (AutoplayState::Paused, event_types::CLICK) => Some(AutoplayState::Idle),

            _ => None,
        }
    }
}

/// Autoplay state plus its countdown
pub struct Autoplay<C: Clock> {
    /// Autoplay configured and paired with indicator pagination
    enabled: bool,
    state: AutoplayState,
    timer: Timer<C>,
}

impl<C: Clock> Autoplay<C> {
    /// Create the orchestrator; an enabled one starts out playing
    pub fn new(clock: C, interval: Duration, enabled: bool) -> Self {
        let mut autoplay = Self {
            enabled,
            state: AutoplayState::Idle,
            timer: Timer::new(clock, interval),
        };
        if enabled {
            autoplay.transition(VISIBLE);
        }
        autoplay
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn state(&self) -> AutoplayState {
        self.state
    }

    /// Playing or paused
    pub fn is_autoplaying(&self) -> bool {
        self.state != AutoplayState::Idle
    }

    pub fn is_paused(&self) -> bool {
        self.state == AutoplayState::Paused
    }

    pub fn timer(&self) -> &Timer<C> {
        &self.timer
    }

    /// Turn autoplay on or off after a configuration change
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        if enabled {
            self.enabled = true;
            self.transition(VISIBLE);
        } else {
            self.transition(HIDDEN);
            self.enabled = false;
        }
    }

    /// Change the interval; a running countdown starts over
    pub fn set_interval(&mut self, interval: Duration) {
        if self.timer.duration() == interval {
            return;
        }
        self.timer.set_duration(interval);
        self.restart();
    }

    /// Visibility reported by the intersection observer
    pub fn set_visible(&mut self, visible: bool) -> bool {
        self.transition(if visible { VISIBLE } else { HIDDEN })
    }

    /// Pointer entered the list
    pub fn hover_enter(&mut self) -> bool {
        self.transition(event_types::POINTER_ENTER)
    }

    /// Pointer left the list
    pub fn hover_leave(&mut self) -> bool {
        self.transition(event_types::POINTER_LEAVE)
    }

    /// Footer play/pause button
    pub fn toggle(&mut self) -> bool {
        self.transition(event_types::CLICK)
    }

    /// Start a fresh countdown after the page changed
    ///
    /// A paused carousel gets a fresh countdown that stays paused until the
    /// pointer leaves.
    pub fn restart(&mut self) {
        match self.state {
            AutoplayState::Idle => {}
            AutoplayState::Playing => self.timer.start(),
            AutoplayState::Paused => {
                self.timer.start();
                self.timer.pause();
            }
        }
    }

    /// True once per expired interval while playing
    pub fn poll(&mut self) -> bool {
        self.state == AutoplayState::Playing && self.timer.poll()
    }

    fn transition(&mut self, event: EventType) -> bool {
        if !self.enabled {
            return false;
        }
        let previous = self.state;
        if !self.state.apply(event) {
            return false;
        }

        match (previous, self.state) {
            (_, AutoplayState::Idle) => self.timer.clear(),
            (AutoplayState::Idle, AutoplayState::Playing) => self.timer.start(),
            (AutoplayState::Playing, AutoplayState::Paused) => self.timer.pause(),
            (AutoplayState::Paused, AutoplayState::Playing) => self.timer.resume(),
            _ => {}
        }
        tracing::debug!(from = ?previous, to = ?self.state, "autoplay transition");
        true
    }
}

impl<C: Clock> std::fmt::Debug for Autoplay<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Autoplay")
            .field("enabled", &self.enabled)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .finish()
    }
}
