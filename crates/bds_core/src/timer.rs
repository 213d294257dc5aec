//! Pausable countdown timers
//!
//! [`Timer`] is a single-shot countdown that keeps track of how long it has
//! actually been running across pause/resume cycles, so resuming continues
//! with the remaining time instead of starting over. [`Debouncer`] holds the
//! latest value of a noisy notification until a quiet period has elapsed.
//!
//! Neither type spawns threads or registers OS timers. The host polls them
//! from its event loop, which keeps cancellation and firing on the same
//! queue and makes them deterministic under a [`ManualClock`].

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

// ============================================================================
// Clocks
// ============================================================================

/// Source of monotonic time, measured from an arbitrary origin
pub trait Clock {
    /// Time elapsed since the clock's origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the component under test.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump to an absolute time since the origin
    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ============================================================================
// Timer
// ============================================================================

/// Single-shot countdown with pause/resume accounting
///
/// ```text
///            start()                 pause()
///   Idle ───────────────► Running ───────────────► Paused
///    ▲                     │  ▲                      │
///    │  poll() at deadline │  └──────── resume() ────┘
///    └─────────────────────┘
/// ```
///
/// At most one deadline is pending at any time. `resume()` while already
/// running re-pauses internally before re-arming, so repeated resumes never
/// stack up extra firings.
pub struct Timer<C: Clock> {
    clock: C,
    duration: Duration,
    /// Pending expiry, `None` when not running
    deadline: Option<Duration>,
    /// When the current run segment started
    start_time: Duration,
    /// Time spent running in previous segments
    total_run_time: Duration,
}

impl<C: Clock> Timer<C> {
    pub fn new(clock: C, duration: Duration) -> Self {
        Self {
            clock,
            duration,
            deadline: None,
            start_time: Duration::ZERO,
            total_run_time: Duration::ZERO,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the countdown length. Clears any pending countdown.
    pub fn set_duration(&mut self, duration: Duration) {
        self.clear();
        self.duration = duration;
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Whether a deadline is currently pending
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time accumulated by completed run segments
    pub fn total_run_time(&self) -> Duration {
        self.total_run_time
    }

    /// Time left until the pending deadline, if running
    pub fn remaining(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.deadline.map(|deadline| deadline.saturating_sub(now))
    }

    /// Begin a fresh countdown of the full duration from now
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.total_run_time = Duration::ZERO;
        self.start_time = now;
        self.deadline = Some(now + self.duration);
        tracing::trace!(duration_ms = self.duration.as_millis() as u64, "timer started");
    }

    /// Cancel the pending deadline and bank the time run so far
    pub fn pause(&mut self) {
        if self.deadline.take().is_none() {
            return;
        }
        let now = self.clock.now();
        self.total_run_time += now.saturating_sub(self.start_time);
        tracing::trace!(
            run_ms = self.total_run_time.as_millis() as u64,
            "timer paused"
        );
    }

    /// Re-arm for whatever is left of the duration
    ///
    /// When the banked run time already covers the duration the timer is
    /// treated as expired and cleared rather than fired with no delay.
    pub fn resume(&mut self) {
        if self.total_run_time >= self.duration {
            self.clear();
            return;
        }

        self.pause();
        // pause() may have banked more time
        if self.total_run_time >= self.duration {
            self.clear();
            return;
        }

        let now = self.clock.now();
        self.deadline = Some(now + (self.duration - self.total_run_time));
        self.start_time = now;
    }

    /// Cancel and reset all accounting
    pub fn clear(&mut self) {
        self.deadline = None;
        self.start_time = Duration::ZERO;
        self.total_run_time = Duration::ZERO;
    }

    /// Returns true exactly once when the pending deadline has been reached
    pub fn poll(&mut self) -> bool {
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.clock.now() < deadline {
            return false;
        }
        self.clear();
        true
    }

    /// Invoke `on_expire` if the deadline has been reached
    pub fn poll_with<F: FnOnce()>(&mut self, on_expire: F) -> bool {
        let fired = self.poll();
        if fired {
            on_expire();
        }
        fired
    }
}

impl<C: Clock> fmt::Debug for Timer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("duration", &self.duration)
            .field("deadline", &self.deadline)
            .field("start_time", &self.start_time)
            .field("total_run_time", &self.total_run_time)
            .finish()
    }
}

// ============================================================================
// Debouncer
// ============================================================================

/// Keeps the most recent value until `delay` has passed without a newer one
pub struct Debouncer<C: Clock, T> {
    clock: C,
    delay: Duration,
    pending: Option<(Duration, T)>,
}

impl<C: Clock, T> Debouncer<C, T> {
    pub fn new(clock: C, delay: Duration) -> Self {
        Self {
            clock,
            delay,
            pending: None,
        }
    }

    /// Replace the pending value and restart the quiet period
    pub fn push(&mut self, value: T) {
        let due = self.clock.now() + self.delay;
        self.pending = Some((due, value));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the pending value once its quiet period is over
    pub fn take_ready(&mut self) -> Option<T> {
        let now = self.clock.now();
        match &self.pending {
            Some((due, _)) if now >= *due => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    /// Drop the pending value
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

impl<C: Clock, T: fmt::Debug> fmt::Debug for Debouncer<C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending)
            .finish()
    }
}
