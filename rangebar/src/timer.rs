//! Shared repeat timer for click-and-hold scrolling.
//!
//! One timer is shared by every scrollbar of a window and handed to each of
//! them as an `Rc<RepeatTimer>`. At most one gesture owns the timer's tick
//! subscription at a time; starting a new gesture tears down the previous one.
//!
//! Ticks are delivered on the host's own thread. A host either awaits
//! [`RepeatTimer::run`] inside its single-threaded event loop, or calls
//! [`RepeatTimer::fire`] from its own clock.

use std::cell::Cell;
use std::time::Duration;

use log::{debug, trace};
use tokio::sync::Notify;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::config::ConfigError;
use crate::signal::{ConnectionId, Signal};

/// Default period between repeat ticks.
pub const DEFAULT_PERIOD: Duration = Duration::from_millis(100);

/// Ownership token for the timer's active gesture subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureToken(ConnectionId);

/// Periodic ticker: Idle until started, Running until stopped.
#[derive(Debug)]
pub struct RepeatTimer {
    period: Duration,
    running: Cell<bool>,
    /// Bumped on every Idle -> Running transition so the driver restarts
    /// its phase.
    generation: Cell<u64>,
    fired: Signal<()>,
    gesture: Cell<Option<ConnectionId>>,
    wake: Notify,
}

impl RepeatTimer {
    /// Create a timer with the default 100 ms period.
    pub fn new() -> Self {
        Self::build(DEFAULT_PERIOD)
    }

    /// Create a timer with a custom period.
    pub fn with_period(period: Duration) -> Result<Self, ConfigError> {
        if period.is_zero() {
            return Err(ConfigError::ZeroRepeatPeriod);
        }
        Ok(Self::build(period))
    }

    fn build(period: Duration) -> Self {
        Self {
            period,
            running: Cell::new(false),
            generation: Cell::new(0),
            fired: Signal::new(),
            gesture: Cell::new(None),
            wake: Notify::new(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Tick notification. Gesture handlers are connected here.
    pub fn fired(&self) -> &Signal<()> {
        &self.fired
    }

    /// Start ticking. Starting a running timer does nothing.
    pub fn start(&self) {
        if self.running.get() {
            return;
        }
        self.running.set(true);
        self.generation.set(self.generation.get() + 1);
        debug!("[repeat] timer started ({:?})", self.period);
        self.wake.notify_one();
    }

    /// Stop ticking. Stopping an idle timer does nothing.
    pub fn stop(&self) {
        if !self.running.get() {
            return;
        }
        self.running.set(false);
        debug!("[repeat] timer stopped");
        self.wake.notify_one();
    }

    /// Deliver one tick to the subscribed handlers, if running.
    pub fn fire(&self) {
        if self.running.get() {
            trace!("[repeat] tick");
            self.fired.emit(&());
        }
    }

    /// Make `on_tick` the only gesture handler and start the timer.
    ///
    /// Any handler left over from a previous gesture is disconnected first.
    pub fn begin_gesture<F>(&self, on_tick: F) -> GestureToken
    where
        F: Fn() + 'static,
    {
        if let Some(stale) = self.gesture.take() {
            debug!("[repeat] replacing stale gesture {:?}", stale);
            self.fired.disconnect(stale);
        }
        let id = self.fired.connect(move |_| on_tick());
        self.gesture.set(Some(id));
        self.start();
        GestureToken(id)
    }

    /// End the gesture identified by `token`, stopping the timer.
    ///
    /// Returns false if the token no longer owns the timer.
    pub fn end_gesture(&self, token: GestureToken) -> bool {
        if self.gesture.get() != Some(token.0) {
            return false;
        }
        self.gesture.set(None);
        self.fired.disconnect(token.0);
        self.stop();
        true
    }

    /// Whether `token` still owns the timer.
    pub fn owns_gesture(&self, token: GestureToken) -> bool {
        self.gesture.get() == Some(token.0)
    }

    /// Drive the timer on the current task, forever.
    ///
    /// The future is not `Send`; await it from a current-thread runtime or a
    /// `LocalSet`, usually as one branch of the host's `tokio::select!`.
    pub async fn run(&self) {
        loop {
            if !self.running.get() {
                self.wake.notified().await;
                continue;
            }

            let generation = self.generation.get();
            let mut ticker = time::interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            while self.running.get() && self.generation.get() == generation {
                tokio::select! {
                    _ = ticker.tick() => {
                        if self.generation.get() == generation {
                            self.fire();
                        }
                    }
                    _ = self.wake.notified() => {}
                }
            }
        }
    }
}

impl Default for RepeatTimer {
    fn default() -> Self {
        Self::new()
    }
}
