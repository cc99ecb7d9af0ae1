//! Wall-clock sources for the stopwatch.
//!
//! Timestamps are calendar time (`DateTime<Utc>`), not a monotonic clock, so
//! readings can in principle move backwards if the host clock is adjusted.

use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

pub type Timestamp = DateTime<Utc>;

/// Anything that can report the current wall-clock time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A settable clock for deterministic sessions.
///
/// Clones share the same underlying time, so a test can keep a handle while
/// the stopwatch owns another. With a non-zero tick every reading advances
/// the clock by that amount after it is returned.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<Timestamp>>,
    tick: Duration,
}

impl ManualClock {
    pub fn starting_at(origin: Timestamp) -> Self {
        Self {
            current: Arc::new(Mutex::new(origin)),
            tick: Duration::zero(),
        }
    }

    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn set(&self, timestamp: Timestamp) {
        *self.current.lock() = timestamp;
    }

    pub fn advance(&self, delta: Duration) {
        let mut current = self.current.lock();
        *current += delta;
    }

    /// Current time without consuming a tick.
    pub fn peek(&self) -> Timestamp {
        *self.current.lock()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let mut current = self.current.lock();
        let reading = *current;
        *current += self.tick;
        reading
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Signed duration expressed in (fractional) seconds.
pub fn total_seconds(delta: Duration) -> f64 {
    match delta.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1_000_000_000.0,
        // Only spans of ~292 years overflow the nanosecond count.
        None => delta.num_milliseconds() as f64 / 1_000.0,
    }
}
