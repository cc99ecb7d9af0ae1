use crate::clock::{total_seconds, Clock, SystemClock, Timestamp};
use crate::error::StopwatchError;
use chrono::Duration;
use metrics::{counter, histogram};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const START_LABEL: &str = "Start";
pub const STOP_LABEL: &str = "Stop";

/// A labeled timestamp. The start and stop events are recorded as laps too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lap {
    pub label: String,
    pub timestamp: Timestamp,
}

impl Lap {
    pub fn new(label: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            label: label.into(),
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopwatchState {
    Unstarted,
    Running,
    Stopped,
}

/// Records labeled wall-clock timestamps between a start and a stop event.
///
/// Laps are never guarded: `lap()` works before `start()` and after `stop()`,
/// it just appends another entry.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    clock: C,
    start_time: Option<Timestamp>,
    stop_time: Option<Timestamp>,
    times: Vec<Lap>,
}

impl Stopwatch<SystemClock> {
    pub fn new(auto_start: bool) -> Self {
        Self::with_clock(SystemClock, auto_start)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new(true)
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C, auto_start: bool) -> Self {
        let mut stopwatch = Self {
            clock,
            start_time: None,
            stop_time: None,
            times: Vec::new(),
        };

        if auto_start {
            stopwatch.begin();
        }

        stopwatch
    }

    /// Start the stopwatch.
    ///
    /// With `force_reset` every recorded value is cleared first. Without it,
    /// a stopwatch that already holds times refuses to start and is left
    /// untouched.
    pub fn start(&mut self, force_reset: bool) -> Result<(), StopwatchError> {
        if !self.times.is_empty() && !force_reset {
            return Err(StopwatchError::AlreadyRunningOrUsed {
                recorded: self.times.len(),
            });
        }

        if force_reset {
            self.reset();
        }

        self.begin();
        Ok(())
    }

    fn begin(&mut self) {
        let now = self.clock.now();
        self.start_time = Some(now);
        self.times.push(Lap::new(START_LABEL, now));

        counter!("stopwatch_starts_total").increment(1);
        info!("Stopwatch started at {}", now);
    }

    /// Record a lap without stopping. An empty or missing label becomes
    /// `Lap<n>` where `n` counts every entry recorded so far, Start included.
    pub fn lap(&mut self, label: Option<&str>) -> &Lap {
        let label = match label {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("Lap{}", self.times.len()),
        };

        let now = self.clock.now();
        debug!("Lap {} recorded at {}", label, now);
        counter!("stopwatch_laps_total").increment(1);

        self.times.push(Lap::new(label, now));
        &self.times[self.times.len() - 1]
    }

    /// Stop the stopwatch. A watch that was never started only logs a notice.
    pub fn stop(&mut self) {
        let Some(start_time) = self.start_time else {
            warn!("Timer not started.");
            return;
        };

        let now = self.clock.now();
        self.stop_time = Some(now);
        self.times.push(Lap::new(STOP_LABEL, now));

        let elapsed = total_seconds(now - start_time);
        counter!("stopwatch_stops_total").increment(1);
        histogram!("stopwatch_elapsed_seconds").record(elapsed);
        info!("Stopwatch stopped after {:.6}s", elapsed);
    }

    pub fn reset(&mut self) {
        self.start_time = None;
        self.stop_time = None;
        self.times.clear();
    }

    /// `stop_time - start_time`, or `None` unless the watch was started and stopped.
    pub fn elapsed_time(&self) -> Option<Duration> {
        match (self.start_time, self.stop_time) {
            (Some(start), Some(stop)) => Some(stop - start),
            _ => None,
        }
    }

    pub fn state(&self) -> StopwatchState {
        match (self.start_time, self.stop_time) {
            (_, Some(_)) => StopwatchState::Stopped,
            (Some(_), None) => StopwatchState::Running,
            (None, None) => StopwatchState::Unstarted,
        }
    }

    #[inline]
    pub fn start_time(&self) -> Option<Timestamp> {
        self.start_time
    }

    #[inline]
    pub fn stop_time(&self) -> Option<Timestamp> {
        self.stop_time
    }

    #[inline]
    pub fn times(&self) -> &[Lap] {
        &self.times
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
