//! # lapwatch: labeled lap stopwatch
//!
//! Records labeled wall-clock timestamps between a start and a stop event
//! and renders them on a one-dimensional timeline:
//! - `Stopwatch` state machine over a pluggable `Clock`
//! - timeline chart derivation in elapsed seconds or raw timestamps
//! - lap table with text, CSV and JSON output
//! - plotly, tracing and in-memory display sinks

pub mod config;
pub mod utils;

pub use stopwatch_core;
pub use timeline_render;

pub use config::{ConfigError, LapwatchConfig};
pub use stopwatch_core::{
    Clock, Lap, ManualClock, Stopwatch, StopwatchError, StopwatchState, SystemClock, Timestamp,
};
pub use timeline_render::{
    DisplayLaps, DisplayOptions, DisplaySink, LapReport, LapTable, MemorySink, PlotlySink,
    TracingSink,
};

use parking_lot::Mutex;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub type SharedStopwatch<C = SystemClock> = Arc<Mutex<Stopwatch<C>>>;
pub type Result<T> = anyhow::Result<T>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub fn shared<C: Clock>(stopwatch: Stopwatch<C>) -> SharedStopwatch<C> {
    Arc::new(Mutex::new(stopwatch))
}

/// Install a fmt subscriber filtered by `filter` (e.g. `"info"` or
/// `"lapwatch=debug,stopwatch_core=debug"`).
pub fn init_logging(filter: &str) -> Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install subscriber: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_version() {
        assert!(!VERSION.trim().is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "lapwatch");
    }

    #[test]
    fn test_invalid_log_filter() {
        assert!(init_logging("lapwatch=notalevel").is_err());
    }

    #[test]
    fn test_shared_stopwatch_across_threads() {
        let sw = shared(Stopwatch::new(true));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sw = Arc::clone(&sw);
                thread::spawn(move || {
                    let label = format!("worker{}", i);
                    sw.lock().lap(Some(label.as_str()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut sw = sw.lock();
        sw.stop();
        assert_eq!(sw.times().len(), 6);
        assert!(sw.elapsed_time().is_some());
    }
}
