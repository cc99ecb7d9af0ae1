pub mod clock;
pub mod error;
pub mod stopwatch;

pub use clock::{total_seconds, Clock, ManualClock, SystemClock, Timestamp};
pub use error::StopwatchError;
pub use stopwatch::{Lap, Stopwatch, StopwatchState, START_LABEL, STOP_LABEL};

pub type Result<T> = std::result::Result<T, StopwatchError>;
