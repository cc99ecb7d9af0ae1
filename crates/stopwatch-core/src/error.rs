use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StopwatchError {
    #[error("Stopwatch already has {recorded} recorded times; reset it with .reset() or start with force_reset=true")]
    AlreadyRunningOrUsed { recorded: usize },
}
