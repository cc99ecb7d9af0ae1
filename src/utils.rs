//! Utility functions and helpers

use chrono::Duration;

/// Human-readable rendering of a signed duration, picking the largest unit
/// that keeps the value above one.
pub fn format_elapsed(elapsed: Duration) -> String {
    let Some(nanos) = elapsed.num_nanoseconds() else {
        return format!("{}s", elapsed.num_seconds());
    };

    let sign = if nanos < 0 { "-" } else { "" };
    let nanos = nanos.unsigned_abs();
    if nanos < 1_000 {
        format!("{}{}ns", sign, nanos)
    } else if nanos < 1_000_000 {
        format!("{}{:.2}μs", sign, nanos as f64 / 1_000.0)
    } else if nanos < 1_000_000_000 {
        format!("{}{:.2}ms", sign, nanos as f64 / 1_000_000.0)
    } else {
        format!("{}{:.2}s", sign, nanos as f64 / 1_000_000_000.0)
    }
}

/// Elapsed time of a finished session, or a placeholder while it is not.
pub fn describe_elapsed(elapsed: Option<Duration>) -> String {
    elapsed.map_or_else(|| "not stopped".to_string(), format_elapsed)
}
