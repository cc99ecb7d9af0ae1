use crate::options::DisplayOptions;
use crate::sink::DisplaySink;
use crate::table::{LapRow, LapTable};
use crate::timeline::{annotations, points, AxisKind, TimelineChart};
use serde::Serialize;
use stopwatch_core::{Clock, Lap, Stopwatch, Timestamp};
use tracing::{debug, info};

/// The timeline chart plus, in verbose mode, the lap table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapReport {
    pub chart: TimelineChart,
    pub table: Option<LapTable>,
}

/// Derive the report for `times` without displaying anything.
///
/// Elapsed seconds are measured from `start_time`; a history recorded
/// entirely before any start falls back to its first entry as the origin.
/// Returns `None` when there is nothing to show.
pub fn lap_report(
    times: &[Lap],
    start_time: Option<Timestamp>,
    options: &DisplayOptions,
) -> Option<LapReport> {
    let (last, rest) = times.split_last()?;

    let shown: &[Lap] = if options.show_stop { times } else { rest };
    debug!(
        "Rendering {} of {} recorded times (last: {})",
        shown.len(),
        times.len(),
        last.label
    );

    let (axis, origin) = if options.mark_elapsed_time {
        let origin = start_time.unwrap_or(times[0].timestamp);
        (AxisKind::ElapsedSeconds, Some(origin))
    } else {
        (AxisKind::TimeRecorded, None)
    };

    let points = points(shown, origin);
    let chart = TimelineChart {
        axis,
        annotations: if options.annotate {
            annotations(&points)
        } else {
            Vec::new()
        },
        vlines: if options.vlines {
            points.iter().map(|point| point.x).collect()
        } else {
            Vec::new()
        },
        points,
        figsize: options.figsize,
        styles: options.styles.clone(),
    };

    let table = options.verbose.then(|| {
        let rows = shown
            .iter()
            .zip(&chart.points)
            .map(|(lap, point)| LapRow {
                label: lap.label.clone(),
                timestamp: lap.timestamp,
                elapsed_seconds: point.x.as_seconds(),
            })
            .collect();
        LapTable::new(rows, options.mark_elapsed_time)
    });

    Some(LapReport { chart, table })
}

/// Render `times` through `sink` and hand back what was shown.
pub fn display_laps(
    times: &[Lap],
    start_time: Option<Timestamp>,
    options: &DisplayOptions,
    sink: &mut dyn DisplaySink,
) -> Option<LapReport> {
    let Some(report) = lap_report(times, start_time, options) else {
        info!("No times to display.");
        return None;
    };

    sink.show_chart(&report.chart);
    if let Some(table) = &report.table {
        sink.show_table(table);
    }

    Some(report)
}

/// Timeline rendering for anything holding a lap history.
pub trait DisplayLaps {
    fn display_laps(
        &self,
        options: &DisplayOptions,
        sink: &mut dyn DisplaySink,
    ) -> Option<LapReport>;

    fn lap_report(&self, options: &DisplayOptions) -> Option<LapReport>;
}

impl<C: Clock> DisplayLaps for Stopwatch<C> {
    fn display_laps(
        &self,
        options: &DisplayOptions,
        sink: &mut dyn DisplaySink,
    ) -> Option<LapReport> {
        display_laps(self.times(), self.start_time(), options, sink)
    }

    fn lap_report(&self, options: &DisplayOptions) -> Option<LapReport> {
        lap_report(self.times(), self.start_time(), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use crate::timeline::XValue;
    use chrono::{Duration, TimeZone, Utc};
    use stopwatch_core::ManualClock;

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn session() -> Stopwatch<ManualClock> {
        let clock = ManualClock::starting_at(t0()).with_tick(Duration::milliseconds(500));
        let mut sw = Stopwatch::with_clock(clock, true);
        sw.lap(None);
        sw.lap(Some("Checkpoint"));
        sw.stop();
        sw
    }

    #[test]
    fn test_empty_history_renders_nothing() {
        let clock = ManualClock::starting_at(t0());
        let sw = Stopwatch::with_clock(clock, false);
        let mut sink = MemorySink::new();

        assert!(sw.display_laps(&DisplayOptions::default(), &mut sink).is_none());
        assert!(sink.charts.is_empty());
        assert!(sink.tables.is_empty());
    }

    #[test]
    fn test_default_report() {
        let sw = session();
        let mut sink = MemorySink::new();
        let report = sw.display_laps(&DisplayOptions::default(), &mut sink).unwrap();

        assert_eq!(report.chart.axis, AxisKind::ElapsedSeconds);
        assert_eq!(report.chart.labels(), vec!["Start", "Lap1", "Checkpoint", "Stop"]);
        let xs: Vec<f64> = report.chart.points.iter().filter_map(|p| p.x.as_seconds()).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5]);
        assert_eq!(report.chart.annotations.len(), 4);
        assert_eq!(report.chart.vlines.len(), 4);

        let table = report.table.as_ref().unwrap();
        assert_eq!(table.columns(), vec!["Label", "Timestamp", "Elapsed Time (sec)"]);
        assert_eq!(table.rows()[3].elapsed_seconds, Some(1.5));

        assert_eq!(sink.charts, vec![report.chart.clone()]);
        assert_eq!(sink.tables.len(), 1);
    }

    #[test]
    fn test_hide_stop_drops_last_entry() {
        let sw = session();
        let options = DisplayOptions {
            show_stop: false,
            ..Default::default()
        };
        let report = sw.lap_report(&options).unwrap();
        assert_eq!(report.chart.labels(), vec!["Start", "Lap1", "Checkpoint"]);
        assert_eq!(report.table.unwrap().len(), 3);
    }

    #[test]
    fn test_hide_stop_is_positional() {
        let mut sw = session();
        sw.lap(Some("after"));
        let options = DisplayOptions {
            show_stop: false,
            ..Default::default()
        };
        let report = sw.lap_report(&options).unwrap();
        assert_eq!(report.chart.labels(), vec!["Start", "Lap1", "Checkpoint", "Stop"]);
    }

    #[test]
    fn test_raw_timestamps() {
        let sw = session();
        let options = DisplayOptions {
            mark_elapsed_time: false,
            ..Default::default()
        };
        let report = sw.lap_report(&options).unwrap();
        assert_eq!(report.chart.axis, AxisKind::TimeRecorded);
        assert_eq!(report.chart.points[0].x, XValue::Recorded(t0()));

        let table = report.table.unwrap();
        assert_eq!(table.columns(), vec!["Label", "Timestamp"]);
        assert!(table.rows().iter().all(|row| row.elapsed_seconds.is_none()));
    }

    #[test]
    fn test_toggles() {
        let sw = session();
        let options = DisplayOptions {
            annotate: false,
            vlines: false,
            verbose: false,
            ..Default::default()
        };
        let mut sink = MemorySink::new();
        let report = sw.display_laps(&options, &mut sink).unwrap();
        assert!(report.chart.annotations.is_empty());
        assert!(report.chart.vlines.is_empty());
        assert!(report.table.is_none());
        assert_eq!(sink.charts.len(), 1);
        assert!(sink.tables.is_empty());
    }

    #[test]
    fn test_cosmetics_forwarded() {
        let sw = session();
        let options = DisplayOptions {
            figsize: (12.0, 3.0),
            styles: vec!["dark_background".to_string()],
            ..Default::default()
        };
        let report = sw.lap_report(&options).unwrap();
        assert_eq!(report.chart.figsize, (12.0, 3.0));
        assert_eq!(report.chart.styles, vec!["dark_background"]);
    }

    #[test]
    fn test_laps_without_start_use_first_entry() {
        let clock = ManualClock::starting_at(t0()).with_tick(Duration::seconds(2));
        let mut sw = Stopwatch::with_clock(clock, false);
        sw.lap(None);
        sw.lap(None);

        let report = sw.lap_report(&DisplayOptions::default()).unwrap();
        assert_eq!(report.chart.labels(), vec!["Lap0", "Lap1"]);
        assert_eq!(report.chart.points[1].x, XValue::Elapsed(2.0));
    }

    #[test]
    fn test_rendering_does_not_mutate() {
        let sw = session();
        let before = sw.times().to_vec();
        let mut sink = MemorySink::new();
        sw.display_laps(&DisplayOptions::default(), &mut sink);
        sw.display_laps(&DisplayOptions::default(), &mut sink);
        assert_eq!(sw.times(), before.as_slice());
        assert_eq!(sink.charts.len(), 2);
    }
}
