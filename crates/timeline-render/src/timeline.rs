//! One-dimensional timeline derived from recorded laps.
//!
//! Every point sits at y = 0; only the x coordinate carries information.

use serde::Serialize;
use std::fmt;
use stopwatch_core::{total_seconds, Lap, Timestamp};

/// Vertical offset of an annotation above its point.
pub const ANNOTATION_OFFSET: f64 = 0.005;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisKind {
    ElapsedSeconds,
    TimeRecorded,
}

impl AxisKind {
    pub fn title(&self) -> &'static str {
        match self {
            AxisKind::ElapsedSeconds => "Elapsed Time (sec)",
            AxisKind::TimeRecorded => "Time Recorded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValue {
    Elapsed(f64),
    Recorded(Timestamp),
}

impl XValue {
    pub fn as_seconds(&self) -> Option<f64> {
        match self {
            XValue::Elapsed(seconds) => Some(*seconds),
            XValue::Recorded(_) => None,
        }
    }
}

impl fmt::Display for XValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XValue::Elapsed(seconds) => write!(f, "{:.6}", seconds),
            XValue::Recorded(timestamp) => write!(f, "{}", timestamp.format(TIMESTAMP_FORMAT)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub label: String,
    pub x: XValue,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineAnnotation {
    pub text: String,
    pub x: XValue,
    pub y: f64,
}

/// Everything a display sink needs to draw the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineChart {
    pub axis: AxisKind,
    pub points: Vec<TimelinePoint>,
    pub annotations: Vec<TimelineAnnotation>,
    pub vlines: Vec<XValue>,
    pub figsize: (f64, f64),
    pub styles: Vec<String>,
}

impl TimelineChart {
    pub fn x_title(&self) -> &'static str {
        self.axis.title()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|point| point.label.as_str()).collect()
    }
}

/// x coordinate of a lap: seconds since `origin` when given, else the raw timestamp.
pub fn x_value(lap: &Lap, origin: Option<Timestamp>) -> XValue {
    match origin {
        Some(origin) => XValue::Elapsed(total_seconds(lap.timestamp - origin)),
        None => XValue::Recorded(lap.timestamp),
    }
}

pub fn points(laps: &[Lap], origin: Option<Timestamp>) -> Vec<TimelinePoint> {
    laps.iter()
        .map(|lap| TimelinePoint {
            label: lap.label.clone(),
            x: x_value(lap, origin),
            y: 0.0,
        })
        .collect()
}

pub fn annotations(points: &[TimelinePoint]) -> Vec<TimelineAnnotation> {
    points
        .iter()
        .map(|point| TimelineAnnotation {
            text: point.label.clone(),
            x: point.x,
            y: point.y + ANNOTATION_OFFSET,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn t0() -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn laps() -> Vec<Lap> {
        vec![
            Lap::new("Start", t0()),
            Lap::new("Lap1", t0() + Duration::milliseconds(1500)),
            Lap::new("Stop", t0() + Duration::seconds(4)),
        ]
    }

    #[test]
    fn test_elapsed_points() {
        let points = points(&laps(), Some(t0()));
        let xs: Vec<f64> = points.iter().filter_map(|p| p.x.as_seconds()).collect();
        assert_eq!(xs, vec![0.0, 1.5, 4.0]);
        assert!(points.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn test_elapsed_can_be_negative() {
        let early = Lap::new("early", t0() - Duration::seconds(2));
        assert_eq!(x_value(&early, Some(t0())), XValue::Elapsed(-2.0));
    }

    #[test]
    fn test_recorded_points() {
        let points = points(&laps(), None);
        assert_eq!(points[1].x, XValue::Recorded(t0() + Duration::milliseconds(1500)));
        assert_eq!(points[1].x.as_seconds(), None);
    }

    #[test]
    fn test_annotations_offset() {
        let annotations = annotations(&points(&laps(), Some(t0())));
        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations[2].text, "Stop");
        assert_eq!(annotations[2].y, ANNOTATION_OFFSET);
    }

    #[test]
    fn test_axis_titles() {
        assert_eq!(AxisKind::ElapsedSeconds.title(), "Elapsed Time (sec)");
        assert_eq!(AxisKind::TimeRecorded.title(), "Time Recorded");
    }

    #[test]
    fn test_x_value_display() {
        assert_eq!(XValue::Elapsed(1.5).to_string(), "1.500000");
        assert_eq!(XValue::Recorded(t0()).to_string(), "2024-03-01 09:30:00.000000");
    }
}
