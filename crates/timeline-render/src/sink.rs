//! Display sinks: where rendered timelines and lap tables end up.
//!
//! Sinks are treated as always succeeding; nothing here touches the filesystem.

use crate::table::LapTable;
use crate::timeline::{TimelineChart, XValue, TIMESTAMP_FORMAT};
use plotly::common::color::Rgb;
use plotly::common::{DashType, Font, Marker, Mode};
use plotly::layout::{Annotation, Axis, Shape, ShapeLine, ShapeType};
use plotly::{Layout, Plot, Scatter};
use tracing::info;

/// Pixels per inch when converting `figsize`.
const DPI: f64 = 100.0;

pub trait DisplaySink {
    fn show_chart(&mut self, chart: &TimelineChart);
    fn show_table(&mut self, table: &LapTable);
}

/// Logs a chart summary and the full table through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DisplaySink for TracingSink {
    fn show_chart(&mut self, chart: &TimelineChart) {
        let xs: Vec<String> = chart.points.iter().map(|p| p.x.to_string()).collect();
        info!(
            "Timeline ({}): {} points [{}] at [{}]",
            chart.x_title(),
            chart.points.len(),
            chart.labels().join(", "),
            xs.join(", ")
        );
    }

    fn show_table(&mut self, table: &LapTable) {
        for line in table.to_string().lines() {
            info!("{}", line);
        }
    }
}

/// Keeps every chart and table it is shown.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub charts: Vec<TimelineChart>,
    pub tables: Vec<LapTable>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for MemorySink {
    fn show_chart(&mut self, chart: &TimelineChart) {
        self.charts.push(chart.clone());
    }

    fn show_table(&mut self, table: &LapTable) {
        self.tables.push(table.clone());
    }
}

/// Builds an interactive plotly figure for the most recent chart.
#[derive(Default)]
pub struct PlotlySink {
    plot: Option<Plot>,
    table: Option<LapTable>,
}

impl PlotlySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plot(&self) -> Option<&Plot> {
        self.plot.as_ref()
    }

    /// Standalone HTML document for the last chart shown.
    pub fn to_html(&self) -> Option<String> {
        self.plot.as_ref().map(|plot| plot.to_html())
    }

    pub fn table(&self) -> Option<&LapTable> {
        self.table.as_ref()
    }
}

impl DisplaySink for PlotlySink {
    fn show_chart(&mut self, chart: &TimelineChart) {
        self.plot = Some(build_plot(chart));
    }

    fn show_table(&mut self, table: &LapTable) {
        self.table = Some(table.clone());
    }
}

fn format_x(x: &XValue) -> String {
    match x {
        XValue::Elapsed(seconds) => seconds.to_string(),
        XValue::Recorded(timestamp) => timestamp.format(TIMESTAMP_FORMAT).to_string(),
    }
}

pub fn build_plot(chart: &TimelineChart) -> Plot {
    let mut plot = Plot::new();

    let labels = chart.labels();
    let ys: Vec<f64> = chart.points.iter().map(|p| p.y).collect();
    let marker = Marker::new().size(10);

    match chart.points.first().map(|p| p.x) {
        Some(XValue::Recorded(_)) => {
            let xs: Vec<String> = chart.points.iter().map(|p| format_x(&p.x)).collect();
            let trace = Scatter::new(xs, ys)
                .mode(Mode::Markers)
                .marker(marker)
                .text_array(labels)
                .name("laps");
            plot.add_trace(trace);
        }
        _ => {
            let xs: Vec<f64> = chart
                .points
                .iter()
                .map(|p| p.x.as_seconds().unwrap_or_default())
                .collect();
            let trace = Scatter::new(xs, ys)
                .mode(Mode::Markers)
                .marker(marker)
                .text_array(labels)
                .name("laps");
            plot.add_trace(trace);
        }
    }

    let shapes: Vec<Shape> = chart
        .vlines
        .iter()
        .map(|x| {
            let shape = Shape::new()
                .shape_type(ShapeType::Line)
                .x_ref("x")
                .y_ref("paper")
                .y0(0.0)
                .y1(1.0)
                .line(ShapeLine::new().dash(DashType::Dot).width(1.0));
            match x {
                XValue::Elapsed(seconds) => shape.x0(*seconds).x1(*seconds),
                XValue::Recorded(_) => {
                    let x = format_x(x);
                    shape.x0(x.clone()).x1(x)
                }
            }
        })
        .collect();

    let annotations: Vec<Annotation> = chart
        .annotations
        .iter()
        .map(|note| {
            let annotation = Annotation::new()
                .text(note.text.as_str())
                .y(note.y)
                .show_arrow(false);
            match note.x {
                XValue::Elapsed(seconds) => annotation.x(seconds),
                XValue::Recorded(_) => annotation.x(format_x(&note.x)),
            }
        })
        .collect();

    let (width, height) = chart.figsize;
    let layout = Layout::new()
        .width((width * DPI).round() as usize)
        .height((height * DPI).round() as usize)
        .show_legend(false)
        .x_axis(Axis::new().title(chart.x_title()))
        .y_axis(Axis::new().show_tick_labels(false).show_grid(false).zero_line(false))
        .shapes(shapes)
        .annotations(annotations);

    plot.set_layout(apply_styles(layout, &chart.styles));
    plot
}

/// Approximates the matplotlib style sheets the figure asks for. Unknown
/// names are ignored.
fn apply_styles(mut layout: Layout, styles: &[String]) -> Layout {
    for style in styles {
        layout = match style.as_str() {
            "ggplot" => layout.plot_background_color(Rgb::new(229, 229, 229)),
            "seaborn-talk" => layout.font(Font::new().size(15)),
            _ => layout,
        };
    }
    layout
}
