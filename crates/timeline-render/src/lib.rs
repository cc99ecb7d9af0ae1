pub mod options;
pub mod render;
pub mod sink;
pub mod table;
pub mod timeline;

pub use options::DisplayOptions;
pub use render::{display_laps, lap_report, DisplayLaps, LapReport};
pub use sink::{DisplaySink, MemorySink, PlotlySink, TracingSink};
pub use table::{LapRow, LapTable};
pub use timeline::{AxisKind, TimelineAnnotation, TimelineChart, TimelinePoint, XValue};

pub type Result<T> = anyhow::Result<T>;
