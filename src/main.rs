use std::thread;
use std::time::Duration;
use tracing::info;

use lapwatch::utils::describe_elapsed;
use lapwatch::{init_logging, DisplayLaps, LapwatchConfig, PlotlySink, Stopwatch, TracingSink};

fn main() -> anyhow::Result<()> {
    let config = LapwatchConfig::default();
    init_logging(&config.log_filter)?;

    info!("Starting {} v{} demo session", lapwatch::NAME, lapwatch::VERSION);

    let mut stopwatch = Stopwatch::new(config.auto_start);
    if !config.auto_start {
        stopwatch.start(true)?;
    }

    thread::sleep(Duration::from_millis(120));
    stopwatch.lap(None);

    thread::sleep(Duration::from_millis(80));
    stopwatch.lap(Some("Checkpoint"));

    thread::sleep(Duration::from_millis(200));
    stopwatch.stop();

    info!("Elapsed: {}", describe_elapsed(stopwatch.elapsed_time()));

    let mut tracing_sink = TracingSink;
    stopwatch.display_laps(&config.display, &mut tracing_sink);

    let mut plotly_sink = PlotlySink::new();
    if let Some(report) = stopwatch.display_laps(&config.display, &mut plotly_sink) {
        if let Some(table) = &report.table {
            println!("{}", table.to_csv()?);
        }
    }
    if let Some(html) = plotly_sink.to_html() {
        info!("Timeline chart rendered ({} bytes of HTML)", html.len());
    }

    Ok(())
}
