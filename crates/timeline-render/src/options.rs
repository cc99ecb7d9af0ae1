use serde::{Deserialize, Serialize};

/// Options accepted by `display_laps`.
///
/// `figsize` and `styles` are only forwarded to the display sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Figure (width, height) in inches.
    pub figsize: (f64, f64),
    /// Plot seconds since start instead of raw timestamps.
    pub mark_elapsed_time: bool,
    /// When false the last recorded entry is left out, whatever its label.
    pub show_stop: bool,
    pub annotate: bool,
    /// Also produce the lap table.
    pub verbose: bool,
    pub vlines: bool,
    pub styles: Vec<String>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            figsize: (8.0, 4.0),
            mark_elapsed_time: true,
            show_stop: true,
            annotate: true,
            verbose: true,
            vlines: true,
            styles: vec!["ggplot".to_string(), "seaborn-talk".to_string()],
        }
    }
}
