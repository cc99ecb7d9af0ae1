use crate::timeline::TIMESTAMP_FORMAT;
use anyhow::{anyhow, Result};
use serde::Serialize;
use std::fmt;
use stopwatch_core::Timestamp;

pub const LABEL_COLUMN: &str = "Label";
pub const TIMESTAMP_COLUMN: &str = "Timestamp";
pub const ELAPSED_COLUMN: &str = "Elapsed Time (sec)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapRow {
    pub label: String,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

impl LapRow {
    fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.label.clone(),
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
        ];
        if let Some(seconds) = self.elapsed_seconds {
            cells.push(format!("{:.6}", seconds));
        }
        cells
    }
}

/// Tabular view of the displayed laps.
///
/// The elapsed column exists only when the timeline was drawn in elapsed seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LapTable {
    rows: Vec<LapRow>,
    with_elapsed: bool,
}

impl LapTable {
    pub fn new(rows: Vec<LapRow>, with_elapsed: bool) -> Self {
        Self { rows, with_elapsed }
    }

    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns = vec![LABEL_COLUMN, TIMESTAMP_COLUMN];
        if self.with_elapsed {
            columns.push(ELAPSED_COLUMN);
        }
        columns
    }

    #[inline]
    pub fn rows(&self) -> &[LapRow] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn has_elapsed(&self) -> bool {
        self.with_elapsed
    }

    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.columns())?;
        for row in &self.rows {
            writer.write_record(row.cells())?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| anyhow!("failed to flush csv writer: {}", err.error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl fmt::Display for LapTable {
    // Right-aligned columns with a leading row index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<String> = self.columns().iter().map(|c| c.to_string()).collect();
        let body: Vec<Vec<String>> = self.rows.iter().map(LapRow::cells).collect();

        let index_width = self.rows.len().saturating_sub(1).to_string().len();
        let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
        for cells in &body {
            for (width, cell) in widths.iter_mut().zip(cells) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write!(f, "{:>index_width$}", "")?;
        for (cell, width) in header.iter().zip(&widths) {
            write!(f, "  {:>width$}", cell, width = *width)?;
        }
        for (index, cells) in body.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>index_width$}", index)?;
            for (cell, width) in cells.iter().zip(&widths) {
                write!(f, "  {:>width$}", cell, width = *width)?;
            }
        }
        Ok(())
    }
}
