//! Conversion configuration
//!
//! Every path and name the converter touches lives here. The defaults match the
//! dashboard's fixed layout, so `ConvertConfig::default()` is the whole
//! configuration for a parameterless run.

use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "2048 Robots.xlsx";
pub const DEFAULT_OUTPUT: &str = "dashboard_data.js";
pub const DEFAULT_VARIABLE: &str = "dashboardData";
pub const DEFAULT_RECORD_SHEET: &str = "Record";
pub const DEFAULT_LEGEND_SHEET: &str = "Legend";

/// Last 1-based row read from the Record sheet. Rows below it are never emitted.
pub const DEFAULT_RECORD_LAST_ROW: u32 = 149;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Workbook to read
    pub input: PathBuf,
    /// JavaScript file to (over)write
    pub output: PathBuf,
    /// Name of the `const` the data is assigned to
    pub variable: String,
    pub record_sheet: String,
    pub legend_sheet: String,
    /// Inclusive 1-based upper bound for Record rows; `None` reads to the sheet end
    pub record_last_row: Option<u32>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            variable: DEFAULT_VARIABLE.to_string(),
            record_sheet: DEFAULT_RECORD_SHEET.to_string(),
            legend_sheet: DEFAULT_LEGEND_SHEET.to_string(),
            record_last_row: Some(DEFAULT_RECORD_LAST_ROW),
        }
    }
}

impl ConvertConfig {
    /// Default layout with a different workbook and output file
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}
