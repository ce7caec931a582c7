use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One extracted sheet row: header key → cell value, in header column order
pub type SheetRow = Map<String, Value>;

//==============================================================================
// Extraction Result
//==============================================================================

/// Everything written to the dashboard data file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub records: Vec<SheetRow>,
    pub legends: Vec<SheetRow>,
    /// Local run time, ISO-8601 without offset
    pub generated_at: String,
}

impl ExtractionResult {
    /// Wrap extracted rows, stamping them with the current local time
    pub fn new(records: Vec<SheetRow>, legends: Vec<SheetRow>) -> Self {
        Self::with_timestamp(records, legends, Local::now())
    }

    /// Wrap extracted rows with an explicit timestamp
    pub fn with_timestamp(records: Vec<SheetRow>, legends: Vec<SheetRow>, at: DateTime<Local>) -> Self {
        Self {
            records,
            legends,
            generated_at: format_timestamp(&at),
        }
    }
}

/// `2025-01-31T14:05:09.123456`, or `2025-01-31T14:05:09` on a whole second
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    let local = at.naive_local();
    if local.nanosecond() / 1_000 == 0 {
        local.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        local.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}
