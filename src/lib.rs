//! dashboard-data - spreadsheet to dashboard data converter
//!
//! This library reads the `Record` and `Legend` sheets of a workbook, keys each
//! row by its sheet's header row, and writes the rows as a JSON-embedded
//! JavaScript data file for a dashboard.
//!
//! # Features
//!
//! - Cached cell values only (formulas must be evaluated by the workbook itself)
//! - Header-keyed rows in column order, fully empty rows dropped
//! - Fixed Record row bound, Legend read to the end of the sheet
//! - `.xlsx`, `.xlsm`, `.xlsb`, `.xls` and `.ods` input
//!
//! # Example
//!
//! ```no_run
//! use dashboard_data::config::ConvertConfig;
//! use dashboard_data::excel::WorkbookExtractor;
//! use dashboard_data::writer::write_js;
//!
//! let config = ConvertConfig::default();
//! let mut extractor = WorkbookExtractor::open(&config.input)?;
//! let result = extractor.extract(&config)?;
//!
//! println!("Records: {}", result.records.len());
//! println!("Legends: {}", result.legends.len());
//!
//! write_js(&config.output, &config.variable, &result)?;
//! # Ok::<(), dashboard_data::error::ExtractError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod excel;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use config::ConvertConfig;
pub use error::{ExtractError, ExtractResult};
pub use types::{ExtractionResult, SheetRow};
