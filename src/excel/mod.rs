//! Excel import module
//!
//! Reads the dashboard workbook into header-keyed rows:
//! - Cell conversion: calamine `Data` → JSON values and header keys
//! - Extraction: one row routine shared by every sheet, parameterized by row bounds

mod cell;
mod extractor;

pub use cell::{cell_to_json, format_datetime, header_key};
pub use extractor::{extract_rows, read_header, RowBounds, WorkbookExtractor};
