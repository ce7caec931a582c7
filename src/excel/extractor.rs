//! Workbook extractor - named sheets → header-keyed rows

use crate::config::ConvertConfig;
use crate::error::{ExtractError, ExtractResult};
use crate::excel::cell::{cell_to_json, header_key};
use crate::types::{ExtractionResult, SheetRow};
use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info};

/// 1-based, inclusive row window read below the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    pub first: u32,
    /// `None` reads through the last row present in the sheet
    pub last: Option<u32>,
}

impl RowBounds {
    /// Row 2 through `last`
    pub fn up_to(last: u32) -> Self {
        Self {
            first: 2,
            last: Some(last),
        }
    }

    /// Row 2 through the end of the sheet
    pub fn to_end() -> Self {
        Self {
            first: 2,
            last: None,
        }
    }
}

impl From<Option<u32>> for RowBounds {
    fn from(last: Option<u32>) -> Self {
        match last {
            Some(last) => Self::up_to(last),
            None => Self::to_end(),
        }
    }
}

/// Reads sheets from one open workbook. The file handle is released on drop.
pub struct WorkbookExtractor {
    workbook: Sheets<BufReader<File>>,
}

impl WorkbookExtractor {
    /// Open a workbook, reading cached cell values rather than formulas
    pub fn open<P: AsRef<Path>>(path: P) -> ExtractResult<Self> {
        let path = path.as_ref();
        let workbook = open_workbook_auto(path)
            .map_err(|e| ExtractError::Workbook(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "opened workbook");
        Ok(Self { workbook })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Extract the Record and Legend sheets described by `config`
    pub fn extract(&mut self, config: &ConvertConfig) -> ExtractResult<ExtractionResult> {
        let records = self.extract_sheet(&config.record_sheet, config.record_last_row.into())?;
        let legends = self.extract_sheet(&config.legend_sheet, RowBounds::to_end())?;
        Ok(ExtractionResult::new(records, legends))
    }

    /// Extract the rows of one sheet inside `bounds`, dropping rows with no data
    pub fn extract_sheet(&mut self, sheet: &str, bounds: RowBounds) -> ExtractResult<Vec<SheetRow>> {
        if !self.workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(ExtractError::SheetNotFound {
                sheet: sheet.to_string(),
            });
        }

        let range = self
            .workbook
            .worksheet_range(sheet)
            .map_err(|e| ExtractError::Sheet {
                sheet: sheet.to_string(),
                message: e.to_string(),
            })?;

        let rows = extract_rows(&range, bounds);
        info!(sheet, rows = rows.len(), "extracted sheet");
        Ok(rows)
    }
}

/// Header keys from sheet row 1, column A through the last used column
pub fn read_header(range: &Range<Data>) -> Vec<Option<String>> {
    let Some((_, last_col)) = range.end() else {
        return Vec::new();
    };

    (0..=last_col)
        .map(|col| range.get_value((0, col)).and_then(header_key))
        .collect()
}

/// Map every row inside `bounds` onto the header keys.
///
/// Cells under a dropped header never appear. Cells past the header width are
/// ignored and missing cells read as null. A row is kept only if at least one
/// mapped cell is non-null.
pub fn extract_rows(range: &Range<Data>, bounds: RowBounds) -> Vec<SheetRow> {
    let header = read_header(range);
    let Some((sheet_last_row, _)) = range.end() else {
        return Vec::new();
    };
    debug!(columns = header.len(), "read header row");

    // 1-based bounds → 0-based absolute rows
    let first = bounds.first.max(1) - 1;
    let last = match bounds.last {
        Some(last) => last.saturating_sub(1).min(sheet_last_row),
        None => sheet_last_row,
    };
    if first > last {
        return Vec::new();
    }

    let mut rows = Vec::new();
    for row in first..=last {
        let mut record = SheetRow::new();
        let mut has_data = false;

        for (col, key) in header.iter().enumerate() {
            let Some(key) = key else {
                continue;
            };
            let value = range
                .get_value((row, col as u32))
                .map(cell_to_json)
                .unwrap_or(serde_json::Value::Null);
            if !value.is_null() {
                has_data = true;
            }
            record.insert(key.clone(), value);
        }

        if has_data {
            rows.push(record);
        }
    }
    rows
}
