//! Fixture workbooks for integration tests, written with rust_xlsxwriter

#![allow(dead_code)]

use rust_xlsxwriter::{ExcelDateTime, Format, Formula, Workbook, Worksheet};
use std::path::Path;

/// A cell to place in a fixture sheet
#[derive(Debug, Clone)]
pub enum Cell {
    Text(&'static str),
    Num(f64),
    Bool(bool),
    /// Date shown as yyyy-mm-dd
    Date(u16, u8, u8),
    /// Number shown with a custom number format
    Styled(f64, &'static str),
    /// Formula with its cached result
    Calc(&'static str, &'static str),
    Blank,
}

pub use Cell::*;

/// Sheet name plus rows starting at row 1
pub struct Sheet {
    pub name: &'static str,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: &'static str, rows: Vec<Vec<Cell>>) -> Self {
        Self { name, rows }
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) {
    match cell {
        Text(s) => {
            worksheet.write_string(row, col, *s).unwrap();
        }
        Num(n) => {
            worksheet.write_number(row, col, *n).unwrap();
        }
        Bool(b) => {
            worksheet.write_boolean(row, col, *b).unwrap();
        }
        Date(y, m, d) => {
            let date = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
            let format = Format::new().set_num_format("yyyy-mm-dd");
            worksheet
                .write_datetime_with_format(row, col, &date, &format)
                .unwrap();
        }
        Styled(n, num_format) => {
            let format = Format::new().set_num_format(*num_format);
            worksheet
                .write_number_with_format(row, col, *n, &format)
                .unwrap();
        }
        Calc(formula, cached) => {
            worksheet
                .write_formula(row, col, Formula::new(*formula).set_result(*cached))
                .unwrap();
        }
        Blank => {}
    }
}

/// Write `sheets` into a new workbook at `path`
pub fn write_workbook(path: &Path, sheets: &[Sheet]) {
    let mut workbook = Workbook::new();
    for sheet in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name).unwrap();
        for (r, row) in sheet.rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                write_cell(worksheet, r as u32, c as u16, cell);
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Record and Legend sheets shaped like the dashboard workbook
pub fn dashboard_sheets() -> Vec<Sheet> {
    vec![
        Sheet::new(
            "Record",
            vec![
                vec![Text("A"), Text("B")],
                vec![Num(1.0), Num(2.0)],
                vec![Blank, Blank],
                vec![Num(3.0), Blank],
            ],
        ),
        Sheet::new(
            "Legend",
            vec![
                vec![Text("Code"), Text("Meaning")],
                vec![Text("W"), Text("Win")],
                vec![Text("L"), Text("Loss")],
            ],
        ),
    ]
}
