//! Cell value conversion - calamine `Data` → JSON

use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDateTime, Timelike};
use serde_json::{Number, Value};

/// Largest magnitude that survives an f64 → i64 → JSON round trip exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Convert a cell to the JSON value written for it.
///
/// Scalars keep their native JSON type. Values JSON cannot hold natively
/// (dates, durations, error cells) are written as their display string.
pub fn cell_to_json(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => number_to_json(*f),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::Bool(*b),
        Data::DateTime(dt) => datetime_to_json(dt),
        Data::Error(e) => Value::String(e.to_string()),
        // ISO date/duration strings (ODS) are already in display form
        other => Value::String(other.to_string()),
    }
}

/// Key used for a header cell, or `None` when the column is dropped.
///
/// Empty cells and falsy values (empty string, zero, `false`) drop the column.
pub fn header_key(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if *f == 0.0 => None,
        Data::Float(f) => Some(number_key(*f)),
        Data::Int(0) => None,
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(false) => None,
        Data::Bool(true) => Some("True".to_string()),
        other => match cell_to_json(other) {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Null => None,
            v => Some(v.to_string()),
        },
    }
}

/// Whole numbers are written without a fractional part (`3`, not `3.0`)
fn number_to_json(f: f64) -> Value {
    if f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
        return Value::from(f as i64);
    }
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

fn number_key(f: f64) -> String {
    if f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
        (f as i64).to_string()
    } else {
        f.to_string()
    }
}

fn datetime_to_json(dt: &ExcelDateTime) -> Value {
    if dt.is_duration() {
        if let Some(duration) = dt.as_duration() {
            return Value::String(format_duration(duration.num_milliseconds()));
        }
    } else if let Some(ndt) = dt.as_datetime() {
        // Serials below one day carry no date, only a time of day
        if dt.as_f64() < 1.0 {
            return Value::String(format_time(&ndt));
        }
        return Value::String(format_datetime(&ndt));
    }
    number_to_json(dt.as_f64())
}

/// `2024-01-05 13:45:00`, with microseconds only when present
pub fn format_datetime(ndt: &NaiveDateTime) -> String {
    if ndt.nanosecond() == 0 {
        ndt.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ndt.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

fn format_time(ndt: &NaiveDateTime) -> String {
    if ndt.nanosecond() == 0 {
        ndt.format("%H:%M:%S").to_string()
    } else {
        ndt.format("%H:%M:%S%.6f").to_string()
    }
}

/// `2:30:00`, `1 day, 0:00:00`, `3 days, 4:05:06`
fn format_duration(total_millis: i64) -> String {
    let total_secs = total_millis.div_euclid(1000);
    let days = total_secs.div_euclid(86_400);
    let rest = total_secs.rem_euclid(86_400);
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);

    match days {
        0 => clock,
        1 | -1 => format!("{} day, {}", days, clock),
        _ => format!("{} days, {}", days, clock),
    }
}
