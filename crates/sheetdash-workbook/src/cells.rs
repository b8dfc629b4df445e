//! Conversion from calamine cells to [`CellValue`] and header naming.

use std::collections::HashSet;

use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};
use sheetdash_core::CellValue;

/// Largest magnitude at which every whole `f64` is an exact integer.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

pub fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => float_value(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(dt) => CellValue::DateTime(dt),
            None => float_value(dt.as_f64()),
        },
        Data::DateTimeIso(s) => {
            iso_datetime(s).map_or_else(|| CellValue::Text(s.clone()), CellValue::DateTime)
        }
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}

/// ODS files carry dates as ISO text; date-only values land on midnight.
fn iso_datetime(s: &str) -> Option<NaiveDateTime> {
    ISO_DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Spreadsheets store every number as a float; whole values come back as
/// integers so `20` does not render as `20.0`.
fn float_value(f: f64) -> CellValue {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < MAX_EXACT_INT {
        CellValue::Int(f as i64)
    } else {
        CellValue::Float(f)
    }
}

/// Column names from the header row.
///
/// Blank headers become `Unnamed: <index>`; repeated names get `.1`, `.2`…
/// appended to the later occurrences.
pub fn header_names(header: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut names = Vec::with_capacity(header.len());

    for (idx, cell) in header.iter().enumerate() {
        let base = cell_value(cell)
            .as_text()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("Unnamed: {idx}"));

        let mut name = base.clone();
        let mut dup = 0usize;
        while seen.contains(&name) {
            dup += 1;
            name = format!("{base}.{dup}");
        }
        seen.insert(name.clone());
        names.push(name);
    }
    names
}
