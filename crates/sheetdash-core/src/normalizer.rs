//! Normalizer — turns typed sheet rows into dashboard [`Record`]s.
//!
//! Field parsers are tables tried in order; the first that accepts a value
//! wins. Tags: blank check → JSON array → comma split. Dates: ordered
//! datetime formats → ordered date formats → Excel serial numbers.
//! Cell-level parse failures never escape as errors: tags fall back to an
//! empty list and dates to `null`.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::types::{CellValue, Record, Sheet};

/// Output format of every normalised date column.
pub const DATE_OUTPUT_FORMAT: &str = "%m/%d/%Y";

// ---------------------------------------------------------------------------
// Per-sheet rules
// ---------------------------------------------------------------------------

/// Which columns of a sheet get a dedicated normalizer.
///
/// Columns not named here are rendered with [`CellValue::to_json`] and then
/// trimmed by [`strip_strings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordRules {
    /// Column holding program tags. When the sheet has no such column every
    /// record still receives it, as an empty list, after the last column.
    pub tags_column: Option<String>,
    /// Column holding a calendar date, reformatted to [`DATE_OUTPUT_FORMAT`].
    pub date_column: Option<String>,
}

impl RecordRules {
    /// Rules that only trim strings.
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, column: impl Into<String>) -> Self {
        self.tags_column = Some(column.into());
        self
    }

    pub fn with_date(mut self, column: impl Into<String>) -> Self {
        self.date_column = Some(column.into());
        self
    }
}

/// Normalise every row of `sheet` into a [`Record`].
///
/// Tags are applied first, then the date column, then [`strip_strings`].
/// Row order and column order are those of the sheet.
pub fn normalize_sheet(sheet: &Sheet, rules: &RecordRules) -> Vec<Record> {
    let tags_idx = rules
        .tags_column
        .as_deref()
        .and_then(|c| sheet.column_index(c));
    let date_idx = rules
        .date_column
        .as_deref()
        .and_then(|c| sheet.column_index(c));
    let missing_tags = rules.tags_column.as_deref().filter(|_| tags_idx.is_none());

    if let Some(column) = missing_tags {
        tracing::debug!(
            sheet = %sheet.name,
            column,
            "tags column absent; every record gets an empty list"
        );
    }

    let mut records: Vec<Record> = sheet
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| {
            let mut record = Record::new();
            for (idx, (column, cell)) in sheet.columns.iter().zip(row).enumerate() {
                let value = if Some(idx) == tags_idx {
                    tags_to_json(normalize_programs(cell))
                } else if Some(idx) == date_idx {
                    let date = normalize_date(cell);
                    if date.is_none() && !cell.is_blank() {
                        tracing::debug!(
                            sheet = %sheet.name,
                            row = row_no,
                            value = ?cell,
                            "unparsable date; writing null"
                        );
                    }
                    date.map_or(Value::Null, Value::String)
                } else {
                    cell.to_json()
                };
                record.insert(column.clone(), value);
            }
            if let Some(column) = missing_tags {
                record.insert(column.to_string(), Value::Array(Vec::new()));
            }
            record
        })
        .collect();

    strip_strings(&mut records);
    records
}

fn tags_to_json(tags: Vec<String>) -> Value {
    Value::Array(tags.into_iter().map(Value::String).collect())
}

// ---------------------------------------------------------------------------
// strip_strings
// ---------------------------------------------------------------------------

/// Trim leading and trailing whitespace from every string value, in place.
///
/// Only top-level string values are touched: numbers, booleans, nulls and
/// tag arrays pass through unchanged.
pub fn strip_strings(records: &mut [Record]) {
    for record in records.iter_mut() {
        for value in record.values_mut() {
            if let Value::String(s) = value {
                let trimmed = s.trim();
                if trimmed.len() != s.len() {
                    *s = trimmed.to_string();
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Programs tags
// ---------------------------------------------------------------------------

type TagParser = fn(&str) -> Option<Vec<String>>;

/// Tag parsers in priority order. The blank check runs before any of them.
const TAG_PARSERS: &[(&str, TagParser)] = &[("json", parse_json_tags), ("comma", split_comma_tags)];

/// Parse a Programs cell into its tag sequence.
///
/// Non-text cells are rendered to text first, so `Int(5)` yields `["5"]`.
pub fn normalize_programs(cell: &CellValue) -> Vec<String> {
    match cell.as_text() {
        Some(text) => parse_programs(&text),
        None => Vec::new(),
    }
}

/// Text form of [`normalize_programs`].
pub fn parse_programs(raw: &str) -> Vec<String> {
    let text = raw.trim();
    if text.is_empty() {
        return Vec::new();
    }
    TAG_PARSERS
        .iter()
        .find_map(|(name, parse)| {
            let tags = parse(text)?;
            tracing::trace!(parser = name, count = tags.len(), "programs parsed");
            Some(tags)
        })
        .unwrap_or_default()
}

/// Accepts only a JSON array. Other valid JSON documents (`5`, `"TCM"`)
/// are rejected so the comma rule gets a chance.
fn parse_json_tags(text: &str) -> Option<Vec<String>> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Array(items) => Some(items.into_iter().filter_map(json_tag).collect()),
        _ => None,
    }
}

fn json_tag(item: Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn split_comma_tags(text: &str) -> Option<Vec<String>> {
    Some(
        text.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Day zero of the 1900 date system as spreadsheets count it.
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

/// Serial for 9999-12-31, the last day a spreadsheet can represent.
const EXCEL_MAX_SERIAL: f64 = 2_958_465.0;

/// Serial of the fictitious 1900-02-29; lower serials sit one day later
/// than the epoch arithmetic gives.
const EXCEL_LEAP_BUG_SERIAL: i64 = 60;

/// Parse a Date cell and render it as `MM/DD/YYYY`. `None` means null.
pub fn normalize_date(cell: &CellValue) -> Option<String> {
    let date = match cell {
        CellValue::DateTime(dt) => Some(dt.date()),
        CellValue::Text(s) => parse_date_text(s),
        CellValue::Int(i) => excel_serial_to_date(*i as f64),
        CellValue::Float(f) => excel_serial_to_date(*f),
        CellValue::Empty | CellValue::Bool(_) | CellValue::Error(_) => None,
    }?;
    Some(date.format(DATE_OUTPUT_FORMAT).to_string())
}

/// Parse free-form date text. Single-digit months and days are accepted.
fn parse_date_text(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(text, f).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
        })
}

fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(1.0..=EXCEL_MAX_SERIAL).contains(&serial) {
        return None;
    }
    let (y, m, d) = EXCEL_EPOCH;
    let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
    let mut days = serial.trunc() as i64;
    if days < EXCEL_LEAP_BUG_SERIAL {
        days += 1;
    }
    epoch.checked_add_signed(Duration::days(days))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
