//! Core types for sheetdash-core.
//!
//! This module defines the data structures shared by the reader, the
//! normalizers and the exporter: the typed [`CellValue`], the tabular
//! [`Sheet`] it lives in, and the schema-less output [`Record`].

use chrono::NaiveDateTime;
use serde_json::{Map, Number, Value};

/// Format used when a datetime cell is rendered outside a date column.
pub const DATETIME_JSON_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One normalised output row. Keys keep the sheet's column order.
pub type Record = Map<String, Value>;

/// A single spreadsheet cell, typed by the reader.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    /// Integer cells, including whole-valued floats that fit in an `f64`
    /// mantissa.
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// Spreadsheet error cell such as `#N/A` or `#DIV/0!`.
    Error(String),
}

impl CellValue {
    /// `true` for empty cells and text that is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering of the cell, as used for header names and for
    /// fields that are parsed from text. `None` for empty and error cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Empty | CellValue::Error(_) => None,
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Int(i) => Some(i.to_string()),
            CellValue::Float(f) => Some(f.to_string()),
            CellValue::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
            CellValue::DateTime(dt) => Some(dt.format(DATETIME_JSON_FORMAT).to_string()),
        }
    }

    /// Default JSON rendering for columns without a dedicated normalizer.
    pub fn to_json(&self) -> Value {
        match self {
            CellValue::Empty | CellValue::Error(_) => Value::Null,
            CellValue::Text(s) => Value::String(s.clone()),
            CellValue::Int(i) => Value::Number((*i).into()),
            CellValue::Float(f) => Number::from_f64(*f).map_or(Value::Null, Value::Number),
            CellValue::Bool(b) => Value::Bool(*b),
            CellValue::DateTime(dt) => {
                Value::String(dt.format(DATETIME_JSON_FORMAT).to_string())
            }
        }
    }
}

/// A named tab of the workbook: a header row plus data rows.
///
/// Every row holds exactly `columns.len()` cells; the reader pads short rows
/// with [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Position of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
