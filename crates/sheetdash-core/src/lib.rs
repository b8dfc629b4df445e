//! sheetdash-core — shared library for the workbook-to-JSON converter.
//!
//! This crate holds everything that does not touch a spreadsheet file:
//! the typed cell/sheet model, configuration, field normalizers and the
//! JSON exporter.
//!
//! # Pipeline
//!
//! ```text
//! Sheet ──► normalize_sheet ──► Vec<Record> ──► to_json ──► write_json
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod normalizer;
pub mod types;

pub use error::ExportError;
pub use normalizer::{
    normalize_date, normalize_programs, normalize_sheet, strip_strings, RecordRules,
};
pub use types::{CellValue, Record, Sheet};
