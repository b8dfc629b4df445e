//! sheetdash — workbook to dashboard JSON
//!
//! Reads the `Performance_Metrics` and `Utilization Log` tabs of the
//! performance workbook and writes one JSON array per tab for the dashboard.
//! The pieces live in the member crates and are re-exported here so the
//! binary and the integration tests import from one place.
//!
//! # Architecture
//!
//! ```text
//! sheetdash-workbook ──► sheetdash-core::normalizer ──► sheetdash-core::export
//!        (load_sheet)         (Programs / Date / trim)        (to_json, write)
//! ```
//!
//! Everything runs sequentially on the calling thread.

pub mod convert;

pub use convert::{convert, ConversionReport, SheetOutput};
pub use sheetdash_core::config::{Config, ConfigError, SheetConfig};
pub use sheetdash_core::{
    normalize_date, normalize_programs, normalize_sheet, strip_strings, CellValue, ExportError,
    Record, RecordRules, Sheet,
};
pub use sheetdash_workbook::{load_sheet, Workbook, WorkbookError};

/// Any failure that aborts a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Workbook(#[from] WorkbookError),

    #[error(transparent)]
    Export(#[from] ExportError),
}
