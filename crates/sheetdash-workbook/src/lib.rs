//! sheetdash-workbook — spreadsheet reader adapter for sheetdash.
//!
//! Opens a workbook (`.xlsx`, `.xlsm`, `.xls`, `.ods`; the format is picked
//! from the extension) and turns a named tab into a typed
//! [`sheetdash_core::Sheet`]: first row as header, blank rows skipped,
//! short rows padded.

mod cells;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Reader, Sheets};
use sheetdash_core::{CellValue, Sheet};

pub use cells::{cell_value, header_names};

/// Failure to read a workbook or one of its sheets.
#[derive(Debug, thiserror::Error)]
pub enum WorkbookError {
    #[error("cannot read workbook {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet {sheet:?} not found (available: {available:?})")]
    SheetNotFound {
        sheet: String,
        available: Vec<String>,
    },

    #[error("cannot read sheet {sheet:?}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// An open workbook. Sheets are read on demand.
pub struct Workbook {
    inner: Sheets<BufReader<File>>,
}

impl Workbook {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, WorkbookError> {
        let path = path.as_ref().to_path_buf();
        let inner = open_workbook_auto(&path).map_err(|source| WorkbookError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "workbook opened");
        Ok(Self { inner })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.inner.sheet_names()
    }

    /// Read the sheet called `name` (exact match).
    pub fn sheet(&mut self, name: &str) -> Result<Sheet, WorkbookError> {
        let available = self.inner.sheet_names();
        if !available.iter().any(|s| s == name) {
            return Err(WorkbookError::SheetNotFound {
                sheet: name.to_string(),
                available,
            });
        }

        let range = self
            .inner
            .worksheet_range(name)
            .map_err(|source| WorkbookError::Sheet {
                sheet: name.to_string(),
                source,
            })?;

        let mut rows = range.rows();
        let columns = match rows.next() {
            Some(header) => header_names(header),
            None => Vec::new(),
        };

        let mut sheet = Sheet::new(name, columns);
        let width = sheet.columns.len();
        let mut skipped = 0usize;
        for raw in rows {
            let mut row: Vec<CellValue> = raw.iter().take(width).map(cell_value).collect();
            if row.iter().all(|c| *c == CellValue::Empty) {
                skipped += 1;
                continue;
            }
            row.resize(width, CellValue::Empty);
            sheet.rows.push(row);
        }

        tracing::debug!(
            sheet = name,
            columns = width,
            rows = sheet.rows.len(),
            skipped_blank = skipped,
            "sheet loaded"
        );
        Ok(sheet)
    }
}

/// Open `path` and read the sheet called `name`.
pub fn load_sheet(path: impl AsRef<Path>, name: &str) -> Result<Sheet, WorkbookError> {
    Workbook::open(path)?.sheet(name)
}
