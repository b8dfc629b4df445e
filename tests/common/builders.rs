//! Test builders — write small `.xlsx` workbooks with typed cells.
//!
//! These builders are designed for readability in test setup, not for
//! production use. They panic on invalid input rather than returning `Result`.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};

// ---------------------------------------------------------------------------
// FixtureCell
// ---------------------------------------------------------------------------

/// One cell of a fixture sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureCell {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A real date cell (`yyyy-mm-dd` number format), not text.
    Date(u16, u8, u8),
    Blank,
}

impl From<&str> for FixtureCell {
    fn from(s: &str) -> Self {
        FixtureCell::Text(s.to_string())
    }
}

impl From<f64> for FixtureCell {
    fn from(n: f64) -> Self {
        FixtureCell::Number(n)
    }
}

impl From<i32> for FixtureCell {
    fn from(n: i32) -> Self {
        FixtureCell::Number(n.into())
    }
}

impl From<bool> for FixtureCell {
    fn from(b: bool) -> Self {
        FixtureCell::Bool(b)
    }
}

/// Shorthand for a blank cell inside [`cells!`].
pub const BLANK: FixtureCell = FixtureCell::Blank;

/// Build a row of [`FixtureCell`]s from mixed literals.
///
/// ```rust
/// let row = cells!["P-001", 30, BLANK, date(2024, 3, 5)];
/// ```
#[macro_export]
macro_rules! cells {
    ($($cell:expr),* $(,)?) => {
        vec![$($crate::common::FixtureCell::from($cell)),*]
    };
}

pub fn date(y: u16, m: u8, d: u8) -> FixtureCell {
    FixtureCell::Date(y, m, d)
}

// ---------------------------------------------------------------------------
// WorkbookBuilder
// ---------------------------------------------------------------------------

struct FixtureSheet {
    name: String,
    rows: Vec<Vec<FixtureCell>>,
}

/// Fluent builder for fixture workbooks.
///
/// # Example
///
/// ```rust
/// let path = WorkbookBuilder::new()
///     .sheet("Utilization Log", &["Date", "Programs"])
///     .row(cells![date(2024, 3, 5), "TCM, CCM"])
///     .save(dir.path().join("book.xlsx"));
/// ```
#[derive(Default)]
pub struct WorkbookBuilder {
    sheets: Vec<FixtureSheet>,
}

impl WorkbookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new sheet whose first row is `header`.
    pub fn sheet(mut self, name: &str, header: &[&str]) -> Self {
        self.sheets.push(FixtureSheet {
            name: name.to_string(),
            rows: vec![header.iter().map(|h| FixtureCell::from(*h)).collect()],
        });
        self
    }

    /// Append a data row to the most recently started sheet.
    pub fn row(mut self, cells: Vec<FixtureCell>) -> Self {
        self.sheets
            .last_mut()
            .expect("call sheet() before row()")
            .rows
            .push(cells);
        self
    }

    /// Append a row with no cells at all.
    pub fn blank_row(self) -> Self {
        self.row(Vec::new())
    }

    pub fn save(self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref().to_path_buf();
        let mut book = Workbook::new();
        let date_format = Format::new().set_num_format("yyyy-mm-dd");

        for fixture in &self.sheets {
            let sheet = book.add_worksheet();
            sheet.set_name(&fixture.name).unwrap();
            for (r, row) in fixture.rows.iter().enumerate() {
                for (c, cell) in row.iter().enumerate() {
                    let (r, c) = (r as u32, c as u16);
                    match cell {
                        FixtureCell::Text(s) => {
                            sheet.write_string(r, c, s).unwrap();
                        }
                        FixtureCell::Number(n) => {
                            sheet.write_number(r, c, *n).unwrap();
                        }
                        FixtureCell::Bool(b) => {
                            sheet.write_boolean(r, c, *b).unwrap();
                        }
                        FixtureCell::Date(y, m, d) => {
                            let dt = ExcelDateTime::from_ymd(*y, *m, *d).unwrap();
                            sheet
                                .write_datetime_with_format(r, c, &dt, &date_format)
                                .unwrap();
                        }
                        FixtureCell::Blank => {}
                    }
                }
            }
        }

        book.save(&path).unwrap();
        path
    }
}
