//! Conversion pipeline — workbook in, two JSON feeds out.
//!
//! Every sheet is loaded, normalised and rendered before the first byte is
//! written, so a missing workbook or sheet leaves the output directory as
//! it was.

use std::path::{Path, PathBuf};

use sheetdash_core::config::{Config, SheetConfig};
use sheetdash_core::export::{ensure_dir, to_json, write_json};
use sheetdash_core::normalize_sheet;
use sheetdash_workbook::Workbook;

use crate::ConvertError;

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub output_dir: PathBuf,
    pub outputs: Vec<SheetOutput>,
}

/// One sheet written to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetOutput {
    pub sheet: String,
    pub path: PathBuf,
    pub records: usize,
}

struct Rendered<'a> {
    job: &'a SheetConfig,
    json: String,
    records: usize,
}

/// Run the whole batch described by `config`.
pub fn convert(config: &Config) -> Result<ConversionReport, ConvertError> {
    let mut workbook = Workbook::open(&config.workbook.path)?;
    tracing::info!(
        workbook = %config.workbook.path.display(),
        sheets = ?workbook.sheet_names(),
        "converting workbook"
    );

    let rendered = config
        .sheets()
        .into_iter()
        .map(|job| render_sheet(&mut workbook, job))
        .collect::<Result<Vec<_>, _>>()?;

    let output_dir = config.output.dir.clone();
    ensure_dir(&output_dir)?;

    let mut outputs = Vec::with_capacity(rendered.len());
    for Rendered { job, json, records } in rendered {
        let path = output_dir.join(&job.file);
        write_json(&path, &json)?;
        tracing::info!(sheet = %job.sheet, path = %path.display(), records, "sheet written");
        outputs.push(SheetOutput {
            sheet: job.sheet.clone(),
            path,
            records,
        });
    }

    Ok(ConversionReport {
        output_dir,
        outputs,
    })
}

fn render_sheet<'a>(
    workbook: &mut Workbook,
    job: &'a SheetConfig,
) -> Result<Rendered<'a>, ConvertError> {
    let sheet = workbook.sheet(&job.sheet)?;
    let records = normalize_sheet(&sheet, &job.rules());
    let json = to_json(&records)?;
    tracing::info!(sheet = %job.sheet, records = records.len(), "sheet normalised");
    Ok(Rendered {
        job,
        json,
        records: records.len(),
    })
}

impl ConversionReport {
    /// Output path for `sheet`, if it was part of this run.
    pub fn path_for(&self, sheet: &str) -> Option<&Path> {
        self.outputs
            .iter()
            .find(|o| o.sheet == sheet)
            .map(|o| o.path.as_path())
    }
}
