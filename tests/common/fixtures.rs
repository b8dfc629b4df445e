//! Canonical fixture workbooks and the records they normalise to.
//!
//! [`dashboard_workbook`] mirrors the shape of the real performance workbook:
//! the columns the dashboard reads, padded strings, whole and fractional
//! numbers, blank cells, and every Programs/Date variant the normalizers
//! have to cope with.

use std::path::{Path, PathBuf};

use serde_json::{json, Value};
use sheetdash::Config;

use super::builders::*;
use crate::cells;

pub const PERFORMANCE_SHEET: &str = "Performance_Metrics";
pub const UTILIZATION_SHEET: &str = "Utilization Log";

/// Columns the dashboard reads from `performance_metrics.json`.
pub const PERFORMANCE_COLUMNS: &[&str] = &["KPI", "Org", "Current", "Benchmark"];

/// Columns the dashboard reads from `utilization_log.json`.
pub const UTILIZATION_COLUMNS: &[&str] = &[
    "Date", "Patient", "Event", "Org", "Facility", "Diagnosis", "ICD10", "Programs",
];

/// Workbook with both sheets, written to `dir/book.xlsx`.
pub fn dashboard_workbook(dir: &Path) -> PathBuf {
    with_performance(WorkbookBuilder::new())
        .sheet(UTILIZATION_SHEET, UTILIZATION_COLUMNS)
        .row(cells![
            date(2024, 3, 5), "Jane Doe", "INP Admit", "Alante North",
            " St. Mary's ", "Congestive heart failure", "I50.9", r#"["TCM","CCM"]"#
        ])
        .row(cells![
            "2024-3-6", "John Roe", "ER Visit", "Alante South",
            "Mercy ED", BLANK, BLANK, "TCM, CCM"
        ])
        .blank_row()
        .row(cells![
            "not a date", " Ana Diaz ", "INP Discharge", "Alante North",
            "  ", "COPD", "J44.9", BLANK
        ])
        .row(cells![
            BLANK, "Ben Cho", "ER Visit", "Alante South",
            "Mercy ED", "Chest pain", "R07.9", "RPM"
        ])
        .save(dir.join("book.xlsx"))
}

/// Same workbook, but the Utilization Log has no Programs column.
pub fn workbook_without_programs(dir: &Path) -> PathBuf {
    with_performance(WorkbookBuilder::new())
        .sheet(UTILIZATION_SHEET, &["Date", "Patient", "Event", "Org"])
        .row(cells!["2024-03-05", "Jane Doe", "INP Admit", "Alante North"])
        .row(cells!["2024-03-06", "John Roe", "ER Visit", "Alante South"])
        .save(dir.join("no_programs.xlsx"))
}

/// Workbook that only has the performance sheet.
pub fn workbook_missing_utilization(dir: &Path) -> PathBuf {
    with_performance(WorkbookBuilder::new()).save(dir.join("partial.xlsx"))
}

fn with_performance(builder: WorkbookBuilder) -> WorkbookBuilder {
    builder
        .sheet(PERFORMANCE_SHEET, PERFORMANCE_COLUMNS)
        .row(cells![" Readmission Rate (%) ", "Alante North", 12.4, 15])
        .row(cells!["ER Admits/1,000", " Alante South ", 310, 325.5])
        .row(cells!["AWV Completion (%)", "Alante North", 39.7, BLANK])
}

/// Default config pointed at `workbook`, writing into `out_dir`.
pub fn config_for(workbook: &Path, out_dir: &Path) -> Config {
    Config::defaults()
        .with_workbook(workbook)
        .with_output_dir(out_dir)
}

pub fn expected_performance() -> Value {
    json!([
        {"KPI": "Readmission Rate (%)", "Org": "Alante North", "Current": 12.4, "Benchmark": 15},
        {"KPI": "ER Admits/1,000", "Org": "Alante South", "Current": 310, "Benchmark": 325.5},
        {"KPI": "AWV Completion (%)", "Org": "Alante North", "Current": 39.7, "Benchmark": null}
    ])
}

pub fn expected_utilization() -> Value {
    json!([
        {
            "Date": "03/05/2024", "Patient": "Jane Doe", "Event": "INP Admit", "Org": "Alante North",
            "Facility": "St. Mary's", "Diagnosis": "Congestive heart failure", "ICD10": "I50.9",
            "Programs": ["TCM", "CCM"]
        },
        {
            "Date": "03/06/2024", "Patient": "John Roe", "Event": "ER Visit", "Org": "Alante South",
            "Facility": "Mercy ED", "Diagnosis": null, "ICD10": null,
            "Programs": ["TCM", "CCM"]
        },
        {
            "Date": null, "Patient": "Ana Diaz", "Event": "INP Discharge", "Org": "Alante North",
            "Facility": "", "Diagnosis": "COPD", "ICD10": "J44.9",
            "Programs": []
        },
        {
            "Date": null, "Patient": "Ben Cho", "Event": "ER Visit", "Org": "Alante South",
            "Facility": "Mercy ED", "Diagnosis": "Chest pain", "ICD10": "R07.9",
            "Programs": ["RPM"]
        }
    ])
}

/// Parse a written output file back into JSON.
pub fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    serde_json::from_str(&text).unwrap_or_else(|e| panic!("invalid JSON in {}: {e}", path.display()))
}
