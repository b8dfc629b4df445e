//! Configuration types for sheetdash.
//!
//! [`Config::load`] layers an optional `sheetdash.toml` (or an explicit file)
//! on top of the built-in defaults. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::normalizer::RecordRules;

pub use config::ConfigError;

/// Looked up in the working directory when no explicit file is given.
pub const CONFIG_FILE_NAME: &str = "sheetdash.toml";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[workbook]
path = "Alante Performance Data.xlsx"

[output]
dir = "data"

[performance]
sheet = "Performance_Metrics"
file  = "performance_metrics.json"

[utilization]
sheet           = "Utilization Log"
file            = "utilization_log.json"
programs_column = "Programs"
date_column     = "Date"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub workbook: WorkbookConfig,
    pub output: OutputConfig,
    pub performance: SheetConfig,
    pub utilization: SheetConfig,
}

/// `[workbook]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkbookConfig {
    pub path: PathBuf,
}

/// `[output]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

/// One sheet → one JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Tab name inside the workbook.
    pub sheet: String,
    /// File name inside the output directory.
    pub file: String,
    #[serde(default)]
    pub programs_column: Option<String>,
    #[serde(default)]
    pub date_column: Option<String>,
}

impl SheetConfig {
    pub fn rules(&self) -> RecordRules {
        RecordRules {
            tags_column: self.programs_column.clone(),
            date_column: self.date_column.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, then `explicit` (which must exist) or, failing
    /// that, `sheetdash.toml` in the working directory if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let user = match explicit {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(CONFIG_FILE_NAME)).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user)
            .build()?
            .try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    pub fn with_workbook(mut self, path: impl Into<PathBuf>) -> Self {
        self.workbook.path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }

    /// Both sheet jobs, in the order they are converted.
    pub fn sheets(&self) -> [&SheetConfig; 2] {
        [&self.performance, &self.utilization]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
