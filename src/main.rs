use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sheetdash::Config;

#[derive(Parser)]
#[command(
    name = "sheetdash",
    about = "Convert the performance workbook into dashboard JSON"
)]
struct Cli {
    /// TOML config file; defaults to ./sheetdash.toml when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Workbook to read, overriding the configured path.
    #[arg(long, value_name = "PATH")]
    workbook: Option<PathBuf>,

    /// Directory for the JSON files, overriding the configured one.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Log every normalisation step to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(path) = cli.workbook {
        config = config.with_workbook(path);
    }
    if let Some(dir) = cli.out_dir {
        config = config.with_output_dir(dir);
    }

    let report = sheetdash::convert(&config)?;
    println!("Wrote JSON files to {}", report.output_dir.display());
    Ok(())
}
