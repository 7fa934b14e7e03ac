use anyhow::{Context, Result};
use chrono::Utc;
use dryrock::report::{build_all_contexts, write_contexts};
use dryrock::{DryRockConfig, ReportInput, logging};
use std::path::PathBuf;
use tracing::{error, info};

fn main() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let input_path = args
        .next()
        .map(PathBuf::from)
        .context("Usage: dryrock <report-input.json> [config.toml]")?;
    let config = match args.next() {
        Some(path) => DryRockConfig::load_from_path(Some(PathBuf::from(path)))?,
        None => DryRockConfig::load()?,
    };

    logging::init(&config.logging)?;
    info!("Starting DryRock v{}", dryrock::VERSION);

    let input = ReportInput::load(&input_path)
        .with_context(|| format!("Failed to read report input {}", input_path.display()))?;

    let contexts = build_all_contexts(&input.areas, &input.forecasts, Utc::now(), &config.report)
        .map_err(|e| {
            error!(error = %e, "Failed to build report contexts");
            anyhow::anyhow!(e.user_message())
        })?;

    for path in write_contexts(&contexts, &config.report.output_dir)? {
        println!("{}", path.display());
    }
    Ok(())
}
