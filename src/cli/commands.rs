//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::Settings;
use crate::app::{AppContainer, DefaultAppContainer, TrimOptions};
use crate::cli::Cli;
use crate::domain::model::{TrimReport, TrimRequest};

/// Execute the trim command
pub fn trim(cli: &Cli, settings: &Settings) -> Result<TrimReport> {
    let args = &cli.trim;
    let request = TrimRequest::parse(&args.source, &args.start_ms, &args.end_ms, &args.output)?;

    let options = TrimOptions {
        verify: cli.verify,
        tolerance_ms: settings.verify_tolerance_ms,
    };
    let container = DefaultAppContainer::new(settings, options);

    let report = container
        .trim_interactor()
        .trim(&request)
        .with_context(|| format!("Failed to trim {}", request.source_path().display()))?;

    if let Some(duration) = report.verified_duration {
        info!("Verified output duration: {}", duration);
    }

    println!("Trimmed video saved to {}", report.output_path.display());
    Ok(report)
}
