//! trim_video
//!
//! Trims a video file between two millisecond offsets and writes the result
//! to a new file, re-encoding video with libx264.
//!
//! # Usage
//!
//! ```bash
//! trim_video input.mp4 2000 5000 output.mp4
//! trim_video --verify --log-level debug input.mp4 2000 5000 output.mp4
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use trim_video::cli::{commands, Cli};
use trim_video::config_initialization::initialize_configuration_hierarchy;
use trim_video::utils::logging::{init_logging, LogLevel};

/// Main entry point for the trim_video CLI
fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings =
        initialize_configuration_hierarchy(&cli).context("Failed to load configuration")?;

    init_logging(LogLevel::parse(&settings.log_level)?, cli.json_logs)?;

    match &settings.loaded_from {
        Some(path) => info!("Loaded configuration from {}", path.display()),
        None => debug!("Using default configuration"),
    }
    debug!("Settings: {:?}", settings);

    commands::trim(&cli, &settings)?;
    Ok(())
}
