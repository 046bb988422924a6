//! CLI module for trim-video
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::TrimArgs;

/// Trim a video between two millisecond offsets
///
/// Encodes the selected range with libx264 and writes it to OUTPUT.
#[derive(Parser, Debug)]
#[command(name = "trim_video")]
#[command(about = "Trim a video between two millisecond offsets")]
#[command(version)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    #[command(flatten)]
    pub trim: TrimArgs,

    /// Configuration file (TOML)
    #[arg(long, env = "TRIM_VIDEO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Probe the output and check its duration against the requested range
    #[arg(long)]
    pub verify: bool,

    /// Allowed duration drift for --verify, in milliseconds
    #[arg(long, value_name = "MS")]
    pub tolerance_ms: Option<u64>,
}
