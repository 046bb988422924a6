//! Command-line argument definitions

use clap::Args;

/// Positional arguments of a trim
///
/// Offsets are kept as raw strings so malformed values surface as
/// argument errors from the domain layer.
#[derive(Args, Debug, Clone)]
pub struct TrimArgs {
    /// Input video file path
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Start offset in milliseconds
    #[arg(value_name = "START_MS")]
    pub start_ms: String,

    /// End offset in milliseconds (must exceed START_MS)
    #[arg(value_name = "END_MS")]
    pub end_ms: String,

    /// Output file path (overwritten if it exists)
    #[arg(value_name = "OUTPUT")]
    pub output: String,
}
