//! trim-video library
//!
//! Trims a video between two millisecond offsets by delegating decoding and
//! encoding to the `ffmpeg` toolchain. The output video stream is always
//! encoded with libx264.

use std::path::Path;

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use adapters::Settings;
pub use domain::model::{TimeRange, TimeSpec, TrimReport, TrimRequest};
pub use error::{TrimError, TrimResult};

use app::{AppContainer, DefaultAppContainer, TrimOptions};

/// Trim `source` to `[start_ms, end_ms)` and write the result to `output`.
///
/// Uses `ffmpeg`/`ffprobe` from `PATH` with default settings.
pub fn trim(
    source: impl AsRef<Path>,
    start_ms: i64,
    end_ms: i64,
    output: impl AsRef<Path>,
) -> TrimResult<TrimReport> {
    let request = TrimRequest::new(source.as_ref(), start_ms, end_ms, output.as_ref())?;
    DefaultAppContainer::new(&Settings::default(), TrimOptions::default())
        .trim_interactor()
        .trim(&request)
}
