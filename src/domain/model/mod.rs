// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{TrimError, TrimResult};

/// Time specification with precision - represents time in seconds with fractional precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpec {
    pub seconds: f64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Create a new TimeSpec from a millisecond offset
    pub fn from_millis(milliseconds: i64) -> Self {
        Self {
            seconds: milliseconds as f64 / 1000.0,
        }
    }

    /// Convert to Duration
    pub fn to_duration(&self) -> Duration {
        Duration::from_secs_f64(self.seconds.max(0.0))
    }

    /// Convert from Duration
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            seconds: duration.as_secs_f64(),
        }
    }

    /// Offset formatted the way ffmpeg's `-ss`/`-t` options expect it
    pub fn to_ffmpeg_arg(&self) -> String {
        format!("{:.3}", self.seconds)
    }

    /// Format as HH:MM:SS.ms
    pub fn format_hms(&self) -> String {
        let total_ms = (self.seconds * 1000.0).round() as u64;
        let hours = total_ms / 3_600_000;
        let minutes = (total_ms % 3_600_000) / 60_000;
        let seconds = (total_ms % 60_000) / 1000;
        let milliseconds = total_ms % 1000;

        if hours > 0 {
            format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, milliseconds)
        } else {
            format!("{:02}:{:02}.{:03}", minutes, seconds, milliseconds)
        }
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_hms())
    }
}

/// Half-open time range `[start, end)` inside a media file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeRange {
    pub start: TimeSpec,
    pub end: TimeSpec,
}

impl TimeRange {
    /// Create a new range; `end` must lie strictly after `start`
    pub fn new(start: TimeSpec, end: TimeSpec) -> TrimResult<Self> {
        if start.seconds < 0.0 {
            return Err(TrimError::invalid_range(format!(
                "start ({}) cannot be negative",
                start.seconds
            )));
        }
        if end.seconds <= start.seconds {
            return Err(TrimError::invalid_range(format!(
                "end ({}) must be after start ({})",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    /// Length of the range
    pub fn duration(&self) -> TimeSpec {
        TimeSpec::from_seconds(self.end.seconds - self.start.seconds)
    }

    /// Check that the range lies within a media file of the given duration
    pub fn validate_against_duration(&self, media_duration: &TimeSpec) -> TrimResult<()> {
        if self.start.seconds >= media_duration.seconds {
            return Err(TrimError::invalid_range(format!(
                "start ({}) is not before the end of the media ({})",
                self.start, media_duration
            )));
        }
        if self.end.seconds > media_duration.seconds {
            return Err(TrimError::invalid_range(format!(
                "end ({}) exceeds media duration ({})",
                self.end, media_duration
            )));
        }
        Ok(())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// A single trim invocation as given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct TrimRequest {
    source_path: PathBuf,
    start_ms: i64,
    end_ms: i64,
    output_path: PathBuf,
}

impl TrimRequest {
    /// Create new trim request with validation
    pub fn new(
        source_path: impl Into<PathBuf>,
        start_ms: i64,
        end_ms: i64,
        output_path: impl Into<PathBuf>,
    ) -> TrimResult<Self> {
        if start_ms < 0 {
            return Err(TrimError::invalid_range(format!(
                "start ({}ms) cannot be negative",
                start_ms
            )));
        }
        if end_ms <= start_ms {
            return Err(TrimError::invalid_range(format!(
                "end ({}ms) must be greater than start ({}ms)",
                end_ms, start_ms
            )));
        }

        Ok(Self {
            source_path: source_path.into(),
            start_ms,
            end_ms,
            output_path: output_path.into(),
        })
    }

    /// Parse a request from the four raw command-line values
    pub fn parse(source: &str, start: &str, end: &str, output: &str) -> TrimResult<Self> {
        let start_ms = parse_millis("start_ms", start)?;
        let end_ms = parse_millis("end_ms", end)?;
        Self::new(source, start_ms, end_ms, output)
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn start_ms(&self) -> i64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> i64 {
        self.end_ms
    }

    /// The requested range in seconds
    pub fn range(&self) -> TimeRange {
        TimeRange {
            start: TimeSpec::from_millis(self.start_ms),
            end: TimeSpec::from_millis(self.end_ms),
        }
    }
}

/// Parse an integer millisecond offset
fn parse_millis(name: &str, value: &str) -> TrimResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| TrimError::ArgumentParseError {
            name: name.to_string(),
            message: format!("'{}' is not an integer millisecond offset ({})", value, e),
        })
}

/// Video stream information
#[derive(Debug, Clone, PartialEq)]
pub struct VideoStreamInfo {
    pub index: usize,
    pub codec: String,
    pub width: u32,
    pub height: u32,
    pub frame_rate: Option<f64>,
}

impl VideoStreamInfo {
    /// Get frame duration in seconds
    pub fn frame_duration(&self) -> Option<f64> {
        self.frame_rate
            .filter(|rate| *rate > 0.0)
            .map(|rate| 1.0 / rate)
    }
}

/// Audio stream information
#[derive(Debug, Clone, PartialEq)]
pub struct AudioStreamInfo {
    pub index: usize,
    pub codec: String,
    pub sample_rate: u32,
    pub channels: u32,
}

/// Complete media file information
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    pub path: PathBuf,
    pub container: String,
    pub duration: TimeSpec,
    pub file_size: u64,
    pub video_streams: Vec<VideoStreamInfo>,
    pub audio_streams: Vec<AudioStreamInfo>,
}

impl MediaInfo {
    /// Get primary video stream (usually the first one)
    pub fn primary_video_stream(&self) -> Option<&VideoStreamInfo> {
        self.video_streams.first()
    }

    pub fn has_audio(&self) -> bool {
        !self.audio_streams.is_empty()
    }

    /// Get total number of streams
    pub fn total_streams(&self) -> usize {
        self.video_streams.len() + self.audio_streams.len()
    }
}

/// Outcome of a completed trim
#[derive(Debug, Clone)]
pub struct TrimReport {
    pub output_path: PathBuf,
    pub range: TimeRange,
    pub elapsed: Duration,
    pub verified_duration: Option<TimeSpec>,
}
