// Domain rules - Business logic and policies

use crate::domain::model::*;
use crate::error::{TrimError, TrimResult};

/// Video codec used for every export
pub const VIDEO_CODEC: &str = "libx264";

/// Audio codec used when the source carries audio
pub const AUDIO_CODEC: &str = "aac";

/// Business rules for output validation
pub struct OutputValidator;

impl OutputValidator {
    /// Validate an exported file's duration against the requested range.
    ///
    /// The tolerance is widened to one frame of the output's primary video
    /// stream, since encoders cut on frame boundaries.
    pub fn validate_output(
        output_info: &MediaInfo,
        expected: &TimeRange,
        tolerance_ms: u64,
    ) -> TrimResult<ValidationResult> {
        let expected_seconds = expected.duration().seconds;
        let actual_seconds = output_info.duration.seconds;
        let duration_diff = (actual_seconds - expected_seconds).abs();

        let frame_seconds = output_info
            .primary_video_stream()
            .and_then(VideoStreamInfo::frame_duration)
            .unwrap_or(0.0);
        let tolerance_seconds = (tolerance_ms as f64 / 1000.0).max(frame_seconds);

        let result = ValidationResult {
            expected: TimeSpec::from_seconds(expected_seconds),
            actual: output_info.duration,
            duration_difference_ms: (duration_diff * 1000.0).round() as u64,
        };

        if duration_diff > tolerance_seconds {
            return Err(TrimError::VerificationFailed {
                expected: expected_seconds,
                actual: actual_seconds,
                tolerance_ms: (tolerance_seconds * 1000.0).round() as u64,
            });
        }

        Ok(result)
    }
}

/// Output validation result
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub expected: TimeSpec,
    pub actual: TimeSpec,
    pub duration_difference_ms: u64,
}
