//! Output verification implementation

use std::path::Path;

use tracing::{info, warn};

use crate::domain::model::TimeRange;
use crate::domain::rules::{OutputValidator, ValidationResult};
use crate::error::TrimResult;
use crate::ports::MediaPort;

/// Output file verifier
pub struct ClipVerifier<'a> {
    media_port: &'a dyn MediaPort,
}

impl<'a> ClipVerifier<'a> {
    /// Create a new clip verifier
    pub fn new(media_port: &'a dyn MediaPort) -> Self {
        Self { media_port }
    }

    /// Verify that a trimmed file covers the expected range
    pub fn verify(
        &self,
        output_path: &Path,
        expected: &TimeRange,
        tolerance_ms: u64,
    ) -> TrimResult<ValidationResult> {
        info!("Verifying {} against {}", output_path.display(), expected);

        let handle = self.media_port.open(output_path)?;
        match OutputValidator::validate_output(handle.info(), expected, tolerance_ms) {
            Ok(result) => {
                info!(
                    "Verification passed: {} (off by {}ms)",
                    result.actual, result.duration_difference_ms
                );
                Ok(result)
            }
            Err(e) => {
                warn!("{}", e);
                Err(e)
            }
        }
    }
}
