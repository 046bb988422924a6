// Trim interactor - Orchestrates the trim use case

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::domain::model::*;
use crate::domain::rules::VIDEO_CODEC;
use crate::error::TrimResult;
use crate::output::{ClipVerifier, StagedOutput};
use crate::ports::*;
use crate::utils::Utils;

/// Options that shape a trim beyond the request itself
#[derive(Debug, Clone, PartialEq)]
pub struct TrimOptions {
    /// Probe the output afterwards and compare its duration
    pub verify: bool,
    /// Allowed duration drift when verifying
    pub tolerance_ms: u64,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            verify: false,
            tolerance_ms: 100,
        }
    }
}

/// Interactor for the trim use case
pub struct TrimInteractor {
    media_port: Arc<dyn MediaPort>,
    options: TrimOptions,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(media_port: Arc<dyn MediaPort>, options: TrimOptions) -> Self {
        Self {
            media_port,
            options,
        }
    }

    /// Trim `request.source_path` to its range and write `request.output_path`
    pub fn trim(&self, request: &TrimRequest) -> TrimResult<TrimReport> {
        let started = Instant::now();
        info!(
            "Trimming {} from {}ms to {}ms into {}",
            request.source_path().display(),
            request.start_ms(),
            request.end_ms(),
            request.output_path().display()
        );

        let range = {
            let mut handle = self.media_port.open(request.source_path())?;
            let media_info = handle.info();
            info!(
                "Media file probed: {} streams, duration: {}, format: {}",
                media_info.total_streams(),
                media_info.duration,
                media_info.container
            );

            let subclip = Subclip::extract(handle.as_mut(), request.range())?;
            let range = *subclip.range();
            debug!("Extracted subclip {}", range);

            let staged = StagedOutput::create(request.output_path())?;
            subclip.export(staged.path(), VIDEO_CODEC)?;
            staged.commit()?;
            range
        };

        if let Ok(metadata) = std::fs::metadata(request.output_path()) {
            debug!("Output size: {}", Utils::format_file_size(metadata.len()));
        }

        let verified_duration = if self.options.verify {
            let verifier = ClipVerifier::new(self.media_port.as_ref());
            let result =
                verifier.verify(request.output_path(), &range, self.options.tolerance_ms)?;
            Some(result.actual)
        } else {
            None
        };

        let elapsed = started.elapsed();
        info!("Trim completed in {}", Utils::format_duration(elapsed));

        Ok(TrimReport {
            output_path: request.output_path().to_path_buf(),
            range,
            elapsed,
            verified_duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TrimError;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory media backend
    #[derive(Default)]
    struct FakeMediaPort {
        source_duration: f64,
        output_duration: f64,
        fail_export: bool,
        opened: Arc<AtomicUsize>,
        released: Arc<AtomicUsize>,
        exports: Arc<Mutex<Vec<(TimeRange, PathBuf, String)>>>,
    }

    struct FakeHandle {
        info: MediaInfo,
        fail_export: bool,
        released: Arc<AtomicUsize>,
        exports: Arc<Mutex<Vec<(TimeRange, PathBuf, String)>>>,
    }

    impl FakeMediaPort {
        fn with_duration(source_duration: f64) -> Self {
            Self {
                source_duration,
                output_duration: 0.0,
                ..Self::default()
            }
        }
    }

    impl MediaPort for FakeMediaPort {
        fn open(&self, path: &Path) -> TrimResult<Box<dyn MediaHandle>> {
            if !path.is_file() {
                return Err(TrimError::SourceUnavailable {
                    path: path.to_path_buf(),
                    reason: "No such file or directory".to_string(),
                });
            }
            self.opened.fetch_add(1, Ordering::SeqCst);

            let duration = if path.extension().map_or(false, |ext| ext == "src") {
                self.source_duration
            } else {
                self.output_duration
            };
            Ok(Box::new(FakeHandle {
                info: MediaInfo {
                    path: path.to_path_buf(),
                    container: "fake".to_string(),
                    duration: TimeSpec::from_seconds(duration),
                    file_size: 1,
                    video_streams: vec![VideoStreamInfo {
                        index: 0,
                        codec: "h264".to_string(),
                        width: 320,
                        height: 240,
                        frame_rate: Some(30.0),
                    }],
                    audio_streams: vec![],
                },
                fail_export: self.fail_export,
                released: Arc::clone(&self.released),
                exports: Arc::clone(&self.exports),
            }))
        }
    }

    impl MediaHandle for FakeHandle {
        fn info(&self) -> &MediaInfo {
            &self.info
        }

        fn export(
            &mut self,
            range: &TimeRange,
            destination: &Path,
            video_codec: &str,
        ) -> TrimResult<()> {
            self.exports.lock().unwrap().push((
                *range,
                destination.to_path_buf(),
                video_codec.to_string(),
            ));
            // Encoders leave partial output behind on failure
            std::fs::write(destination, b"encoded").unwrap();
            if self.fail_export {
                return Err(TrimError::EncodeError {
                    message: "encoder unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    impl Drop for FakeHandle {
        fn drop(&mut self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct Fixture {
        dir: tempfile::TempDir,
        source: PathBuf,
        output: PathBuf,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("clip.src");
        std::fs::write(&source, b"source").unwrap();
        let output = dir.path().join("trimmed.mp4");
        Fixture {
            dir,
            source,
            output,
        }
    }

    fn interactor(port: &Arc<FakeMediaPort>, options: TrimOptions) -> TrimInteractor {
        TrimInteractor::new(Arc::clone(port) as Arc<dyn MediaPort>, options)
    }

    #[test]
    fn test_trim_success() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort::with_duration(10.0));
        let request = TrimRequest::new(&fx.source, 2000, 5000, &fx.output).unwrap();

        let report = interactor(&port, TrimOptions::default())
            .trim(&request)
            .unwrap();

        assert_eq!(report.output_path, fx.output);
        assert_eq!(report.range.start.seconds, 2.0);
        assert_eq!(report.range.end.seconds, 5.0);
        assert!(report.verified_duration.is_none());
        assert_eq!(std::fs::read(&fx.output).unwrap(), b"encoded");

        let exports = port.exports.lock().unwrap();
        assert_eq!(exports.len(), 1);
        let (range, destination, codec) = &exports[0];
        assert_eq!(range.duration().seconds, 3.0);
        assert_eq!(codec, "libx264");
        assert_ne!(destination, &fx.output);
        assert_eq!(destination.parent(), Some(fx.dir.path()));

        assert_eq!(port.opened.load(Ordering::SeqCst), 1);
        assert_eq!(port.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_trim_overwrites_existing_output() {
        let fx = fixture();
        std::fs::write(&fx.output, b"previous").unwrap();
        let port = Arc::new(FakeMediaPort::with_duration(10.0));
        let request = TrimRequest::new(&fx.source, 0, 1000, &fx.output).unwrap();

        interactor(&port, TrimOptions::default())
            .trim(&request)
            .unwrap();

        assert_eq!(std::fs::read(&fx.output).unwrap(), b"encoded");
    }

    #[test]
    fn test_missing_source() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort::with_duration(10.0));
        let missing = fx.dir.path().join("missing.src");
        let request = TrimRequest::new(&missing, 2000, 5000, &fx.output).unwrap();

        let result = interactor(&port, TrimOptions::default()).trim(&request);

        assert!(matches!(result, Err(TrimError::SourceUnavailable { .. })));
        assert!(!fx.output.exists());
        assert_eq!(port.opened.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_range_beyond_duration() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort::with_duration(4.0));
        let request = TrimRequest::new(&fx.source, 2000, 5000, &fx.output).unwrap();

        let result = interactor(&port, TrimOptions::default()).trim(&request);

        assert!(matches!(result, Err(TrimError::InvalidRange { .. })));
        assert!(!fx.output.exists());
        assert!(port.exports.lock().unwrap().is_empty());
        assert_eq!(port.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_missing_destination_directory() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort::with_duration(10.0));
        let output = fx.dir.path().join("nested").join("out.mp4");
        let request = TrimRequest::new(&fx.source, 2000, 5000, &output).unwrap();

        let result = interactor(&port, TrimOptions::default()).trim(&request);

        assert!(matches!(
            result,
            Err(TrimError::DestinationUnavailable { .. })
        ));
        assert!(!output.exists());
        assert_eq!(port.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_encode_failure_leaves_no_output() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort {
            fail_export: true,
            ..FakeMediaPort::with_duration(10.0)
        });
        let request = TrimRequest::new(&fx.source, 2000, 5000, &fx.output).unwrap();

        let result = interactor(&port, TrimOptions::default()).trim(&request);

        assert!(matches!(result, Err(TrimError::EncodeError { .. })));
        assert!(!fx.output.exists());
        let leftovers: Vec<_> = std::fs::read_dir(fx.dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(leftovers, vec![fx.source.clone()]);
        assert_eq!(port.released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_verify_passes() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort {
            output_duration: 3.02,
            ..FakeMediaPort::with_duration(10.0)
        });
        let request = TrimRequest::new(&fx.source, 2000, 5000, &fx.output).unwrap();
        let options = TrimOptions {
            verify: true,
            tolerance_ms: 100,
        };

        let report = interactor(&port, options).trim(&request).unwrap();

        assert_eq!(report.verified_duration.unwrap().seconds, 3.02);
        assert_eq!(port.opened.load(Ordering::SeqCst), 2);
        assert_eq!(port.released.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_verify_fails_on_duration_mismatch() {
        let fx = fixture();
        let port = Arc::new(FakeMediaPort {
            output_duration: 1.0,
            ..FakeMediaPort::with_duration(10.0)
        });
        let request = TrimRequest::new(&fx.source, 2000, 5000, &fx.output).unwrap();
        let options = TrimOptions {
            verify: true,
            tolerance_ms: 100,
        };

        let result = interactor(&port, options).trim(&request);

        assert!(matches!(result, Err(TrimError::VerificationFailed { .. })));
        assert!(fx.output.exists());
    }
}
