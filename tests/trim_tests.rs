//! End-to-end trims against a real ffmpeg toolchain.
//!
//! Every test returns early when `ffmpeg`/`ffprobe` or the libx264 encoder
//! is missing from the host.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::Command as BinCommand;
use predicates::prelude::*;
use tempfile::TempDir;
use trim_video::adapters::FfprobeAdapter;
use trim_video::*;

mod test_utils {
    use super::*;

    /// ffmpeg, ffprobe and the libx264 encoder are all usable
    pub fn media_tools_available() -> bool {
        let probe_ok = Command::new("ffprobe")
            .arg("-version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);

        let encoders = Command::new("ffmpeg")
            .args(["-hide_banner", "-encoders"])
            .output();

        match encoders {
            Ok(output) if output.status.success() => {
                probe_ok && String::from_utf8_lossy(&output.stdout).contains("libx264")
            }
            _ => false,
        }
    }

    /// Create a 10 second test video with a sine audio track
    pub fn create_test_video(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("source.mp4");
        let output = Command::new("ffmpeg")
            .args([
                "-hide_banner",
                "-loglevel",
                "error",
                "-f",
                "lavfi",
                "-i",
                "testsrc=duration=10:size=320x240:rate=30",
                "-f",
                "lavfi",
                "-i",
                "sine=frequency=1000:duration=10",
                "-c:v",
                "libx264",
                "-c:a",
                "aac",
                "-shortest",
                "-y",
            ])
            .arg(&path)
            .output()
            .expect("failed to spawn ffmpeg");

        assert!(
            output.status.success(),
            "ffmpeg failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        path
    }

    pub fn probe_duration(path: &Path) -> f64 {
        FfprobeAdapter::new("ffprobe")
            .probe(path)
            .expect("probe output")
            .duration
            .seconds
    }

    pub fn probe(path: &Path) -> trim_video::domain::model::MediaInfo {
        FfprobeAdapter::new("ffprobe").probe(path).expect("probe output")
    }
}

use test_utils::*;

macro_rules! require_media_tools {
    () => {
        if !media_tools_available() {
            eprintln!("skipping: ffmpeg/ffprobe with libx264 not available");
            return;
        }
    };
}

#[test]
fn test_trim_produces_requested_duration() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = create_test_video(&dir);
    let output = dir.path().join("clip.mp4");

    let report = trim(&source, 2000, 5000, &output).unwrap();

    assert_eq!(report.output_path, output);
    assert!(output.exists());
    let duration = probe_duration(&output);
    assert!((duration - 3.0).abs() <= 0.1, "duration was {}", duration);

    let info = probe(&output);
    assert_eq!(
        info.primary_video_stream().map(|s| s.codec.as_str()),
        Some("h264")
    );
    assert!(info.has_audio());
}

#[test]
fn test_trim_overwrites_existing_output() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = create_test_video(&dir);
    let output = dir.path().join("clip.mp4");
    std::fs::write(&output, b"stale").unwrap();

    trim(&source, 2000, 5000, &output).unwrap();
    let first = probe_duration(&output);
    trim(&source, 2000, 5000, &output).unwrap();
    let second = probe_duration(&output);

    assert!((first - second).abs() < 0.001);
    assert!((second - 3.0).abs() <= 0.1);
}

#[test]
fn test_range_past_end_is_rejected() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = create_test_video(&dir);
    let output = dir.path().join("clip.mp4");

    let result = trim(&source, 8000, 15000, &output);

    assert!(matches!(result, Err(TrimError::InvalidRange { .. })));
    assert!(!output.exists());
}

#[test]
fn test_start_at_end_is_rejected() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = create_test_video(&dir);
    let output = dir.path().join("clip.mp4");

    let result = trim(&source, 10000, 12000, &output);

    assert!(matches!(result, Err(TrimError::InvalidRange { .. })));
    assert!(!output.exists());
}

#[test]
fn test_missing_output_directory() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = create_test_video(&dir);
    let output = dir.path().join("missing").join("clip.mp4");

    let result = trim(&source, 2000, 5000, &output);

    assert!(matches!(
        result,
        Err(TrimError::DestinationUnavailable { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_undecodable_source() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("garbage.mp4");
    std::fs::write(&source, b"definitely not a video container").unwrap();
    let output = dir.path().join("clip.mp4");

    let result = trim(&source, 0, 1000, &output);

    assert!(matches!(result, Err(TrimError::DecodeError { .. })));
    assert!(!output.exists());
}

#[test]
fn test_cli_reports_saved_output() {
    require_media_tools!();
    let dir = tempfile::tempdir().unwrap();
    create_test_video(&dir);

    BinCommand::cargo_bin("trim_video")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["--verify", "source.mp4", "2000", "5000", "clip.mp4"])
        .assert()
        .success()
        .stdout(predicate::eq("Trimmed video saved to clip.mp4\n"));

    let duration = probe_duration(&dir.path().join("clip.mp4"));
    assert!((duration - 3.0).abs() <= 0.1, "duration was {}", duration);
}
