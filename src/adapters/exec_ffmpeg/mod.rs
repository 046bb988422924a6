//! FFmpeg execution adapter
//!
//! Opens sources through [`FfprobeAdapter`] and exports sub-ranges by
//! spawning the `ffmpeg` executable.

use std::ffi::OsString;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::adapters::probe_ffprobe::FfprobeAdapter;
use crate::domain::model::*;
use crate::domain::rules::AUDIO_CODEC;
use crate::error::{TrimError, TrimResult};
use crate::ports::*;

/// Number of trailing ffmpeg stderr lines carried into an error
const STDERR_TAIL_LINES: usize = 8;

/// FFmpeg-based media adapter
pub struct FfmpegMediaAdapter {
    ffmpeg_path: PathBuf,
    probe: FfprobeAdapter,
    threads: usize,
}

impl FfmpegMediaAdapter {
    /// Create new FFmpeg adapter
    pub fn new(ffmpeg_path: impl Into<PathBuf>, probe: FfprobeAdapter, threads: usize) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
            probe,
            threads: threads.max(1),
        }
    }
}

impl MediaPort for FfmpegMediaAdapter {
    fn open(&self, path: &Path) -> TrimResult<Box<dyn MediaHandle>> {
        let source_unavailable = |reason: String| TrimError::SourceUnavailable {
            path: path.to_path_buf(),
            reason,
        };

        let file = File::open(path).map_err(|e| source_unavailable(e.to_string()))?;
        let metadata = file
            .metadata()
            .map_err(|e| source_unavailable(e.to_string()))?;
        if !metadata.is_file() {
            return Err(source_unavailable("not a regular file".to_string()));
        }

        let info = self.probe.probe(path)?;
        if info.video_streams.is_empty() {
            return Err(TrimError::decode(format!(
                "{} contains no video stream",
                path.display()
            )));
        }

        debug!("Acquired media handle for {}", path.display());
        Ok(Box::new(FfmpegMediaHandle {
            _file: file,
            info,
            ffmpeg_path: self.ffmpeg_path.clone(),
            threads: self.threads,
        }))
    }
}

/// Handle on a source opened for the duration of one trim
pub struct FfmpegMediaHandle {
    // Held open so the source stays readable until release
    _file: File,
    info: MediaInfo,
    ffmpeg_path: PathBuf,
    threads: usize,
}

impl MediaHandle for FfmpegMediaHandle {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn export(
        &mut self,
        range: &TimeRange,
        destination: &Path,
        video_codec: &str,
    ) -> TrimResult<()> {
        let args = build_export_args(
            &self.info.path,
            range,
            destination,
            video_codec,
            self.info.has_audio(),
            self.threads,
        );
        debug!(
            "Running {} {}",
            self.ffmpeg_path.display(),
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let output = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TrimError::encode(format!(
                    "ffmpeg executable not found: {}",
                    self.ffmpeg_path.display()
                )),
                _ => TrimError::encode(format!("Failed to run ffmpeg: {}", e)),
            })?;

        if !output.status.success() {
            return Err(TrimError::encode(format!(
                "ffmpeg exited with {}: {}",
                output.status,
                stderr_tail(&String::from_utf8_lossy(&output.stderr))
            )));
        }

        info!("Encoded {} of {} with {}", range, self.info.path.display(), video_codec);
        Ok(())
    }
}

impl Drop for FfmpegMediaHandle {
    fn drop(&mut self) {
        debug!("Released media handle for {}", self.info.path.display());
    }
}

/// Build the ffmpeg argument list for exporting `range` of `source`
pub fn build_export_args(
    source: &Path,
    range: &TimeRange,
    destination: &Path,
    video_codec: &str,
    has_audio: bool,
    threads: usize,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = [
        "-hide_banner",
        "-nostdin",
        "-loglevel",
        "error",
        "-y",
        "-ss",
    ]
    .into_iter()
    .map(OsString::from)
    .collect();
    args.push(range.start.to_ffmpeg_arg().into());
    args.push("-i".into());
    args.push(source.as_os_str().to_owned());
    args.push("-t".into());
    args.push(range.duration().to_ffmpeg_arg().into());
    args.push("-map".into());
    args.push("0:v:0".into());
    args.push("-c:v".into());
    args.push(video_codec.into());
    if has_audio {
        args.push("-map".into());
        args.push("0:a:0".into());
        args.push("-c:a".into());
        args.push(AUDIO_CODEC.into());
    } else {
        args.push("-an".into());
    }
    args.push("-threads".into());
    args.push(threads.to_string().into());
    args.push(destination.as_os_str().to_owned());
    args
}

fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.trim().lines().collect();
    let skip = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[skip..].join("; ")
}
