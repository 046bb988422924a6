//! FFprobe adapter for media file probing
//!
//! Runs `ffprobe` with JSON output and maps the result onto [`MediaInfo`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::domain::model::*;
use crate::error::{TrimError, TrimResult};

/// FFprobe-based probe adapter
#[derive(Debug, Clone)]
pub struct FfprobeAdapter {
    ffprobe_path: PathBuf,
}

impl FfprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(ffprobe_path: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Probe media file and return complete information
    pub fn probe(&self, file_path: &Path) -> TrimResult<MediaInfo> {
        debug!("Probing {} with {}", file_path.display(), self.ffprobe_path.display());

        let output = Command::new(&self.ffprobe_path)
            .args(["-v", "error", "-show_format", "-show_streams", "-of", "json"])
            .arg(file_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TrimError::decode(format!(
                    "ffprobe executable not found: {}",
                    self.ffprobe_path.display()
                )),
                _ => TrimError::decode(format!("Failed to run ffprobe: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TrimError::decode(format!(
                "ffprobe could not read {}: {}",
                file_path.display(),
                stderr.trim()
            )));
        }

        parse_ffprobe_json(file_path, &String::from_utf8_lossy(&output.stdout))
    }
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    format: Option<FfprobeFormat>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: usize,
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    avg_frame_rate: Option<String>,
    r_frame_rate: Option<String>,
    sample_rate: Option<String>,
    channels: Option<u32>,
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    format_name: Option<String>,
    duration: Option<String>,
    size: Option<String>,
}

/// Parse `ffprobe -show_format -show_streams -of json` output
pub fn parse_ffprobe_json(file_path: &Path, json: &str) -> TrimResult<MediaInfo> {
    let parsed: FfprobeOutput = serde_json::from_str(json)
        .map_err(|e| TrimError::decode(format!("Failed to parse ffprobe output: {}", e)))?;

    let mut video_streams = Vec::new();
    let mut audio_streams = Vec::new();
    for stream in &parsed.streams {
        let codec = stream
            .codec_name
            .clone()
            .unwrap_or_else(|| "unknown".to_string());
        match stream.codec_type.as_deref() {
            Some("video") => video_streams.push(VideoStreamInfo {
                index: stream.index,
                codec,
                width: stream.width.unwrap_or(0),
                height: stream.height.unwrap_or(0),
                frame_rate: stream
                    .avg_frame_rate
                    .as_deref()
                    .and_then(parse_rational)
                    .or_else(|| stream.r_frame_rate.as_deref().and_then(parse_rational)),
            }),
            Some("audio") => audio_streams.push(AudioStreamInfo {
                index: stream.index,
                codec,
                sample_rate: stream
                    .sample_rate
                    .as_deref()
                    .and_then(|rate| rate.parse().ok())
                    .unwrap_or(0),
                channels: stream.channels.unwrap_or(0),
            }),
            _ => {}
        }
    }

    let format = parsed.format.as_ref();
    let duration = format
        .and_then(|f| f.duration.as_deref())
        .and_then(parse_seconds)
        .or_else(|| {
            parsed
                .streams
                .iter()
                .filter_map(|s| s.duration.as_deref().and_then(parse_seconds))
                .reduce(f64::max)
        })
        .ok_or_else(|| {
            TrimError::decode(format!(
                "Could not determine media duration of {}",
                file_path.display()
            ))
        })?;

    Ok(MediaInfo {
        path: file_path.to_path_buf(),
        container: format
            .and_then(|f| f.format_name.clone())
            .unwrap_or_else(|| "unknown".to_string()),
        duration: TimeSpec::from_seconds(duration),
        file_size: format
            .and_then(|f| f.size.as_deref())
            .and_then(|size| size.parse().ok())
            .unwrap_or(0),
        video_streams,
        audio_streams,
    })
}

fn parse_seconds(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
}

/// Parse an ffprobe rational such as `30000/1001`; `0/0` yields `None`
fn parse_rational(value: &str) -> Option<f64> {
    let (num, den) = value.split_once('/')?;
    let num: f64 = num.parse().ok()?;
    let den: f64 = den.parse().ok()?;
    if den == 0.0 || num == 0.0 {
        return None;
    }
    Some(num / den)
}
