// TOML config adapter - Configuration management using TOML files

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{TrimError, TrimResult};
use crate::utils::logging::LogLevel;

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// ffmpeg executable used for export
    pub ffmpeg_path: PathBuf,
    /// ffprobe executable used to open media
    pub ffprobe_path: PathBuf,
    /// Encoder thread count
    pub threads: usize,
    /// Default log filter
    pub log_level: String,
    /// Allowed duration drift for `--verify`
    pub verify_tolerance_ms: u64,
    /// File the settings were read from, if any
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from("ffmpeg"),
            ffprobe_path: PathBuf::from("ffprobe"),
            threads: default_thread_count(),
            log_level: "info".to_string(),
            verify_tolerance_ms: 100,
            loaded_from: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    trim: Settings,
}

/// Environment variables recognised as overrides
pub const ENV_FFMPEG: &str = "TRIM_VIDEO_FFMPEG";
pub const ENV_FFPROBE: &str = "TRIM_VIDEO_FFPROBE";
pub const ENV_THREADS: &str = "TRIM_VIDEO_THREADS";
pub const ENV_LOG_LEVEL: &str = "TRIM_VIDEO_LOG_LEVEL";

impl Settings {
    /// Deserialize settings from the `[trim]` section of a TOML document
    pub fn from_toml_str(toml_content: &str) -> TrimResult<Self> {
        let parsed: ConfigFile = toml::from_str(toml_content)
            .map_err(|e| TrimError::config(format!("Failed to parse TOML config: {}", e)))?;
        Ok(parsed.trim)
    }

    /// Load settings from a TOML file
    pub fn load_file(path: &Path) -> TrimResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrimError::config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut settings = Self::from_toml_str(&content)?;
        settings.loaded_from = Some(path.to_path_buf());
        Ok(settings)
    }

    /// Apply environment overrides, returning how many were applied
    pub fn apply_env<F>(&mut self, lookup: F) -> TrimResult<usize>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = 0;

        if let Some(value) = lookup(ENV_FFMPEG) {
            self.ffmpeg_path = PathBuf::from(value);
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_FFPROBE) {
            self.ffprobe_path = PathBuf::from(value);
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_THREADS) {
            self.threads = value.trim().parse().map_err(|e| {
                TrimError::config(format!("Invalid {} value '{}': {}", ENV_THREADS, value, e))
            })?;
            overrides += 1;
        }
        if let Some(value) = lookup(ENV_LOG_LEVEL) {
            self.log_level = value;
            overrides += 1;
        }

        Ok(overrides)
    }

    /// Validate configuration
    pub fn validate(&self) -> TrimResult<()> {
        if self.threads == 0 {
            return Err(TrimError::config("threads must be at least 1"));
        }
        LogLevel::parse(&self.log_level)?;
        if self.ffmpeg_path.as_os_str().is_empty() || self.ffprobe_path.as_os_str().is_empty() {
            return Err(TrimError::config("ffmpeg_path and ffprobe_path cannot be empty"));
        }
        Ok(())
    }
}

/// Thread count based on system resources: 75% of logical cores, 1..=16
pub fn default_thread_count() -> usize {
    let cpu_count = num_cpus::get();
    let optimal_threads = (cpu_count as f64 * 0.75).ceil() as usize;
    optimal_threads.clamp(1, 16)
}
