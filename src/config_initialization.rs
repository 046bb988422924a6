//! Configuration initialization and hierarchy management

use std::path::Path;

use crate::adapters::Settings;
use crate::cli::Cli;
use crate::error::TrimResult;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "trim_video.toml";

/// Resolve settings following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration_hierarchy(cli: &Cli) -> TrimResult<Settings> {
    resolve_settings(cli, Path::new(DEFAULT_CONFIG_FILE), |key| {
        std::env::var(key).ok()
    })
}

/// Resolve settings with an injectable environment and implicit config path
pub fn resolve_settings<F>(cli: &Cli, implicit_config: &Path, env: F) -> TrimResult<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    // An explicit file must load; the implicit one is optional
    let mut settings = match &cli.config {
        Some(path) => Settings::load_file(path)?,
        None if implicit_config.is_file() => Settings::load_file(implicit_config)?,
        None => Settings::default(),
    };

    settings.apply_env(env)?;

    if let Some(level) = &cli.log_level {
        settings.log_level = level.clone();
    }
    if let Some(tolerance) = cli.tolerance_ms {
        settings.verify_tolerance_ms = tolerance;
    }

    settings.validate()?;
    Ok(settings)
}
