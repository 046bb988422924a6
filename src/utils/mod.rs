//! Common utilities and helpers

use std::time::Duration;

use crate::domain::model::TimeSpec;

pub mod logging;

/// Formatting helpers for log output
pub struct Utils;

impl Utils {
    /// Elapsed time as `MM:SS.mmm`, or `HH:MM:SS.mmm` past an hour
    pub fn format_duration(duration: Duration) -> String {
        TimeSpec::from_duration(duration).format_hms()
    }

    /// Byte count in binary units, e.g. `1.50 KB`
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
        if bytes < 1024 {
            return format!("{} B", bytes);
        }

        let mut value = bytes as f64 / 1024.0;
        let mut unit = UNITS[0];
        for next in &UNITS[1..] {
            if value < 1024.0 {
                break;
            }
            value /= 1024.0;
            unit = *next;
        }
        format!("{:.2} {}", value, unit)
    }
}
