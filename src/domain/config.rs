use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Enable file logging with rotation.
    pub file_logging: bool,
    /// Maximum number of log files to keep.
    pub max_files: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_logging: true,
            max_files: 7,
        }
    }
}

/// Platform query configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Machine identifier to report instead of the one read from the OS
    /// (e.g. "iPhone8,1"). Unset by default. Set it on an x86_64 host that
    /// is not a simulator, where the OS reports a simulator architecture.
    pub machine_identifier: Option<String>,
}

/// Battery subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Directory holding the power supply entries (`BAT0`, `BAT1`, ...).
    pub power_supply_dir: PathBuf,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            power_supply_dir: PathBuf::from("/sys/class/power_supply"),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub platform: PlatformConfig,
    pub battery: BatteryConfig,
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }
}
