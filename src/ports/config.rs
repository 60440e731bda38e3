use std::path::PathBuf;

use crate::domain::{AppConfig, DomainError};

/// Port for loading and persisting the application configuration.
pub trait ConfigStore: Send + Sync {
    /// Load configuration, writing the defaults first if no file exists yet.
    fn load(&self) -> Result<AppConfig, DomainError>;

    /// Save configuration to persistent storage.
    fn save(&self, config: &AppConfig) -> Result<(), DomainError>;

    /// Path to the configuration file.
    fn config_path(&self) -> PathBuf;

    /// Directory holding the configuration file.
    fn data_dir(&self) -> PathBuf;

    /// Directory receiving rotated log files.
    fn logs_dir(&self) -> PathBuf;
}
