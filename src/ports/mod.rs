pub mod battery;
pub mod config;
pub mod system;

pub use battery::{BatteryMonitor, MonitoringSession};
pub use config::ConfigStore;
pub use system::SystemInfo;
