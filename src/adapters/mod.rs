pub mod config_store;
pub mod host_system;
pub mod sysfs_battery;

pub use config_store::TomlConfigStore;
pub use host_system::HostSystemInfo;
pub use sysfs_battery::SysfsBatteryMonitor;
