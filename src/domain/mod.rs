pub mod battery;
pub mod config;
pub mod device;
pub mod error;
pub mod resolver;

pub use battery::{BatteryReading, BatteryState, PowerState};
pub use config::AppConfig;
pub use device::{Device, DeviceFamily, UserInterfaceIdiom};
pub use error::DomainError;
pub use resolver::{resolve, try_resolve, SIMULATOR_MODEL_VARIABLE};
