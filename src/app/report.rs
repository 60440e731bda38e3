use std::fmt;

use serde::Serialize;

use crate::domain::{BatteryState, Device, DeviceFamily, UserInterfaceIdiom};

/// Everything known about the running device, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct DeviceReport {
    pub device: Device,
    pub family: Option<DeviceFamily>,
    pub simulator: bool,
    pub idiom: UserInterfaceIdiom,
    pub device_name: String,
    pub system_name: String,
    pub system_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatteryState>,
}

impl DeviceReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for DeviceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device: {}", self.device)?;
        match self.family {
            Some(family) => writeln!(f, "Family: {}", family)?,
            None => writeln!(f, "Family: unknown")?,
        }
        writeln!(f, "Simulator: {}", if self.simulator { "yes" } else { "no" })?;
        writeln!(f, "Idiom: {}", self.idiom)?;
        writeln!(f, "Name: {}", self.device_name)?;
        write!(f, "System: {} {}", self.system_name, self.system_version)?;
        if let Some(battery) = &self.battery {
            write!(f, "\n{}", battery)?;
        }
        Ok(())
    }
}
