use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::domain::{BatteryReading, DomainError, PowerState};
use crate::ports::BatteryMonitor;

/// Battery monitor backed by the Linux power supply class (`/sys/class/power_supply`).
///
/// The first `BAT*` entry is used. Without a battery, or while monitoring is disabled,
/// reads report an unknown state.
pub struct SysfsBatteryMonitor {
    root: PathBuf,
    monitoring: AtomicBool,
}

impl SysfsBatteryMonitor {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        info!(root = ?root, "Battery monitor initialized");
        Self {
            root,
            monitoring: AtomicBool::new(false),
        }
    }

    pub fn is_monitoring(&self) -> bool {
        self.monitoring.load(Ordering::SeqCst)
    }

    fn find_battery(&self) -> Result<Option<PathBuf>, DomainError> {
        if !self.root.exists() {
            return Ok(None);
        }

        let mut batteries: Vec<PathBuf> = fs::read_dir(&self.root)?
            .flatten()
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("BAT"))
            .map(|entry| entry.path())
            .collect();
        batteries.sort();

        Ok(batteries.into_iter().next())
    }

    fn read_attribute(battery: &Path, name: &str) -> Result<String, DomainError> {
        let path = battery.join(name);
        let value = fs::read_to_string(&path).map_err(|e| {
            DomainError::Battery(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Ok(value.trim().to_string())
    }
}

/// Map a power supply `status` attribute to a charge state.
fn parse_status(status: &str) -> PowerState {
    match status.to_lowercase().as_str() {
        "charging" => PowerState::Charging,
        "full" => PowerState::Full,
        "discharging" | "not charging" => PowerState::Unplugged,
        _ => PowerState::Unknown,
    }
}

impl BatteryMonitor for SysfsBatteryMonitor {
    fn set_monitoring_enabled(&self, enabled: bool) {
        let previous = self.monitoring.swap(enabled, Ordering::SeqCst);
        if previous != enabled {
            debug!(enabled, "Battery monitoring toggled");
        }
    }

    fn read(&self) -> Result<BatteryReading, DomainError> {
        if !self.is_monitoring() {
            debug!("Battery read while monitoring is disabled");
            return Ok(BatteryReading::UNKNOWN);
        }

        let Some(battery) = self.find_battery()? else {
            debug!(root = ?self.root, "No battery found");
            return Ok(BatteryReading::UNKNOWN);
        };

        let capacity = Self::read_attribute(&battery, "capacity")?;
        let percent: u8 = capacity.parse().map_err(|e| {
            DomainError::Battery(format!("Failed to parse capacity '{}': {}", capacity, e))
        })?;
        let status = Self::read_attribute(&battery, "status")?;

        Ok(BatteryReading {
            level: f32::from(percent.min(100)) / 100.0,
            state: parse_status(&status),
        })
    }
}
