use std::cmp::Ordering;
use std::fmt;

use serde::{Serialize, Serializer};

/// Charge state exactly as the platform reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PowerState {
    /// The platform cannot tell, or monitoring is disabled.
    Unknown,
    /// Not plugged into power; the battery is discharging.
    Unplugged,
    /// Plugged into power and below 100%.
    Charging,
    /// Plugged into power and at 100%.
    Full,
}

/// One raw read of the battery subsystem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatteryReading {
    /// Charge as a fraction in `0.0..=1.0`, or `-1.0` when unknown.
    pub level: f32,
    pub state: PowerState,
}

impl BatteryReading {
    /// Reading reported when nothing is known about the battery.
    pub const UNKNOWN: BatteryReading = BatteryReading {
        level: -1.0,
        state: PowerState::Unknown,
    };

    /// Level in whole percent, rounded and clamped to `0..=100`.
    pub fn percent(&self) -> u8 {
        (self.level * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Snapshot of the battery state.
///
/// The order is total. `Full` is greater than every other state; otherwise only the levels
/// are compared and the charging flag is ignored. `Ordering::Equal` therefore does not imply
/// `==`: `Charging(50)` and `Unplugged(50)` compare equal but have different descriptions.
#[derive(Debug, Clone, Copy)]
pub enum BatteryState {
    /// Plugged into power and 100% charged, or running in the simulator.
    Full,
    /// Plugged into power and less than 100% charged. The value is in percent.
    Charging(u8),
    /// Not plugged into power; the battery is discharging. The value is in percent.
    Unplugged(u8),
}

impl BatteryState {
    /// Normalize a raw reading.
    ///
    /// An `Unknown` platform state maps to `Full`. Monitoring is enabled for every read, so
    /// the platform only reports `Unknown` when no battery exists at all.
    pub fn from_reading(reading: BatteryReading) -> Self {
        match reading.state {
            PowerState::Charging => BatteryState::Charging(reading.percent()),
            PowerState::Unplugged => BatteryState::Unplugged(reading.percent()),
            PowerState::Full | PowerState::Unknown => BatteryState::Full,
        }
    }

    /// Battery level from 0 (fully discharged) to 100 (fully charged).
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            BatteryState::Full => 100,
            BatteryState::Charging(level) | BatteryState::Unplugged(level) => *level,
        }
    }

    #[must_use]
    pub fn is_plugged_in(&self) -> bool {
        !matches!(self, BatteryState::Unplugged(_))
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BatteryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryState::Charging(level) => {
                write!(f, "Battery level: {}%, device is plugged in.", level)
            }
            BatteryState::Full => write!(f, "Battery level: 100 % (Full), device is plugged in."),
            BatteryState::Unplugged(level) => {
                write!(f, "Battery level: {}%, device is unplugged.", level)
            }
        }
    }
}

impl PartialEq for BatteryState {
    fn eq(&self, other: &Self) -> bool {
        self.description() == other.description()
    }
}

impl PartialOrd for BatteryState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (BatteryState::Full, BatteryState::Full) => Some(Ordering::Equal),
            (BatteryState::Full, _) => Some(Ordering::Greater),
            (_, BatteryState::Full) => Some(Ordering::Less),
            _ => Some(self.level().cmp(&other.level())),
        }
    }
}

impl Serialize for BatteryState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
