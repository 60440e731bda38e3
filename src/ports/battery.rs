use tracing::debug;

use crate::domain::{BatteryReading, BatteryState, DomainError};

/// Port for the platform battery subsystem.
///
/// Reads only report a known state while monitoring is enabled. Use
/// [`BatteryMonitor::battery_state`], which enables monitoring for the duration of one read.
pub trait BatteryMonitor: Send + Sync {
    /// Turn battery monitoring on or off.
    fn set_monitoring_enabled(&self, enabled: bool);

    /// Read the raw level and charge state.
    fn read(&self) -> Result<BatteryReading, DomainError>;

    /// Read a normalized snapshot of the battery state.
    fn battery_state(&self) -> Result<BatteryState, DomainError> {
        let session = MonitoringSession::begin(self);
        let reading = session.read()?;
        debug!(level = reading.level, state = ?reading.state, "Battery read");
        Ok(BatteryState::from_reading(reading))
    }

    /// Battery level from 0 to 100.
    fn battery_level(&self) -> Result<u8, DomainError> {
        self.battery_state().map(|state| state.level())
    }
}

/// Keeps battery monitoring enabled while alive and disables it on drop.
pub struct MonitoringSession<'a, M: BatteryMonitor + ?Sized> {
    monitor: &'a M,
}

impl<'a, M: BatteryMonitor + ?Sized> MonitoringSession<'a, M> {
    /// Enable monitoring on `monitor` until the session is dropped.
    pub fn begin(monitor: &'a M) -> Self {
        monitor.set_monitoring_enabled(true);
        Self { monitor }
    }

    pub fn read(&self) -> Result<BatteryReading, DomainError> {
        self.monitor.read()
    }
}

impl<M: BatteryMonitor + ?Sized> Drop for MonitoringSession<'_, M> {
    fn drop(&mut self) {
        self.monitor.set_monitoring_enabled(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PowerState;
    use parking_lot::Mutex;

    /// Records monitoring toggles and replays a fixed reading.
    struct ScriptedMonitor {
        toggles: Mutex<Vec<bool>>,
        reading: Option<BatteryReading>,
    }

    impl ScriptedMonitor {
        fn new(reading: Option<BatteryReading>) -> Self {
            Self {
                toggles: Mutex::new(Vec::new()),
                reading,
            }
        }

        fn monitoring(&self) -> bool {
            self.toggles.lock().last().copied().unwrap_or(false)
        }
    }

    impl BatteryMonitor for ScriptedMonitor {
        fn set_monitoring_enabled(&self, enabled: bool) {
            self.toggles.lock().push(enabled);
        }

        fn read(&self) -> Result<BatteryReading, DomainError> {
            if !self.monitoring() {
                return Ok(BatteryReading::UNKNOWN);
            }
            self.reading
                .ok_or_else(|| DomainError::Battery("read failed".to_string()))
        }
    }

    #[test]
    fn test_battery_state_brackets_monitoring() {
        let monitor = ScriptedMonitor::new(Some(BatteryReading {
            level: 0.25,
            state: PowerState::Unplugged,
        }));

        let state = monitor.battery_state().unwrap();

        assert_eq!(state, BatteryState::Unplugged(25));
        assert_eq!(*monitor.toggles.lock(), vec![true, false]);
    }

    #[test]
    fn test_monitoring_disabled_after_failed_read() {
        let monitor = ScriptedMonitor::new(None);

        assert!(monitor.battery_state().is_err());
        assert!(!monitor.monitoring());
        assert_eq!(*monitor.toggles.lock(), vec![true, false]);
    }

    #[test]
    fn test_battery_level() {
        let monitor = ScriptedMonitor::new(Some(BatteryReading {
            level: 0.999,
            state: PowerState::Charging,
        }));
        assert_eq!(monitor.battery_level().unwrap(), 100);

        let full = ScriptedMonitor::new(Some(BatteryReading {
            level: 1.0,
            state: PowerState::Full,
        }));
        assert_eq!(full.battery_level().unwrap(), 100);
    }

    #[test]
    fn test_session_through_trait_object() {
        let monitor = ScriptedMonitor::new(Some(BatteryReading {
            level: 0.5,
            state: PowerState::Charging,
        }));
        let dynamic: &dyn BatteryMonitor = &monitor;

        {
            let session = MonitoringSession::begin(dynamic);
            assert_eq!(
                BatteryState::from_reading(session.read().unwrap()),
                BatteryState::Charging(50)
            );
            assert!(monitor.monitoring());
        }
        assert!(!monitor.monitoring());
    }
}
