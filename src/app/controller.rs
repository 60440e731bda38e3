use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::{HostSystemInfo, SysfsBatteryMonitor, TomlConfigStore};
use crate::app::DeviceReport;
use crate::domain::{
    resolve, AppConfig, BatteryState, Device, DomainError, UserInterfaceIdiom,
    SIMULATOR_MODEL_VARIABLE,
};
use crate::infrastructure::init_logging;
use crate::ports::{BatteryMonitor, ConfigStore, SystemInfo};

/// Application controller that wires configuration, logging and the platform adapters.
pub struct AppController {
    config: RwLock<AppConfig>,
    config_store: Arc<dyn ConfigStore>,
    system: RwLock<Arc<dyn SystemInfo>>,
    battery: RwLock<Arc<dyn BatteryMonitor>>,
    _log_guard: Option<WorkerGuard>,
}

impl AppController {
    /// Initialize the application controller.
    /// This sets up configuration, logging, and the platform adapters.
    pub fn new() -> Result<Self, DomainError> {
        // Step 1: Initialize config store
        let config_store = Arc::new(TomlConfigStore::new()?);

        // Step 2: Load configuration
        let config = config_store.load()?;

        // Step 3: Initialize logging
        let log_guard = init_logging(&config_store.logs_dir(), &config.logging)?;

        info!("DeviceInfo starting up");

        // Step 4: Platform adapters
        let system = system_for(&config);
        let battery = battery_for(&config);

        let mut controller = Self::with_components(config, config_store, system, battery);
        controller._log_guard = log_guard;
        Ok(controller)
    }

    /// Build a controller from explicit components.
    pub fn with_components(
        config: AppConfig,
        config_store: Arc<dyn ConfigStore>,
        system: Arc<dyn SystemInfo>,
        battery: Arc<dyn BatteryMonitor>,
    ) -> Self {
        info!(
            identifier_override = ?config.platform.machine_identifier,
            power_supply_dir = ?config.battery.power_supply_dir,
            "AppController initialized"
        );

        Self {
            config: RwLock::new(config),
            config_store,
            system: RwLock::new(system),
            battery: RwLock::new(battery),
            _log_guard: None,
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    /// Persist a new configuration and rebuild the adapters that depend on it.
    pub fn update_config(&self, config: AppConfig) -> Result<(), DomainError> {
        self.config_store.save(&config)?;

        let previous = self.config();
        if previous.platform.machine_identifier != config.platform.machine_identifier {
            *self.system.write() = system_for(&config);
        }
        if previous.battery.power_supply_dir != config.battery.power_supply_dir {
            *self.battery.write() = battery_for(&config);
        }

        *self.config.write() = config;

        info!("Configuration updated");
        Ok(())
    }

    /// Resolve the running device from its machine identifier.
    ///
    /// # Panics
    ///
    /// Panics when the machine reports a simulator architecture but the simulated model
    /// variable is unset.
    pub fn device(&self) -> Result<Device, DomainError> {
        let system = self.system.read().clone();
        let identifier = system.machine_identifier()?;
        let device = resolve(&identifier, || {
            system.environment_variable(SIMULATOR_MODEL_VARIABLE)
        });

        info!(identifier = %identifier, device = %device, "Device resolved");
        Ok(device)
    }

    /// Read the current battery state.
    pub fn battery_state(&self) -> Result<BatteryState, DomainError> {
        let battery = self.battery.read().clone();
        battery.battery_state()
    }

    /// Collect the device facts shown to the user.
    pub fn report(&self) -> Result<DeviceReport, DomainError> {
        let device = self.device()?;
        let system = self.system.read().clone();

        Ok(DeviceReport {
            family: device.family(),
            simulator: device.is_simulator(),
            idiom: UserInterfaceIdiom::for_device(&device),
            device,
            device_name: system.device_name()?,
            system_name: system.system_name()?,
            system_version: system.system_version()?,
            battery: self.report_battery(),
        })
    }

    #[cfg(not(tv_platform))]
    fn report_battery(&self) -> Option<BatteryState> {
        match self.battery_state() {
            Ok(state) => Some(state),
            Err(e) => {
                warn!(error = %e, "Battery state unavailable");
                None
            }
        }
    }

    #[cfg(tv_platform)]
    fn report_battery(&self) -> Option<BatteryState> {
        None
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> String {
        self.config_store.data_dir().to_string_lossy().to_string()
    }

    /// Get the logs directory path.
    pub fn logs_dir(&self) -> String {
        self.config_store.logs_dir().to_string_lossy().to_string()
    }

    /// Get the config file path.
    pub fn config_path(&self) -> String {
        self.config_store.config_path().to_string_lossy().to_string()
    }
}

fn system_for(config: &AppConfig) -> Arc<dyn SystemInfo> {
    Arc::new(HostSystemInfo::with_identifier_override(
        config.platform.machine_identifier.clone(),
    ))
}

fn battery_for(config: &AppConfig) -> Arc<dyn BatteryMonitor> {
    Arc::new(SysfsBatteryMonitor::new(
        config.battery.power_supply_dir.clone(),
    ))
}
