use once_cell::sync::OnceCell;
use sysinfo::System;
use tracing::{debug, info};

use crate::domain::DomainError;
use crate::ports::SystemInfo;

/// Host facts the adapter reports.
#[derive(Debug, Clone)]
struct HostFacts {
    os_name: String,
    host_name: String,
    os_version: String,
    machine: String,
}

/// System information read through `sysinfo`.
///
/// On iOS and tvOS the machine field carries the model identifier (e.g. "iPhone8,1");
/// inside the simulator it carries the host CPU architecture. The facts are cached after
/// the first query.
pub struct HostSystemInfo {
    identifier_override: Option<String>,
    facts: OnceCell<HostFacts>,
}

impl HostSystemInfo {
    pub fn new() -> Self {
        Self::with_identifier_override(None)
    }

    /// Report `identifier` as the machine identifier instead of asking the OS.
    pub fn with_identifier_override(identifier: Option<String>) -> Self {
        if let Some(identifier) = &identifier {
            info!(identifier = %identifier, "Machine identifier overridden by configuration");
        }
        Self {
            identifier_override: identifier,
            facts: OnceCell::new(),
        }
    }

    fn facts(&self) -> Result<&HostFacts, DomainError> {
        self.facts.get_or_try_init(|| {
            let facts = HostFacts {
                machine: required(System::cpu_arch(), "CPU architecture")?,
                os_name: optional(System::name()),
                host_name: optional(System::host_name()),
                os_version: optional(System::os_version()),
            };
            debug!(
                os_name = %facts.os_name,
                os_version = %facts.os_version,
                machine = %facts.machine,
                "Host system queried"
            );
            Ok(facts)
        })
    }
}

impl Default for HostSystemInfo {
    fn default() -> Self {
        Self::new()
    }
}

fn required(value: impl Into<Option<String>>, what: &str) -> Result<String, DomainError> {
    value
        .into()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DomainError::Platform(format!("{} unavailable", what)))
}

fn optional(value: impl Into<Option<String>>) -> String {
    value.into().unwrap_or_else(|| "unknown".to_string())
}

impl SystemInfo for HostSystemInfo {
    fn machine_identifier(&self) -> Result<String, DomainError> {
        if let Some(identifier) = &self.identifier_override {
            return Ok(identifier.clone());
        }
        Ok(self.facts()?.machine.clone())
    }

    fn environment_variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn device_name(&self) -> Result<String, DomainError> {
        Ok(self.facts()?.host_name.clone())
    }

    fn system_name(&self) -> Result<String, DomainError> {
        Ok(self.facts()?.os_name.clone())
    }

    fn system_version(&self) -> Result<String, DomainError> {
        Ok(self.facts()?.os_version.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_identifier_is_reported() {
        let system = HostSystemInfo::new();
        let identifier = system.machine_identifier().unwrap();
        assert!(!identifier.is_empty());
    }

    #[test]
    fn test_facts_are_cached() {
        let system = HostSystemInfo::new();
        let first = system.system_name().unwrap();
        let second = system.system_name().unwrap();
        assert_eq!(first, second);
        assert!(system.facts.get().is_some());
    }

    #[test]
    fn test_identifier_override() {
        let system = HostSystemInfo::with_identifier_override(Some("iPad6,7".to_string()));
        assert_eq!(system.machine_identifier().unwrap(), "iPad6,7");
        // The override does not touch the OS.
        assert!(system.facts.get().is_none());
    }

    #[test]
    fn test_missing_fact() {
        assert_eq!(optional(None::<String>), "unknown");
        assert_eq!(required(Some("arm64".to_string()), "arch").unwrap(), "arm64");
        assert!(matches!(
            required(Some(String::new()), "arch"),
            Err(DomainError::Platform(_))
        ));
        assert!(matches!(required(None::<String>, "arch"), Err(DomainError::Platform(_))));
    }

    #[test]
    fn test_environment_variable() {
        let system = HostSystemInfo::new();
        assert_eq!(
            system.environment_variable("DEVICE_INFO_TEST_SURELY_UNSET_VARIABLE"),
            None
        );
        assert_eq!(
            system.environment_variable("CARGO_PKG_NAME").as_deref(),
            std::env::var("CARGO_PKG_NAME").ok().as_deref()
        );
    }
}
