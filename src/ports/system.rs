use crate::domain::DomainError;

/// Port for identity queries against the host operating system.
pub trait SystemInfo: Send + Sync {
    /// Raw machine identifier (e.g. "iPhone8,1", or "x86_64" inside the simulator).
    fn machine_identifier(&self) -> Result<String, DomainError>;

    /// Value of a named environment variable, if set.
    fn environment_variable(&self, name: &str) -> Option<String>;

    /// The name identifying the device (e.g. "Eric's iPhone").
    fn device_name(&self) -> Result<String, DomainError>;

    /// The name of the operating system (e.g. "iPhone OS" or "Linux").
    fn system_name(&self) -> Result<String, DomainError>;

    /// The current version of the operating system.
    fn system_version(&self) -> Result<String, DomainError>;
}
