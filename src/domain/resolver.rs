//! Machine identifier to [`Device`] resolution.
//!
//! Identifiers look like `"<Family><Major>,<Minor>"` (e.g. `"iPad6,8"`). Several hardware
//! revisions share a model, so the table is many-to-one. The simulator reports its host CPU
//! architecture instead, and names the simulated model through an environment variable.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::device::Device;
use super::error::DomainError;

/// Environment variable the simulator sets to the identifier of the model it runs.
pub const SIMULATOR_MODEL_VARIABLE: &str = "SIMULATOR_MODEL_IDENTIFIER";

/// CPU architectures reported as the machine identifier inside the simulator.
pub const SIMULATOR_ARCHITECTURES: &[&str] = &["i386", "x86_64"];

#[cfg(not(tv_platform))]
const MODEL_TABLE: &[(&[&str], Device)] = &[
    (&["iPod5,1"], Device::IPodTouch5),
    (&["iPod7,1"], Device::IPodTouch6),
    (&["iPhone3,1", "iPhone3,2", "iPhone3,3"], Device::IPhone4),
    (&["iPhone4,1"], Device::IPhone4S),
    (&["iPhone5,1", "iPhone5,2"], Device::IPhone5),
    (&["iPhone5,3", "iPhone5,4"], Device::IPhone5C),
    (&["iPhone6,1", "iPhone6,2"], Device::IPhone5S),
    (&["iPhone7,2"], Device::IPhone6),
    (&["iPhone7,1"], Device::IPhone6Plus),
    (&["iPhone8,1"], Device::IPhone6S),
    (&["iPhone8,2"], Device::IPhone6SPlus),
    (&["iPad2,1", "iPad2,2", "iPad2,3", "iPad2,4"], Device::IPad2),
    (&["iPad3,1", "iPad3,2", "iPad3,3"], Device::IPad3),
    (&["iPad3,4", "iPad3,5", "iPad3,6"], Device::IPad4),
    (&["iPad4,1", "iPad4,2", "iPad4,3"], Device::IPadAir),
    (&["iPad5,3", "iPad5,4"], Device::IPadAir2),
    (&["iPad2,5", "iPad2,6", "iPad2,7"], Device::IPadMini),
    (&["iPad4,4", "iPad4,5", "iPad4,6"], Device::IPadMini2),
    (&["iPad4,7", "iPad4,8", "iPad4,9"], Device::IPadMini3),
    (&["iPad5,1", "iPad5,2"], Device::IPadMini4),
    (&["iPad6,7", "iPad6,8"], Device::IPadPro),
];

#[cfg(tv_platform)]
const MODEL_TABLE: &[(&[&str], Device)] = &[(&["AppleTV5,3"], Device::AppleTv4)];

static IDENTIFIERS: Lazy<HashMap<&'static str, &'static Device>> = Lazy::new(|| {
    MODEL_TABLE
        .iter()
        .flat_map(|(identifiers, device)| identifiers.iter().map(move |id| (*id, device)))
        .collect()
});

/// Every known identifier with the model it maps to.
pub fn known_identifiers() -> impl Iterator<Item = (&'static str, &'static Device)> {
    MODEL_TABLE
        .iter()
        .flat_map(|(identifiers, device)| identifiers.iter().map(move |id| (*id, device)))
}

/// Whether the identifier is a simulator CPU architecture.
pub fn is_simulator_architecture(identifier: &str) -> bool {
    SIMULATOR_ARCHITECTURES.contains(&identifier)
}

/// Resolve a machine identifier, reading the simulated model through `simulator_model`.
///
/// `simulator_model` is only called for simulator architectures. Identifiers missing from the
/// table resolve to [`Device::UnknownDevice`].
///
/// # Errors
///
/// Returns [`DomainError::MissingSimulatorModel`] when the identifier is a simulator
/// architecture and `simulator_model` yields nothing.
pub fn try_resolve<F>(identifier: &str, simulator_model: F) -> Result<Device, DomainError>
where
    F: FnOnce() -> Option<String>,
{
    if !is_simulator_architecture(identifier) {
        return Ok(lookup(identifier));
    }

    let simulated = simulator_model().ok_or_else(|| DomainError::MissingSimulatorModel {
        variable: SIMULATOR_MODEL_VARIABLE.to_string(),
    })?;
    debug!(architecture = identifier, simulated = %simulated, "Resolving simulated model");

    // The simulated identifier resolves without further simulator handling.
    Ok(lookup(&simulated).into_simulator())
}

/// Resolve a machine identifier.
///
/// # Panics
///
/// Panics when the identifier is a simulator architecture and `simulator_model` yields
/// nothing. The simulator always sets the model variable, so its absence means the host
/// environment is broken.
pub fn resolve<F>(identifier: &str, simulator_model: F) -> Device
where
    F: FnOnce() -> Option<String>,
{
    match try_resolve(identifier, simulator_model) {
        Ok(device) => device,
        Err(err) => panic!("{err}"),
    }
}

fn lookup(identifier: &str) -> Device {
    match IDENTIFIERS.get(identifier) {
        Some(device) => (*device).clone(),
        None => {
            warn!(identifier, "Unrecognized machine identifier");
            Device::UnknownDevice(identifier.to_string())
        }
    }
}
