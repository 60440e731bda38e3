//! Identify the running Apple device from its machine identifier.
//!
//! The identifier reported by the OS (e.g. "iPhone8,1") resolves to a [`Device`], which
//! answers family questions (`is_phone`, `is_pad`, ...) and renders a display name. Inside the
//! simulator the identifier is the host CPU architecture, and the simulated model is read
//! from `SIMULATOR_MODEL_IDENTIFIER`.
//!
//! ```
//! use device_info_lib::domain::resolve;
//!
//! let device = resolve("x86_64", || Some("iPhone7,2".to_string()));
//! assert!(device.is_simulator());
//! println!("{}", device);
//! ```
#![forbid(unsafe_code)]

pub mod adapters;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod ports;

use anyhow::Context;

pub use app::{AppController, DeviceReport};
pub use domain::{BatteryState, Device, DeviceFamily, DomainError};

/// Print the report for the running device.
///
/// Pass `--json` to print it as JSON instead of text.
///
/// # Panics
///
/// On an `i386` or `x86_64` host the machine identifier is read as a simulator architecture,
/// so this panics unless `SIMULATOR_MODEL_IDENTIFIER` is set. To report a fixed model on such
/// a host instead, set `machine_identifier` under `[platform]` in `config.toml`:
///
/// ```toml
/// [platform]
/// machine_identifier = "iPhone8,1"
/// ```
pub fn run() -> anyhow::Result<()> {
    let json = std::env::args().skip(1).any(|arg| arg == "--json");

    let controller = AppController::new().context("Failed to initialize application")?;
    let report = controller.report().context("Failed to read device information")?;

    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
