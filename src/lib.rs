//! darwin-battery - read-only battery telemetry for macOS
//!
//! This crate exposes the battery fields the IOKit registry publishes
//! through the `AppleSmartBattery` service: charge, capacities, cycle
//! counts, charging state, temperature, and time remaining. Every
//! reading is a single keyed property lookup against an open service
//! handle; nothing is cached and nothing is written back.
//!
//! # Reading telemetry
//!
//! ```no_run
//! use darwin_battery::battery::{BatteryReader, TemperatureUnit};
//!
//! # #[cfg(target_os = "macos")]
//! fn main() -> darwin_battery::Result<()> {
//!     let mut reader = BatteryReader::new();
//!     reader.open()?;
//!
//!     println!("Battery at {}%, {}", reader.charge(),
//!         if reader.is_charging() { "charging" } else { "discharging" });
//!     println!("Temperature: {} F", reader.temperature(TemperatureUnit::Fahrenheit));
//!
//!     reader.close()
//! }
//! # #[cfg(not(target_os = "macos"))]
//! # fn main() {}
//! ```
//!
//! # Error handling
//!
//! Lifecycle calls (`open`, `close`) return [`Result`] and surface
//! [`Error::AlreadyOpen`], [`Error::ServiceNotFound`], and
//! [`Error::CloseFailed`] for explicit handling. Telemetry reads never
//! fail the caller: an unreadable property degrades to a zero default
//! (0, 0.0, or false) and an error-level log entry naming the property.
//! Callers that need to tell "zero" from "unreadable" use the
//! `try_`/`_property` accessors, which return `Option` instead.
//!
//! # Safety
//!
//! FFI into IOKit is confined to [`iokit::IOKitImpl`] and only compiled
//! on macOS. Handles are released on `close` and again-proofed through
//! `Option`, so repeated close and drop-while-open are both safe. The
//! reader itself makes no thread-safety promises; wrap it with
//! [`battery::BatteryReader::into_shared`] to share it across threads.

pub mod battery;
pub mod error;
pub mod iokit;

pub use error::{Error, Result};

/// Re-export common types for convenience
pub mod prelude {
    pub use crate::battery::{BatteryReader, PropertyKey, SharedBatteryReader, TemperatureUnit};
    pub use crate::error::{Error, Result};
    pub use crate::iokit::{IOKit, ServiceHandle};
}
