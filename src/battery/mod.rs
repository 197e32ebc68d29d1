//! Battery telemetry via the IOKit registry
//!
//! [`BatteryReader`] holds a handle to the `AppleSmartBattery` registry
//! entry and exposes one accessor per telemetry field. Each accessor
//! performs a single keyed property read; nothing is cached.
//!
//! Reads are best-effort: an unreadable or missing property degrades to
//! a zero default (0, 0.0, or false) with an error-level log entry
//! naming the property, rather than failing the caller. The
//! `try_*`/`*_property` accessors return `Option` instead, for callers
//! that need to tell a genuine zero from an unreadable field.
//!
//! # Example
//!
//! ```no_run
//! use darwin_battery::battery::BatteryReader;
//!
//! # #[cfg(target_os = "macos")]
//! fn main() -> darwin_battery::Result<()> {
//!     let mut reader = BatteryReader::new();
//!     reader.open()?;
//!     println!("{}% ({} cycles)", reader.charge(), reader.cycle_count());
//!     println!("{} remaining", reader.time_remaining_formatted());
//!     reader.close()
//! }
//! # #[cfg(not(target_os = "macos"))]
//! # fn main() {}
//! ```

use std::fmt;
use std::sync::Arc;

use log::error;
use parking_lot::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::iokit::{IOKit, ServiceHandle};

pub mod constants;
pub mod types;

#[cfg(test)]
mod tests;

pub use constants::BATTERY_SERVICE;
pub use types::{PropertyKey, TemperatureUnit};

/// Read-only accessor for the system battery's registry entry.
///
/// Two-state lifecycle: the reader is created closed, [`open`] matches
/// the battery service and stores its handle, [`close`] releases it.
/// Reading while closed takes the same defaulted path as a failed
/// registry lookup; it is not a distinct error.
///
/// [`open`]: BatteryReader::open
/// [`close`]: BatteryReader::close
pub struct BatteryReader {
    service: Option<ServiceHandle>,
    iokit: Box<dyn IOKit>,
}

impl BatteryReader {
    /// Create a closed reader over the real IOKit registry.
    #[cfg(target_os = "macos")]
    pub fn new() -> Self {
        Self::with_iokit(Box::new(crate::iokit::IOKitImpl))
    }

    /// Create a closed reader over any registry capability.
    ///
    /// This is the injection point for test doubles and alternative
    /// registry backends.
    pub fn with_iokit(iokit: Box<dyn IOKit>) -> Self {
        Self { service: None, iokit }
    }

    /// Open a handle to the battery service.
    ///
    /// Fails with [`Error::AlreadyOpen`] if a handle is already held
    /// (state unchanged), or [`Error::ServiceNotFound`] if no entry
    /// matches (the reader stays closed).
    pub fn open(&mut self) -> Result<()> {
        if self.service.is_some() {
            return Err(Error::AlreadyOpen);
        }
        match self.iokit.io_service_get_matching_service(BATTERY_SERVICE) {
            Some(service) => {
                self.service = Some(service);
                Ok(())
            }
            None => Err(Error::ServiceNotFound),
        }
    }

    /// Release the service handle.
    ///
    /// The reader is guaranteed closed afterwards in all cases. Returns
    /// [`Error::CloseFailed`] when the registry reported a failed
    /// release; closing an already-closed reader is a no-op.
    pub fn close(&mut self) -> Result<()> {
        match self.service.take() {
            Some(service) if !self.iokit.io_object_release(service) => Err(Error::CloseFailed),
            _ => Ok(()),
        }
    }

    /// Whether the reader currently holds a service handle.
    pub fn is_open(&self) -> bool {
        self.service.is_some()
    }

    /// Wrap the reader in a mutex for use from multiple threads.
    pub fn into_shared(self) -> SharedBatteryReader {
        SharedBatteryReader { inner: Arc::new(Mutex::new(self)) }
    }

    /// Read a numeric property, `None` if the reader is closed or the
    /// key is absent or not a number.
    pub fn number_property(&self, key: PropertyKey) -> Option<i64> {
        let service = self.service?;
        self.iokit.get_number_property(service, key.as_str())
    }

    /// Read a boolean property, `None` if the reader is closed or the
    /// key is absent or not a boolean.
    pub fn bool_property(&self, key: PropertyKey) -> Option<bool> {
        let service = self.service?;
        self.iokit.get_bool_property(service, key.as_str())
    }

    /// Current charge in mAh.
    pub fn current_capacity(&self) -> i64 {
        self.number_or_zero(PropertyKey::CurrentCapacity)
    }

    /// Current maximum charge in mAh.
    pub fn max_capacity(&self) -> i64 {
        self.number_or_zero(PropertyKey::MaxCapacity)
    }

    /// Capacity the battery shipped with, in mAh.
    pub fn design_capacity(&self) -> i64 {
        self.number_or_zero(PropertyKey::DesignCapacity)
    }

    /// Charge/discharge cycles the battery has undergone.
    pub fn cycle_count(&self) -> i64 {
        self.number_or_zero(PropertyKey::CycleCount)
    }

    /// Cycle count the battery was designed for.
    pub fn design_cycle_count(&self) -> i64 {
        self.number_or_zero(PropertyKey::DesignCycleCount)
    }

    /// Estimated minutes until empty/full.
    pub fn time_remaining(&self) -> i64 {
        self.number_or_zero(PropertyKey::TimeRemaining)
    }

    /// Whether external power is connected.
    pub fn is_ac_powered(&self) -> bool {
        self.bool_or_false(PropertyKey::ExternalConnected)
    }

    /// Whether the battery is currently charging.
    pub fn is_charging(&self) -> bool {
        self.bool_or_false(PropertyKey::IsCharging)
    }

    /// Whether the battery reports itself fully charged.
    pub fn is_charged(&self) -> bool {
        self.bool_or_false(PropertyKey::FullyCharged)
    }

    /// Charge percentage, `floor(current / max * 100)`.
    ///
    /// Returns 0.0 and logs when either capacity is unreadable or the
    /// maximum capacity is zero (battery absent or unreadable).
    pub fn charge(&self) -> f64 {
        match self.try_charge() {
            Some(charge) => charge,
            None => {
                error!("could not compute battery charge (capacity unreadable or zero), defaulting to 0");
                0.0
            }
        }
    }

    /// Charge percentage, `None` where [`charge`](BatteryReader::charge)
    /// would default.
    pub fn try_charge(&self) -> Option<f64> {
        let current = self.number_property(PropertyKey::CurrentCapacity)?;
        let max = self.number_property(PropertyKey::MaxCapacity)?;
        if max == 0 {
            return None;
        }
        Some((current as f64 / max as f64 * 100.0).floor())
    }

    /// Time remaining rendered as `"H:MM"`, e.g. 125 minutes as `"2:05"`.
    pub fn time_remaining_formatted(&self) -> String {
        format_minutes(self.time_remaining())
    }

    /// Formatted time remaining, `None` if the field is unreadable.
    pub fn try_time_remaining_formatted(&self) -> Option<String> {
        self.number_property(PropertyKey::TimeRemaining).map(format_minutes)
    }

    /// Battery temperature in the requested unit.
    ///
    /// The registry reports hundredths of a degree Celsius; the value
    /// is converted and then rounded up to the next whole degree, for
    /// all three units alike. Returns 0.0 and logs when the field is
    /// unreadable.
    pub fn temperature(&self, unit: TemperatureUnit) -> f64 {
        match self.try_temperature(unit) {
            Some(temperature) => temperature,
            None => {
                error!(
                    "could not read battery property {} ({}), defaulting to 0",
                    PropertyKey::Temperature,
                    self.failure_reason()
                );
                0.0
            }
        }
    }

    /// Battery temperature, `None` if the field is unreadable.
    pub fn try_temperature(&self, unit: TemperatureUnit) -> Option<f64> {
        let celsius = self.number_property(PropertyKey::Temperature)? as f64 / 100.0;
        let converted = match unit {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 1.8 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        };
        Some(converted.ceil())
    }

    fn number_or_zero(&self, key: PropertyKey) -> i64 {
        match self.number_property(key) {
            Some(value) => value,
            None => {
                error!(
                    "could not read battery property {key} ({}), defaulting to 0",
                    self.failure_reason()
                );
                0
            }
        }
    }

    fn bool_or_false(&self, key: PropertyKey) -> bool {
        match self.bool_property(key) {
            Some(value) => value,
            None => {
                error!(
                    "could not read battery property {key} ({}), defaulting to false",
                    self.failure_reason()
                );
                false
            }
        }
    }

    fn failure_reason(&self) -> &'static str {
        if self.is_open() {
            "property missing or not convertible"
        } else {
            "service handle not open"
        }
    }
}

#[cfg(target_os = "macos")]
impl Default for BatteryReader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for BatteryReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatteryReader").field("service", &self.service).finish_non_exhaustive()
    }
}

impl Drop for BatteryReader {
    fn drop(&mut self) {
        if let Some(service) = self.service.take() {
            if !self.iokit.io_object_release(service) {
                error!("failed to release battery service handle on drop");
            }
        }
    }
}

/// A [`BatteryReader`] behind a mutex, cloneable across threads.
#[derive(Debug, Clone)]
pub struct SharedBatteryReader {
    inner: Arc<Mutex<BatteryReader>>,
}

impl SharedBatteryReader {
    /// Lock the underlying reader for a sequence of calls.
    pub fn lock(&self) -> MutexGuard<'_, BatteryReader> {
        self.inner.lock()
    }
}

fn format_minutes(minutes: i64) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
