use std::fmt;

use super::constants::keys;

/// Registry property keys published by the battery service.
///
/// The set mirrors the fields `AppleSmartBattery` exposes and is
/// closed; it is never extended at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// Whether external power is connected
    ExternalConnected,
    /// Instantaneous current draw in mA (negative while discharging)
    Amperage,
    /// Current charge in mAh
    CurrentCapacity,
    /// Charge/discharge cycles the battery has undergone
    CycleCount,
    /// Capacity the battery shipped with, in mAh
    DesignCapacity,
    /// Cycle count the battery was designed for
    DesignCycleCount,
    /// Whether the battery reports itself fully charged
    FullyCharged,
    /// Whether the battery is currently charging
    IsCharging,
    /// Current maximum charge in mAh
    MaxCapacity,
    /// Temperature in hundredths of a degree Celsius
    Temperature,
    /// Estimated minutes until empty/full
    TimeRemaining,
}

impl PropertyKey {
    /// The raw key string used by the registry entry.
    pub const fn as_str(self) -> &'static str {
        match self {
            PropertyKey::ExternalConnected => keys::EXTERNAL_CONNECTED,
            PropertyKey::Amperage => keys::AMPERAGE,
            PropertyKey::CurrentCapacity => keys::CURRENT_CAPACITY,
            PropertyKey::CycleCount => keys::CYCLE_COUNT,
            PropertyKey::DesignCapacity => keys::DESIGN_CAPACITY,
            PropertyKey::DesignCycleCount => keys::DESIGN_CYCLE_COUNT,
            PropertyKey::FullyCharged => keys::FULLY_CHARGED,
            PropertyKey::IsCharging => keys::IS_CHARGING,
            PropertyKey::MaxCapacity => keys::MAX_CAPACITY,
            PropertyKey::Temperature => keys::TEMPERATURE,
            PropertyKey::TimeRemaining => keys::TIME_REMAINING,
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit for temperature readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureUnit {
    /// Degrees Celsius, the registry's native unit
    #[default]
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}
