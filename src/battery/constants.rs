/// The IOKit service name for the battery
pub const BATTERY_SERVICE: &str = "AppleSmartBattery";

/// Battery property keys
pub mod keys {
    pub const EXTERNAL_CONNECTED: &str = "ExternalConnected";
    pub const AMPERAGE: &str = "Amperage";
    pub const CURRENT_CAPACITY: &str = "CurrentCapacity";
    pub const CYCLE_COUNT: &str = "CycleCount";
    pub const DESIGN_CAPACITY: &str = "DesignCapacity";
    pub const DESIGN_CYCLE_COUNT: &str = "DesignCycleCount9C";
    pub const FULLY_CHARGED: &str = "FullyCharged";
    pub const IS_CHARGING: &str = "IsCharging";
    pub const MAX_CAPACITY: &str = "MaxCapacity";
    pub const TEMPERATURE: &str = "Temperature";
    pub const TIME_REMAINING: &str = "TimeRemaining";
}
