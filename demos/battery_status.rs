//! Prints a snapshot of every battery field the IORegistry exposes.
//!
//! Run with `RUST_LOG=error` to see diagnostics for fields the
//! hardware does not publish.

#[cfg(target_os = "macos")]
fn main() -> darwin_battery::Result<()> {
    use darwin_battery::battery::{BatteryReader, TemperatureUnit};

    env_logger::init();

    let mut reader = BatteryReader::new();
    reader.open()?;

    println!("AC powered:     {}", reader.is_ac_powered());
    println!("Charging:       {}", reader.is_charging());
    println!("Fully charged:  {}", reader.is_charged());
    println!("Charge:         {:.0}%", reader.charge());
    println!(
        "Capacity:       {} / {} mAh (design {} mAh)",
        reader.current_capacity(),
        reader.max_capacity(),
        reader.design_capacity()
    );
    println!(
        "Cycles:         {} of {} designed",
        reader.cycle_count(),
        reader.design_cycle_count()
    );
    println!("Time remaining: {}", reader.time_remaining_formatted());
    println!(
        "Temperature:    {:.0} C / {:.0} F",
        reader.temperature(TemperatureUnit::Celsius),
        reader.temperature(TemperatureUnit::Fahrenheit)
    );

    reader.close()
}

#[cfg(not(target_os = "macos"))]
fn main() {
    eprintln!("darwin-battery reads the IOKit registry and only runs on macOS");
}
