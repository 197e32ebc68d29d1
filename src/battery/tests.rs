use super::*;
use crate::iokit::{MockIOKit, ServiceHandle};

const SERVICE: ServiceHandle = ServiceHandle::from_raw(0x2c1);

fn mock_with_service() -> MockIOKit {
    let mut mock = MockIOKit::new();
    mock.expect_io_service_get_matching_service().returning(|_| Some(SERVICE));
    mock
}

fn open_reader(mut mock: MockIOKit) -> BatteryReader {
    // Drop releases the handle; every opened reader needs this.
    mock.expect_io_object_release().returning(|_| true);
    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    reader
}

#[test]
fn open_matches_the_battery_service() {
    let mut mock = MockIOKit::new();
    mock.expect_io_service_get_matching_service()
        .withf(|name| name == BATTERY_SERVICE)
        .times(1)
        .returning(|_| Some(SERVICE));
    mock.expect_io_object_release().returning(|_| true);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    assert!(!reader.is_open());
    reader.open().unwrap();
    assert!(reader.is_open());
}

#[test]
fn open_while_open_fails_without_changing_state() {
    let mut reader = open_reader(mock_with_service());
    assert_eq!(reader.open(), Err(Error::AlreadyOpen));
    assert!(reader.is_open());
}

#[test]
fn open_fails_when_no_service_matches() {
    let mut mock = MockIOKit::new();
    mock.expect_io_service_get_matching_service().returning(|_| None);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    assert_eq!(reader.open(), Err(Error::ServiceNotFound));
    assert!(!reader.is_open());
}

#[test]
fn close_releases_the_handle() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().times(1).returning(|_| true);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    reader.close().unwrap();
    assert!(!reader.is_open());
}

#[test]
fn close_leaves_reader_closed_even_when_release_fails() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().times(1).returning(|_| false);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.close(), Err(Error::CloseFailed));
    assert!(!reader.is_open());
    // The handle is gone; a second close has nothing to release.
    assert_eq!(reader.close(), Ok(()));
}

#[test]
fn close_on_a_never_opened_reader_is_a_noop() {
    let mut reader = BatteryReader::with_iokit(Box::new(MockIOKit::new()));
    assert_eq!(reader.close(), Ok(()));
    assert!(!reader.is_open());
}

#[test]
fn drop_releases_an_open_handle() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().times(1).returning(|_| true);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    drop(reader);
}

#[test]
fn integer_accessors_read_their_keys() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, key| match key {
        "CurrentCapacity" => Some(4970),
        "MaxCapacity" => Some(5680),
        "DesignCapacity" => Some(6000),
        "CycleCount" => Some(312),
        "DesignCycleCount9C" => Some(1000),
        "TimeRemaining" => Some(95),
        _ => None,
    });

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.current_capacity(), 4970);
    assert_eq!(reader.max_capacity(), 5680);
    assert_eq!(reader.design_capacity(), 6000);
    assert_eq!(reader.cycle_count(), 312);
    assert_eq!(reader.design_cycle_count(), 1000);
    assert_eq!(reader.time_remaining(), 95);
}

#[test]
fn boolean_accessors_read_their_keys() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_bool_property().returning(|_, key| match key {
        "ExternalConnected" => Some(true),
        "IsCharging" => Some(true),
        "FullyCharged" => Some(false),
        _ => None,
    });

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert!(reader.is_ac_powered());
    assert!(reader.is_charging());
    assert!(!reader.is_charged());
}

#[test]
fn unreadable_properties_default_to_zero_values() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| None);
    mock.expect_get_bool_property().returning(|_, _| None);

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.current_capacity(), 0);
    assert_eq!(reader.time_remaining(), 0);
    assert!(!reader.is_ac_powered());
    assert_eq!(reader.charge(), 0.0);
    assert_eq!(reader.temperature(TemperatureUnit::Celsius), 0.0);

    assert_eq!(reader.number_property(PropertyKey::Amperage), None);
    assert_eq!(reader.bool_property(PropertyKey::IsCharging), None);
    assert_eq!(reader.try_charge(), None);
    assert_eq!(reader.try_temperature(TemperatureUnit::Kelvin), None);
    assert_eq!(reader.try_time_remaining_formatted(), None);
}

#[test]
fn reads_on_a_closed_reader_default_without_touching_the_registry() {
    // No expectations: any registry call would panic the mock.
    let reader = BatteryReader::with_iokit(Box::new(MockIOKit::new()));
    assert_eq!(reader.current_capacity(), 0);
    assert_eq!(reader.cycle_count(), 0);
    assert!(!reader.is_charging());
    assert_eq!(reader.charge(), 0.0);
    assert_eq!(reader.time_remaining_formatted(), "0:00");
    assert_eq!(reader.number_property(PropertyKey::MaxCapacity), None);
}

#[test]
fn charge_is_the_floored_capacity_ratio() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, key| match key {
        "CurrentCapacity" => Some(50),
        "MaxCapacity" => Some(200),
        _ => None,
    });

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.charge(), 25.0);
    assert_eq!(reader.try_charge(), Some(25.0));
}

#[test]
fn charge_guards_a_zero_maximum_capacity() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, key| match key {
        "CurrentCapacity" => Some(50),
        "MaxCapacity" => Some(0),
        _ => None,
    });

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.charge(), 0.0);
    assert_eq!(reader.try_charge(), None);
}

#[test]
fn time_remaining_renders_as_hours_and_padded_minutes() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| Some(125));

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.time_remaining_formatted(), "2:05");
    assert_eq!(reader.try_time_remaining_formatted().as_deref(), Some("2:05"));
}

#[test]
fn zero_minutes_render_as_zero_hours() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| Some(0));

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.time_remaining_formatted(), "0:00");
}

#[test]
fn temperature_converts_and_rounds_up_per_unit() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| Some(2000));

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.temperature(TemperatureUnit::Celsius), 20.0);
    assert_eq!(reader.temperature(TemperatureUnit::Fahrenheit), 68.0);
    // 20 C is 293.15 K; the ceiling lands after the conversion.
    assert_eq!(reader.temperature(TemperatureUnit::Kelvin), 294.0);
}

#[test]
fn temperature_ceiling_applies_after_the_kelvin_offset() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| Some(0));

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.temperature(TemperatureUnit::Kelvin), 274.0);
}

#[test]
fn fractional_celsius_rounds_upward() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, _| Some(3045));

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();
    assert_eq!(reader.temperature(TemperatureUnit::Celsius), 31.0);
    assert_eq!(reader.try_temperature(TemperatureUnit::Fahrenheit), Some(87.0));
}

#[test]
fn shared_reader_is_usable_across_threads() {
    let mut mock = mock_with_service();
    mock.expect_io_object_release().returning(|_| true);
    mock.expect_get_number_property().returning(|_, key| match key {
        "CurrentCapacity" => Some(50),
        "MaxCapacity" => Some(200),
        _ => None,
    });

    let mut reader = BatteryReader::with_iokit(Box::new(mock));
    reader.open().unwrap();

    let shared = reader.into_shared();
    let worker = shared.clone();
    let charge = std::thread::spawn(move || worker.lock().charge()).join().unwrap();
    assert_eq!(charge, 25.0);
    assert!(shared.lock().is_open());
}
