//! Unit tests for error handling and recovery

use crate::common::{create_mock_driver, MockError, Operation, AG};
use lsm9ds1::{AccelRange, Chip, Error, GyroRange};

#[test]
fn test_read_failure_basic() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_read();

    assert_eq!(driver.read_accel(), Err(Error::Transport(MockError::Read)));
}

#[test]
fn test_read_failure_recovery() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_read();
    assert!(driver.read_mag().is_err(), "First read should fail");

    transport.set_mag_data(1, 1, 1);
    assert!(
        driver.read_mag().is_ok(),
        "Subsequent read should succeed after single failure"
    );
}

#[test]
fn test_write_failure_stops_enable_sequence() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_write();

    assert_eq!(
        driver.enable_gyroscope(),
        Err(Error::Transport(MockError::Write))
    );
    assert!(transport.writes().is_empty());
}

#[test]
fn test_range_read_failure_keeps_state() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_read();

    assert_eq!(
        driver.set_accel_range(AccelRange::G4),
        Err(Error::Transport(MockError::Read))
    );
    assert_eq!(driver.accel_range(), AccelRange::G2);
    assert!(transport.writes().is_empty());
}

#[test]
fn test_range_write_failure_keeps_state() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_write();

    assert!(driver.set_gyro_range_key("500DPS").is_err());
    assert_eq!(driver.gyro_range(), GyroRange::D245);
    assert_eq!(transport.get_register(AG, 0x10), 0);
}

#[test]
fn test_read_all_propagates_first_failure() {
    let (mut driver, transport) = create_mock_driver();

    transport.fail_next_read();

    assert!(driver.read_all().is_err());
    // nothing after the failed accel read
    assert_eq!(transport.operations(), vec![Operation::SetAddress(AG)]);
}

#[test]
fn test_raw_register_access() {
    let (mut driver, transport) = create_mock_driver();

    driver.write_register(Chip::AccelGyro, 0x23, 0x5A).unwrap();

    assert_eq!(transport.get_register(AG, 0x23), 0x5A);
    assert_eq!(driver.read_register(Chip::AccelGyro, 0x23), Ok(0x5A));
}
