//! Unit tests for the WHO_AM_I check

use crate::common::{create_mock_driver, MockError, MockTransport, Operation, AG, MAG};
use lsm9ds1::{ChipIdentity, Error, Lsm9ds1};

#[test]
fn test_both_chips_identified() {
    let (mut driver, _) = create_mock_driver();

    let report = driver.initialize().unwrap();

    assert!(report.all_ok());
    assert_eq!(report.ag, ChipIdentity { read: 0x68, expected: 0x68 });
    assert_eq!(report.mag, ChipIdentity { read: 0x3D, expected: 0x3D });
}

#[test]
fn test_magnetometer_checked_first() {
    let (mut driver, transport) = create_mock_driver();

    driver.initialize().unwrap();

    assert_eq!(
        transport.operations(),
        vec![
            Operation::SetAddress(MAG),
            Operation::ReadRegister { chip: MAG, reg: 0x0F, value: 0x3D },
            Operation::SetAddress(AG),
            Operation::ReadRegister { chip: AG, reg: 0x0F, value: 0x68 },
        ]
    );
}

#[test]
fn test_mismatch_is_not_an_error() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_register(MAG, 0x0F, 0x00);

    let report = driver.initialize().unwrap();

    assert!(!report.all_ok());
    assert!(!report.mag.matches());
    assert!(report.ag.matches());
    assert_eq!(report.mag.read, 0x00);

    // still usable
    driver.enable_accelerometer().unwrap();
    driver.read_accel().unwrap();
}

#[test]
fn test_bus_error_during_identity_check() {
    let (mut driver, transport) = create_mock_driver();
    transport.fail_next_read();

    assert_eq!(driver.initialize(), Err(Error::Transport(MockError::Read)));

    // a later attempt goes through
    assert!(driver.initialize().unwrap().all_ok());
}

#[test]
fn test_alternative_addresses() {
    let transport = MockTransport::new();
    transport.set_register(0x6A, 0x0F, 0x68);
    transport.set_register(0x1C, 0x0F, 0x3D);
    let mut driver = Lsm9ds1::new_with_addrs(
        transport.clone(),
        lsm9ds1::reg_data::ag::I2C_ADDRESS_ALT,
        lsm9ds1::reg_data::mag::I2C_ADDRESS_ALT,
    );

    assert!(driver.initialize().unwrap().all_ok());
    assert!(!transport.operations().contains(&Operation::SetAddress(AG)));
}
