//! Unit tests for sample decoding and scaling

use crate::common::{assert_float_eq, create_mock_driver, Operation, AG, MAG};
use lsm9ds1::{decode_sample, AccelRange, GyroRange, MagRange};

#[test]
fn test_decode_reference_bytes() {
    let s = 0.5;
    let v = decode_sample(&[0x34, 0x12, 0x00, 0x00, 0x00, 0x00], s);

    assert_eq!(v.x, 0x1234 as f32 * s);
    assert_eq!(v.y, 0.0);
    assert_eq!(v.z, 0.0);
}

#[test]
fn test_decode_sign_boundary() {
    let v = decode_sample(&[0xFF, 0x7F, 0x00, 0x80, 0xFF, 0xFF], 1.0);

    assert_eq!(v.x, 32767.0);
    assert_eq!(v.y, -32768.0);
    assert_eq!(v.z, -1.0);
}

#[test]
fn test_read_accel_scales_by_range() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_accel_data(16384, -16384, 100);

    let v = driver.read_accel().unwrap();
    assert_float_eq(v.x, 16384.0 * AccelRange::G2.scale(), 1e-6);
    assert_float_eq(v.y, -16384.0 * AccelRange::G2.scale(), 1e-6);
    assert_float_eq(v.z, 100.0 * AccelRange::G2.scale(), 1e-6);

    driver.set_accel_range(AccelRange::G16).unwrap();
    let v = driver.read_accel().unwrap();
    assert_float_eq(v.x, 16384.0 * 0.000_732, 1e-5);
}

#[test]
fn test_read_gyro_in_dps() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_gyro_data(1000, 0, -1000);

    let v = driver.read_gyro().unwrap();
    assert_float_eq(v.x, 8.75, 1e-4);
    assert_float_eq(v.z, -8.75, 1e-4);

    driver.set_gyro_range(GyroRange::D2000).unwrap();
    let v = driver.read_gyro().unwrap();
    assert_float_eq(v.x, 70.0, 1e-3);
}

#[test]
fn test_read_mag_in_gauss() {
    let (mut driver, transport) = create_mock_driver();
    transport.set_mag_data(0, 10000, 0);

    let v = driver.read_mag().unwrap();
    assert_float_eq(v.y, 1.4, 1e-5);

    driver.set_mag_range(MagRange::Gauss16).unwrap();
    let v = driver.read_mag().unwrap();
    assert_float_eq(v.y, 5.8, 1e-4);
}

#[test]
fn test_burst_read_sets_multi_byte_flag() {
    let (mut driver, transport) = create_mock_driver();

    driver.read_accel().unwrap();
    driver.read_gyro().unwrap();
    driver.read_mag().unwrap();

    let reads: Vec<Operation> = transport
        .operations()
        .into_iter()
        .filter(|op| matches!(op, Operation::ReadBytes { .. }))
        .collect();
    assert_eq!(
        reads,
        vec![
            Operation::ReadBytes { chip: AG, reg: 0xA8, len: 6 },
            Operation::ReadBytes { chip: AG, reg: 0x98, len: 6 },
            Operation::ReadBytes { chip: MAG, reg: 0xA8, len: 6 },
        ]
    );
}

#[test]
fn test_readings_are_not_cached() {
    let (mut driver, transport) = create_mock_driver();

    transport.set_accel_data(1, 2, 3);
    let first = driver.read_accel().unwrap();
    transport.set_accel_data(-1, -2, -3);
    let second = driver.read_accel().unwrap();

    assert_eq!(first, -second);
}

#[test]
fn test_temperature() {
    let (mut driver, transport) = create_mock_driver();

    transport.set_temperature_data(0);
    assert_float_eq(driver.read_temperature().unwrap(), 25.0, 1e-6);

    transport.set_temperature_data(-80);
    assert_float_eq(driver.read_temperature().unwrap(), 20.0, 1e-6);

    transport.set_temperature_data(160);
    assert_float_eq(driver.read_temperature().unwrap(), 35.0, 1e-6);
}
