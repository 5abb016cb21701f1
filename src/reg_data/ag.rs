//! Accelerometer / gyroscope chip address space

use core::str::FromStr;

use super::{BitBlock, InvalidRangeKey, Subsystem};
use crate::bits;

/// SDO_A/G pulled high
pub const I2C_ADDRESS: u8 = 0x6B;
/// SDO_A/G pulled low
pub const I2C_ADDRESS_ALT: u8 = 0x6A;

pub const WHO_AM_I_VALUE: u8 = 0x68;

pub const OUT_TEMP_L: u8 = 0x15;
pub const OUT_X_L_G: u8 = 0x18;
pub const OUT_X_L_XL: u8 = 0x28;

/// Temperature sensor, LSB per degree celsius
pub const TEMP_SENSITIVITY: f32 = 16.0;
/// Temperature reported for a raw value of 0
pub const TEMP_OFFSET: f32 = 25.0;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG1_G;

impl CTRL_REG1_G {
    pub const ADDR: u8 = 0x10;
    /// 952 Hz ODR, 100 Hz cutoff
    pub const ENABLE: u8 = 0xC3;
    pub const FS_G: BitBlock = BitBlock { bit: 4, length: 2 };
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG4;

impl CTRL_REG4 {
    pub const ADDR: u8 = 0x1E;
    /// Zen_G, Yen_G, Xen_G
    pub const ENABLE: u8 = 0x38;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG5_XL;

impl CTRL_REG5_XL {
    pub const ADDR: u8 = 0x1F;
    /// Zen_XL, Yen_XL, Xen_XL
    pub const ENABLE: u8 = 0x38;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG6_XL;

impl CTRL_REG6_XL {
    pub const ADDR: u8 = 0x20;
    /// 952 Hz ODR, 408 Hz anti-aliasing bandwidth
    pub const ENABLE: u8 = 0xC0;
    pub const FS_XL: BitBlock = BitBlock { bit: 4, length: 2 };
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG8;

impl CTRL_REG8 {
    pub const ADDR: u8 = 0x22;
    /// IF_ADD_INC, register address auto-increments on multi-byte access
    pub const IF_ADD_INC: u8 = 0x04;
}

/// Accelerometer full scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AccelRange {
    /// +/- 2 g
    #[default]
    G2 = 0b00,
    /// +/- 4 g
    G4 = 0b10,
    /// +/- 8 g
    G8 = 0b11,
    /// +/- 16 g
    G16 = 0b01,
}

impl AccelRange {
    pub const ALL_KEYS: &'static [&'static str] = &["2G", "4G", "8G", "16G"];

    pub fn key(self) -> &'static str {
        match self {
            AccelRange::G2 => "2G",
            AccelRange::G4 => "4G",
            AccelRange::G8 => "8G",
            AccelRange::G16 => "16G",
        }
    }

    /// Field value shifted into its place in CTRL_REG6_XL
    pub fn bits(self) -> u8 {
        let fs = CTRL_REG6_XL::FS_XL;
        bits::field(fs.bit, fs.length, self as u8)
    }

    /// Range for a right aligned FS_XL value
    pub fn from_field(value: u8) -> Option<Self> {
        match value {
            0b00 => Some(AccelRange::G2),
            0b10 => Some(AccelRange::G4),
            0b11 => Some(AccelRange::G8),
            0b01 => Some(AccelRange::G16),
            _ => None,
        }
    }

    /// g per LSB
    pub fn scale(self) -> f32 {
        match self {
            AccelRange::G2 => 0.000_061,
            AccelRange::G4 => 0.000_122,
            AccelRange::G8 => 0.000_244,
            AccelRange::G16 => 0.000_732,
        }
    }
}

impl FromStr for AccelRange {
    type Err = InvalidRangeKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "2G" => Ok(AccelRange::G2),
            "4G" => Ok(AccelRange::G4),
            "8G" => Ok(AccelRange::G8),
            "16G" => Ok(AccelRange::G16),
            _ => Err(InvalidRangeKey {
                subsystem: Subsystem::Accelerometer,
                valid: Self::ALL_KEYS,
            }),
        }
    }
}

/// Gyroscope full scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum GyroRange {
    /// +/- 245 dps
    #[default]
    D245 = 0b00,
    /// +/- 500 dps
    D500 = 0b01,
    /// +/- 2000 dps
    D2000 = 0b11,
}

impl GyroRange {
    pub const ALL_KEYS: &'static [&'static str] = &["245DPS", "500DPS", "2000DPS"];

    pub fn key(self) -> &'static str {
        match self {
            GyroRange::D245 => "245DPS",
            GyroRange::D500 => "500DPS",
            GyroRange::D2000 => "2000DPS",
        }
    }

    /// Field value shifted into its place in CTRL_REG1_G
    pub fn bits(self) -> u8 {
        let fs = CTRL_REG1_G::FS_G;
        bits::field(fs.bit, fs.length, self as u8)
    }

    /// Range for a right aligned FS_G value, 0b10 is not available
    pub fn from_field(value: u8) -> Option<Self> {
        match value {
            0b00 => Some(GyroRange::D245),
            0b01 => Some(GyroRange::D500),
            0b11 => Some(GyroRange::D2000),
            _ => None,
        }
    }

    /// degrees per second per LSB
    pub fn scale(self) -> f32 {
        match self {
            GyroRange::D245 => 0.008_75,
            GyroRange::D500 => 0.017_5,
            GyroRange::D2000 => 0.07,
        }
    }
}

impl FromStr for GyroRange {
    type Err = InvalidRangeKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "245DPS" => Ok(GyroRange::D245),
            "500DPS" => Ok(GyroRange::D500),
            "2000DPS" => Ok(GyroRange::D2000),
            _ => Err(InvalidRangeKey {
                subsystem: Subsystem::Gyroscope,
                valid: Self::ALL_KEYS,
            }),
        }
    }
}
