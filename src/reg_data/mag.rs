//! Magnetometer chip address space

use core::str::FromStr;

use super::{BitBlock, InvalidRangeKey, Subsystem};
use crate::bits;

/// SDO_M pulled high
pub const I2C_ADDRESS: u8 = 0x1E;
/// SDO_M pulled low
pub const I2C_ADDRESS_ALT: u8 = 0x1C;

pub const WHO_AM_I_VALUE: u8 = 0x3D;

pub const OUT_X_L_M: u8 = 0x28;

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG1_M;

impl CTRL_REG1_M {
    pub const ADDR: u8 = 0x20;
    /// Temperature compensation, ultra-high performance X/Y, 80 Hz ODR
    pub const ENABLE: u8 = 0x7C;
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG2_M;

impl CTRL_REG2_M {
    pub const ADDR: u8 = 0x21;
    pub const FS: BitBlock = BitBlock { bit: 6, length: 2 };
}

#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug)]
pub struct CTRL_REG3_M;

impl CTRL_REG3_M {
    pub const ADDR: u8 = 0x22;
    pub const CONTINUOUS: u8 = 0x00;
}

/// Magnetometer full scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MagRange {
    /// +/- 4 gauss
    #[default]
    Gauss4 = 0b00,
    /// +/- 8 gauss
    Gauss8 = 0b01,
    /// +/- 12 gauss
    Gauss12 = 0b10,
    /// +/- 16 gauss
    Gauss16 = 0b11,
}

impl MagRange {
    pub const ALL_KEYS: &'static [&'static str] = &["4GAUSS", "8GAUSS", "12GAUSS", "16GAUSS"];

    pub fn key(self) -> &'static str {
        match self {
            MagRange::Gauss4 => "4GAUSS",
            MagRange::Gauss8 => "8GAUSS",
            MagRange::Gauss12 => "12GAUSS",
            MagRange::Gauss16 => "16GAUSS",
        }
    }

    /// Field value shifted into its place in CTRL_REG2_M
    pub fn bits(self) -> u8 {
        let fs = CTRL_REG2_M::FS;
        bits::field(fs.bit, fs.length, self as u8)
    }

    /// Range for a right aligned FS value
    pub fn from_field(value: u8) -> Option<Self> {
        match value {
            0b00 => Some(MagRange::Gauss4),
            0b01 => Some(MagRange::Gauss8),
            0b10 => Some(MagRange::Gauss12),
            0b11 => Some(MagRange::Gauss16),
            _ => None,
        }
    }

    /// gauss per LSB
    pub fn scale(self) -> f32 {
        match self {
            MagRange::Gauss4 => 0.000_14,
            MagRange::Gauss8 => 0.000_29,
            MagRange::Gauss12 => 0.000_43,
            MagRange::Gauss16 => 0.000_58,
        }
    }
}

impl FromStr for MagRange {
    type Err = InvalidRangeKey;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key {
            "4GAUSS" => Ok(MagRange::Gauss4),
            "8GAUSS" => Ok(MagRange::Gauss8),
            "12GAUSS" => Ok(MagRange::Gauss12),
            "16GAUSS" => Ok(MagRange::Gauss16),
            _ => Err(InvalidRangeKey {
                subsystem: Subsystem::Magnetometer,
                valid: Self::ALL_KEYS,
            }),
        }
    }
}
