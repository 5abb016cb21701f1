use core::fmt;

pub mod ag;
pub mod mag;

/// Set on a register address to auto-increment through a burst read
pub const MULTI_BYTE_READ: u8 = 0x80;

/// Both chips answer `WHO_AM_I` at the same address
pub const WHO_AM_I: u8 = 0x0F;

/// Describes a bit block from bit number `bit` to `bit - length + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitBlock {
    pub bit: u8,
    pub length: u8,
}

/// Sensing subsystem a range selector belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Subsystem {
    Accelerometer,
    Gyroscope,
    Magnetometer,
}

/// A range key that is not in the subsystem's table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidRangeKey {
    pub subsystem: Subsystem,
    /// Every key the subsystem accepts
    pub valid: &'static [&'static str],
}

impl fmt::Display for InvalidRangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {:?} range, valid keys are ", self.subsystem)?;
        for (i, key) in self.valid.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", key)?;
        }
        Ok(())
    }
}
