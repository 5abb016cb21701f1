use nalgebra::Vector3;

use crate::bits;
use crate::reg_data::ag::{
    self, AccelRange, GyroRange, CTRL_REG1_G, CTRL_REG4, CTRL_REG5_XL, CTRL_REG6_XL, CTRL_REG8,
    OUT_TEMP_L, OUT_X_L_G, OUT_X_L_XL, TEMP_OFFSET, TEMP_SENSITIVITY,
};
use crate::reg_data::mag::{self, MagRange, CTRL_REG1_M, CTRL_REG2_M, CTRL_REG3_M, OUT_X_L_M};
use crate::reg_data::{BitBlock, Subsystem, MULTI_BYTE_READ, WHO_AM_I};
use crate::transport::Transport;
use crate::Error;

/// Calibrated x, y, z reading in the subsystem's unit (g, dps or gauss)
pub type SampleVector = Vector3<f32>;

/// One of the two chips in the package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chip {
    AccelGyro,
    Magnetometer,
}

/// `WHO_AM_I` value read from a chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipIdentity {
    pub read: u8,
    pub expected: u8,
}

impl ChipIdentity {
    /// The chip answered with its expected identity
    pub fn matches(&self) -> bool {
        self.read == self.expected
    }
}

/// Outcome of [`Lsm9ds1::initialize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IdentityReport {
    pub ag: ChipIdentity,
    pub mag: ChipIdentity,
}

impl IdentityReport {
    /// Both chips answered with their expected identity
    pub fn all_ok(&self) -> bool {
        self.ag.matches() && self.mag.matches()
    }
}

/// All three sensors, read back to back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurements {
    pub accel: SampleVector,
    pub gyro: SampleVector,
    pub mag: SampleVector,
}

/// Decodes three little endian i16 (x, y, z) and applies `scale`
pub fn decode_sample(buf: &[u8; 6], scale: f32) -> SampleVector {
    Vector3::new(
        i16::from_le_bytes([buf[0], buf[1]]) as f32,
        i16::from_le_bytes([buf[2], buf[3]]) as f32,
        i16::from_le_bytes([buf[4], buf[5]]) as f32,
    ) * scale
}

/// Handles all operations on/with the LSM9DS1
pub struct Lsm9ds1<T> {
    transport: T,
    ag_addr: u8,
    mag_addr: u8,
    accel_range: AccelRange,
    gyro_range: GyroRange,
    mag_range: MagRange,
}

impl<T, E> Lsm9ds1<T>
where
    T: Transport<Error = E>,
{
    /// Side effect free constructor with default ranges and addresses
    pub fn new(transport: T) -> Self {
        Self::new_with_addrs(transport, ag::I2C_ADDRESS, mag::I2C_ADDRESS)
    }

    /// Same as `new`, for boards that pull the SDO pins low
    pub fn new_with_addrs(transport: T, ag_addr: u8, mag_addr: u8) -> Self {
        Lsm9ds1 {
            transport,
            ag_addr,
            mag_addr,
            accel_range: AccelRange::default(),
            gyro_range: GyroRange::default(),
            mag_range: MagRange::default(),
        }
    }

    /// Consume the driver and return the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Checks `WHO_AM_I` on both chips.
    ///
    /// A wrong identity is only logged and reported back, the driver stays
    /// usable. Bus errors are returned.
    pub fn initialize(&mut self) -> Result<IdentityReport, Error<E>> {
        let mag = ChipIdentity {
            read: self.read_register(Chip::Magnetometer, WHO_AM_I)?,
            expected: mag::WHO_AM_I_VALUE,
        };
        if mag.matches() {
            #[cfg(feature = "defmt")]
            defmt::info!("Magnetometer init success");
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Magnetometer init failed: WHO_AM_I {=u8:#x}, expected {=u8:#x}",
                mag.read,
                mag.expected
            );
        }

        let ag = ChipIdentity {
            read: self.read_register(Chip::AccelGyro, WHO_AM_I)?,
            expected: ag::WHO_AM_I_VALUE,
        };
        if ag.matches() {
            #[cfg(feature = "defmt")]
            defmt::info!("Accel/gyro init success");
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "Accel/gyro init failed: WHO_AM_I {=u8:#x}, expected {=u8:#x}",
                ag.read,
                ag.expected
            );
        }

        Ok(IdentityReport { ag, mag })
    }

    /// Enables X, Y and Z at 952 Hz ODR with multi-byte reads
    pub fn enable_accelerometer(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("enabling accelerometer");
        self.write_register(Chip::AccelGyro, CTRL_REG5_XL::ADDR, CTRL_REG5_XL::ENABLE)?;
        self.write_register(Chip::AccelGyro, CTRL_REG6_XL::ADDR, CTRL_REG6_XL::ENABLE)?;
        self.write_register(Chip::AccelGyro, CTRL_REG8::ADDR, CTRL_REG8::IF_ADD_INC)
    }

    /// Enables X, Y and Z at 952 Hz ODR with multi-byte reads
    pub fn enable_gyroscope(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("enabling gyroscope");
        self.write_register(Chip::AccelGyro, CTRL_REG1_G::ADDR, CTRL_REG1_G::ENABLE)?;
        self.write_register(Chip::AccelGyro, CTRL_REG4::ADDR, CTRL_REG4::ENABLE)?;
        self.write_register(Chip::AccelGyro, CTRL_REG8::ADDR, CTRL_REG8::IF_ADD_INC)
    }

    /// Enables continuous conversion on all axes
    pub fn enable_magnetometer(&mut self) -> Result<(), Error<E>> {
        #[cfg(feature = "defmt")]
        defmt::debug!("enabling magnetometer");
        self.write_register(Chip::Magnetometer, CTRL_REG1_M::ADDR, CTRL_REG1_M::ENABLE)?;
        self.write_register(
            Chip::Magnetometer,
            CTRL_REG3_M::ADDR,
            CTRL_REG3_M::CONTINUOUS,
        )
    }

    /// Set accel range, and update the scale used by `read_accel`
    pub fn set_accel_range(&mut self, range: AccelRange) -> Result<(), Error<E>> {
        let fs = CTRL_REG6_XL::FS_XL;
        self.write_bits(Chip::AccelGyro, CTRL_REG6_XL::ADDR, fs, range.bits())?;
        #[cfg(feature = "defmt")]
        defmt::debug!("accel range {}", range.key());
        self.accel_range = range;
        Ok(())
    }

    /// Set gyro range, and update the scale used by `read_gyro`
    pub fn set_gyro_range(&mut self, range: GyroRange) -> Result<(), Error<E>> {
        let fs = CTRL_REG1_G::FS_G;
        self.write_bits(Chip::AccelGyro, CTRL_REG1_G::ADDR, fs, range.bits())?;
        #[cfg(feature = "defmt")]
        defmt::debug!("gyro range {}", range.key());
        self.gyro_range = range;
        Ok(())
    }

    /// Set mag range, and update the scale used by `read_mag`
    pub fn set_mag_range(&mut self, range: MagRange) -> Result<(), Error<E>> {
        let fs = CTRL_REG2_M::FS;
        self.write_bits(Chip::Magnetometer, CTRL_REG2_M::ADDR, fs, range.bits())?;
        #[cfg(feature = "defmt")]
        defmt::debug!("mag range {}", range.key());
        self.mag_range = range;
        Ok(())
    }

    /// Like `set_accel_range`, from a key such as `"8G"`.
    /// An unknown key touches neither the bus nor the driver state.
    pub fn set_accel_range_key(&mut self, key: &str) -> Result<(), Error<E>> {
        let range = key.parse::<AccelRange>()?;
        self.set_accel_range(range)
    }

    /// Like `set_gyro_range`, from a key such as `"500DPS"`
    pub fn set_gyro_range_key(&mut self, key: &str) -> Result<(), Error<E>> {
        let range = key.parse::<GyroRange>()?;
        self.set_gyro_range(range)
    }

    /// Like `set_mag_range`, from a key such as `"12GAUSS"`
    pub fn set_mag_range_key(&mut self, key: &str) -> Result<(), Error<E>> {
        let range = key.parse::<MagRange>()?;
        self.set_mag_range(range)
    }

    /// Accel range used to scale `read_accel`
    pub fn accel_range(&self) -> AccelRange {
        self.accel_range
    }

    /// Gyro range used to scale `read_gyro`
    pub fn gyro_range(&self) -> GyroRange {
        self.gyro_range
    }

    /// Mag range used to scale `read_mag`
    pub fn mag_range(&self) -> MagRange {
        self.mag_range
    }

    /// Accel range as currently configured on the chip
    pub fn get_accel_range(&mut self) -> Result<AccelRange, Error<E>> {
        let fs = CTRL_REG6_XL::FS_XL;
        let value = self.read_bits(Chip::AccelGyro, CTRL_REG6_XL::ADDR, fs)?;
        AccelRange::from_field(value).ok_or(Error::UnknownRangeField {
            subsystem: Subsystem::Accelerometer,
            value,
        })
    }

    /// Gyro range as currently configured on the chip
    pub fn get_gyro_range(&mut self) -> Result<GyroRange, Error<E>> {
        let fs = CTRL_REG1_G::FS_G;
        let value = self.read_bits(Chip::AccelGyro, CTRL_REG1_G::ADDR, fs)?;
        GyroRange::from_field(value).ok_or(Error::UnknownRangeField {
            subsystem: Subsystem::Gyroscope,
            value,
        })
    }

    /// Mag range as currently configured on the chip
    pub fn get_mag_range(&mut self) -> Result<MagRange, Error<E>> {
        let fs = CTRL_REG2_M::FS;
        let value = self.read_bits(Chip::Magnetometer, CTRL_REG2_M::ADDR, fs)?;
        MagRange::from_field(value).ok_or(Error::UnknownRangeField {
            subsystem: Subsystem::Magnetometer,
            value,
        })
    }

    /// Accelerometer readings in g
    pub fn read_accel(&mut self) -> Result<SampleVector, Error<E>> {
        self.read_axes(Chip::AccelGyro, OUT_X_L_XL, self.accel_range.scale())
    }

    /// Gyro readings in degrees per second
    pub fn read_gyro(&mut self) -> Result<SampleVector, Error<E>> {
        self.read_axes(Chip::AccelGyro, OUT_X_L_G, self.gyro_range.scale())
    }

    /// Magnetometer readings in gauss
    pub fn read_mag(&mut self) -> Result<SampleVector, Error<E>> {
        self.read_axes(Chip::Magnetometer, OUT_X_L_M, self.mag_range.scale())
    }

    /// Accelerometer, gyro and magnetometer, read in that order
    pub fn read_all(&mut self) -> Result<Measurements, Error<E>> {
        Ok(Measurements {
            accel: self.read_accel()?,
            gyro: self.read_gyro()?,
            mag: self.read_mag()?,
        })
    }

    /// Die temperature in degrees celsius
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        let mut buf: [u8; 2] = [0; 2];
        self.read_bytes(Chip::AccelGyro, MULTI_BYTE_READ | OUT_TEMP_L, &mut buf)?;
        let raw = i16::from_le_bytes(buf) as f32;

        Ok(raw / TEMP_SENSITIVITY + TEMP_OFFSET)
    }

    /// Reads a register of either chip
    pub fn read_register(&mut self, chip: Chip, reg: u8) -> Result<u8, Error<E>> {
        self.select(chip)?;
        self.transport.read_register(reg).map_err(Error::Transport)
    }

    /// Writes a register of either chip
    pub fn write_register(&mut self, chip: Chip, reg: u8, byte: u8) -> Result<(), Error<E>> {
        self.select(chip)?;
        self.transport
            .write_register(reg, byte)
            .map_err(Error::Transport)
    }

    /// Read-modify-write of a bit block, the rest of the register is preserved
    fn write_bits(
        &mut self,
        chip: Chip,
        reg: u8,
        block: BitBlock,
        pattern: u8,
    ) -> Result<(), Error<E>> {
        let mut byte = self.read_register(chip, reg)?;
        bits::replace_bits(&mut byte, block.bit, block.length, pattern);
        self.write_register(chip, reg, byte)
    }

    /// Read bit block at register reg, right aligned
    fn read_bits(&mut self, chip: Chip, reg: u8, block: BitBlock) -> Result<u8, Error<E>> {
        let byte = self.read_register(chip, reg)?;
        Ok(bits::get_bits(byte, block.bit, block.length))
    }

    fn read_bytes(&mut self, chip: Chip, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        self.select(chip)?;
        self.transport.read_bytes(reg, buf).map_err(Error::Transport)
    }

    /// Burst reads the six output bytes starting at `reg`
    fn read_axes(&mut self, chip: Chip, reg: u8, scale: f32) -> Result<SampleVector, Error<E>> {
        let mut buf: [u8; 6] = [0; 6];
        self.read_bytes(chip, MULTI_BYTE_READ | reg, &mut buf)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("{} raw {:x}", chip, buf);

        Ok(decode_sample(&buf, scale))
    }

    fn select(&mut self, chip: Chip) -> Result<(), Error<E>> {
        let addr = match chip {
            Chip::AccelGyro => self.ag_addr,
            Chip::Magnetometer => self.mag_addr,
        };
        self.transport.set_address(addr).map_err(Error::Transport)
    }
}
