//! Register level access to the chips on the bus.

use embedded_hal::i2c::I2c;

/// Register access for a bus with addressable chips.
///
/// Selecting a chip and then reading or writing it are separate calls, so an
/// implementation must not be shared between callers without serializing
/// them.
pub trait Transport {
    type Error;

    /// Select the chip that following calls talk to
    fn set_address(&mut self, addr: u8) -> Result<(), Self::Error>;

    /// Read one register of the selected chip
    fn read_register(&mut self, reg: u8) -> Result<u8, Self::Error>;

    /// Write one register of the selected chip
    fn write_register(&mut self, reg: u8, byte: u8) -> Result<(), Self::Error>;

    /// Read `buf.len()` bytes starting at `reg`
    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Self::Error>;
}

/// [`Transport`] over an `embedded-hal` I2C bus
pub struct I2cTransport<I> {
    i2c: I,
    address: u8,
}

impl<I> I2cTransport<I> {
    /// Wraps the bus, targeting the accelerometer/gyroscope chip until told otherwise
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: crate::reg_data::ag::I2C_ADDRESS,
        }
    }

    /// Currently selected chip address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the transport and return the I2C peripheral
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I, E> Transport for I2cTransport<I>
where
    I: I2c<Error = E>,
{
    type Error = E;

    fn set_address(&mut self, addr: u8) -> Result<(), E> {
        self.address = addr;
        Ok(())
    }

    fn read_register(&mut self, reg: u8) -> Result<u8, E> {
        let mut byte: [u8; 1] = [0; 1];
        self.i2c.write_read(self.address, &[reg], &mut byte)?;
        Ok(byte[0])
    }

    fn write_register(&mut self, reg: u8, byte: u8) -> Result<(), E> {
        self.i2c.write(self.address, &[reg, byte])
    }

    fn read_bytes(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), E> {
        self.i2c.write_read(self.address, &[reg], buf)
    }
}
