#![cfg_attr(not(test), no_std)]

mod bits;

pub mod lsm9ds1;
pub mod reg_data;
pub mod transport;

pub use crate::lsm9ds1::{
    decode_sample, Chip, ChipIdentity, IdentityReport, Lsm9ds1, Measurements, SampleVector,
};
pub use reg_data::ag::{AccelRange, GyroRange};
pub use reg_data::mag::MagRange;
pub use reg_data::{InvalidRangeKey, Subsystem};
pub use transport::{I2cTransport, Transport};

/// Driver errors
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Error reported by the transport, passed through unchanged
    Transport(E),

    /// Range key not in the subsystem's table, nothing was written
    InvalidRangeKey(InvalidRangeKey),

    /// Range field read back from the chip holds a reserved value
    UnknownRangeField { subsystem: Subsystem, value: u8 },
}

impl<E> From<InvalidRangeKey> for Error<E> {
    fn from(error: InvalidRangeKey) -> Self {
        Self::InvalidRangeKey(error)
    }
}
