//! Bit field helpers for single register bytes.
//!
//! Fields are addressed by the position of their most significant bit and
//! their length, e.g. bits 4:3 are `start_bit = 4, length = 2`.

/// Mask covering `length` bits ending at `start_bit`, already shifted in place
pub fn mask(start_bit: u8, length: u8) -> u8 {
    let shift = start_bit + 1 - length;
    (((1u16 << length) - 1) as u8) << shift
}

/// Shift a right aligned `data` into the field, dropping bits that do not fit
pub fn field(start_bit: u8, length: u8, data: u8) -> u8 {
    (data << (start_bit + 1 - length)) & mask(start_bit, length)
}

/// Read the field at `start_bit`/`length`, right aligned
pub fn get_bits(byte: u8, start_bit: u8, length: u8) -> u8 {
    (byte & mask(start_bit, length)) >> (start_bit + 1 - length)
}

/// Replace the field with `pattern` (already in place), keeping every other bit
pub fn replace_bits(byte: &mut u8, start_bit: u8, length: u8, pattern: u8) {
    let mask = mask(start_bit, length);
    *byte &= !mask;
    *byte |= pattern & mask;
}
