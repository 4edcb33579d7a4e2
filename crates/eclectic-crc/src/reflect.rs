//! Bit reflection for CRC registers.
//!
//! Reflected CRC variants process data least-significant bit first. The
//! engine models that by reversing each input byte before mixing it into the
//! register, and by reversing the whole register before reporting it.
//!
//! ```
//! use eclectic_crc::reflect::{reflect8, reflect16, reflect32};
//!
//! assert_eq!(reflect8(0b0000_0001), 0b1000_0000);
//! assert_eq!(reflect16(0x8005), 0xA001);
//! assert_eq!(reflect32(0x04C1_1DB7), 0xEDB8_8320);
//! ```

/// Reverses the bit order of an 8-bit value (bit 0 swaps with bit 7).
#[inline]
pub const fn reflect8(value: u8) -> u8 {
    value.reverse_bits()
}

/// Reverses the bit order of a 16-bit value (bit 0 swaps with bit 15).
#[inline]
pub const fn reflect16(value: u16) -> u16 {
    value.reverse_bits()
}

/// Reverses the bit order of a 32-bit value (bit 0 swaps with bit 31).
#[inline]
pub const fn reflect32(value: u32) -> u32 {
    value.reverse_bits()
}
