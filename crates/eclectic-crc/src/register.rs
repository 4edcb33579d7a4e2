//! Register widths the engine can run on.
//!
//! The engine is written once against [`Register`]; `u8`, `u16` and `u32`
//! implement it. Every shift amount the algorithm needs (`W - 8`, the top-bit
//! mask) is derived from [`Register::BITS`] here, so the engine itself never
//! branches on width.

use std::fmt::{Debug, Display, LowerHex, UpperHex};
use std::ops::{BitXor, BitXorAssign};

use crate::reflect::{reflect8, reflect16, reflect32};

/// Number of entries in a byte-indexed lookup table.
pub const TABLE_LEN: usize = 256;

/// An unsigned CRC register of a fixed width.
pub trait Register:
    Copy
    + Eq
    + Default
    + Debug
    + Display
    + LowerHex
    + UpperHex
    + BitXor<Output = Self>
    + BitXorAssign
    + Into<u32>
    + Send
    + Sync
    + 'static
{
    /// Register width in bits.
    const BITS: u32;

    /// Value returned by the nullable entry points when the configuration or
    /// the data is absent.
    const ERROR_CRC: Self;

    /// The all-zero register.
    const ZERO: Self;

    /// Reverses the bit order of the whole register.
    fn reflect(self) -> Self;

    /// Places `byte` in the most significant byte of the register.
    fn from_top_byte(byte: u8) -> Self;

    /// Returns the most significant byte of the register.
    fn top_byte(self) -> u8;

    /// Returns the least significant byte of the register.
    fn low_byte(self) -> u8;

    /// Shifts left by one byte; an 8-bit register becomes zero.
    fn shift_in_byte(self) -> Self;

    /// Shifts right by one byte; an 8-bit register becomes zero.
    fn shift_out_byte(self) -> Self;

    /// One round of polynomial division: shift left by one bit, XOR-ing in
    /// `polynomial` when the bit shifted out was set.
    fn divide_step(self, polynomial: Self) -> Self;

    /// Size of one register in bytes.
    fn byte_len() -> usize {
        (Self::BITS / 8) as usize
    }
}

macro_rules! impl_register {
    ($ty:ty, $reflect:ident) => {
        impl Register for $ty {
            const BITS: u32 = <$ty>::BITS;
            const ERROR_CRC: Self = 0;
            const ZERO: Self = 0;

            #[inline]
            fn reflect(self) -> Self {
                $reflect(self)
            }

            #[inline]
            fn from_top_byte(byte: u8) -> Self {
                <$ty>::from(byte) << (Self::BITS - 8)
            }

            #[inline]
            fn top_byte(self) -> u8 {
                (self >> (Self::BITS - 8)) as u8
            }

            #[inline]
            fn low_byte(self) -> u8 {
                self as u8
            }

            #[inline]
            fn shift_in_byte(self) -> Self {
                self.checked_shl(8).unwrap_or(0)
            }

            #[inline]
            fn shift_out_byte(self) -> Self {
                self.checked_shr(8).unwrap_or(0)
            }

            #[inline]
            fn divide_step(self, polynomial: Self) -> Self {
                let top_bit_set = self >> (Self::BITS - 1) == 1;
                if top_bit_set {
                    (self << 1) ^ polynomial
                } else {
                    self << 1
                }
            }
        }
    };
}

impl_register!(u8, reflect8);
impl_register!(u16, reflect16);
impl_register!(u32, reflect32);
