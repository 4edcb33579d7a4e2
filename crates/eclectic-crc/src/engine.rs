//! The CRC calculation engine.
//!
//! One implementation serves every register width. A [`Configuration`] holds
//! the parameters of a variant and, optionally, a borrowed 256-entry lookup
//! table that the caller allocates and [`Configuration::configure`] fills.
//! Without a table the engine divides bit by bit; with one it consumes a byte
//! per lookup. Both paths produce identical checksums.
//!
//! ## Usage
//!
//! ```
//! use eclectic_crc::{Configuration, Crc16Algorithm, TABLE_LEN};
//!
//! // Bit-serial
//! let bitwise = Configuration::new(Crc16Algorithm::Modbus);
//! assert_eq!(bitwise.calculate(b"123456789"), 0x4B37);
//!
//! // Table-driven, with caller-owned table memory
//! let mut table = [0u16; TABLE_LEN];
//! let fast = Configuration::configure(Crc16Algorithm::Modbus, Some(&mut table[..])).unwrap();
//! assert_eq!(fast.calculate(b"123456789"), 0x4B37);
//!
//! // Streaming, one byte at a time
//! let data = [0x01, 0x02, 0x03];
//! let mut register = fast.params().initial;
//! for (i, &byte) in data.iter().enumerate() {
//!     register = fast.calculate_partial(register, byte, i == 0, i == data.len() - 1);
//! }
//! assert_eq!(register, 0x6161);
//! ```
//!
//! ## Register orientation
//!
//! The bit-serial path keeps the register most-significant-bit first for the
//! whole computation and reflects it during finalization. The table path for
//! reflected variants reflects the register once, on the first byte, and
//! stays reflected. A running register is therefore only meaningful to the
//! configuration (and mode) that produced it.

use crate::catalog::{Algorithm, Params};
use crate::digest::Digest;
use crate::error::CrcError;
use crate::reflect::reflect8;
use crate::register::{Register, TABLE_LEN};

/// Input whose checksum every catalog entry publishes as `check`.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A configured CRC variant, optionally table-accelerated.
///
/// The table is borrowed, never owned: `'t` ties the configuration to the
/// caller's table memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Configuration<'t, R: Register> {
    params: Params<R>,
    table: Option<&'t [R]>,
}

/// 8-bit engine.
pub type Crc8Configuration<'t> = Configuration<'t, u8>;
/// 16-bit engine.
pub type Crc16Configuration<'t> = Configuration<'t, u16>;
/// 32-bit engine.
pub type Crc32Configuration<'t> = Configuration<'t, u32>;

impl<R: Register> Configuration<'static, R> {
    /// Bit-serial configuration for a catalog variant.
    pub fn new<A: Algorithm<Register = R>>(algorithm: A) -> Self {
        Self {
            params: algorithm.params(),
            table: None,
        }
    }
}

impl<'t, R: Register> Configuration<'t, R> {
    /// Configures a catalog variant.
    ///
    /// With `table`, all 256 entries are generated before returning and every
    /// later calculation goes through the table. The buffer must hold exactly
    /// [`TABLE_LEN`] entries; otherwise this fails with
    /// [`CrcError::LengthMismatch`] and the buffer is left untouched.
    pub fn configure<A: Algorithm<Register = R>>(
        algorithm: A,
        table: Option<&'t mut [R]>,
    ) -> Result<Self, CrcError> {
        Self::from_params(algorithm.params(), table)
    }

    /// Configures the variant at position `index` of `A`'s catalog.
    ///
    /// Fails with [`CrcError::InvalidIndex`] for `index >= A::COUNT`.
    pub fn configure_index<A: Algorithm<Register = R>>(
        index: usize,
        table: Option<&'t mut [R]>,
    ) -> Result<Self, CrcError> {
        let algorithm = A::try_from(index)?;
        Self::configure(algorithm, table)
    }

    /// Configures a caller-defined variant.
    pub fn from_params(params: Params<R>, table: Option<&'t mut [R]>) -> Result<Self, CrcError> {
        let mut configuration = Self {
            params,
            table: None,
        };

        if let Some(table) = table {
            if table.len() != TABLE_LEN {
                return Err(CrcError::LengthMismatch {
                    expected: TABLE_LEN * R::byte_len(),
                    actual: table.len() * R::byte_len(),
                });
            }

            configuration.fill_table(table);
            configuration.table = Some(table);
        }

        Ok(configuration)
    }

    /// Parameters of the configured variant.
    pub fn params(&self) -> &Params<R> {
        &self.params
    }

    /// The lookup table, if the configuration is table-driven.
    pub fn table(&self) -> Option<&'t [R]> {
        self.table
    }

    pub fn is_table_driven(&self) -> bool {
        self.table.is_some()
    }

    /// Computes the checksum of `data` in one shot.
    ///
    /// Empty input yields the finalized initial value.
    pub fn calculate(&self, data: &[u8]) -> R {
        self.calculate_chunk(self.params.initial, data, true, true)
    }

    /// Feeds a single byte into `register`.
    ///
    /// `is_first` must be set for the first byte of a message (the register
    /// then holds `initial`), `is_last` for its final byte, after which the
    /// returned value is the checksum.
    pub fn calculate_partial(&self, register: R, byte: u8, is_first: bool, is_last: bool) -> R {
        let register = match self.table {
            Some(table) => self.table_step(table, register, byte, is_first),
            None => self.bitwise_step(register, byte),
        };

        if is_last {
            self.finalize(register, true)
        } else {
            register
        }
    }

    /// Feeds a contiguous chunk of a message into `register`.
    ///
    /// `is_first` and `is_last` describe the chunk's position in the message
    /// and are applied to its first and last byte respectively. An empty chunk
    /// with `is_last` finalizes the register; an empty chunk without it returns
    /// the register unchanged, so a message that opens with an empty chunk must
    /// mark its next chunk `is_first` again. [`Digest`] tracks this for you.
    pub fn calculate_chunk(&self, register: R, chunk: &[u8], is_first: bool, is_last: bool) -> R {
        let Some(final_index) = chunk.len().checked_sub(1) else {
            return if is_last {
                self.finalize(register, !is_first)
            } else {
                register
            };
        };

        chunk
            .iter()
            .enumerate()
            .fold(register, |register, (index, &byte)| {
                self.calculate_partial(
                    register,
                    byte,
                    is_first && index == 0,
                    is_last && index == final_index,
                )
            })
    }

    /// Starts a streaming computation.
    pub fn digest(&self) -> Digest<'_, 't, R> {
        Digest::new(self)
    }

    /// Checks the configuration against its published `check` value.
    pub fn self_check(&self) -> bool {
        self.calculate(CHECK_INPUT) == self.params.check
    }

    /// Applies the final reflection and `xor_out` mask.
    ///
    /// `started` says whether any byte has gone through the register; in
    /// table mode a reflected variant's register is only reflected once the
    /// first byte is in.
    pub(crate) fn finalize(&self, register: R, started: bool) -> R {
        let needs_reflect = self.params.reflect && (self.table.is_none() || !started);
        let register = if needs_reflect {
            register.reflect()
        } else {
            register
        };
        register ^ self.params.xor_out
    }

    fn bitwise_step(&self, register: R, byte: u8) -> R {
        let input = if self.params.reflect {
            reflect8(byte)
        } else {
            byte
        };

        let mut register = register ^ R::from_top_byte(input);
        for _ in 0..8 {
            register = register.divide_step(self.params.polynomial);
        }
        register
    }

    fn table_step(&self, table: &[R], register: R, byte: u8, is_first: bool) -> R {
        if self.params.reflect {
            let register = if is_first {
                register.reflect()
            } else {
                register
            };
            let index = usize::from(register.low_byte() ^ byte);
            register.shift_out_byte() ^ table[index]
        } else {
            let index = usize::from(register.top_byte() ^ byte);
            register.shift_in_byte() ^ table[index]
        }
    }

    /// Generates every table entry through the bit-serial path.
    ///
    /// Must run while `self.table` is still `None`.
    fn fill_table(&self, table: &mut [R]) {
        debug_assert!(self.table.is_none());

        for (value, entry) in (0..=u8::MAX).zip(table.iter_mut()) {
            // A single-byte message is finalized, which XORs `xor_out` in;
            // XOR it back out so each entry is the bare remainder.
            *entry = self.calculate_partial(R::ZERO, value, true, true) ^ self.params.xor_out;
        }
    }
}

/// Computes a checksum from nullable inputs.
///
/// Returns [`Register::ERROR_CRC`] when either the configuration or the data
/// is absent.
pub fn calculate<R: Register>(configuration: Option<&Configuration<'_, R>>, data: Option<&[u8]>) -> R {
    match (configuration, data) {
        (Some(configuration), Some(data)) => configuration.calculate(data),
        _ => R::ERROR_CRC,
    }
}

/// Single-byte step from a nullable configuration.
///
/// Returns [`Register::ERROR_CRC`] when the configuration is absent.
pub fn calculate_partial<R: Register>(
    configuration: Option<&Configuration<'_, R>>,
    register: R,
    byte: u8,
    is_first: bool,
    is_last: bool,
) -> R {
    configuration.map_or(R::ERROR_CRC, |configuration| {
        configuration.calculate_partial(register, byte, is_first, is_last)
    })
}
