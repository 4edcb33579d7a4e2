//! # eclectic-crc: Rocksoft-model CRC engine
//!
//! A single CRC engine, generic over the register width, covering the 8-, 16-
//! and 32-bit variants of the CRC RevEng catalogue:
//! - Bit reflection ([`reflect`])
//! - Variant catalog ([`Crc8Algorithm`], [`Crc16Algorithm`], [`Crc32Algorithm`], [`AnyAlgorithm`])
//! - Engine ([`Configuration`]) with bit-serial and table-driven modes
//! - Streaming ([`Digest`])
//!
//! The engine never allocates. Lookup tables are caller-owned buffers of
//! [`TABLE_LEN`] registers that [`Configuration::configure`] fills in place.
//!
//! ```
//! use eclectic_crc::{Algorithm, Configuration, Crc8Algorithm, TABLE_LEN};
//!
//! let mut table = [0u8; TABLE_LEN];
//! let configuration = Configuration::configure(Crc8Algorithm::Maxim, Some(&mut table[..]))?;
//!
//! assert_eq!(configuration.calculate(b"123456789"), Crc8Algorithm::Maxim.params().check);
//! # Ok::<(), eclectic_crc::CrcError>(())
//! ```

mod catalog;
mod digest;
pub mod engine;
mod error;
mod kani_proofs;
pub mod reflect;
mod register;

pub use catalog::{Algorithm, AnyAlgorithm, Crc8Algorithm, Crc16Algorithm, Crc32Algorithm, Params};
pub use digest::Digest;
pub use engine::{
    CHECK_INPUT, Configuration, Crc8Configuration, Crc16Configuration, Crc32Configuration,
};
pub use error::{CrcError, ErrorKind};
pub use register::{Register, TABLE_LEN};
