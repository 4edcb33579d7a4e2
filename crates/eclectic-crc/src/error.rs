//! CRC error types.

use thiserror::Error;

/// Errors from catalog lookup and engine configuration.
///
/// The calculation entry points never return this: a CRC over valid inputs
/// cannot fail, and absent inputs degrade to [`Register::ERROR_CRC`].
///
/// [`Register::ERROR_CRC`]: crate::Register::ERROR_CRC
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrcError {
    /// Numeric algorithm identifier outside the catalog.
    #[error("invalid {width}-bit CRC algorithm index {index} (catalog holds {count})")]
    InvalidIndex {
        width: u32,
        index: usize,
        count: usize,
    },

    /// Algorithm name that matches no catalog entry.
    #[error("unknown CRC algorithm: {name}")]
    UnknownName { name: String },

    /// Lookup table buffer of the wrong size.
    #[error("lookup table is {actual} bytes, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Coarse classification of a [`CrcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The algorithm identifier is not recognized.
    Invalid,
    /// A caller-supplied buffer has the wrong length.
    LengthMismatch,
}

impl CrcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidIndex { .. } | Self::UnknownName { .. } => ErrorKind::Invalid,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
        }
    }
}
