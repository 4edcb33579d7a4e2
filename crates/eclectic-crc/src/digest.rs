//! Incremental CRC over data delivered in chunks.
//!
//! [`Digest`] carries the running register and remembers whether the first
//! byte has gone in, so callers can feed chunks of any size (empty ones
//! included) without tracking the first/last flags of
//! [`Configuration::calculate_chunk`] themselves.
//!
//! ```
//! use eclectic_crc::{Configuration, Crc32Algorithm};
//!
//! let configuration = Configuration::new(Crc32Algorithm::Crc32C);
//!
//! let mut digest = configuration.digest();
//! digest.update(b"1234");
//! digest.update(b"");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xE306_9283);
//! ```

use std::io;

use crate::engine::Configuration;
use crate::register::Register;

/// Streaming CRC computation bound to one [`Configuration`].
#[derive(Debug, Clone)]
pub struct Digest<'c, 't, R: Register> {
    configuration: &'c Configuration<'t, R>,
    register: R,
    started: bool,
}

impl<'c, 't, R: Register> Digest<'c, 't, R> {
    pub fn new(configuration: &'c Configuration<'t, R>) -> Self {
        Self {
            configuration,
            register: configuration.params().initial,
            started: false,
        }
    }

    /// Feeds the next chunk of the message.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }

        self.register = self
            .configuration
            .calculate_chunk(self.register, data, !self.started, false);
        self.started = true;
    }

    /// Checksum of everything fed so far, without ending the computation.
    pub fn checksum(&self) -> R {
        self.configuration.finalize(self.register, self.started)
    }

    /// Finishes the computation and returns the checksum.
    ///
    /// Consumes the digest to prevent reuse after finalization.
    #[must_use]
    pub fn finalize(self) -> R {
        self.checksum()
    }

    /// Discards everything fed so far.
    pub fn reset(&mut self) {
        self.register = self.configuration.params().initial;
        self.started = false;
    }
}

impl<R: Register> io::Write for Digest<'_, '_, R> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
