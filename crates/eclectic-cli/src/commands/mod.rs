//! CLI command implementations.

pub mod checksum;
pub mod config;
pub mod list;
pub mod table;
pub mod verify;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use eclectic_config::{EclecticConfig, OutputFormat};
use eclectic_crc::{Algorithm, AnyAlgorithm};

/// Loads `path` alone when given, otherwise merges the default locations.
pub fn load_config(path: Option<&Path>) -> Result<EclecticConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading explicit config file");
            EclecticConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))
        }
        None => EclecticConfig::load().context("Failed to load configuration"),
    }
}

/// Looks up a variant by catalogue name or alias.
pub fn parse_algorithm(name: &str) -> Result<AnyAlgorithm> {
    name.parse::<AnyAlgorithm>()
        .context("Run 'eclectic list' to see the supported variants")
}

/// An operation that needs the concrete identifier space of a variant.
pub trait WithAlgorithm {
    type Output;

    fn call<A: Algorithm>(self, algorithm: A) -> Self::Output;
}

/// Runs `operation` against the typed variant behind `algorithm`.
pub fn dispatch<W: WithAlgorithm>(algorithm: AnyAlgorithm, operation: W) -> W::Output {
    match algorithm {
        AnyAlgorithm::Crc8(algorithm) => operation.call(algorithm),
        AnyAlgorithm::Crc16(algorithm) => operation.call(algorithm),
        AnyAlgorithm::Crc32(algorithm) => operation.call(algorithm),
    }
}

/// Renders a register value of `width` bits.
///
/// Hex output is zero-padded to the register width.
pub fn format_value(value: u32, width: u32, format: OutputFormat, uppercase: bool) -> String {
    let digits = (width / 4) as usize;
    match (format, uppercase) {
        (OutputFormat::Hex, true) => format!("{value:0digits$X}"),
        (OutputFormat::Hex, false) => format!("{value:0digits$x}"),
        (OutputFormat::Decimal, _) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eclectic_crc::{Crc16Algorithm, Register};

    #[test]
    fn format_pads_to_width() {
        assert_eq!(format_value(0x0A, 8, OutputFormat::Hex, true), "0A");
        assert_eq!(format_value(0x6161, 16, OutputFormat::Hex, false), "6161");
        assert_eq!(format_value(0xBEEF, 32, OutputFormat::Hex, true), "0000BEEF");
        assert_eq!(format_value(0xCBF4_3926, 32, OutputFormat::Hex, false), "cbf43926");
        assert_eq!(format_value(0x6161, 16, OutputFormat::Decimal, true), "24929");
    }

    #[test]
    fn parse_accepts_loose_names() {
        assert_eq!(
            parse_algorithm("crc16_modbus").unwrap(),
            AnyAlgorithm::Crc16(Crc16Algorithm::Modbus)
        );
        assert!(parse_algorithm("CRC-64/XZ").is_err());
    }

    struct Width;

    impl WithAlgorithm for Width {
        type Output = u32;

        fn call<A: Algorithm>(self, _algorithm: A) -> u32 {
            <A::Register as Register>::BITS
        }
    }

    #[test]
    fn dispatch_reaches_matching_width() {
        for algorithm in AnyAlgorithm::all() {
            assert_eq!(dispatch(algorithm, Width), algorithm.width());
        }
    }
}
