//! Catalog of standard CRC variants.
//!
//! Every entry reproduces the parameters published in the
//! [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/),
//! including the `check` value: the checksum of the ASCII string
//! `"123456789"`. The catalog is split into one identifier space per register
//! width ([`Crc8Algorithm`], [`Crc16Algorithm`], [`Crc32Algorithm`]);
//! [`AnyAlgorithm`] spans all three for callers that select a variant by name.
//!
//! Names are matched case-insensitively with `-`, `_`, `/` and spaces ignored,
//! so `"crc-16/modbus"`, `"CRC16_MODBUS"` and `"Crc16Modbus"` are the same
//! variant. Common catalogue aliases (`"MODBUS"`, `"CRC-32/ISCSI"`, ...) are
//! accepted too.
//!
//! ```
//! use eclectic_crc::{Algorithm, Crc16Algorithm};
//!
//! let modbus: Crc16Algorithm = "crc-16/modbus".parse().unwrap();
//! assert_eq!(modbus, Crc16Algorithm::Modbus);
//! assert_eq!(modbus.params().polynomial, 0x8005);
//! assert_eq!(modbus.params().check, 0x4B37);
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::CrcError;
use crate::register::Register;

/// The defining parameters of one CRC variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Params<R> {
    /// Catalogue name, e.g. `"CRC-16/MODBUS"`.
    pub name: &'static str,
    /// Generator polynomial, top bit implicit.
    pub polynomial: R,
    /// Register value before the first byte.
    pub initial: R,
    /// Process input bytes and the final register least-significant bit first.
    pub reflect: bool,
    /// Mask XOR-ed into the final register.
    pub xor_out: R,
    /// Checksum of `"123456789"`.
    pub check: R,
}

impl<R: Register> Params<R> {
    /// Register width in bits.
    pub fn width(&self) -> u32 {
        R::BITS
    }

    /// Widens every register-sized field to `u32`.
    pub fn widen(self) -> Params<u32> {
        Params {
            name: self.name,
            polynomial: self.polynomial.into(),
            initial: self.initial.into(),
            reflect: self.reflect,
            xor_out: self.xor_out.into(),
            check: self.check.into(),
        }
    }
}

/// One identifier space of the catalog.
///
/// Implemented by [`Crc8Algorithm`], [`Crc16Algorithm`] and
/// [`Crc32Algorithm`]; the engine is generic over it.
pub trait Algorithm:
    Copy
    + Eq
    + fmt::Debug
    + Display
    + FromStr<Err = CrcError>
    + TryFrom<usize, Error = CrcError>
    + Send
    + Sync
    + 'static
{
    /// Register type of every variant in this space.
    type Register: Register;

    /// Number of variants. Also the first index `TryFrom<usize>` rejects.
    const COUNT: usize;

    /// Every variant, in index order.
    const ALL: &'static [Self];

    /// Parameter record for this variant.
    fn params(self) -> Params<Self::Register>;

    /// Position of this variant in [`Algorithm::ALL`].
    fn index(self) -> usize;

    /// Catalogue name.
    fn name(self) -> &'static str {
        self.params().name
    }

    /// Alternative catalogue names accepted by `FromStr`.
    fn aliases(self) -> &'static [&'static str];
}

/// Compares two algorithm names, ignoring case and the `-`, `_`, `/` and
/// space separators.
pub(crate) fn names_match(left: &str, right: &str) -> bool {
    fn significant(name: &str) -> impl Iterator<Item = char> + '_ {
        name.chars()
            .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
            .map(|c| c.to_ascii_uppercase())
    }

    significant(left).eq(significant(right))
}

macro_rules! catalog {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $register:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => {
                    name: $label:literal,
                    $(aliases: [$($alias:literal),* $(,)?],)?
                    polynomial: $polynomial:literal,
                    initial: $initial:literal,
                    reflect: $reflect:literal,
                    xor_out: $xor_out:literal,
                    check: $check:literal $(,)?
                },
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Algorithm for $name {
            type Register = $register;

            const COUNT: usize = Self::ALL.len();

            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn params(self) -> Params<$register> {
                match self {
                    $(
                        Self::$variant => Params {
                            name: $label,
                            polynomial: $polynomial,
                            initial: $initial,
                            reflect: $reflect,
                            xor_out: $xor_out,
                            check: $check,
                        },
                    )+
                }
            }

            fn index(self) -> usize {
                self as usize
            }

            fn aliases(self) -> &'static [&'static str] {
                match self {
                    $(
                        Self::$variant => &[$($($alias),*)?],
                    )+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl TryFrom<usize> for $name {
            type Error = CrcError;

            fn try_from(index: usize) -> Result<Self, CrcError> {
                Self::ALL
                    .get(index)
                    .copied()
                    .ok_or(CrcError::InvalidIndex {
                        width: <$register as Register>::BITS,
                        index,
                        count: Self::COUNT,
                    })
            }
        }

        impl FromStr for $name {
            type Err = CrcError;

            fn from_str(name: &str) -> Result<Self, CrcError> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|algorithm| {
                        names_match(algorithm.name(), name)
                            || algorithm.aliases().iter().any(|alias| names_match(alias, name))
                    })
                    .ok_or_else(|| CrcError::UnknownName {
                        name: name.to_string(),
                    })
            }
        }
    };
}

catalog! {
    /// 8-bit CRC variants.
    pub enum Crc8Algorithm: u8 {
        Crc8 => {
            name: "CRC-8",
            aliases: ["CRC-8/SMBUS"],
            polynomial: 0x07,
            initial: 0x00,
            reflect: false,
            xor_out: 0x00,
            check: 0xF4,
        },
        Cdma2000 => {
            name: "CRC-8/CDMA2000",
            polynomial: 0x9B,
            initial: 0xFF,
            reflect: false,
            xor_out: 0x00,
            check: 0xDA,
        },
        Darc => {
            name: "CRC-8/DARC",
            polynomial: 0x39,
            initial: 0x00,
            reflect: true,
            xor_out: 0x00,
            check: 0x15,
        },
        DvbS2 => {
            name: "CRC-8/DVB-S2",
            polynomial: 0xD5,
            initial: 0x00,
            reflect: false,
            xor_out: 0x00,
            check: 0xBC,
        },
        Ebu => {
            name: "CRC-8/EBU",
            aliases: ["CRC-8/AES", "CRC-8/TECH-3250"],
            polynomial: 0x1D,
            initial: 0xFF,
            reflect: true,
            xor_out: 0x00,
            check: 0x97,
        },
        ICode => {
            name: "CRC-8/I-CODE",
            polynomial: 0x1D,
            initial: 0xFD,
            reflect: false,
            xor_out: 0x00,
            check: 0x7E,
        },
        Itu => {
            name: "CRC-8/ITU",
            aliases: ["CRC-8/I-432-1"],
            polynomial: 0x07,
            initial: 0x00,
            reflect: false,
            xor_out: 0x55,
            check: 0xA1,
        },
        Maxim => {
            name: "CRC-8/MAXIM",
            aliases: ["CRC-8/MAXIM-DOW", "DOW-CRC"],
            polynomial: 0x31,
            initial: 0x00,
            reflect: true,
            xor_out: 0x00,
            check: 0xA1,
        },
        Rohc => {
            name: "CRC-8/ROHC",
            polynomial: 0x07,
            initial: 0xFF,
            reflect: true,
            xor_out: 0x00,
            check: 0xD0,
        },
        Wcdma => {
            name: "CRC-8/WCDMA",
            polynomial: 0x9B,
            initial: 0x00,
            reflect: true,
            xor_out: 0x00,
            check: 0x25,
        },
    }
}

catalog! {
    /// 16-bit CRC variants.
    pub enum Crc16Algorithm: u16 {
        Arc => {
            name: "CRC-16/ARC",
            aliases: ["CRC-16", "CRC-16/LHA", "CRC-IBM"],
            polynomial: 0x8005,
            initial: 0x0000,
            reflect: true,
            xor_out: 0x0000,
            check: 0xBB3D,
        },
        AugCcitt => {
            name: "CRC-16/AUG-CCITT",
            aliases: ["CRC-16/SPI-FUJITSU"],
            polynomial: 0x1021,
            initial: 0x1D0F,
            reflect: false,
            xor_out: 0x0000,
            check: 0xE5CC,
        },
        Buypass => {
            name: "CRC-16/BUYPASS",
            aliases: ["CRC-16/UMTS", "CRC-16/VERIFONE"],
            polynomial: 0x8005,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0000,
            check: 0xFEE8,
        },
        CcittFalse => {
            name: "CRC-16/CCITT-FALSE",
            aliases: ["CRC-16/IBM-3740", "CRC-16/AUTOSAR"],
            polynomial: 0x1021,
            initial: 0xFFFF,
            reflect: false,
            xor_out: 0x0000,
            check: 0x29B1,
        },
        Cdma2000 => {
            name: "CRC-16/CDMA2000",
            polynomial: 0xC867,
            initial: 0xFFFF,
            reflect: false,
            xor_out: 0x0000,
            check: 0x4C06,
        },
        Dds110 => {
            name: "CRC-16/DDS-110",
            polynomial: 0x8005,
            initial: 0x800D,
            reflect: false,
            xor_out: 0x0000,
            check: 0x9ECF,
        },
        DectR => {
            name: "CRC-16/DECT-R",
            aliases: ["R-CRC-16"],
            polynomial: 0x0589,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0001,
            check: 0x007E,
        },
        DectX => {
            name: "CRC-16/DECT-X",
            aliases: ["X-CRC-16"],
            polynomial: 0x0589,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0000,
            check: 0x007F,
        },
        Dnp => {
            name: "CRC-16/DNP",
            polynomial: 0x3D65,
            initial: 0x0000,
            reflect: true,
            xor_out: 0xFFFF,
            check: 0xEA82,
        },
        En13757 => {
            name: "CRC-16/EN-13757",
            polynomial: 0x3D65,
            initial: 0x0000,
            reflect: false,
            xor_out: 0xFFFF,
            check: 0xC2B7,
        },
        Genibus => {
            name: "CRC-16/GENIBUS",
            aliases: ["CRC-16/DARC", "CRC-16/EPC", "CRC-16/EPC-C1G2", "CRC-16/I-CODE"],
            polynomial: 0x1021,
            initial: 0xFFFF,
            reflect: false,
            xor_out: 0xFFFF,
            check: 0xD64E,
        },
        Kermit => {
            name: "CRC-16/KERMIT",
            aliases: ["CRC-16/CCITT", "CRC-16/CCITT-TRUE", "CRC-16/V-41-LSB", "CRC-CCITT", "KERMIT"],
            polynomial: 0x1021,
            initial: 0x0000,
            reflect: true,
            xor_out: 0x0000,
            check: 0x2189,
        },
        Maxim => {
            name: "CRC-16/MAXIM",
            aliases: ["CRC-16/MAXIM-DOW"],
            polynomial: 0x8005,
            initial: 0x0000,
            reflect: true,
            xor_out: 0xFFFF,
            check: 0x44C2,
        },
        Mcrf4xx => {
            name: "CRC-16/MCRF4XX",
            polynomial: 0x1021,
            initial: 0xFFFF,
            reflect: true,
            xor_out: 0x0000,
            check: 0x6F91,
        },
        Modbus => {
            name: "CRC-16/MODBUS",
            aliases: ["MODBUS"],
            polynomial: 0x8005,
            initial: 0xFFFF,
            reflect: true,
            xor_out: 0x0000,
            check: 0x4B37,
        },
        Riello => {
            name: "CRC-16/RIELLO",
            polynomial: 0x1021,
            initial: 0xB2AA,
            reflect: true,
            xor_out: 0x0000,
            check: 0x63D0,
        },
        T10Dif => {
            name: "CRC-16/T10-DIF",
            polynomial: 0x8BB7,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0000,
            check: 0xD0DB,
        },
        Teledisk => {
            name: "CRC-16/TELEDISK",
            polynomial: 0xA097,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0000,
            check: 0x0FB3,
        },
        Tms37157 => {
            name: "CRC-16/TMS37157",
            polynomial: 0x1021,
            initial: 0x89EC,
            reflect: true,
            xor_out: 0x0000,
            check: 0x26B1,
        },
        Usb => {
            name: "CRC-16/USB",
            polynomial: 0x8005,
            initial: 0xFFFF,
            reflect: true,
            xor_out: 0xFFFF,
            check: 0xB4C8,
        },
        X25 => {
            name: "CRC-16/X-25",
            aliases: ["CRC-16/IBM-SDLC", "CRC-16/ISO-HDLC", "CRC-16/ISO-IEC-14443-3-B", "CRC-B", "X-25"],
            polynomial: 0x1021,
            initial: 0xFFFF,
            reflect: true,
            xor_out: 0xFFFF,
            check: 0x906E,
        },
        Xmodem => {
            name: "CRC-16/XMODEM",
            aliases: ["CRC-16/ACORN", "CRC-16/LTE", "CRC-16/V-41-MSB", "XMODEM", "ZMODEM"],
            polynomial: 0x1021,
            initial: 0x0000,
            reflect: false,
            xor_out: 0x0000,
            check: 0x31C3,
        },
        CrcA => {
            name: "CRC-A",
            aliases: ["CRC-16/ISO-IEC-14443-3-A"],
            polynomial: 0x1021,
            initial: 0xC6C6,
            reflect: true,
            xor_out: 0x0000,
            check: 0xBF05,
        },
    }
}

catalog! {
    /// 32-bit CRC variants.
    pub enum Crc32Algorithm: u32 {
        Crc32 => {
            name: "CRC-32",
            aliases: ["CRC-32/ISO-HDLC", "CRC-32/ADCCP", "CRC-32/V-42", "CRC-32/XZ", "PKZIP"],
            polynomial: 0x04C1_1DB7,
            initial: 0xFFFF_FFFF,
            reflect: true,
            xor_out: 0xFFFF_FFFF,
            check: 0xCBF4_3926,
        },
        Bzip2 => {
            name: "CRC-32/BZIP2",
            aliases: ["CRC-32/AAL5", "CRC-32/DECT-B", "B-CRC-32"],
            polynomial: 0x04C1_1DB7,
            initial: 0xFFFF_FFFF,
            reflect: false,
            xor_out: 0xFFFF_FFFF,
            check: 0xFC89_1918,
        },
        Jamcrc => {
            name: "CRC-32/JAMCRC",
            aliases: ["JAMCRC"],
            polynomial: 0x04C1_1DB7,
            initial: 0xFFFF_FFFF,
            reflect: true,
            xor_out: 0x0000_0000,
            check: 0x340B_C6D9,
        },
        Mpeg2 => {
            name: "CRC-32/MPEG-2",
            polynomial: 0x04C1_1DB7,
            initial: 0xFFFF_FFFF,
            reflect: false,
            xor_out: 0x0000_0000,
            check: 0x0376_E6E7,
        },
        Posix => {
            name: "CRC-32/POSIX",
            aliases: ["CKSUM"],
            polynomial: 0x04C1_1DB7,
            initial: 0x0000_0000,
            reflect: false,
            xor_out: 0xFFFF_FFFF,
            check: 0x765E_7680,
        },
        Sata => {
            name: "CRC-32/SATA",
            polynomial: 0x04C1_1DB7,
            initial: 0x5232_5032,
            reflect: false,
            xor_out: 0x0000_0000,
            check: 0xCF72_AFE8,
        },
        Xfer => {
            name: "CRC-32/XFER",
            polynomial: 0x0000_00AF,
            initial: 0x0000_0000,
            reflect: false,
            xor_out: 0x0000_0000,
            check: 0xBD0B_E338,
        },
        Crc32C => {
            name: "CRC-32C",
            aliases: ["CRC-32/ISCSI", "CRC-32/BASE91-C", "CRC-32/CASTAGNOLI", "CRC-32/INTERLAKEN"],
            polynomial: 0x1EDC_6F41,
            initial: 0xFFFF_FFFF,
            reflect: true,
            xor_out: 0xFFFF_FFFF,
            check: 0xE306_9283,
        },
        Crc32D => {
            name: "CRC-32D",
            aliases: ["CRC-32/BASE91-D"],
            polynomial: 0xA833_982B,
            initial: 0xFFFF_FFFF,
            reflect: true,
            xor_out: 0xFFFF_FFFF,
            check: 0x8731_5576,
        },
        Crc32Q => {
            name: "CRC-32Q",
            aliases: ["CRC-32/AIXM"],
            polynomial: 0x8141_41AB,
            initial: 0x0000_0000,
            reflect: false,
            xor_out: 0x0000_0000,
            check: 0x3010_BF7F,
        },
    }
}

/// A catalog variant of any width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnyAlgorithm {
    Crc8(Crc8Algorithm),
    Crc16(Crc16Algorithm),
    Crc32(Crc32Algorithm),
}

impl AnyAlgorithm {
    /// Every variant of every width, 8-bit first.
    pub fn all() -> impl Iterator<Item = Self> {
        Crc8Algorithm::ALL
            .iter()
            .copied()
            .map(Self::Crc8)
            .chain(Crc16Algorithm::ALL.iter().copied().map(Self::Crc16))
            .chain(Crc32Algorithm::ALL.iter().copied().map(Self::Crc32))
    }

    /// Register width in bits.
    pub fn width(self) -> u32 {
        match self {
            Self::Crc8(_) => u8::BITS,
            Self::Crc16(_) => u16::BITS,
            Self::Crc32(_) => u32::BITS,
        }
    }

    /// Catalogue name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Crc8(algorithm) => algorithm.name(),
            Self::Crc16(algorithm) => algorithm.name(),
            Self::Crc32(algorithm) => algorithm.name(),
        }
    }

    /// Parameter record with every field widened to `u32`.
    pub fn params(self) -> Params<u32> {
        match self {
            Self::Crc8(algorithm) => algorithm.params().widen(),
            Self::Crc16(algorithm) => algorithm.params().widen(),
            Self::Crc32(algorithm) => algorithm.params().widen(),
        }
    }

    /// Alternative catalogue names.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Crc8(algorithm) => algorithm.aliases(),
            Self::Crc16(algorithm) => algorithm.aliases(),
            Self::Crc32(algorithm) => algorithm.aliases(),
        }
    }
}

impl Display for AnyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnyAlgorithm {
    type Err = CrcError;

    fn from_str(name: &str) -> Result<Self, CrcError> {
        Crc8Algorithm::from_str(name)
            .map(Self::Crc8)
            .or_else(|_| Crc16Algorithm::from_str(name).map(Self::Crc16))
            .or_else(|_| Crc32Algorithm::from_str(name).map(Self::Crc32))
    }
}

impl From<Crc8Algorithm> for AnyAlgorithm {
    fn from(algorithm: Crc8Algorithm) -> Self {
        Self::Crc8(algorithm)
    }
}

impl From<Crc16Algorithm> for AnyAlgorithm {
    fn from(algorithm: Crc16Algorithm) -> Self {
        Self::Crc16(algorithm)
    }
}

impl From<Crc32Algorithm> for AnyAlgorithm {
    fn from(algorithm: Crc32Algorithm) -> Self {
        Self::Crc32(algorithm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use test_case::test_case;

    fn normalized(name: &str) -> String {
        name.chars()
            .filter(|c| !matches!(c, '-' | '_' | '/' | ' '))
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    #[test]
    fn catalog_sizes() {
        assert_eq!(Crc8Algorithm::COUNT, 10);
        assert_eq!(Crc16Algorithm::COUNT, 23);
        assert_eq!(Crc32Algorithm::COUNT, 10);
        assert_eq!(AnyAlgorithm::all().count(), 43);
    }

    #[test]
    fn indices_follow_declaration_order() {
        for (position, algorithm) in Crc16Algorithm::ALL.iter().enumerate() {
            assert_eq!(algorithm.index(), position);
            assert_eq!(Crc16Algorithm::try_from(position), Ok(*algorithm));
        }
    }

    #[test]
    fn count_sentinel_is_rejected() {
        let err = Crc8Algorithm::try_from(Crc8Algorithm::COUNT).unwrap_err();
        assert_eq!(
            err,
            CrcError::InvalidIndex {
                width: 8,
                index: 10,
                count: 10
            }
        );

        assert!(Crc16Algorithm::try_from(Crc16Algorithm::COUNT).is_err());
        assert!(Crc32Algorithm::try_from(Crc32Algorithm::COUNT).is_err());
        assert!(Crc32Algorithm::try_from(usize::MAX).is_err());
    }

    #[test]
    fn every_name_and_alias_is_unique_across_widths() {
        let mut seen = HashSet::new();
        for algorithm in AnyAlgorithm::all() {
            for name in std::iter::once(algorithm.name()).chain(algorithm.aliases().iter().copied()) {
                assert!(seen.insert(normalized(name)), "duplicate name {name}");
            }
        }
    }

    #[test]
    fn every_name_and_alias_parses_back() {
        for algorithm in AnyAlgorithm::all() {
            assert_eq!(algorithm.name().parse::<AnyAlgorithm>(), Ok(algorithm));
            for alias in algorithm.aliases() {
                assert_eq!(alias.parse::<AnyAlgorithm>(), Ok(algorithm));
            }
        }
    }

    #[test_case("CRC-16/MODBUS", AnyAlgorithm::Crc16(Crc16Algorithm::Modbus))]
    #[test_case("crc16_modbus", AnyAlgorithm::Crc16(Crc16Algorithm::Modbus))]
    #[test_case("modbus", AnyAlgorithm::Crc16(Crc16Algorithm::Modbus))]
    #[test_case("crc-32c", AnyAlgorithm::Crc32(Crc32Algorithm::Crc32C))]
    #[test_case("CRC-32/ISCSI", AnyAlgorithm::Crc32(Crc32Algorithm::Crc32C))]
    #[test_case("crc32", AnyAlgorithm::Crc32(Crc32Algorithm::Crc32))]
    #[test_case("CRC-8", AnyAlgorithm::Crc8(Crc8Algorithm::Crc8))]
    #[test_case("Crc8 Rohc", AnyAlgorithm::Crc8(Crc8Algorithm::Rohc))]
    #[test_case("x-25", AnyAlgorithm::Crc16(Crc16Algorithm::X25))]
    fn parses_loose_names(input: &str, expected: AnyAlgorithm) {
        assert_eq!(input.parse::<AnyAlgorithm>(), Ok(expected));
    }

    #[test]
    fn unknown_names_are_invalid() {
        let err = "CRC-64/XZ".parse::<AnyAlgorithm>().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Invalid);

        // Width-specific parsers only know their own space.
        assert!("CRC-16/MODBUS".parse::<Crc8Algorithm>().is_err());
        assert!("".parse::<Crc32Algorithm>().is_err());
    }

    #[test]
    fn sample_entries_match_reveng() {
        let rohc = Crc8Algorithm::Rohc.params();
        assert_eq!(
            (rohc.polynomial, rohc.initial, rohc.reflect, rohc.xor_out, rohc.check),
            (0x07, 0xFF, true, 0x00, 0xD0)
        );

        let xmodem = Crc16Algorithm::Xmodem.params();
        assert_eq!(
            (xmodem.polynomial, xmodem.initial, xmodem.reflect, xmodem.xor_out, xmodem.check),
            (0x1021, 0x0000, false, 0x0000, 0x31C3)
        );

        let castagnoli = Crc32Algorithm::Crc32C.params();
        assert_eq!(castagnoli.polynomial, 0x1EDC_6F41);
        assert_eq!(castagnoli.check, 0xE306_9283);
    }

    #[test]
    fn widened_params_keep_values() {
        let params = AnyAlgorithm::Crc16(Crc16Algorithm::DectR).params();
        assert_eq!(params.name, "CRC-16/DECT-R");
        assert_eq!(params.polynomial, 0x0589);
        assert_eq!(params.xor_out, 0x0001);
        assert_eq!(AnyAlgorithm::Crc16(Crc16Algorithm::DectR).width(), 16);
    }

    #[test]
    fn display_uses_catalogue_name() {
        assert_eq!(Crc32Algorithm::Posix.to_string(), "CRC-32/POSIX");
        assert_eq!(AnyAlgorithm::from(Crc8Algorithm::Maxim).to_string(), "CRC-8/MAXIM");
    }
}
