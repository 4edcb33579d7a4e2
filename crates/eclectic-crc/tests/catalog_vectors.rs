//! Catalog conformance against published CRC RevEng vectors.
//!
//! Every variant must reproduce its `check` value (the checksum of
//! `"123456789"`) in both bit-serial and table-driven mode.

use eclectic_crc::{
    Algorithm, AnyAlgorithm, CHECK_INPUT, Configuration, Crc8Algorithm, Crc16Algorithm,
    Crc32Algorithm, Register, TABLE_LEN,
};
use test_case::test_case;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

fn check_all<A: Algorithm>() {
    for &algorithm in A::ALL {
        let expected = algorithm.params().check;

        let bitwise = Configuration::new(algorithm);
        assert_eq!(
            bitwise.calculate(CHECK_INPUT),
            expected,
            "{algorithm} bit-serial"
        );

        let mut table = [<A::Register as Register>::ZERO; TABLE_LEN];
        let fast = Configuration::configure(algorithm, Some(&mut table[..]))
            .unwrap_or_else(|e| panic!("{algorithm}: {e}"));
        assert_eq!(fast.calculate(CHECK_INPUT), expected, "{algorithm} table");
        assert!(fast.self_check(), "{algorithm} self check");
    }
}

#[test]
fn crc8_catalog_self_check() {
    check_all::<Crc8Algorithm>();
}

#[test]
fn crc16_catalog_self_check() {
    check_all::<Crc16Algorithm>();
}

#[test]
fn crc32_catalog_self_check() {
    check_all::<Crc32Algorithm>();
}

#[test]
fn configure_by_index_covers_whole_catalog() {
    for index in 0..Crc16Algorithm::COUNT {
        let configuration = Configuration::configure_index::<Crc16Algorithm>(index, None)
            .expect("index inside catalog");
        assert!(configuration.self_check());
    }
    assert!(Configuration::configure_index::<Crc16Algorithm>(Crc16Algorithm::COUNT, None).is_err());
}

#[test]
fn catalog_checks_hold_for_any_width_listing() {
    let failures: Vec<_> = AnyAlgorithm::all()
        .filter(|algorithm| match *algorithm {
            AnyAlgorithm::Crc8(a) => !Configuration::new(a).self_check(),
            AnyAlgorithm::Crc16(a) => !Configuration::new(a).self_check(),
            AnyAlgorithm::Crc32(a) => !Configuration::new(a).self_check(),
        })
        .collect();
    assert!(failures.is_empty(), "failing variants: {failures:?}");
}

// Independent vectors beyond the catalogue's own check value.
#[test_case(Crc8Algorithm::Crc8, FOX, 0xC1)]
#[test_case(Crc8Algorithm::Maxim, FOX, 0x16)]
#[test_case(Crc8Algorithm::Rohc, &[0x01, 0x02, 0x03], 0xAC)]
#[test_case(Crc8Algorithm::Itu, &[], 0x55; "itu empty")]
fn crc8_vectors(algorithm: Crc8Algorithm, data: &[u8], expected: u8) {
    assert_eq!(Configuration::new(algorithm).calculate(data), expected);
}

#[test_case(Crc16Algorithm::Modbus, &[0x01, 0x02, 0x03], 0x6161)]
#[test_case(Crc16Algorithm::Xmodem, &[0x01, 0x02, 0x03], 0x6131)]
#[test_case(Crc16Algorithm::Arc, FOX, 0xFCDF)]
#[test_case(Crc16Algorithm::CcittFalse, FOX, 0x8FDD)]
#[test_case(Crc16Algorithm::Kermit, FOX, 0xC459)]
#[test_case(Crc16Algorithm::X25, &[], 0x0000; "x25 empty")]
#[test_case(Crc16Algorithm::Tms37157, &[], 0x3791; "tms37157 empty")]
fn crc16_vectors(algorithm: Crc16Algorithm, data: &[u8], expected: u16) {
    assert_eq!(Configuration::new(algorithm).calculate(data), expected);
}

#[test_case(Crc32Algorithm::Crc32, FOX, 0x414F_A339)]
#[test_case(Crc32Algorithm::Crc32, b"a", 0xE8B7_BE43)]
#[test_case(Crc32Algorithm::Crc32C, FOX, 0x2262_0404)]
#[test_case(Crc32Algorithm::Bzip2, FOX, 0x459D_EE61)]
#[test_case(Crc32Algorithm::Posix, &[], 0xFFFF_FFFF; "posix empty")]
#[test_case(Crc32Algorithm::Sata, &[], 0x5232_5032; "sata empty")]
fn crc32_vectors(algorithm: Crc32Algorithm, data: &[u8], expected: u32) {
    assert_eq!(Configuration::new(algorithm).calculate(data), expected);
}
