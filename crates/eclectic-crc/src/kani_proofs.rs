//! Kani verification harnesses for the CRC engine
//!
//! Bounded model checking over the full input domain of the byte-level
//! primitives.
//!
//! # Running Proofs
//!
//! ```bash
//! cargo kani --package eclectic-crc
//! ```

#[cfg(kani)]
mod verification {
    use crate::reflect::{reflect8, reflect16, reflect32};
    use crate::{Configuration, Crc8Algorithm, Crc16Algorithm, TABLE_LEN};

    /// **Proof 1: reflect8 is an involution**
    #[kani::proof]
    fn verify_reflect8_involution() {
        let value: u8 = kani::any();
        assert_eq!(reflect8(reflect8(value)), value);
    }

    /// **Proof 2: reflect16 is an involution**
    #[kani::proof]
    fn verify_reflect16_involution() {
        let value: u16 = kani::any();
        assert_eq!(reflect16(reflect16(value)), value);
    }

    /// **Proof 3: reflect32 is an involution**
    #[kani::proof]
    fn verify_reflect32_involution() {
        let value: u32 = kani::any();
        assert_eq!(reflect32(reflect32(value)), value);
    }

    /// **Proof 4: reflection moves bit 0 to the top bit**
    #[kani::proof]
    fn verify_reflect16_swaps_extreme_bits() {
        let value: u16 = kani::any();
        assert_eq!(value & 1 == 1, reflect16(value) & 0x8000 == 0x8000);
    }

    /// **Proof 5: table and bit-serial agree on any single byte (reflected)**
    #[kani::proof]
    #[kani::unwind(257)]
    fn verify_single_byte_modes_agree_reflected() {
        let byte: u8 = kani::any();

        let bitwise = Configuration::new(Crc8Algorithm::Rohc);
        let mut table = [0u8; TABLE_LEN];
        let fast = Configuration::configure(Crc8Algorithm::Rohc, Some(&mut table[..]))
            .expect("table has 256 entries");

        assert_eq!(bitwise.calculate(&[byte]), fast.calculate(&[byte]));
    }

    /// **Proof 6: table and bit-serial agree on any single byte (MSB-first)**
    #[kani::proof]
    #[kani::unwind(257)]
    fn verify_single_byte_modes_agree_msb_first() {
        let byte: u8 = kani::any();

        let bitwise = Configuration::new(Crc16Algorithm::Xmodem);
        let mut table = [0u16; TABLE_LEN];
        let fast = Configuration::configure(Crc16Algorithm::Xmodem, Some(&mut table[..]))
            .expect("table has 256 entries");

        assert_eq!(bitwise.calculate(&[byte]), fast.calculate(&[byte]));
    }
}
