#![no_main]

use arbitrary::Arbitrary;
use eclectic_crc::{
    Algorithm, Configuration, Crc8Algorithm, Crc16Algorithm, Crc32Algorithm, Register, TABLE_LEN,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    variant: u8,
    /// Chunk lengths; the remainder of `data` becomes the final chunk.
    splits: Vec<u8>,
    data: Vec<u8>,
}

fn check<A: Algorithm>(algorithm: A, input: &Input) {
    let mut table = [<A::Register as Register>::ZERO; TABLE_LEN];
    let bitwise = Configuration::new(algorithm);
    let Ok(table_driven) = Configuration::configure(algorithm, Some(&mut table[..])) else {
        panic!("configuring {algorithm} with a full-size table failed");
    };

    let expected = bitwise.calculate(&input.data);
    assert_eq!(table_driven.calculate(&input.data), expected, "{algorithm}: table mode");

    for configuration in [&bitwise, &table_driven] {
        // Digest over the arbitrary partition, empty chunks included
        let mut digest = configuration.digest();
        let mut rest = input.data.as_slice();
        for &split in &input.splits {
            let (chunk, tail) = rest.split_at(usize::from(split).min(rest.len()));
            digest.update(chunk);
            rest = tail;
        }
        digest.update(rest);
        assert_eq!(digest.finalize(), expected, "{algorithm}: digest");

        // Byte-at-a-time partial protocol
        if let Some(last) = input.data.len().checked_sub(1) {
            let mut register = configuration.params().initial;
            for (index, &byte) in input.data.iter().enumerate() {
                register = configuration.calculate_partial(register, byte, index == 0, index == last);
            }
            assert_eq!(register, expected, "{algorithm}: partial");
        }
    }
}

fuzz_target!(|input: Input| {
    let variant = usize::from(input.variant);
    let total = Crc8Algorithm::COUNT + Crc16Algorithm::COUNT + Crc32Algorithm::COUNT;
    let index = variant % total;

    if let Ok(algorithm) = Crc8Algorithm::try_from(index) {
        check(algorithm, &input);
    } else if let Ok(algorithm) = Crc16Algorithm::try_from(index - Crc8Algorithm::COUNT) {
        check(algorithm, &input);
    } else if let Ok(algorithm) =
        Crc32Algorithm::try_from(index - Crc8Algorithm::COUNT - Crc16Algorithm::COUNT)
    {
        check(algorithm, &input);
    }
});
