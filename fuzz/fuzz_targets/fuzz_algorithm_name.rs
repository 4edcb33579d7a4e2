#![no_main]

use eclectic_crc::AnyAlgorithm;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|name: &str| {
    // Parsing arbitrary text must never panic; a hit must name itself
    if let Ok(algorithm) = name.parse::<AnyAlgorithm>() {
        assert_eq!(algorithm.name().parse::<AnyAlgorithm>(), Ok(algorithm));
    }
});
