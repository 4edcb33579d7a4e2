//! Version command implementation.

use eclectic_crc::AnyAlgorithm;

use crate::style::print_labeled;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run() {
    println!("eclectic {VERSION}");
    println!();
    println!("CRC-8, CRC-16 and CRC-32 checksums from the RevEng catalogue.");
    println!();
    println!("Build info:");
    print_labeled("Variants", &AnyAlgorithm::all().count().to_string());
    print_labeled("Target", std::env::consts::ARCH);
    print_labeled("OS", std::env::consts::OS);
}
