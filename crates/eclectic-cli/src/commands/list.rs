//! Catalog listing.

use eclectic_crc::AnyAlgorithm;

use crate::style::{muted_line, print_table};

const COLUMNS: [&str; 8] = ["Name", "Width", "Poly", "Init", "Reflect", "XorOut", "Check", "Aliases"];

/// Prints the catalog, optionally restricted to one register width.
pub fn run(width: Option<u32>) {
    let rows = rows(width);
    let count = rows.len();
    print_table(&COLUMNS, &rows);
    muted_line(&format!("({count} variants)"));
}

fn rows(width: Option<u32>) -> Vec<Vec<String>> {
    AnyAlgorithm::all()
        .filter(|algorithm| width.is_none_or(|width| algorithm.width() == width))
        .map(|algorithm| {
            let params = algorithm.params();
            let digits = (algorithm.width() / 4) as usize;
            let hex = |value: u32| format!("0x{value:0digits$X}");
            vec![
                params.name.to_string(),
                algorithm.width().to_string(),
                hex(params.polynomial),
                hex(params.initial),
                params.reflect.to_string(),
                hex(params.xor_out),
                hex(params.check),
                algorithm.aliases().join(", "),
            ]
        })
        .collect()
}
