//! Lookup table dump.

use anyhow::{Context, Result};
use eclectic_config::{EclecticConfig, OutputFormat};
use eclectic_crc::{Algorithm, Configuration, Register, TABLE_LEN};

use super::{WithAlgorithm, dispatch, format_value, parse_algorithm};
use crate::style::SemanticStyle;

const PER_ROW: usize = 8;

struct Generate;

impl WithAlgorithm for Generate {
    type Output = Result<Vec<u32>>;

    fn call<A: Algorithm>(self, algorithm: A) -> Result<Vec<u32>> {
        let mut table = [<A::Register as Register>::ZERO; TABLE_LEN];
        let configuration = Configuration::configure(algorithm, Some(&mut table[..]))?;
        let entries = configuration
            .table()
            .context("configuration was built without a lookup table")?;
        Ok(entries.iter().map(|&entry| entry.into()).collect())
    }
}

/// Prints the table as rows of `0x`-prefixed hex entries.
pub fn run(config: &EclecticConfig, algorithm: Option<&str>) -> Result<()> {
    let algorithm = match algorithm {
        Some(name) => parse_algorithm(name)?,
        None => config.algorithm()?,
    };
    let entries = dispatch(algorithm, Generate)?;
    let width = algorithm.width();

    println!("{}", format!("{algorithm} lookup table").header());
    for (row, chunk) in entries.chunks(PER_ROW).enumerate() {
        let line = chunk
            .iter()
            .map(|&entry| {
                format!(
                    "0x{}",
                    format_value(entry, width, OutputFormat::Hex, config.output.uppercase)
                )
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}  {line},", format!("/* {:3} */", row * PER_ROW).muted());
    }

    Ok(())
}
