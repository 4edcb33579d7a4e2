//! Configuration management commands.

use std::path::Path;

use anyhow::{Result, bail};

use crate::style::print_info_table;

/// Show the effective configuration.
pub fn show(path: Option<&Path>, format: &str) -> Result<()> {
    let config = super::load_config(path)?;

    match format {
        "toml" => {
            let toml_str = toml::to_string_pretty(&config)?;
            print!("{toml_str}");
        }
        "text" => {
            let algorithm = config.algorithm()?;
            let lookup_table = config.crc.lookup_table.to_string();
            let chunk_size = config.crc.chunk_size.to_string();
            let format = format!("{:?}", config.output.format).to_lowercase();
            let uppercase = config.output.uppercase.to_string();

            print_info_table(&[
                ("crc.algorithm", algorithm.name()),
                ("crc.lookup_table", lookup_table.as_str()),
                ("crc.chunk_size", chunk_size.as_str()),
                ("output.format", format.as_str()),
                ("output.uppercase", uppercase.as_str()),
            ]);
        }
        other => bail!("Unknown format '{other}' (expected text or toml)"),
    }

    Ok(())
}
