//! eclectic command-line tool.
//!
//! Computes and inspects CRC checksums from the standard catalogue.
//!
//! # Quick Start
//!
//! ```bash
//! # Checksum a file with the configured default (CRC-32)
//! eclectic checksum firmware.bin
//!
//! # Pick a variant by name, reading stdin
//! printf '123456789' | eclectic checksum --algorithm crc-16/modbus
//!
//! # Confirm every catalog entry against its check value
//! eclectic verify
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use eclectic_config::OutputFormat;

/// eclectic - CRC-8, CRC-16 and CRC-32 checksums from the RevEng catalogue.
#[derive(Parser)]
#[command(name = "eclectic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// List the catalog of supported variants.
    List {
        /// Only show variants of this register width.
        #[arg(short, long, value_enum)]
        width: Option<WidthArg>,
    },

    /// Check every variant against its published check value.
    Verify {
        /// Verify a single variant instead of the whole catalog.
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Compute checksums of files, a string, or stdin.
    Checksum {
        /// Variant name (default from configuration).
        #[arg(short, long)]
        algorithm: Option<String>,

        /// Use bit-serial calculation instead of a lookup table.
        #[arg(long)]
        bitwise: bool,

        /// Checksum this text instead of reading input.
        #[arg(short, long, conflicts_with = "files")]
        string: Option<String>,

        /// Output format (default from configuration).
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Files to read; stdin when empty or "-".
        files: Vec<PathBuf>,
    },

    /// Print the 256-entry lookup table of a variant.
    Table {
        /// Variant name (default from configuration).
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// Configuration management.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum WidthArg {
    #[value(name = "8")]
    Bits8,
    #[value(name = "16")]
    Bits16,
    #[value(name = "32")]
    Bits32,
}

impl WidthArg {
    fn bits(self) -> u32 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits32 => 32,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Hex,
    Decimal,
}

impl From<FormatArg> for OutputFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Hex => OutputFormat::Hex,
            FormatArg::Decimal => OutputFormat::Decimal,
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging; stderr keeps checksum output on stdout clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::List { width } => {
            commands::list::run(width.map(WidthArg::bits));
            Ok(())
        }
        Commands::Verify { algorithm } => commands::verify::run(algorithm.as_deref()),
        Commands::Checksum {
            algorithm,
            bitwise,
            string,
            format,
            files,
        } => {
            let config = commands::load_config(config_path)?;
            let options = commands::checksum::Options::resolve(
                &config,
                algorithm.as_deref(),
                bitwise,
                format.map(Into::into),
            )?;
            commands::checksum::run(&options, string.as_deref(), &files)
        }
        Commands::Table { algorithm } => {
            let config = commands::load_config(config_path)?;
            commands::table::run(&config, algorithm.as_deref())
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => commands::config::show(config_path, &format),
        },
    }
}
