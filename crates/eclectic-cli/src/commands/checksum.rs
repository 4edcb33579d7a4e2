//! Checksum command implementation.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use eclectic_config::{EclecticConfig, OutputFormat};
use eclectic_crc::{Algorithm, AnyAlgorithm, Configuration, Register, TABLE_LEN};

use super::{WithAlgorithm, dispatch, format_value, parse_algorithm};

/// Settings for one checksum run, after CLI flags override configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub algorithm: AnyAlgorithm,
    pub lookup_table: bool,
    pub chunk_size: usize,
    pub format: OutputFormat,
    pub uppercase: bool,
}

impl Options {
    pub fn resolve(
        config: &EclecticConfig,
        algorithm: Option<&str>,
        bitwise: bool,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let algorithm = match algorithm {
            Some(name) => parse_algorithm(name)?,
            None => config.algorithm()?,
        };

        Ok(Self {
            algorithm,
            lookup_table: config.crc.lookup_table && !bitwise,
            chunk_size: config.crc.chunk_size,
            format: format.unwrap_or(config.output.format),
            uppercase: config.output.uppercase,
        })
    }
}

/// Where checksum input comes from.
enum Source<'a> {
    Text(&'a str),
    Stdin,
    File(&'a Path),
}

impl Source<'_> {
    fn label(&self) -> String {
        match self {
            Self::Text(text) => format!("{text:?}"),
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Prints `<checksum>  <source>` for every input.
pub fn run(options: &Options, string: Option<&str>, files: &[PathBuf]) -> Result<()> {
    let sources: Vec<Source<'_>> = match (string, files) {
        (Some(text), _) => vec![Source::Text(text)],
        (None, []) => vec![Source::Stdin],
        (None, files) => files
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    Source::Stdin
                } else {
                    Source::File(path)
                }
            })
            .collect(),
    };

    tracing::debug!(
        algorithm = %options.algorithm,
        lookup_table = options.lookup_table,
        sources = sources.len(),
        "computing checksums"
    );

    for source in &sources {
        let value = checksum(options, source)
            .with_context(|| format!("Failed to checksum {}", source.label()))?;
        let rendered = format_value(
            value,
            options.algorithm.width(),
            options.format,
            options.uppercase,
        );
        println!("{rendered}  {}", source.label());
    }

    Ok(())
}

fn checksum(options: &Options, source: &Source<'_>) -> Result<u32> {
    match source {
        Source::Text(text) => stream(options, text.as_bytes()),
        Source::Stdin => stream(options, io::stdin().lock()),
        Source::File(path) => {
            let file = File::open(path)?;
            stream(options, file)
        }
    }
}

/// Computes the checksum of `reader` in `chunk_size` reads.
pub fn stream<R: Read>(options: &Options, reader: R) -> Result<u32> {
    dispatch(
        options.algorithm,
        Streamer {
            reader,
            lookup_table: options.lookup_table,
            chunk_size: options.chunk_size,
        },
    )
}

struct Streamer<R> {
    reader: R,
    lookup_table: bool,
    chunk_size: usize,
}

impl<R: Read> WithAlgorithm for Streamer<R> {
    type Output = Result<u32>;

    fn call<A: Algorithm>(mut self, algorithm: A) -> Result<u32> {
        let mut table = [<A::Register as Register>::ZERO; TABLE_LEN];
        let configuration =
            Configuration::configure(algorithm, self.lookup_table.then_some(&mut table[..]))?;

        let mut digest = configuration.digest();
        let mut buffer = vec![0u8; self.chunk_size.max(1)];
        let mut total = 0usize;
        loop {
            let read = match self.reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            digest.update(&buffer[..read]);
            total += read;
        }

        tracing::trace!(algorithm = %algorithm, bytes = total, "stream complete");
        Ok(digest.finalize().into())
    }
}
