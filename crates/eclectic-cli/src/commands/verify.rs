//! Catalog self-check.

use anyhow::{Result, bail};
use eclectic_crc::{Algorithm, AnyAlgorithm, CHECK_INPUT, Configuration, Register, TABLE_LEN};

use eclectic_config::OutputFormat;

use super::{WithAlgorithm, dispatch, format_value, parse_algorithm};
use crate::style::{SemanticStyle, muted_line, print_error, print_success, print_table};

/// Outcome of checking one variant in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub algorithm: AnyAlgorithm,
    pub bitwise: u32,
    pub table: u32,
}

impl Report {
    pub fn passed(&self) -> bool {
        let check = self.algorithm.params().check;
        self.bitwise == check && self.table == check
    }
}

struct SelfCheck;

impl WithAlgorithm for SelfCheck {
    type Output = Result<(u32, u32)>;

    fn call<A: Algorithm>(self, algorithm: A) -> Result<(u32, u32)> {
        let mut table = [<A::Register as Register>::ZERO; TABLE_LEN];
        let bitwise = Configuration::new(algorithm);
        let table_driven = Configuration::configure(algorithm, Some(&mut table[..]))?;

        Ok((
            bitwise.calculate(CHECK_INPUT).into(),
            table_driven.calculate(CHECK_INPUT).into(),
        ))
    }
}

/// Runs the self-check for `algorithm`.
pub fn check(algorithm: AnyAlgorithm) -> Result<Report> {
    let (bitwise, table) = dispatch(algorithm, SelfCheck)?;
    Ok(Report {
        algorithm,
        bitwise,
        table,
    })
}

/// Verifies one variant, or the whole catalog when `algorithm` is `None`.
pub fn run(algorithm: Option<&str>) -> Result<()> {
    let algorithms: Vec<AnyAlgorithm> = match algorithm {
        Some(name) => vec![parse_algorithm(name)?],
        None => AnyAlgorithm::all().collect(),
    };

    let reports = algorithms
        .into_iter()
        .map(check)
        .collect::<Result<Vec<_>>>()?;

    let rows: Vec<Vec<String>> = reports
        .iter()
        .map(|report| {
            let width = report.algorithm.width();
            let hex = |value| format_value(value, width, OutputFormat::Hex, true);
            let status = if report.passed() {
                "ok".success()
            } else {
                "FAILED".error()
            };
            vec![
                report.algorithm.name().to_string(),
                hex(report.algorithm.params().check),
                hex(report.bitwise),
                hex(report.table),
                status,
            ]
        })
        .collect();
    print_table(&["Name", "Check", "Bitwise", "Table", "Status"], &rows);

    let failed = reports.iter().filter(|report| !report.passed()).count();
    if failed > 0 {
        for report in reports.iter().filter(|report| !report.passed()) {
            tracing::error!(algorithm = %report.algorithm, ?report, "self-check mismatch");
        }
        print_error(&format!("{failed} of {} variants failed", reports.len()));
        bail!("self-check failed");
    }

    print_success(&format!("{} variants verified", reports.len()));
    muted_line(&format!("input: {:?}", String::from_utf8_lossy(CHECK_INPUT)));
    Ok(())
}
