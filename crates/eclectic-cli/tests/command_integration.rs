//! Integration tests for CLI commands.
//!
//! Every command runs inside a temporary directory with `HOME` and
//! `XDG_CONFIG_HOME` pointed at it and the `ECLECTIC_*` overrides cleared, so
//! only the configuration a test writes is seen.

#![allow(deprecated)] // Command::cargo_bin is deprecated but replacement requires newer assert_cmd

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CONFIG_ENV: [&str; 5] = [
    "ECLECTIC_CRC__ALGORITHM",
    "ECLECTIC_CRC__LOOKUP_TABLE",
    "ECLECTIC_CRC__CHUNK_SIZE",
    "ECLECTIC_OUTPUT__FORMAT",
    "ECLECTIC_OUTPUT__UPPERCASE",
];

fn eclectic(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eclectic").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env_remove("RUST_LOG");
    for var in CONFIG_ENV {
        cmd.env_remove(var);
    }
    cmd
}

// ============================================================================
// Checksum
// ============================================================================

#[test]
fn checksum_string_uses_default_crc32() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["checksum", "--string", "123456789"])
        .assert()
        .success()
        .stdout("CBF43926  \"123456789\"\n");
}

#[test]
fn checksum_named_variant_in_both_modes() {
    let temp = TempDir::new().unwrap();

    for extra in [&[][..], &["--bitwise"][..]] {
        eclectic(&temp)
            .args(["checksum", "--algorithm", "crc-16/modbus", "--string", "123456789"])
            .args(extra)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("4B37  "));
    }
}

#[test]
fn checksum_decimal_format() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["checksum", "-a", "MODBUS", "-f", "decimal", "-s", "123456789"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("19255  "));
}

#[test]
fn checksum_reads_stdin() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["checksum", "--algorithm", "CRC-8/MAXIM"])
        .write_stdin("123456789")
        .assert()
        .success()
        .stdout("A1  -\n");
}

#[test]
fn checksum_reads_files_in_order() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("three.bin"), [0x01, 0x02, 0x03]).unwrap();
    fs::write(temp.path().join("empty.bin"), []).unwrap();

    eclectic(&temp)
        .args(["checksum", "--algorithm", "CRC-16/MODBUS", "three.bin", "empty.bin"])
        .assert()
        .success()
        .stdout("6161  three.bin\nFFFF  empty.bin\n");
}

#[test]
fn checksum_empty_input_is_finalized_initial() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("empty.bin"), []).unwrap();

    eclectic(&temp)
        .args(["checksum", "--algorithm", "CRC-16/RIELLO", "empty.bin"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("554D  "));
}

#[test]
fn checksum_missing_file_fails() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["checksum", "does-not-exist.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does-not-exist.bin"));
}

#[test]
fn checksum_unknown_algorithm_fails() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["checksum", "--algorithm", "CRC-64/XZ", "--string", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown CRC algorithm"));
}

// ============================================================================
// Configuration layering
// ============================================================================

#[test]
fn project_config_sets_defaults() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("eclectic.toml"),
        "[crc]\nalgorithm = \"CRC-32C\"\n\n[output]\nuppercase = false\n",
    )
    .unwrap();

    eclectic(&temp)
        .args(["checksum", "--string", "123456789"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("e3069283  "));
}

#[test]
fn cli_flag_beats_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("eclectic.toml"),
        "[crc]\nalgorithm = \"CRC-32C\"\n",
    )
    .unwrap();

    eclectic(&temp)
        .args(["checksum", "--algorithm", "CRC-8", "--string", "123456789"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("F4  "));
}

#[test]
fn environment_beats_project_config() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("eclectic.toml"),
        "[crc]\nalgorithm = \"CRC-32C\"\n",
    )
    .unwrap();

    eclectic(&temp)
        .env("ECLECTIC_CRC__ALGORITHM", "CRC-16/XMODEM")
        .args(["checksum", "--string", "123456789"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("31C3  "));
}

#[test]
fn explicit_config_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("other.toml");
    fs::write(&path, "[crc]\nalgorithm = \"CRC-8/ROHC\"\n").unwrap();

    eclectic(&temp)
        .args(["--config", path.to_str().unwrap(), "checksum", "-s", "123456789"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("D0  "));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("eclectic.toml"),
        "[crc]\nchunk_size = 0\n",
    )
    .unwrap();

    eclectic(&temp)
        .args(["checksum", "--string", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("chunk_size"));
}

#[test]
fn oversized_chunk_size_is_rejected() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .env("ECLECTIC_CRC__CHUNK_SIZE", "1099511627776")
        .args(["checksum", "--string", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("maximum"));
}

#[test]
fn config_show_toml() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["config", "show", "--format", "toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm = \"CRC-32\""))
        .stdout(predicate::str::contains("format = \"hex\""));
}

#[test]
fn config_show_text() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("crc.chunk_size"))
        .stdout(predicate::str::contains("65536"));
}

// ============================================================================
// Catalog commands
// ============================================================================

#[test]
fn verify_whole_catalog() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains("43 variants verified"))
        .stdout(predicate::str::contains("FAILED").not());
}

#[test]
fn verify_single_variant() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["verify", "--algorithm", "crc-8/rohc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 variants verified"));
}

#[test]
fn list_filters_by_width() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["list", "--width", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CRC-8/ROHC"))
        .stdout(predicate::str::contains("(10 variants)"))
        .stdout(predicate::str::contains("CRC-32C").not());
}

#[test]
fn table_dumps_generated_entries() {
    let temp = TempDir::new().unwrap();

    eclectic(&temp)
        .args(["table", "--algorithm", "CRC-32"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x77073096"))
        .stdout(predicate::str::contains("0x2D02EF8D"));

    eclectic(&temp)
        .args(["table", "--algorithm", "CRC-16/XMODEM"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0x0000, 0x1021, 0x2042"));
}
