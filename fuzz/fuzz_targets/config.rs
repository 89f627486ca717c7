//! Fuzz target for config.toml loading.
//!
//! Tests that ReportConfig::load_from handles malformed config files
//! gracefully, including bad TOML, wrong value types, stray keys, and
//! files that do not exist at all.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use std::fs;
use tempfile::TempDir;

use newslog::config::ReportConfig;

/// Fuzzer input for config loading.
#[derive(Arbitrary, Debug)]
struct ConfigInput {
    /// Raw TOML content
    toml_content: String,
    /// Whether to write the file at all
    write_file: bool,
}

fuzz_target!(|input: ConfigInput| {
    let temp_dir = match TempDir::new() {
        Ok(dir) => dir,
        Err(_) => return,
    };

    let config_path = temp_dir.path().join("config.toml");
    if input.write_file && fs::write(&config_path, &input.toml_content).is_err() {
        return;
    }

    // Loading must never panic, whether the file exists or not.
    let _ = ReportConfig::load_from(&config_path);
});
