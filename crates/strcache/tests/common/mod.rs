//! Fixture loading shared by the integration tests

use std::fs;
use std::path::PathBuf;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// `key,value` pairs, split on the first comma
#[allow(dead_code)]
pub fn load_pairs(name: &str) -> Vec<(String, String)> {
    let text = fs::read_to_string(data_path(name)).expect("fixture file");
    text.lines()
        .filter_map(|line| line.split_once(','))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Comma-separated keys on the line after the header
#[allow(dead_code)]
pub fn load_access_pattern(name: &str) -> Vec<String> {
    let text = fs::read_to_string(data_path(name)).expect("fixture file");
    text.lines()
        .nth(1)
        .map(|line| {
            line.split(',')
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
