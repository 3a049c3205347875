//! Plain-text data file loaders
//!
//! Two formats:
//! - pairs: one `key,value` per line, split on the first comma
//! - access pattern: a header line, then one comma-separated line of keys

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while reading a data file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File had no usable content
    #[error("no entries found in {0}")]
    Empty(PathBuf),
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `key,value` pairs.
///
/// Lines without a comma or with an empty key are skipped. The value keeps
/// any further commas.
pub fn load_pairs<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>, LoadError> {
    let path = path.as_ref();
    let pairs: Vec<_> = read(path)?
        .lines()
        .filter_map(|line| line.split_once(','))
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    if pairs.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    Ok(pairs)
}

/// Load an access pattern: skip the header, split the next line on commas
pub fn load_access_pattern<P: AsRef<Path>>(path: P) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let pattern: Vec<String> = read(path)?
        .lines()
        .nth(1)
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if pattern.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }
    Ok(pattern)
}
