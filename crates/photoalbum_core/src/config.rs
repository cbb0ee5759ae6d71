//! Storage location configuration.
//!
//! # Responsibility
//! - Resolve where the catalog snapshot lives.
//!
//! # Invariants
//! - Resolution never fails: missing or blank environment values fall back
//!   to `$HOME/.photoalbum`, then to the current directory.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "PHOTOALBUM_DATA_DIR";
/// Snapshot file name used when none is configured.
pub const DEFAULT_SNAPSHOT_FILE_NAME: &str = "catalog.json";

const HOME_DATA_DIR_NAME: &str = ".photoalbum";

/// Where the catalog snapshot is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub snapshot_file_name: String,
}

impl StorageConfig {
    /// Uses `data_dir` with the default snapshot file name.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            snapshot_file_name: DEFAULT_SNAPSHOT_FILE_NAME.to_string(),
        }
    }

    /// Resolves the data directory from `PHOTOALBUM_DATA_DIR`, then `HOME`.
    pub fn from_env() -> Self {
        Self::new(resolve_data_dir(
            std::env::var(DATA_DIR_ENV).ok().as_deref(),
            std::env::var("HOME").ok().as_deref(),
        ))
    }

    /// Full path of the snapshot file.
    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file_name)
    }
}

fn resolve_data_dir(explicit: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(raw) = explicit {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    match home.map(str::trim).filter(|value| !value.is_empty()) {
        Some(home) => Path::new(home).join(HOME_DATA_DIR_NAME),
        None => PathBuf::from("."),
    }
}
