//! File-backed snapshot store.
//!
//! # Invariants
//! - Saves write a sibling temp file and rename it over the target, so
//!   readers see either the previous or the new snapshot, never a mix.
//! - A missing file maps to `StoreError::SnapshotMissing`; every other read
//!   failure is an I/O error.

use crate::model::catalog::Catalog;
use crate::store::snapshot::{decode, encode};
use crate::store::{SnapshotStore, StoreError, StoreResult};
use log::{error, info};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Snapshot store writing one JSON file.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, bytes: &[u8]) -> StoreResult<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|source| io_error(parent, source))?;
        temp.write_all(bytes)
            .map_err(|source| io_error(temp.path(), source))?;
        temp.as_file()
            .sync_all()
            .map_err(|source| io_error(temp.path(), source))?;
        temp.persist(&self.path)
            .map_err(|err| io_error(&self.path, err.error))?;
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> StoreResult<Catalog> {
        let started_at = Instant::now();
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=snapshot_load module=store status=missing path={}",
                    self.path.display()
                );
                return Err(StoreError::SnapshotMissing(self.path.clone()));
            }
            Err(source) => {
                error!(
                    "event=snapshot_load module=store status=error error_code=io_failed path={} error={}",
                    self.path.display(),
                    source
                );
                return Err(io_error(&self.path, source));
            }
        };

        match decode(&bytes) {
            Ok(catalog) => {
                info!(
                    "event=snapshot_load module=store status=ok path={} albums={} photos={} bytes={} duration_ms={}",
                    self.path.display(),
                    catalog.albums().len(),
                    catalog.photo_count(),
                    bytes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(catalog)
            }
            Err(err) => {
                error!(
                    "event=snapshot_load module=store status=error error_code=decode_failed path={} error={}",
                    self.path.display(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let started_at = Instant::now();
        let bytes = encode(catalog)?;

        match self.write_atomically(&bytes) {
            Ok(()) => {
                info!(
                    "event=snapshot_save module=store status=ok path={} albums={} photos={} bytes={} duration_ms={}",
                    self.path.display(),
                    catalog.albums().len(),
                    catalog.photo_count(),
                    bytes.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=snapshot_save module=store status=error error_code=write_failed path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
