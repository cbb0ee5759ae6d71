//! Whole-catalog snapshot persistence.
//!
//! # Responsibility
//! - Serialize the full catalog graph into one versioned snapshot.
//! - Restore the catalog graph at startup.
//!
//! # Invariants
//! - Every save is a full overwrite; there are no partial or appended writes.
//! - Snapshots declare `format_version`; newer versions are rejected.
//! - A decoded catalog is validated before it is handed out.

use crate::model::catalog::{Catalog, CatalogValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file;
mod memory;
pub mod snapshot;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for snapshot load/save.
#[derive(Debug)]
pub enum StoreError {
    /// No snapshot has been written at this location yet.
    SnapshotMissing(PathBuf),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Encode(serde_json::Error),
    Decode(serde_json::Error),
    UnsupportedFormatVersion {
        found: u32,
        latest_supported: u32,
    },
    /// Snapshot decoded but breaks name/caption uniqueness.
    InvalidSnapshot(CatalogValidationError),
}

impl StoreError {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::SnapshotMissing(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SnapshotMissing(path) => write!(f, "no snapshot at `{}`", path.display()),
            Self::Io { path, source } => {
                write!(f, "snapshot I/O failed at `{}`: {source}", path.display())
            }
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::Decode(err) => write!(f, "failed to decode snapshot: {err}"),
            Self::UnsupportedFormatVersion {
                found,
                latest_supported,
            } => write!(
                f,
                "snapshot format version {found} is not supported (latest supported {latest_supported})"
            ),
            Self::InvalidSnapshot(err) => write!(f, "invalid snapshot: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode(err) | Self::Decode(err) => Some(err),
            Self::InvalidSnapshot(err) => Some(err),
            Self::SnapshotMissing(_) | Self::UnsupportedFormatVersion { .. } => None,
        }
    }
}

impl From<CatalogValidationError> for StoreError {
    fn from(value: CatalogValidationError) -> Self {
        Self::InvalidSnapshot(value)
    }
}

/// Durable location holding one catalog snapshot.
pub trait SnapshotStore {
    /// Reads and decodes the latest snapshot.
    ///
    /// Returns `StoreError::SnapshotMissing` when nothing was saved yet; the
    /// caller is expected to start from a default catalog.
    fn load(&self) -> StoreResult<Catalog>;

    /// Replaces the stored snapshot with the full catalog.
    fn save(&self, catalog: &Catalog) -> StoreResult<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for &S {
    fn load(&self) -> StoreResult<Catalog> {
        (**self).load()
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        (**self).save(catalog)
    }
}
