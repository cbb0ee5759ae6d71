//! Snapshot wire format.
//!
//! JSON envelope `{"format_version": N, "albums": [...]}`. Photo image bytes
//! are base64 strings.

use crate::model::catalog::Catalog;
use crate::store::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};

/// Snapshot format version written by this binary.
pub const LATEST_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a> {
    format_version: u32,
    #[serde(flatten)]
    catalog: &'a Catalog,
}

#[derive(Deserialize)]
struct SnapshotHeader {
    format_version: u32,
}

#[derive(Deserialize)]
struct SnapshotIn {
    #[serde(flatten)]
    catalog: Catalog,
}

/// Encodes the whole catalog at the latest format version.
pub fn encode(catalog: &Catalog) -> StoreResult<Vec<u8>> {
    let snapshot = SnapshotOut {
        format_version: LATEST_FORMAT_VERSION,
        catalog,
    };
    serde_json::to_vec(&snapshot).map_err(StoreError::Encode)
}

/// Decodes and validates a snapshot.
///
/// The version header is read first so that snapshots written by a newer
/// binary are reported as unsupported rather than as malformed.
pub fn decode(bytes: &[u8]) -> StoreResult<Catalog> {
    let header: SnapshotHeader = serde_json::from_slice(bytes).map_err(StoreError::Decode)?;
    if header.format_version == 0 || header.format_version > LATEST_FORMAT_VERSION {
        return Err(StoreError::UnsupportedFormatVersion {
            found: header.format_version,
            latest_supported: LATEST_FORMAT_VERSION,
        });
    }

    let snapshot: SnapshotIn = serde_json::from_slice(bytes).map_err(StoreError::Decode)?;
    snapshot.catalog.validate()?;
    Ok(snapshot.catalog)
}
