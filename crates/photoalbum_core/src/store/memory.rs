//! In-memory snapshot store.
//!
//! Keeps the last encoded snapshot bytes, so load/save go through the same
//! wire format as the file store.

use crate::model::catalog::Catalog;
use crate::store::snapshot::{decode, encode};
use crate::store::{SnapshotStore, StoreError, StoreResult};
use log::debug;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

const MEMORY_LOCATION: &str = ":memory:";

/// Snapshot store without durable backing.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: RefCell<Option<Vec<u8>>>,
    saves: Cell<usize>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds an encoded snapshot.
    pub fn with_snapshot(bytes: Vec<u8>) -> Self {
        Self {
            snapshot: RefCell::new(Some(bytes)),
            saves: Cell::new(0),
        }
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Copy of the stored snapshot bytes, if any.
    pub fn snapshot_bytes(&self) -> Option<Vec<u8>> {
        self.snapshot.borrow().clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> StoreResult<Catalog> {
        match self.snapshot.borrow().as_deref() {
            Some(bytes) => decode(bytes),
            None => Err(StoreError::SnapshotMissing(PathBuf::from(MEMORY_LOCATION))),
        }
    }

    fn save(&self, catalog: &Catalog) -> StoreResult<()> {
        let bytes = encode(catalog)?;
        debug!(
            "event=snapshot_save module=store status=ok mode=memory bytes={}",
            bytes.len()
        );
        *self.snapshot.borrow_mut() = Some(bytes);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
