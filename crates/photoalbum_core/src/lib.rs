//! Core domain logic for the photo album catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use config::StorageConfig;
pub use logging::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::album::Album;
pub use model::catalog::{Catalog, CatalogValidationError, DEFAULT_ALBUM_NAME};
pub use model::image::ImagePayload;
pub use model::photo::Photo;
pub use model::tag::Tag;
pub use search::tags::{search, SearchHit, TagQuery};
pub use service::library::{LibraryError, LibraryResult, PhotoLibrary};
pub use service::mutation::{MutationError, MutationResult};
pub use store::{FileSnapshotStore, MemorySnapshotStore, SnapshotStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
