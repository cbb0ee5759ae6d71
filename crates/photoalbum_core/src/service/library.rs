//! Photo library facade.
//!
//! # Responsibility
//! - Load the catalog at startup, creating the default catalog on first run.
//! - Run one mutation at a time and persist the whole catalog on success.
//! - Expose read-only search without persisting.
//!
//! # Invariants
//! - A rejected mutation never reaches the store.
//! - A failed save keeps the in-memory change; memory stays the source of
//!   truth and the caller decides whether to retry via [`PhotoLibrary::save`].
//! - `batch` applies all of its mutations or none of them.

use crate::logging::sanitize_field;
use crate::model::album::Album;
use crate::model::catalog::Catalog;
use crate::model::image::ImagePayload;
use crate::model::photo::Photo;
use crate::model::tag::Tag;
use crate::search::tags::{search, SearchHit, TagQuery};
use crate::service::mutation::{self, MutationError, MutationResult};
use crate::store::{SnapshotStore, StoreError, StoreResult};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Failure of a library operation.
#[derive(Debug)]
pub enum LibraryError {
    /// Mutation was rejected; catalog and snapshot are unchanged.
    Mutation(MutationError),
    /// Mutation applied in memory but the snapshot could not be written.
    Store(StoreError),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mutation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mutation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<MutationError> for LibraryError {
    fn from(value: MutationError) -> Self {
        Self::Mutation(value)
    }
}

impl From<StoreError> for LibraryError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Live catalog bound to its snapshot store.
pub struct PhotoLibrary<S: SnapshotStore> {
    catalog: Catalog,
    store: S,
}

impl<S: SnapshotStore> PhotoLibrary<S> {
    /// Loads the catalog from `store`.
    ///
    /// When no snapshot exists yet, starts from a catalog holding the
    /// `stock` album and saves it right away.
    pub fn open(store: S) -> StoreResult<Self> {
        let catalog = match store.load() {
            Ok(catalog) => catalog,
            Err(StoreError::SnapshotMissing(path)) => {
                info!(
                    "event=library_open module=library status=first_run path={}",
                    path.display()
                );
                let catalog = Catalog::with_default_album();
                store.save(&catalog)?;
                catalog
            }
            Err(err) => return Err(err),
        };

        info!(
            "event=library_open module=library status=ok albums={} photos={}",
            catalog.albums().len(),
            catalog.photo_count()
        );
        Ok(Self { catalog, store })
    }

    /// Wraps an already loaded catalog without touching the store.
    pub fn from_catalog(catalog: Catalog, store: S) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Writes the current catalog; used to retry after a failed save.
    pub fn save(&self) -> StoreResult<()> {
        self.store.save(&self.catalog)
    }

    pub fn add_album(&mut self, name: &str) -> LibraryResult<()> {
        let outcome = mutation::add_album(&mut self.catalog, name).map(|_| ());
        self.commit("album_add", outcome)
    }

    pub fn remove_album(&mut self, name: &str) -> LibraryResult<Album> {
        let outcome = mutation::remove_album(&mut self.catalog, name);
        self.commit("album_remove", outcome)
    }

    pub fn rename_album(&mut self, old_name: &str, new_name: &str) -> LibraryResult<()> {
        let outcome = mutation::rename_album(&mut self.catalog, old_name, new_name);
        self.commit("album_rename", outcome)
    }

    pub fn add_photo(
        &mut self,
        album: &str,
        caption: &str,
        image: ImagePayload,
    ) -> LibraryResult<()> {
        let outcome = album_mut(&mut self.catalog, album)
            .and_then(|album| mutation::add_photo(album, caption, image).map(|_| ()));
        self.commit("photo_add", outcome)
    }

    pub fn remove_photo(&mut self, album: &str, caption: &str) -> LibraryResult<Photo> {
        let outcome = album_mut(&mut self.catalog, album)
            .and_then(|album| mutation::remove_photo(album, caption));
        self.commit("photo_remove", outcome)
    }

    pub fn rename_photo(
        &mut self,
        album: &str,
        old_caption: &str,
        new_caption: &str,
    ) -> LibraryResult<()> {
        let outcome = album_mut(&mut self.catalog, album)
            .and_then(|album| mutation::rename_photo(album, old_caption, new_caption));
        self.commit("photo_rename", outcome)
    }

    pub fn copy_photo(
        &mut self,
        source_album: &str,
        caption: &str,
        dest_album: &str,
    ) -> LibraryResult<()> {
        let outcome = mutation::copy_photo(&mut self.catalog, source_album, caption, dest_album);
        self.commit("photo_copy", outcome)
    }

    pub fn move_photo(
        &mut self,
        source_album: &str,
        caption: &str,
        dest_album: &str,
    ) -> LibraryResult<()> {
        let outcome = mutation::move_photo(&mut self.catalog, source_album, caption, dest_album);
        self.commit("photo_move", outcome)
    }

    pub fn add_tag(&mut self, album: &str, caption: &str, tag: Tag) -> LibraryResult<()> {
        let outcome = album_mut(&mut self.catalog, album)
            .and_then(|album| mutation::add_tag(album, caption, tag));
        self.commit("tag_add", outcome)
    }

    pub fn remove_tag(&mut self, album: &str, caption: &str, tag: &Tag) -> LibraryResult<()> {
        let outcome = album_mut(&mut self.catalog, album)
            .and_then(|album| mutation::remove_tag(album, caption, tag));
        self.commit("tag_remove", outcome)
    }

    /// Runs several mutations and persists once.
    ///
    /// If `apply` fails, every change it made is discarded and nothing is
    /// saved.
    pub fn batch<T>(
        &mut self,
        apply: impl FnOnce(&mut Catalog) -> MutationResult<T>,
    ) -> LibraryResult<T> {
        let mut working = self.catalog.clone();
        let value = apply(&mut working).map_err(|err| {
            warn!(
                "event=batch module=library status=rejected discarded=true error={}",
                sanitize_field(&err.to_string())
            );
            err
        })?;
        self.catalog = working;
        self.persist("batch")?;
        Ok(value)
    }

    /// Tag search over the live catalog. Never persists.
    pub fn search(&self, query: &TagQuery) -> Vec<SearchHit> {
        search(&self.catalog, query)
    }

    fn commit<T>(&mut self, event: &'static str, outcome: MutationResult<T>) -> LibraryResult<T> {
        let value = outcome?;
        self.persist(event)?;
        Ok(value)
    }

    fn persist(&self, event: &'static str) -> LibraryResult<()> {
        self.store.save(&self.catalog).map_err(|err| {
            error!(
                "event={} module=library status=error error_code=save_failed error={}",
                event, err
            );
            LibraryError::Store(err)
        })
    }
}

fn album_mut<'a>(catalog: &'a mut Catalog, name: &str) -> MutationResult<&'a mut Album> {
    catalog
        .album_mut(name)
        .ok_or_else(|| MutationError::AlbumNotFound(name.to_string()))
}
