//! Catalog root aggregate.
//!
//! # Responsibility
//! - Own the ordered album list; the unit of snapshot persistence.
//! - Validate graph-wide uniqueness when a catalog comes from outside
//!   (decoded snapshots).
//!
//! # Invariants
//! - Album order is insertion order.
//! - A fresh catalog starts with exactly one album named `stock`.

use crate::model::album::Album;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Name of the album created on first run.
pub const DEFAULT_ALBUM_NAME: &str = "stock";

/// Uniqueness violation found by [`Catalog::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogValidationError {
    DuplicateAlbumName(String),
    DuplicateCaption { album: String, caption: String },
}

impl Display for CatalogValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAlbumName(name) => write!(f, "duplicate album name `{name}`"),
            Self::DuplicateCaption { album, caption } => {
                write!(f, "duplicate caption `{caption}` in album `{album}`")
            }
        }
    }
}

impl Error for CatalogValidationError {}

/// Ordered collection of every album.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    albums: Vec<Album>,
}

impl Catalog {
    /// Creates a catalog with no albums.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the first-run catalog holding one empty `stock` album.
    pub fn with_default_album() -> Self {
        Self {
            albums: vec![Album::new(DEFAULT_ALBUM_NAME)],
        }
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.has_name(name))
    }

    pub fn album_mut(&mut self, name: &str) -> Option<&mut Album> {
        self.albums.iter_mut().find(|album| album.has_name(name))
    }

    pub fn album_names(&self) -> Vec<&str> {
        self.albums.iter().map(Album::name).collect()
    }

    pub fn contains_album(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Total number of photos across all albums.
    pub fn photo_count(&self) -> usize {
        self.albums.iter().map(Album::photo_count).sum()
    }

    /// Checks album-name and per-album caption uniqueness.
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        let mut names = BTreeSet::<&str>::new();
        for album in &self.albums {
            if !names.insert(album.name()) {
                return Err(CatalogValidationError::DuplicateAlbumName(
                    album.name().to_string(),
                ));
            }

            let mut captions = BTreeSet::<&str>::new();
            for photo in album.photos() {
                if !captions.insert(photo.caption()) {
                    return Err(CatalogValidationError::DuplicateCaption {
                        album: album.name().to_string(),
                        caption: photo.caption().to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
        self.albums.iter().position(|album| album.has_name(name))
    }

    pub(crate) fn album_at_mut(&mut self, index: usize) -> &mut Album {
        &mut self.albums[index]
    }

    pub(crate) fn push_album(&mut self, album: Album) {
        self.albums.push(album);
    }

    pub(crate) fn take_album(&mut self, index: usize) -> Album {
        self.albums.remove(index)
    }
}
