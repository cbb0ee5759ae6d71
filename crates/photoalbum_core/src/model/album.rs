//! Album domain model.
//!
//! # Invariants
//! - Photo order is insertion order; nothing here sorts.
//! - Lookups are exact-match and return the first hit.

use crate::model::photo::Photo;
use serde::{Deserialize, Serialize};

/// Named, ordered collection of photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    name: String,
    #[serde(default)]
    photos: Vec<Photo>,
}

impl Album {
    /// Creates an empty album.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo_count(&self) -> usize {
        self.photos.len()
    }

    /// Exact name comparison used for catalog-wide uniqueness.
    pub fn has_name(&self, name: &str) -> bool {
        self.name == name
    }

    /// Identity comparison between two albums (name only).
    pub fn same_name(&self, other: &Album) -> bool {
        self.has_name(&other.name)
    }

    pub fn find_photo(&self, caption: &str) -> Option<&Photo> {
        self.photos.iter().find(|photo| photo.has_caption(caption))
    }

    pub fn position_of(&self, caption: &str) -> Option<usize> {
        self.photos.iter().position(|photo| photo.has_caption(caption))
    }

    pub fn contains_caption(&self, caption: &str) -> bool {
        self.position_of(caption).is_some()
    }

    /// Two-line list label: album name, then photo count.
    ///
    /// The count uses the singular noun only for exactly one photo.
    pub fn summary(&self) -> String {
        let count = self.photos.len();
        let noun = if count == 1 { "photo" } else { "photos" };
        format!("{}\n{count} {noun}", self.name)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn photo_mut(&mut self, caption: &str) -> Option<&mut Photo> {
        self.photos
            .iter_mut()
            .find(|photo| photo.has_caption(caption))
    }

    pub(crate) fn push_photo(&mut self, photo: Photo) {
        self.photos.push(photo);
    }

    pub(crate) fn take_photo(&mut self, index: usize) -> Photo {
        self.photos.remove(index)
    }
}

#[cfg(test)]
mod tests {
    use super::Album;
    use crate::model::image::ImagePayload;
    use crate::model::photo::Photo;

    #[test]
    fn summary_pluralizes_photo_count() {
        let mut album = Album::new("trip");
        assert_eq!(album.summary(), "trip\n0 photos");

        album.push_photo(Photo::new("a.jpg", ImagePayload::empty()));
        assert_eq!(album.summary(), "trip\n1 photo");

        album.push_photo(Photo::new("b.jpg", ImagePayload::empty()));
        assert_eq!(album.summary(), "trip\n2 photos");
    }

    #[test]
    fn lookups_are_exact_and_ordered() {
        let mut album = Album::new("trip");
        album.push_photo(Photo::new("a.jpg", ImagePayload::empty()));
        album.push_photo(Photo::new("b.jpg", ImagePayload::empty()));

        assert_eq!(album.position_of("b.jpg"), Some(1));
        assert!(album.find_photo("A.jpg").is_none());
        assert!(album.same_name(&Album::new("trip")));
        assert!(!album.has_name("Trip"));
    }
}
