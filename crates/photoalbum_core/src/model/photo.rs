//! Photo domain model.
//!
//! # Responsibility
//! - Hold one captioned image together with its ordered tag list.
//!
//! # Invariants
//! - Caption is the only identity field; tags and image never take part in
//!   identity comparison.
//! - `Clone` produces an independent tag list while sharing image bytes.

use crate::model::image::ImagePayload;
use crate::model::tag::Tag;
use serde::{Deserialize, Serialize};

/// Captioned image owned by exactly one album.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    caption: String,
    #[serde(default)]
    tags: Vec<Tag>,
    image: ImagePayload,
}

impl Photo {
    /// Creates a photo with an empty tag list.
    pub fn new(caption: impl Into<String>, image: ImagePayload) -> Self {
        Self {
            caption: caption.into(),
            tags: Vec::new(),
            image,
        }
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Tags in insertion order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn image(&self) -> &ImagePayload {
        &self.image
    }

    /// Exact caption comparison used for per-album uniqueness.
    pub fn has_caption(&self, caption: &str) -> bool {
        self.caption == caption
    }

    /// Identity comparison between two photos (caption only).
    pub fn same_caption(&self, other: &Photo) -> bool {
        self.has_caption(&other.caption)
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub(crate) fn set_caption(&mut self, caption: String) {
        self.caption = caption;
    }

    pub(crate) fn push_tag(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Removes the first equal tag. Returns whether a tag was removed.
    pub(crate) fn remove_tag(&mut self, tag: &Tag) -> bool {
        match self.tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.tags.remove(index);
                true
            }
            None => false,
        }
    }
}
