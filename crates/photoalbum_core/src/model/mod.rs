//! Catalog domain model.
//!
//! # Responsibility
//! - Define the album/photo/tag hierarchy shared by services, search and
//!   snapshot persistence.
//! - Keep mutation of identity fields (album name, photo caption) crate-private
//!   so uniqueness rules are enforced in one place.
//!
//! # Invariants
//! - Album names are unique within a catalog (exact match).
//! - Photo captions are unique within an album (exact match).
//! - Identity comparison is explicit (`same_name`, `same_caption`), never a
//!   `PartialEq` impl on `Album`/`Photo`.

pub mod album;
pub mod catalog;
pub mod image;
pub mod photo;
pub mod tag;
