//! Catalog mutation operations.
//!
//! # Responsibility
//! - Enforce album-name and photo-caption uniqueness on every write.
//! - Move/copy photos between albums without partial application.
//! - Edit photo tag lists.
//!
//! # Invariants
//! - Every check runs before the first write; a rejected call leaves the
//!   catalog untouched, so no rollback path exists.
//! - Name/caption comparison is exact (case-sensitive, no trimming).
//! - Operations never persist; callers decide when to snapshot.

use crate::logging::sanitize_field;
use crate::model::album::Album;
use crate::model::catalog::Catalog;
use crate::model::image::ImagePayload;
use crate::model::photo::Photo;
use crate::model::tag::Tag;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MutationResult<T> = Result<T, MutationError>;

/// Rejection reasons for catalog mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// Another album already uses this name.
    DuplicateName(String),
    /// Target album already holds a photo with this caption.
    DuplicateCaption { album: String, caption: String },
    /// Photo already carries an equal tag.
    DuplicateTag { caption: String, tag: Tag },
    AlbumNotFound(String),
    PhotoNotFound { album: String, caption: String },
    TagNotFound { caption: String, tag: Tag },
    /// Blank name, caption or tag field.
    InvalidInput(&'static str),
}

impl MutationError {
    /// Groups the three not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::AlbumNotFound(_) | Self::PhotoNotFound { .. } | Self::TagNotFound { .. }
        )
    }

    fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "duplicate_name",
            Self::DuplicateCaption { .. } => "duplicate_caption",
            Self::DuplicateTag { .. } => "duplicate_tag",
            Self::AlbumNotFound(_) => "album_not_found",
            Self::PhotoNotFound { .. } => "photo_not_found",
            Self::TagNotFound { .. } => "tag_not_found",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

impl Display for MutationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName(name) => {
                write!(f, "an album with the name `{name}` already exists")
            }
            Self::DuplicateCaption { album, caption } => write!(
                f,
                "a photo with the caption `{caption}` already exists in `{album}`"
            ),
            Self::DuplicateTag { caption, tag } => {
                write!(f, "photo `{caption}` already has tag `{tag}`")
            }
            Self::AlbumNotFound(name) => write!(f, "album not found: `{name}`"),
            Self::PhotoNotFound { album, caption } => {
                write!(f, "photo `{caption}` not found in `{album}`")
            }
            Self::TagNotFound { caption, tag } => {
                write!(f, "tag `{tag}` not found on photo `{caption}`")
            }
            Self::InvalidInput(details) => write!(f, "invalid input: {details}"),
        }
    }
}

impl Error for MutationError {}

/// Appends a new empty album.
///
/// # Errors
/// - `InvalidInput` for a blank name.
/// - `DuplicateName` when any album already has exactly this name.
pub fn add_album<'a>(catalog: &'a mut Catalog, name: &str) -> MutationResult<&'a Album> {
    require_non_blank(name, "album name must not be blank")
        .map_err(|err| rejected("album_add", err))?;
    if catalog.contains_album(name) {
        return Err(rejected(
            "album_add",
            MutationError::DuplicateName(name.to_string()),
        ));
    }

    catalog.push_album(Album::new(name));
    info!(
        "event=album_add module=mutation status=ok album={}",
        sanitize_field(name)
    );
    let index = catalog.albums().len() - 1;
    Ok(&catalog.albums()[index])
}

/// Removes an album together with the photos it owns.
pub fn remove_album(catalog: &mut Catalog, name: &str) -> MutationResult<Album> {
    let index = catalog.position_of(name).ok_or_else(|| {
        rejected(
            "album_remove",
            MutationError::AlbumNotFound(name.to_string()),
        )
    })?;

    let removed = catalog.take_album(index);
    info!(
        "event=album_remove module=mutation status=ok album={} photos={}",
        sanitize_field(name),
        removed.photo_count()
    );
    Ok(removed)
}

/// Renames an album.
///
/// Renaming an album to its current name is a successful no-op; only
/// collisions with a different album are rejected.
pub fn rename_album(catalog: &mut Catalog, old_name: &str, new_name: &str) -> MutationResult<()> {
    let index = catalog.position_of(old_name).ok_or_else(|| {
        rejected(
            "album_rename",
            MutationError::AlbumNotFound(old_name.to_string()),
        )
    })?;
    require_non_blank(new_name, "album name must not be blank")
        .map_err(|err| rejected("album_rename", err))?;

    let collides = catalog
        .albums()
        .iter()
        .enumerate()
        .any(|(position, album)| position != index && album.has_name(new_name));
    if collides {
        return Err(rejected(
            "album_rename",
            MutationError::DuplicateName(new_name.to_string()),
        ));
    }

    catalog.album_at_mut(index).set_name(new_name.to_string());
    info!(
        "event=album_rename module=mutation status=ok from={} to={}",
        sanitize_field(old_name),
        sanitize_field(new_name)
    );
    Ok(())
}

/// Appends a new photo with an empty tag list.
///
/// # Errors
/// - `InvalidInput` for a blank caption.
/// - `DuplicateCaption` when the album already holds this caption.
pub fn add_photo<'a>(
    album: &'a mut Album,
    caption: &str,
    image: ImagePayload,
) -> MutationResult<&'a Photo> {
    require_non_blank(caption, "photo caption must not be blank")
        .map_err(|err| rejected("photo_add", err))?;
    if album.contains_caption(caption) {
        return Err(rejected(
            "photo_add",
            MutationError::DuplicateCaption {
                album: album.name().to_string(),
                caption: caption.to_string(),
            },
        ));
    }

    let bytes = image.len();
    album.push_photo(Photo::new(caption, image));
    info!(
        "event=photo_add module=mutation status=ok album={} caption={} bytes={}",
        sanitize_field(album.name()),
        sanitize_field(caption),
        bytes
    );
    let index = album.photo_count() - 1;
    Ok(&album.photos()[index])
}

/// Removes the first photo with this caption.
pub fn remove_photo(album: &mut Album, caption: &str) -> MutationResult<Photo> {
    let index = album
        .position_of(caption)
        .ok_or_else(|| rejected("photo_remove", photo_not_found(album, caption)))?;

    let removed = album.take_photo(index);
    info!(
        "event=photo_remove module=mutation status=ok album={} caption={}",
        sanitize_field(album.name()),
        sanitize_field(caption)
    );
    Ok(removed)
}

/// Changes a photo caption, keeping captions unique within the album.
pub fn rename_photo(album: &mut Album, old_caption: &str, new_caption: &str) -> MutationResult<()> {
    let index = album
        .position_of(old_caption)
        .ok_or_else(|| rejected("photo_rename", photo_not_found(album, old_caption)))?;
    require_non_blank(new_caption, "photo caption must not be blank")
        .map_err(|err| rejected("photo_rename", err))?;

    let collides = album
        .photos()
        .iter()
        .enumerate()
        .any(|(position, photo)| position != index && photo.has_caption(new_caption));
    if collides {
        return Err(rejected(
            "photo_rename",
            MutationError::DuplicateCaption {
                album: album.name().to_string(),
                caption: new_caption.to_string(),
            },
        ));
    }

    if let Some(photo) = album.photo_mut(old_caption) {
        photo.set_caption(new_caption.to_string());
    }
    info!(
        "event=photo_rename module=mutation status=ok album={} from={} to={}",
        sanitize_field(album.name()),
        sanitize_field(old_caption),
        sanitize_field(new_caption)
    );
    Ok(())
}

/// Appends an independent copy of a photo to another album.
///
/// The copy owns its own tag list; image bytes are shared. The source album
/// is never modified.
pub fn copy_photo(
    catalog: &mut Catalog,
    source_album: &str,
    caption: &str,
    dest_album: &str,
) -> MutationResult<()> {
    let transfer = plan_transfer(catalog, source_album, caption, dest_album)
        .map_err(|err| rejected("photo_copy", err))?;

    let copy = catalog.albums()[transfer.source_index].photos()[transfer.photo_index].clone();
    catalog.album_at_mut(transfer.dest_index).push_photo(copy);
    info!(
        "event=photo_copy module=mutation status=ok from={} to={} caption={}",
        sanitize_field(source_album),
        sanitize_field(dest_album),
        sanitize_field(caption)
    );
    Ok(())
}

/// Transfers a photo to another album.
///
/// All-or-nothing: the destination is validated before the source is
/// touched, so a rejected move leaves both albums unchanged.
pub fn move_photo(
    catalog: &mut Catalog,
    source_album: &str,
    caption: &str,
    dest_album: &str,
) -> MutationResult<()> {
    let transfer = plan_transfer(catalog, source_album, caption, dest_album)
        .map_err(|err| rejected("photo_move", err))?;

    let photo = catalog
        .album_at_mut(transfer.source_index)
        .take_photo(transfer.photo_index);
    catalog.album_at_mut(transfer.dest_index).push_photo(photo);
    info!(
        "event=photo_move module=mutation status=ok from={} to={} caption={}",
        sanitize_field(source_album),
        sanitize_field(dest_album),
        sanitize_field(caption)
    );
    Ok(())
}

/// Appends a tag to a photo.
///
/// # Errors
/// - `InvalidInput` when key or value is blank.
/// - `PhotoNotFound` when the caption is absent.
/// - `DuplicateTag` when an equal tag is already attached.
pub fn add_tag(album: &mut Album, caption: &str, tag: Tag) -> MutationResult<()> {
    require_non_blank(tag.key(), "tag key must not be blank")
        .and_then(|()| require_non_blank(tag.value(), "tag value must not be blank"))
        .map_err(|err| rejected("tag_add", err))?;

    let not_found = photo_not_found(album, caption);
    let album_name = sanitize_field(album.name());
    let Some(photo) = album.photo_mut(caption) else {
        return Err(rejected("tag_add", not_found));
    };
    if photo.has_tag(&tag) {
        return Err(rejected(
            "tag_add",
            MutationError::DuplicateTag {
                caption: caption.to_string(),
                tag,
            },
        ));
    }

    info!(
        "event=tag_add module=mutation status=ok album={} caption={} tag_key={}",
        album_name,
        sanitize_field(caption),
        sanitize_field(tag.key())
    );
    photo.push_tag(tag);
    Ok(())
}

/// Removes one exact tag from a photo.
pub fn remove_tag(album: &mut Album, caption: &str, tag: &Tag) -> MutationResult<()> {
    let not_found = photo_not_found(album, caption);
    let album_name = sanitize_field(album.name());
    let Some(photo) = album.photo_mut(caption) else {
        return Err(rejected("tag_remove", not_found));
    };
    if !photo.remove_tag(tag) {
        return Err(rejected(
            "tag_remove",
            MutationError::TagNotFound {
                caption: caption.to_string(),
                tag: tag.clone(),
            },
        ));
    }

    info!(
        "event=tag_remove module=mutation status=ok album={} caption={} tag_key={}",
        album_name,
        sanitize_field(caption),
        sanitize_field(tag.key())
    );
    Ok(())
}

/// Resolved positions for a validated copy/move.
struct Transfer {
    source_index: usize,
    photo_index: usize,
    dest_index: usize,
}

fn plan_transfer(
    catalog: &Catalog,
    source_album: &str,
    caption: &str,
    dest_album: &str,
) -> MutationResult<Transfer> {
    let source_index = catalog
        .position_of(source_album)
        .ok_or_else(|| MutationError::AlbumNotFound(source_album.to_string()))?;
    let source = &catalog.albums()[source_index];
    let photo_index = source
        .position_of(caption)
        .ok_or_else(|| photo_not_found(source, caption))?;

    let dest_index = catalog
        .position_of(dest_album)
        .ok_or_else(|| MutationError::AlbumNotFound(dest_album.to_string()))?;
    // Also covers copy/move into the source album itself.
    if catalog.albums()[dest_index].contains_caption(caption) {
        return Err(MutationError::DuplicateCaption {
            album: dest_album.to_string(),
            caption: caption.to_string(),
        });
    }

    Ok(Transfer {
        source_index,
        photo_index,
        dest_index,
    })
}

fn photo_not_found(album: &Album, caption: &str) -> MutationError {
    MutationError::PhotoNotFound {
        album: album.name().to_string(),
        caption: caption.to_string(),
    }
}

fn require_non_blank(value: &str, details: &'static str) -> MutationResult<()> {
    if value.trim().is_empty() {
        return Err(MutationError::InvalidInput(details));
    }
    Ok(())
}

fn rejected(event: &'static str, err: MutationError) -> MutationError {
    warn!(
        "event={} module=mutation status=rejected error_code={} error={}",
        event,
        err.code(),
        sanitize_field(&err.to_string())
    );
    err
}

#[cfg(test)]
mod tests {
    use super::{require_non_blank, MutationError};
    use crate::model::tag::Tag;

    #[test]
    fn blank_values_are_rejected_but_padding_is_kept() {
        assert_eq!(
            require_non_blank(" \t", "blank").unwrap_err(),
            MutationError::InvalidInput("blank")
        );
        assert!(require_non_blank(" a ", "blank").is_ok());
    }

    #[test]
    fn not_found_variants_are_grouped() {
        assert!(MutationError::AlbumNotFound("x".to_string()).is_not_found());
        assert!(MutationError::TagNotFound {
            caption: "a.jpg".to_string(),
            tag: Tag::new("person", "Alice"),
        }
        .is_not_found());
        assert!(!MutationError::DuplicateName("x".to_string()).is_not_found());
    }
}
