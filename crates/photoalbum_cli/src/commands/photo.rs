//! `photo` subcommands.
//!
//! # Responsibility
//! - Read image files from disk and forward photo mutations.
//!
//! # Invariants
//! - A file is read completely before the catalog is touched.

use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use photoalbum_core::{ImagePayload, PhotoLibrary, SnapshotStore};

pub fn list<S: SnapshotStore>(library: &PhotoLibrary<S>, album_name: &str) -> Result<()> {
    let album = library
        .catalog()
        .album(album_name)
        .ok_or_else(|| anyhow!("album not found: {album_name}"))?;

    if album.photo_count() == 0 {
        println!("Album {} is empty.", album.name());
        return Ok(());
    }
    for photo in album.photos() {
        let tags: Vec<String> = photo.tags().iter().map(ToString::to_string).collect();
        println!(
            "{:<32} {:>10} B  {}",
            photo.caption(),
            photo.image().len(),
            tags.join(", ")
        );
    }
    Ok(())
}

pub fn add<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    album: &str,
    file: &Path,
    caption: Option<String>,
) -> Result<()> {
    let caption = match caption {
        Some(caption) => caption,
        None => match file.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => bail!("cannot derive a caption from {}", file.display()),
        },
    };
    let bytes =
        std::fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
    let size = bytes.len();

    library.add_photo(album, &caption, ImagePayload::new(bytes))?;
    println!("Added {caption} to {album} ({size} bytes)");
    Ok(())
}

pub fn remove<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    album: &str,
    caption: &str,
) -> Result<()> {
    library.remove_photo(album, caption)?;
    println!("Removed {caption} from {album}");
    Ok(())
}

pub fn rename<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    album: &str,
    caption: &str,
    new_caption: &str,
) -> Result<()> {
    library.rename_photo(album, caption, new_caption)?;
    println!("Renamed {caption} -> {new_caption} in {album}");
    Ok(())
}

pub fn copy<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    from: &str,
    caption: &str,
    to: &str,
) -> Result<()> {
    library.copy_photo(from, caption, to)?;
    println!("Copied {caption} from {from} to {to}");
    Ok(())
}

/// `move` is a keyword, hence the name.
pub fn relocate<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    from: &str,
    caption: &str,
    to: &str,
) -> Result<()> {
    library.move_photo(from, caption, to)?;
    println!("Moved {caption} from {from} to {to}");
    Ok(())
}
