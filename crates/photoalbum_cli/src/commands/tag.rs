//! `tag` subcommands.

use anyhow::Result;
use photoalbum_core::{PhotoLibrary, SnapshotStore, Tag};

pub fn add<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    album: &str,
    caption: &str,
    key: &str,
    value: &str,
) -> Result<()> {
    let tag = Tag::new(key, value);
    let label = tag.to_string();
    library.add_tag(album, caption, tag)?;
    println!("Tagged {caption} with {label}");
    Ok(())
}

pub fn remove<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    album: &str,
    caption: &str,
    key: &str,
    value: &str,
) -> Result<()> {
    let tag = Tag::new(key, value);
    library.remove_tag(album, caption, &tag)?;
    println!("Removed tag {tag} from {caption}");
    Ok(())
}
