//! `album` subcommands.
//!
//! # Responsibility
//! - List albums through their summary label and forward album mutations.

use anyhow::Result;
use photoalbum_core::{Album, PhotoLibrary, SnapshotStore};

pub fn list<S: SnapshotStore>(library: &PhotoLibrary<S>) {
    let albums = library.catalog().albums();
    if albums.is_empty() {
        println!("No albums.");
        return;
    }
    for album in albums {
        println!("{}", list_line(album));
    }
}

/// Album summary folded onto one line.
fn list_line(album: &Album) -> String {
    album.summary().replace('\n', "  ")
}

pub fn add<S: SnapshotStore>(library: &mut PhotoLibrary<S>, name: &str) -> Result<()> {
    library.add_album(name)?;
    println!("Created album {name}");
    Ok(())
}

pub fn remove<S: SnapshotStore>(library: &mut PhotoLibrary<S>, name: &str) -> Result<()> {
    let album = library.remove_album(name)?;
    println!(
        "Deleted album {} ({} photo(s))",
        album.name(),
        album.photo_count()
    );
    Ok(())
}

pub fn rename<S: SnapshotStore>(
    library: &mut PhotoLibrary<S>,
    old_name: &str,
    new_name: &str,
) -> Result<()> {
    library.rename_album(old_name, new_name)?;
    println!("Renamed album {old_name} -> {new_name}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::list_line;
    use photoalbum_core::service::mutation::add_photo;
    use photoalbum_core::{Album, ImagePayload};

    #[test]
    fn list_line_uses_singular_for_one_photo() {
        let mut album = Album::new("trip");
        assert_eq!(list_line(&album), "trip  0 photos");

        add_photo(&mut album, "a.jpg", ImagePayload::empty()).unwrap();
        assert_eq!(list_line(&album), "trip  1 photo");
    }
}
