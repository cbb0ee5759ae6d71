use photoalbum_core::service::mutation::{add_album, add_photo, move_photo};
use photoalbum_core::{
    FileSnapshotStore, ImagePayload, LibraryError, MemorySnapshotStore, MutationError,
    PhotoLibrary, SnapshotStore, StoreError, Tag, TagQuery,
};

#[test]
fn open_creates_and_persists_default_catalog_on_first_run() {
    let store = MemorySnapshotStore::new();
    let library = PhotoLibrary::open(&store).unwrap();

    assert_eq!(library.catalog().album_names(), vec!["stock"]);
    assert_eq!(store.save_count(), 1);
    assert_eq!(store.load().unwrap().album_names(), vec!["stock"]);
}

#[test]
fn open_loads_existing_snapshot_without_saving() {
    let store = MemorySnapshotStore::new();
    {
        let mut library = PhotoLibrary::open(&store).unwrap();
        library.add_album("trip").unwrap();
    }
    let saves_before = store.save_count();

    let library = PhotoLibrary::open(&store).unwrap();
    assert_eq!(library.catalog().album_names(), vec!["stock", "trip"]);
    assert_eq!(store.save_count(), saves_before);
}

#[test]
fn open_propagates_corrupt_snapshot() {
    let store = MemorySnapshotStore::with_snapshot(b"{".to_vec());
    let err = PhotoLibrary::open(&store).err().unwrap();
    assert!(matches!(err, StoreError::Decode(_)));
}

#[test]
fn successful_mutations_persist_and_rejections_do_not() {
    let store = MemorySnapshotStore::new();
    let mut library = PhotoLibrary::open(&store).unwrap();
    let baseline = store.save_count();

    library
        .add_photo("stock", "sunset.jpg", ImagePayload::new(vec![1_u8]))
        .unwrap();
    assert_eq!(store.save_count(), baseline + 1);

    let err = library
        .add_photo("stock", "sunset.jpg", ImagePayload::new(vec![2_u8]))
        .unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Mutation(MutationError::DuplicateCaption { .. })
    ));
    let err = library.add_album("stock").unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Mutation(MutationError::DuplicateName(_))
    ));
    assert_eq!(store.save_count(), baseline + 1);
}

#[test]
fn photo_operations_on_missing_album_are_not_found() {
    let store = MemorySnapshotStore::new();
    let mut library = PhotoLibrary::open(&store).unwrap();

    let err = library
        .add_photo("nope", "a.jpg", ImagePayload::empty())
        .unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Mutation(MutationError::AlbumNotFound(ref name)) if name == "nope"
    ));
    let err = library.remove_photo("nope", "a.jpg").unwrap_err();
    assert!(matches!(err, LibraryError::Mutation(ref inner) if inner.is_not_found()));
}

#[test]
fn full_session_round_trips_through_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");

    {
        let mut library = PhotoLibrary::open(FileSnapshotStore::new(&path)).unwrap();
        library.add_album("X").unwrap();
        library.add_album("Y").unwrap();
        library
            .add_photo("X", "a.jpg", ImagePayload::new(b"aaa".to_vec()))
            .unwrap();
        library
            .add_tag("X", "a.jpg", Tag::new("person", "Alice"))
            .unwrap();
        library.copy_photo("X", "a.jpg", "Y").unwrap();
        library.rename_photo("Y", "a.jpg", "a-copy.jpg").unwrap();
        library.move_photo("Y", "a-copy.jpg", "stock").unwrap();
        library.rename_album("X", "Friends").unwrap();
        library.remove_album("Y").unwrap();
    }

    let library = PhotoLibrary::open(FileSnapshotStore::new(&path)).unwrap();
    let catalog = library.catalog();
    assert_eq!(catalog.album_names(), vec!["stock", "Friends"]);
    let moved = catalog.album("stock").unwrap().find_photo("a-copy.jpg").unwrap();
    assert_eq!(moved.tags(), &[Tag::new("person", "Alice")]);
    assert_eq!(moved.image().as_bytes(), b"aaa");

    let hits = library.search(&TagQuery::new("Alice", ""));
    let captions: Vec<&str> = hits.iter().map(|hit| hit.caption.as_str()).collect();
    assert_eq!(captions, vec!["a-copy.jpg", "a.jpg"]);
}

#[test]
fn failed_save_keeps_in_memory_change() {
    let dir = tempfile::tempdir().unwrap();
    // Snapshot path points at a directory, so every save fails.
    let store = FileSnapshotStore::new(dir.path());
    let mut library = PhotoLibrary::from_catalog(Default::default(), store);

    let err = library.add_album("kept").unwrap_err();
    assert!(matches!(err, LibraryError::Store(StoreError::Io { .. })));
    assert_eq!(library.catalog().album_names(), vec!["kept"]);
    assert!(library.save().is_err());
}

#[test]
fn batch_persists_once_and_rolls_back_on_failure() {
    let store = MemorySnapshotStore::new();
    let mut library = PhotoLibrary::open(&store).unwrap();
    let baseline = store.save_count();

    library
        .batch(|catalog| {
            add_album(catalog, "X")?;
            add_album(catalog, "Y")?;
            let album = catalog
                .album_mut("X")
                .ok_or_else(|| MutationError::AlbumNotFound("X".to_string()))?;
            add_photo(album, "a.jpg", ImagePayload::empty())?;
            Ok(())
        })
        .unwrap();
    assert_eq!(store.save_count(), baseline + 1);

    let err = library
        .batch(|catalog| {
            move_photo(catalog, "X", "a.jpg", "Y")?;
            add_album(catalog, "X")?;
            Ok(())
        })
        .unwrap_err();
    assert!(matches!(
        err,
        LibraryError::Mutation(MutationError::DuplicateName(_))
    ));
    assert_eq!(store.save_count(), baseline + 1);
    assert!(library.catalog().album("X").unwrap().contains_caption("a.jpg"));
    assert_eq!(library.catalog().album("Y").unwrap().photo_count(), 0);
}

#[test]
fn search_never_persists() {
    let store = MemorySnapshotStore::new();
    let mut library = PhotoLibrary::open(&store).unwrap();
    library
        .add_photo("stock", "a.jpg", ImagePayload::empty())
        .unwrap();
    library
        .add_tag("stock", "a.jpg", Tag::new("location", "Oslo"))
        .unwrap();
    let saves = store.save_count();

    assert_eq!(library.search(&TagQuery::new("", "Oslo")).len(), 1);
    assert!(library.search(&TagQuery::new("", "")).is_empty());
    assert_eq!(store.save_count(), saves);
}
