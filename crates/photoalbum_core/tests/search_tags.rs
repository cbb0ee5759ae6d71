use photoalbum_core::service::mutation::{add_album, add_photo, add_tag, copy_photo};
use photoalbum_core::{search, Catalog, ImagePayload, Tag, TagQuery};

fn tagged_catalog(entries: &[(&str, &str, &[(&str, &str)])]) -> Catalog {
    let mut catalog = Catalog::new();
    for (album_name, caption, tags) in entries {
        if catalog.album(album_name).is_none() {
            add_album(&mut catalog, album_name).unwrap();
        }
        let album = catalog.album_mut(album_name).unwrap();
        add_photo(album, caption, ImagePayload::empty()).unwrap();
        for (key, value) in *tags {
            add_tag(album, caption, Tag::new(*key, *value)).unwrap();
        }
    }
    catalog
}

fn hit_captions(catalog: &Catalog, person: &str, location: &str) -> Vec<String> {
    search(catalog, &TagQuery::new(person, location))
        .into_iter()
        .map(|hit| hit.caption)
        .collect()
}

#[test]
fn person_query_finds_tagged_photo() {
    let catalog = tagged_catalog(&[
        ("X", "a.jpg", &[("person", "Alice")]),
        ("X", "b.jpg", &[("person", "Bob")]),
    ]);

    let hits = search(&catalog, &TagQuery::new("Alice", ""));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].album, "X");
    assert_eq!(hits[0].caption, "a.jpg");
    assert_eq!(hits[0].matched_tag, Tag::new("person", "Alice"));
}

#[test]
fn empty_queries_return_nothing() {
    let catalog = tagged_catalog(&[("X", "a.jpg", &[("person", "Alice")])]);
    assert!(hit_captions(&catalog, "", "").is_empty());
}

#[test]
fn matching_is_case_sensitive_substring() {
    let catalog = tagged_catalog(&[
        ("X", "a.jpg", &[("person", "Alice Smith")]),
        ("X", "b.jpg", &[("person", "alice")]),
    ]);

    assert_eq!(hit_captions(&catalog, "lice", ""), vec!["a.jpg", "b.jpg"]);
    assert_eq!(hit_captions(&catalog, "Ali", ""), vec!["a.jpg"]);
}

#[test]
fn either_term_matches_any_tag_value_regardless_of_key() {
    let catalog = tagged_catalog(&[
        ("X", "a.jpg", &[("location", "Paris")]),
        ("X", "b.jpg", &[("person", "Bob"), ("location", "Rome")]),
        ("Y", "c.jpg", &[("person", "Paris Hilton")]),
        ("Y", "d.jpg", &[("person", "Carol")]),
    ]);

    assert_eq!(
        hit_captions(&catalog, "Carol", "Rome"),
        vec!["b.jpg", "d.jpg"]
    );
    assert_eq!(hit_captions(&catalog, "", "Paris"), vec!["a.jpg", "c.jpg"]);
}

#[test]
fn photo_with_many_matching_tags_appears_once() {
    let catalog = tagged_catalog(&[(
        "X",
        "a.jpg",
        &[("person", "Ann"), ("person", "Anna"), ("location", "Annecy")],
    )]);

    let hits = search(&catalog, &TagQuery::new("Ann", "Ann"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].matched_tag, Tag::new("person", "Ann"));
}

#[test]
fn results_follow_album_then_photo_order() {
    let catalog = tagged_catalog(&[
        ("B", "b2.jpg", &[("person", "Zoe")]),
        ("B", "b1.jpg", &[("person", "Zoe")]),
        ("A", "a1.jpg", &[("person", "Zoe")]),
    ]);

    assert_eq!(
        hit_captions(&catalog, "Zoe", ""),
        vec!["b2.jpg", "b1.jpg", "a1.jpg"]
    );
}

#[test]
fn copies_with_same_caption_are_reported_once() {
    let mut catalog = tagged_catalog(&[("X", "a.jpg", &[("person", "Alice")])]);
    add_album(&mut catalog, "Y").unwrap();
    copy_photo(&mut catalog, "X", "a.jpg", "Y").unwrap();

    let hits = search(&catalog, &TagQuery::new("Alice", ""));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].album, "X");
}

#[test]
fn search_does_not_mutate_catalog() {
    let catalog = tagged_catalog(&[("X", "a.jpg", &[("person", "Alice")])]);
    let before = serde_json::to_value(&catalog).unwrap();

    let _ = search(&catalog, &TagQuery::new("Alice", "Paris"));
    assert_eq!(serde_json::to_value(&catalog).unwrap(), before);
}
