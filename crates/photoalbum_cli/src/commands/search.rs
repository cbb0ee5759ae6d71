//! `search` subcommand: prints one line per hit in catalog order.

use photoalbum_core::{PhotoLibrary, SnapshotStore, TagQuery};

pub fn run<S: SnapshotStore>(library: &PhotoLibrary<S>, person: &str, location: &str) {
    let query = TagQuery::new(person, location);
    if query.is_empty() {
        println!("Nothing to search for: pass --person and/or --location.");
        return;
    }

    let hits = library.search(&query);
    if hits.is_empty() {
        println!("No matching photos.");
        return;
    }
    for hit in &hits {
        println!("{:<24} {:<32} {}", hit.album, hit.caption, hit.matched_tag);
    }
    println!("\n{} photo(s)", hits.len());
}
