//! Tag-substring search across the catalog.
//!
//! # Invariants
//! - A photo matches when any of its tag values contains a non-empty person
//!   or location query (case-sensitive substring).
//! - Tag scanning stops at the first matching tag of each photo.
//! - Results follow album order, then photo order.
//! - Results are deduplicated by caption; the first occurrence wins.
//! - A query with neither term set returns nothing.

use crate::logging::sanitize_field;
use crate::model::catalog::Catalog;
use crate::model::tag::Tag;
use log::debug;
use std::collections::HashSet;

/// Person/location search terms. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    person: Option<String>,
    location: Option<String>,
}

impl TagQuery {
    pub fn new(person: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            person: non_empty(person.into()),
            location: non_empty(location.into()),
        }
    }

    pub fn person(&self) -> Option<&str> {
        self.person.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns whether neither term is set.
    pub fn is_empty(&self) -> bool {
        self.person.is_none() && self.location.is_none()
    }

    fn matches(&self, value: &str) -> bool {
        let contains = |term: &Option<String>| term.as_deref().is_some_and(|t| value.contains(t));
        contains(&self.person) || contains(&self.location)
    }
}

/// One matching photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Album holding the photo.
    pub album: String,
    pub caption: String,
    /// First tag of the photo that satisfied the query.
    pub matched_tag: Tag,
}

/// Returns photos whose tag values contain either query term.
pub fn search(catalog: &Catalog, query: &TagQuery) -> Vec<SearchHit> {
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen_captions = HashSet::<&str>::new();
    let mut hits = Vec::new();
    for album in catalog.albums() {
        for photo in album.photos() {
            let Some(tag) = photo.tags().iter().find(|tag| query.matches(tag.value())) else {
                continue;
            };
            if !seen_captions.insert(photo.caption()) {
                continue;
            }
            hits.push(SearchHit {
                album: album.name().to_string(),
                caption: photo.caption().to_string(),
                matched_tag: tag.clone(),
            });
        }
    }

    debug!(
        "event=tag_search module=search status=ok person={} location={} hits={}",
        sanitize_field(query.person().unwrap_or_default()),
        sanitize_field(query.location().unwrap_or_default()),
        hits.len()
    );
    hits
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::TagQuery;

    #[test]
    fn empty_terms_are_absent_but_whitespace_is_kept() {
        let query = TagQuery::new("", " ");
        assert_eq!(query.person(), None);
        assert_eq!(query.location(), Some(" "));
        assert!(TagQuery::new("", "").is_empty());
    }

    #[test]
    fn either_term_can_match_a_value() {
        let query = TagQuery::new("Ali", "Lis");
        assert!(query.matches("Alice"));
        assert!(query.matches("Lisbon"));
        assert!(!query.matches("alice"));
    }
}
