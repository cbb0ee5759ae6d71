//! Key/value annotation attached to a photo.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Immutable free-form tag, e.g. `person=Alice` or `location=Lisbon`.
///
/// Two tags are equal iff both key and value match exactly (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::Tag;

    #[test]
    fn equality_is_case_sensitive_on_both_fields() {
        assert_eq!(Tag::new("person", "Alice"), Tag::new("person", "Alice"));
        assert_ne!(Tag::new("person", "Alice"), Tag::new("person", "alice"));
        assert_ne!(Tag::new("Person", "Alice"), Tag::new("person", "Alice"));
    }

    #[test]
    fn display_renders_key_value_pair() {
        assert_eq!(Tag::new("location", "Lisbon").to_string(), "location=Lisbon");
    }
}
