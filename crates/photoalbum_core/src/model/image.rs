//! Opaque image payload.
//!
//! # Invariants
//! - Bytes are immutable once wrapped.
//! - Cloning shares the underlying buffer; pixel data is never deep-copied.
//! - Serialized form is a standard base64 string.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Raw image bytes handed over by the image source collaborator.
///
/// The core never decodes these bytes.
#[derive(Clone)]
pub struct ImagePayload {
    bytes: Arc<[u8]>,
}

impl ImagePayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::from(bytes.into()),
        }
    }

    /// Payload with no bytes, used when the image source produced nothing.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns whether both payloads point at the same buffer.
    pub fn shares_bytes_with(&self, other: &ImagePayload) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes)
    }
}

impl PartialEq for ImagePayload {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for ImagePayload {}

impl Debug for ImagePayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl From<Vec<u8>> for ImagePayload {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl From<&[u8]> for ImagePayload {
    fn from(value: &[u8]) -> Self {
        Self::new(value.to_vec())
    }
}

impl Serialize for ImagePayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(&self.bytes))
    }
}

impl<'de> Deserialize<'de> for ImagePayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|err| D::Error::custom(format!("invalid image payload: {err}")))?;
        Ok(Self::new(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::ImagePayload;

    #[test]
    fn clone_shares_buffer() {
        let original = ImagePayload::new(vec![1_u8, 2, 3]);
        let copy = original.clone();
        assert!(copy.shares_bytes_with(&original));
        assert_eq!(copy.as_bytes(), &[1, 2, 3]);
    }

    #[test]
    fn equal_content_from_separate_buffers_is_not_shared() {
        let left = ImagePayload::from(&b"abc"[..]);
        let right = ImagePayload::from(b"abc".to_vec());
        assert_eq!(left, right);
        assert!(!left.shares_bytes_with(&right));
    }

    #[test]
    fn serializes_as_base64_string() {
        let payload = ImagePayload::new(b"hi".to_vec());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!("aGk="));

        let decoded: ImagePayload = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn rejects_non_base64_input() {
        let err = serde_json::from_value::<ImagePayload>(serde_json::json!("%%%")).unwrap_err();
        assert!(err.to_string().contains("invalid image payload"));
    }
}
