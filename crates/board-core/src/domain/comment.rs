use serde::Serialize;
use serde_json::Value;

use crate::error::DocumentError;

use super::now_timestamp;

/// A single comment on a post.
///
/// Immutable once constructed; comments carry no identity of their own and
/// are addressed only by position within their parent post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

impl Comment {
    /// Create a fresh comment stamped with the current local time.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            timestamp: now_timestamp(),
        }
    }

    /// Reconstruct a comment from a persisted document entry.
    ///
    /// All three fields are required; a missing or mistyped field makes the
    /// enclosing post entry malformed.
    pub fn from_document(value: &Value) -> Result<Self, DocumentError> {
        let obj = value.as_object().ok_or(DocumentError::NotAnObject)?;
        Ok(Self {
            author: str_field(obj, "author")?.to_owned(),
            content: str_field(obj, "content")?.to_owned(),
            timestamp: str_field(obj, "timestamp")?.to_owned(),
        })
    }
}

pub(super) fn str_field<'a>(
    obj: &'a serde_json::Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, DocumentError> {
    match obj.get(name) {
        None => Err(DocumentError::MissingField(name)),
        Some(value) => value.as_str().ok_or(DocumentError::InvalidField(name)),
    }
}
