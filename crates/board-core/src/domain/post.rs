use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::error::DocumentError;

use super::comment::str_field;
use super::{Comment, now_timestamp};

/// Whether a lost-and-found post reports a lost or a found item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Lost,
    Found,
}

impl ItemStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
        }
    }
}

/// The closed set of post variants.
///
/// The kind tag is the serialization discriminator; for lost/found posts it
/// doubles as the `itemStatus` value, a redundancy inherited from the wire
/// format this backend serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostKind {
    General,
    LostAndFound(ItemStatus),
    HelpRequest,
    Events,
    Academic,
}

impl PostKind {
    /// Map a requested kind tag to a variant.
    ///
    /// This is the single dispatch point for both fresh creation and
    /// reload. Unrecognized tags (including the empty string) fall back to
    /// `General` and are never rejected.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "lost" => PostKind::LostAndFound(ItemStatus::Lost),
            "found" => PostKind::LostAndFound(ItemStatus::Found),
            "help" => PostKind::HelpRequest,
            "events" => PostKind::Events,
            "academic" => PostKind::Academic,
            _ => PostKind::General,
        }
    }

    /// The serialized discriminator for this variant.
    pub fn tag(self) -> &'static str {
        match self {
            PostKind::General => "general",
            PostKind::LostAndFound(status) => status.as_str(),
            PostKind::HelpRequest => "help",
            PostKind::Events => "events",
            PostKind::Academic => "academic",
        }
    }
}

/// A post on the board.
///
/// Identity is assigned by the catalog and never changes; likes floor at
/// zero; the comment sequence only grows, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub author: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub kind: PostKind,
}

impl Post {
    /// Create a fresh post: timestamp = now, no likes, no comments.
    pub fn new(id: u64, author: impl Into<String>, content: impl Into<String>, kind: PostKind) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
            timestamp: now_timestamp(),
            likes: 0,
            comments: Vec::new(),
            kind,
        }
    }

    /// Reconstruct a post from one element of the persistence document.
    ///
    /// Required: `type`, `id`, `author`, `content`, `timestamp`. `likes`
    /// defaults to 0 when absent but is malformed when present with the
    /// wrong type. `comments` is read only when present as an array, and
    /// then every comment must be complete. Timestamp and likes are
    /// restored verbatim; the fresh-creation defaults never apply here.
    pub fn from_document(value: &Value) -> Result<Self, DocumentError> {
        let obj = value.as_object().ok_or(DocumentError::NotAnObject)?;

        let kind = PostKind::from_tag(str_field(obj, "type")?);
        let id = match obj.get("id") {
            None => return Err(DocumentError::MissingField("id")),
            Some(value) => value.as_u64().ok_or(DocumentError::InvalidField("id"))?,
        };
        let author = str_field(obj, "author")?.to_owned();
        let content = str_field(obj, "content")?.to_owned();
        let timestamp = str_field(obj, "timestamp")?.to_owned();

        let likes = match obj.get("likes") {
            None => 0,
            Some(value) => value
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or(DocumentError::InvalidField("likes"))?,
        };

        let mut comments = Vec::new();
        if let Some(entries) = obj.get("comments").and_then(Value::as_array) {
            for entry in entries {
                comments.push(Comment::from_document(entry)?);
            }
        }

        Ok(Self {
            id,
            author,
            content,
            timestamp,
            likes,
            comments,
            kind,
        })
    }
}

// One serialized shape serves both the persistence document and HTTP
// responses: the common fields, the kind tag under `type`, and the
// kind-specific `itemStatus` for lost/found.
impl Serialize for Post {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = matches!(self.kind, PostKind::LostAndFound(_)) as usize;
        let mut map = serializer.serialize_map(Some(7 + extra))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("author", &self.author)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry("likes", &self.likes)?;
        map.serialize_entry("type", self.kind.tag())?;
        map.serialize_entry("comments", &self.comments)?;
        if let PostKind::LostAndFound(status) = self.kind {
            map.serialize_entry("itemStatus", status.as_str())?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_dispatch_covers_every_tag() {
        assert_eq!(PostKind::from_tag("lost"), PostKind::LostAndFound(ItemStatus::Lost));
        assert_eq!(PostKind::from_tag("found"), PostKind::LostAndFound(ItemStatus::Found));
        assert_eq!(PostKind::from_tag("help"), PostKind::HelpRequest);
        assert_eq!(PostKind::from_tag("events"), PostKind::Events);
        assert_eq!(PostKind::from_tag("academic"), PostKind::Academic);
        assert_eq!(PostKind::from_tag("general"), PostKind::General);
    }

    #[test]
    fn unknown_and_empty_tags_fall_back_to_general() {
        assert_eq!(PostKind::from_tag(""), PostKind::General);
        assert_eq!(PostKind::from_tag("marketplace"), PostKind::General);
    }

    #[test]
    fn lost_post_serializes_with_item_status() {
        let post = Post::new(1, "alice", "lost my keys", PostKind::from_tag("lost"));
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["type"], "lost");
        assert_eq!(value["itemStatus"], "lost");
        assert_eq!(value["likes"], 0);
        assert_eq!(value["comments"], json!([]));
    }

    #[test]
    fn general_post_serializes_without_item_status() {
        let post = Post::new(2, "bob", "hello", PostKind::General);
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["type"], "general");
        assert!(value.get("itemStatus").is_none());
    }

    #[test]
    fn from_document_restores_state_verbatim() {
        let entry = json!({
            "id": 7,
            "author": "carol",
            "content": "study group tonight",
            "timestamp": "2023-11-05 18:30:00",
            "likes": 4,
            "type": "academic",
            "comments": [
                {"author": "dan", "content": "count me in", "timestamp": "2023-11-05 19:00:00"}
            ]
        });
        let post = Post::from_document(&entry).unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.timestamp, "2023-11-05 18:30:00");
        assert_eq!(post.likes, 4);
        assert_eq!(post.kind, PostKind::Academic);
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].author, "dan");
    }

    #[test]
    fn from_document_defaults_missing_likes_to_zero() {
        let entry = json!({
            "id": 1, "author": "a", "content": "c",
            "timestamp": "2023-01-01 00:00:00", "type": "help"
        });
        let post = Post::from_document(&entry).unwrap();
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());
    }

    #[test]
    fn from_document_dispatches_unknown_type_to_general() {
        let entry = json!({
            "id": 1, "author": "a", "content": "c",
            "timestamp": "2023-01-01 00:00:00", "type": "weird"
        });
        assert_eq!(Post::from_document(&entry).unwrap().kind, PostKind::General);
    }

    #[test]
    fn from_document_rejects_incomplete_entries() {
        let no_type = json!({"id": 1, "author": "a", "content": "c", "timestamp": "t"});
        assert!(matches!(
            Post::from_document(&no_type),
            Err(DocumentError::MissingField("type"))
        ));

        let bad_likes = json!({
            "id": 1, "author": "a", "content": "c",
            "timestamp": "t", "type": "general", "likes": "many"
        });
        assert!(matches!(
            Post::from_document(&bad_likes),
            Err(DocumentError::InvalidField("likes"))
        ));

        // likes beyond the counter's range must not truncate silently
        let oversized_likes = json!({
            "id": 1, "author": "a", "content": "c",
            "timestamp": "t", "type": "general", "likes": u64::from(u32::MAX) + 1
        });
        assert!(matches!(
            Post::from_document(&oversized_likes),
            Err(DocumentError::InvalidField("likes"))
        ));

        let bad_comment = json!({
            "id": 1, "author": "a", "content": "c",
            "timestamp": "t", "type": "general",
            "comments": [{"author": "x"}]
        });
        assert!(Post::from_document(&bad_comment).is_err());

        assert!(matches!(
            Post::from_document(&json!("not an object")),
            Err(DocumentError::NotAnObject)
        ));
    }
}
