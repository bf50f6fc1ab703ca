//! Data Transfer Objects - request types for the API.

use serde::{Deserialize, Serialize};

/// Request to create a new post.
///
/// `type` is the post kind tag; unrecognized values are accepted and fall
/// back to a general post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Request to add a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub content: String,
}
