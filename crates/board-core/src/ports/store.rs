use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Persistence port for the catalog.
///
/// The whole post sequence is the unit of persistence: every save rewrites
/// the full document, and load reads it back once at startup.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Read the persisted post sequence, in creation order.
    ///
    /// Load is best-effort by contract: an absent or unparseable document
    /// yields an empty sequence, and a malformed individual entry is
    /// skipped (with a logged warning) without affecting the rest. It
    /// therefore never fails.
    async fn load(&self) -> Vec<Post>;

    /// Overwrite the persisted document with the given sequence.
    ///
    /// `posts` is in creation order; implementations decide the document
    /// layout (the JSON file store writes newest first).
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;
}
