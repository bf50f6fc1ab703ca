//! The catalog - the in-memory owner of all posts and the unit of
//! consistency for persistence.

use std::sync::Arc;

use crate::domain::{Comment, Post, PostKind};
use crate::error::DomainError;
use crate::ports::PostStore;

/// Owns the full post sequence (in creation order) and assigns identities.
///
/// Every mutation runs scan + mutate + full document rewrite before
/// returning; callers needing concurrent access wrap the catalog in a
/// single exclusive lock around each operation. Accessors hand out owned
/// clones, never references that outlive the call.
pub struct Catalog {
    posts: Vec<Post>,
    next_id: u64,
    store: Arc<dyn PostStore>,
}

impl Catalog {
    /// Restore the catalog from the store and recompute the id counter.
    pub async fn load(store: Arc<dyn PostStore>) -> Self {
        let posts = store.load().await;
        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        Self {
            posts,
            next_id,
            store,
        }
    }

    /// All posts, newest created first.
    pub fn list_all(&self) -> Vec<Post> {
        self.posts.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Create a new post of the requested kind.
    ///
    /// The kind tag is not validated: unrecognized tags become general
    /// posts. Author and content are taken as-is; non-emptiness is the
    /// request layer's contract, not the catalog's.
    pub async fn create(&mut self, author: &str, content: &str, kind: &str) -> Post {
        let id = self.next_id;
        self.next_id += 1;

        let post = Post::new(id, author, content, PostKind::from_tag(kind));
        let view = post.clone();
        self.posts.push(post);
        self.persist().await;
        view
    }

    /// Append a comment to the post with the given id.
    pub async fn add_comment(
        &mut self,
        post_id: u64,
        author: &str,
        content: &str,
    ) -> Result<Comment, DomainError> {
        let post = self.find_mut(post_id)?;
        let comment = Comment::new(author, content);
        post.comments.push(comment.clone());
        self.persist().await;
        Ok(comment)
    }

    /// Increment the like count of the post with the given id.
    pub async fn like(&mut self, post_id: u64) -> Result<Post, DomainError> {
        let post = self.find_mut(post_id)?;
        post.likes += 1;
        let view = post.clone();
        self.persist().await;
        Ok(view)
    }

    /// Decrement the like count, flooring at zero (no error at zero).
    pub async fn unlike(&mut self, post_id: u64) -> Result<Post, DomainError> {
        let post = self.find_mut(post_id)?;
        post.likes = post.likes.saturating_sub(1);
        let view = post.clone();
        self.persist().await;
        Ok(view)
    }

    fn find_mut(&mut self, post_id: u64) -> Result<&mut Post, DomainError> {
        self.posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(DomainError::PostNotFound(post_id))
    }

    /// Rewrite the whole document. A write failure is logged and swallowed:
    /// the mutation stands in memory and the caller is not told (see
    /// DESIGN.md).
    async fn persist(&self) {
        if let Err(err) = self.store.save(&self.posts).await {
            tracing::error!(%err, "failed to persist catalog; continuing with in-memory state");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use async_trait::async_trait;

    /// Store stub: loads a fixed sequence, accepts every save.
    struct FixedStore(Vec<Post>);

    #[async_trait]
    impl PostStore for FixedStore {
        async fn load(&self) -> Vec<Post> {
            self.0.clone()
        }

        async fn save(&self, _posts: &[Post]) -> Result<(), StoreError> {
            Ok(())
        }
    }

    /// Store stub whose saves always fail.
    struct BrokenStore;

    #[async_trait]
    impl PostStore for BrokenStore {
        async fn load(&self) -> Vec<Post> {
            Vec::new()
        }

        async fn save(&self, _posts: &[Post]) -> Result<(), StoreError> {
            Err(StoreError::Write(std::io::Error::other("disk gone")))
        }
    }

    async fn empty_catalog() -> Catalog {
        Catalog::load(Arc::new(FixedStore(Vec::new()))).await
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let mut catalog = empty_catalog().await;
        assert_eq!(catalog.create("a", "first", "general").await.id, 1);
        assert_eq!(catalog.create("b", "second", "help").await.id, 2);
        assert_eq!(catalog.create("c", "third", "events").await.id, 3);
    }

    #[tokio::test]
    async fn next_id_is_recomputed_from_loaded_posts() {
        let loaded = vec![
            Post::new(3, "a", "x", PostKind::General),
            Post::new(7, "b", "y", PostKind::Academic),
        ];
        let mut catalog = Catalog::load(Arc::new(FixedStore(loaded))).await;
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.create("c", "z", "general").await.id, 8);
    }

    #[tokio::test]
    async fn unknown_kind_falls_back_to_general() {
        let mut catalog = empty_catalog().await;
        assert_eq!(catalog.create("a", "x", "").await.kind, PostKind::General);
        assert_eq!(
            catalog.create("a", "x", "marketplace").await.kind,
            PostKind::General
        );
    }

    #[tokio::test]
    async fn list_all_is_newest_first() {
        let mut catalog = empty_catalog().await;
        catalog.create("a", "first", "general").await;
        catalog.create("b", "second", "general").await;
        catalog.create("c", "third", "general").await;

        let ids: Vec<u64> = catalog.list_all().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn unlike_floors_at_zero() {
        let mut catalog = empty_catalog().await;
        let post = catalog.create("a", "x", "general").await;
        assert_eq!(catalog.unlike(post.id).await.unwrap().likes, 0);
    }

    #[tokio::test]
    async fn mutations_on_missing_posts_report_not_found() {
        let mut catalog = empty_catalog().await;
        assert!(matches!(
            catalog.like(42).await,
            Err(DomainError::PostNotFound(42))
        ));
        assert!(matches!(
            catalog.unlike(42).await,
            Err(DomainError::PostNotFound(42))
        ));
        assert!(matches!(
            catalog.add_comment(42, "a", "c").await,
            Err(DomainError::PostNotFound(42))
        ));
    }

    #[tokio::test]
    async fn persistence_failure_does_not_fail_the_mutation() {
        let mut catalog = Catalog::load(Arc::new(BrokenStore)).await;
        let post = catalog.create("a", "x", "general").await;
        assert_eq!(post.id, 1);
        assert_eq!(catalog.like(post.id).await.unwrap().likes, 1);
    }

    #[tokio::test]
    async fn lost_keys_scenario() {
        let mut catalog = empty_catalog().await;

        let post = catalog.create("alice", "lost my keys", "lost").await;
        assert_eq!(post.id, 1);
        assert_eq!(post.kind.tag(), "lost");
        assert_eq!(post.likes, 0);

        assert_eq!(catalog.like(1).await.unwrap().likes, 1);
        assert_eq!(catalog.unlike(1).await.unwrap().likes, 0);
        assert_eq!(catalog.unlike(1).await.unwrap().likes, 0);

        let comment = catalog.add_comment(1, "bob", "found them!").await.unwrap();
        assert_eq!(comment.author, "bob");
        let posts = catalog.list_all();
        assert_eq!(posts[0].comments.len(), 1);

        assert!(matches!(
            catalog.add_comment(999, "eve", "?").await,
            Err(DomainError::PostNotFound(999))
        ));
    }
}
