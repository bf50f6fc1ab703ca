use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::Post;
use board_core::error::StoreError;
use board_core::ports::PostStore;

/// In-memory store holding the last saved snapshot.
///
/// Used by tests and as the fallback when no data file is configured.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: RwLock<Vec<Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn load(&self) -> Vec<Post> {
        self.snapshot.read().await.clone()
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        *self.snapshot.write().await = posts.to_vec();
        Ok(())
    }
}
