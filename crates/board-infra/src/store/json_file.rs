//! The persistence document: a single JSON array on disk, rewritten in full
//! after every mutation and read once at startup.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use board_core::domain::Post;
use board_core::error::StoreError;
use board_core::ports::PostStore;

/// Flat-file store backed by one JSON array document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load(&self) -> Vec<Post> {
        let raw = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no persistence document, starting fresh");
                return Vec::new();
            }
            Err(err) => {
                tracing::error!(%err, path = %self.path.display(), "could not read persistence document, starting fresh");
                return Vec::new();
            }
        };

        let document: Value = match serde_json::from_slice(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(%err, path = %self.path.display(), "could not parse persistence document, starting fresh");
                return Vec::new();
            }
        };
        let Some(entries) = document.as_array() else {
            tracing::error!(path = %self.path.display(), "persistence document is not an array, starting fresh");
            return Vec::new();
        };

        // Each entry is reconstructed independently: one malformed entry
        // must not take the rest of the catalog down with it.
        let mut posts = Vec::with_capacity(entries.len());
        for entry in entries {
            match Post::from_document(entry) {
                Ok(post) => posts.push(post),
                Err(err) => {
                    tracing::warn!(%err, "skipping malformed post entry in persistence document");
                }
            }
        }

        // The document is written newest first; internal order is creation
        // order, so reverse it back.
        posts.reverse();

        tracing::info!(
            count = posts.len(),
            path = %self.path.display(),
            "loaded posts from persistence document"
        );
        posts
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let newest_first: Vec<&Post> = posts.iter().rev().collect();
        let body = serde_json::to_vec_pretty(&newest_first)?;
        fs::write(&self.path, body).await?;
        tracing::debug!(
            count = posts.len(),
            path = %self.path.display(),
            "persisted posts"
        );
        Ok(())
    }
}
