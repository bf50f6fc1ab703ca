//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;

use board_core::Catalog;
use board_core::ports::PostStore;
use board_infra::JsonFileStore;

/// Shared application state.
///
/// The catalog sits behind one exclusive lock: every mutating handler holds
/// the write guard for its whole scan + mutate + save sequence, and the
/// listing handler takes the read guard.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    /// Build state around any store implementation.
    pub async fn new(store: Arc<dyn PostStore>) -> Self {
        let catalog = Catalog::load(store).await;
        tracing::info!(posts = catalog.len(), "catalog ready");
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Build state backed by the JSON persistence document at `path`.
    pub async fn from_file(path: &Path) -> Self {
        Self::new(Arc::new(JsonFileStore::new(path))).await
    }
}
