use std::sync::Arc;

use storage::repository::KeyValueStore;
use storage::{COMPLETED_RESOURCES_KEY, CURRENT_RESOURCE_INDEX_KEY, ProgressRecord};
use trail_core::model::ProgressChange;

/// Key-value persistence that never fails.
///
/// Reads that fault are reported as absent and writes that fault become no-ops. Every
/// fault is logged; none reaches the caller.
#[derive(Clone)]
pub struct PersistenceAdapter {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceAdapter {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        match self.store.get(key).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key, error = %err, "storage read failed, treating as absent");
                None
            }
        }
    }

    pub async fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.store.set(key, value).await {
            tracing::warn!(key, error = %err, "storage write failed, dropping value");
        }
    }

    pub async fn remove(&self, key: &str) {
        if let Err(err) = self.store.remove(key).await {
            tracing::warn!(key, error = %err, "storage remove failed");
        }
    }

    /// Read both progress entries.
    pub async fn load_progress(&self) -> ProgressRecord {
        ProgressRecord {
            current_resource_index: self.get(CURRENT_RESOURCE_INDEX_KEY).await,
            completed_resources: self.get(COMPLETED_RESOURCES_KEY).await,
        }
    }

    /// Write one progress change through to the store.
    pub async fn write_change(&self, change: &ProgressChange) {
        match change {
            ProgressChange::CurrentIndex(id) => {
                self.set(CURRENT_RESOURCE_INDEX_KEY, &ProgressRecord::encode_current(*id))
                    .await;
            }
            ProgressChange::CompletedSet(ids) => match ProgressRecord::encode_completed(ids) {
                Ok(raw) => self.set(COMPLETED_RESOURCES_KEY, &raw).await,
                Err(err) => {
                    tracing::warn!(error = %err, "could not encode completed resources");
                }
            },
            ProgressChange::Cleared => {
                self.remove(CURRENT_RESOURCE_INDEX_KEY).await;
                self.remove(COMPLETED_RESOURCES_KEY).await;
            }
        }
    }
}
