//! Persisted shape of learner progress.
//!
//! Two entries under fixed keys: the frontier as a base-10 integer string and the completed
//! set as a JSON array of integers. Either may be absent, which means "fresh".

use trail_core::model::{ProgressState, ResourceId};

use crate::repository::StorageError;

pub const CURRENT_RESOURCE_INDEX_KEY: &str = "currentResourceIndex";
pub const COMPLETED_RESOURCES_KEY: &str = "completedResources";

/// Raw persisted values, exactly as read from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    pub current_resource_index: Option<String>,
    pub completed_resources: Option<String>,
}

impl ProgressRecord {
    /// Decode into a `ProgressState` for a trail of `total` resources.
    ///
    /// Never fails: malformed values are discarded and defaults are used instead.
    #[must_use]
    pub fn into_state(self, total: usize) -> ProgressState {
        let current = self
            .current_resource_index
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        let completed = self
            .completed_resources
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<i64>>(raw).ok())
            .unwrap_or_default();

        ProgressState::from_persisted(total, current, completed)
    }

    #[must_use]
    pub fn encode_current(id: ResourceId) -> String {
        id.value().to_string()
    }

    /// Encode completed indices as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if encoding fails.
    pub fn encode_completed(ids: &[ResourceId]) -> Result<String, StorageError> {
        serde_json::to_string(ids).map_err(|err| StorageError::Serialization(err.to_string()))
    }
}
