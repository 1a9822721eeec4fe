use std::sync::Arc;

use storage::repository::Storage;
use trail_core::model::Trail;

use crate::error::AppServicesError;
use crate::persistence::PersistenceAdapter;
use crate::trail_service::TrailService;

/// Assembles app-facing services over a storage backend.
#[derive(Clone)]
pub struct AppServices {
    trail: Arc<TrailService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the shipped trail.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails or the catalog is invalid.
    pub async fn new_sqlite(db_url: &str) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage).await
    }

    /// Build services over an already opened storage backend and the shipped trail.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Trail` if the built-in catalog is invalid.
    pub async fn from_storage(storage: Storage) -> Result<Self, AppServicesError> {
        let trail = Trail::guardians_of_the_forest()?;
        Ok(Self::with_trail(storage, trail).await)
    }

    pub async fn with_trail(storage: Storage, trail: Trail) -> Self {
        let persistence = PersistenceAdapter::new(Arc::clone(&storage.progress));
        let trail = Arc::new(TrailService::load(trail, persistence).await);
        Self { trail }
    }

    #[must_use]
    pub fn trail(&self) -> Arc<TrailService> {
        Arc::clone(&self.trail)
    }
}
