use std::sync::{Mutex, MutexGuard, PoisonError};

use trail_core::model::{ProgressChange, ProgressState, ResourceId};

use crate::error::ProgressServiceError;
use crate::persistence::PersistenceAdapter;

/// Owns the learner's progress and writes every change through to storage.
///
/// The state lock is released before any storage call is awaited.
pub struct ProgressService {
    state: Mutex<ProgressState>,
    persistence: PersistenceAdapter,
}

impl ProgressService {
    /// Load progress for a trail of `total` resources. Never fails; unreadable or
    /// malformed entries yield fresh progress.
    pub async fn initialize(total: usize, persistence: PersistenceAdapter) -> Self {
        let state = persistence.load_progress().await.into_state(total);
        tracing::debug!(
            current = %state.current(),
            completed = state.completed_count(),
            "progress loaded"
        );
        Self {
            state: Mutex::new(state),
            persistence,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressState {
        self.lock().clone()
    }

    /// Point the frontier at `id`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Progress` if `id` is outside the trail.
    pub async fn advance(&self, id: ResourceId) -> Result<(), ProgressServiceError> {
        let change = self.lock().advance(id)?;
        self.persist(change.as_slice()).await;
        Ok(())
    }

    /// Mark `id` complete.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Progress` if `id` is outside the trail.
    pub async fn complete(&self, id: ResourceId) -> Result<(), ProgressServiceError> {
        let change = self.lock().complete(id)?;
        self.persist(change.as_slice()).await;
        Ok(())
    }

    /// Forget all progress and remove the persisted entries.
    pub async fn reset(&self) {
        let change = self.lock().reset();
        tracing::info!("progress reset");
        self.persist(&[change]).await;
    }

    /// Run `mutate` against the state under the lock, then write its changes through.
    pub(crate) async fn apply<T>(
        &self,
        mutate: impl FnOnce(&mut ProgressState) -> (T, Vec<ProgressChange>),
    ) -> T {
        let (outcome, changes) = {
            let mut state = self.lock();
            mutate(&mut state)
        };
        self.persist(&changes).await;
        outcome
    }

    async fn persist(&self, changes: &[ProgressChange]) {
        for change in changes {
            tracing::debug!(?change, "writing progress change");
            self.persistence.write_change(change).await;
        }
    }

    fn lock(&self) -> MutexGuard<'_, ProgressState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
