use std::sync::Arc;

use trail_core::model::{ProgressState, Resource, ResourceAccess, ResourceId, ResourceVisit, Trail};
use trail_core::{Destination, NextStep, TrailNavigator, VisitOutcome};

use crate::error::ProgressServiceError;
use crate::persistence::PersistenceAdapter;
use crate::progress_service::ProgressService;

/// Drives the trail navigator against persisted progress.
pub struct TrailService {
    navigator: TrailNavigator,
    progress: Arc<ProgressService>,
}

impl TrailService {
    /// Load progress for `trail` from `persistence`.
    pub async fn load(trail: Trail, persistence: PersistenceAdapter) -> Self {
        let progress = Arc::new(ProgressService::initialize(trail.len(), persistence).await);
        Self::new(TrailNavigator::new(trail), progress)
    }

    #[must_use]
    pub fn new(navigator: TrailNavigator, progress: Arc<ProgressService>) -> Self {
        Self {
            navigator,
            progress,
        }
    }

    #[must_use]
    pub fn trail(&self) -> &Trail {
        self.navigator.trail()
    }

    #[must_use]
    pub fn resource(&self, id: ResourceId) -> Option<&Resource> {
        self.navigator.trail().get(id)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressState {
        self.progress.snapshot()
    }

    #[must_use]
    pub fn access(&self, id: ResourceId) -> Option<ResourceAccess> {
        self.progress.snapshot().access(id)
    }

    /// Open the resource addressed by a route segment, re-pointing the frontier when the
    /// learner revisits an unlocked resource.
    pub async fn visit(&self, raw_id: &str) -> VisitOutcome {
        let outcome = self
            .progress
            .apply(|state| {
                let step = self.navigator.visit(state, raw_id);
                (step.outcome, step.changes)
            })
            .await;

        match &outcome {
            VisitOutcome::NotFound => tracing::debug!(raw_id, "resource not found"),
            VisitOutcome::Locked(id) => tracing::debug!(%id, "resource locked"),
            VisitOutcome::Opened(visit) => tracing::debug!(id = %visit.id(), "resource opened"),
        }
        outcome
    }

    /// Move forward from `visit`. Returns `NextStep::Blocked` while the visit is gated.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError` if the visit does not belong to this trail.
    pub async fn go_next(&self, visit: &mut ResourceVisit) -> Result<NextStep, ProgressServiceError> {
        let result = self
            .progress
            .apply(|state| {
                let step = self.navigator.go_next(state, visit);
                (step.outcome, step.changes)
            })
            .await?;

        if let NextStep::Moved(destination) = result {
            tracing::info!(from = %visit.id(), ?destination, "moved forward");
        }
        Ok(result)
    }

    #[must_use]
    pub fn go_previous(&self, visit: &ResourceVisit) -> Option<Destination> {
        self.navigator.go_previous(visit)
    }

    pub async fn reset(&self) {
        self.progress.reset().await;
    }
}
