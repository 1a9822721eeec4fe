//! Maps progress onto per-resource access rules and drives movement along the trail.
//!
//! The navigator is pure: it mutates a [`ProgressState`] it is handed and reports every
//! resulting [`ProgressChange`] so the caller can write them through to storage.

use crate::model::{
    ProgressChange, ProgressError, ProgressState, ResourceAccess, ResourceId, ResourceVisit, Trail,
};

/// Where the presentation layer should go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Landing,
    Resource(ResourceId),
}

/// Result of opening a resource route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The id is not a resource of this trail.
    NotFound,
    /// The resource exists but lies beyond the frontier.
    Locked(ResourceId),
    Opened(ResourceVisit),
}

/// Result of asking to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    /// The visit is still gated; nothing changed.
    Blocked,
    Moved(Destination),
}

/// An outcome plus the progress changes it caused, in mutation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<T> {
    pub outcome: T,
    pub changes: Vec<ProgressChange>,
}

impl<T> Step<T> {
    fn unchanged(outcome: T) -> Self {
        Self {
            outcome,
            changes: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrailNavigator {
    trail: Trail,
}

impl TrailNavigator {
    #[must_use]
    pub fn new(trail: Trail) -> Self {
        Self { trail }
    }

    #[must_use]
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    #[must_use]
    pub fn fresh_progress(&self) -> ProgressState {
        ProgressState::new(self.trail.len())
    }

    /// Resolve a route segment into a resource id of this trail.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<ResourceId> {
        raw.parse::<ResourceId>()
            .ok()
            .filter(|id| self.trail.get(*id).is_some())
    }

    /// Open the resource addressed by a route segment.
    pub fn visit(&self, progress: &mut ProgressState, raw: &str) -> Step<VisitOutcome> {
        match self.resolve(raw) {
            Some(id) => self.visit_id(progress, id),
            None => Step::unchanged(VisitOutcome::NotFound),
        }
    }

    /// Open a resource by id.
    ///
    /// Visiting an unlocked resource other than the current one re-points the frontier to
    /// it, backwards included. Locked resources never move the frontier.
    pub fn visit_id(&self, progress: &mut ProgressState, id: ResourceId) -> Step<VisitOutcome> {
        let Some(resource) = self.trail.get(id) else {
            return Step::unchanged(VisitOutcome::NotFound);
        };

        match progress.access(id) {
            None => Step::unchanged(VisitOutcome::NotFound),
            Some(ResourceAccess::Locked) => Step::unchanged(VisitOutcome::Locked(id)),
            Some(ResourceAccess::Available | ResourceAccess::Completed) => {
                let mut changes = Vec::new();
                if id != progress.current() && id <= progress.current() {
                    if let Ok(Some(change)) = progress.advance(id) {
                        changes.push(change);
                    }
                }
                Step {
                    outcome: VisitOutcome::Opened(ResourceVisit::open(id, resource.kind())),
                    changes,
                }
            }
        }
    }

    /// Move forward from `visit`: complete it, then advance to the following resource or
    /// return to the landing view after the last one.
    ///
    /// The changes are reported even when the outcome is an error, so whatever was applied
    /// before the failure can still be written through. An error means `progress` tracks a
    /// shorter trail than this navigator.
    pub fn go_next(
        &self,
        progress: &mut ProgressState,
        visit: &mut ResourceVisit,
    ) -> Step<Result<NextStep, ProgressError>> {
        if !visit.can_proceed() {
            return Step::unchanged(Ok(NextStep::Blocked));
        }

        let mut changes = Vec::new();
        let outcome = self.complete_and_move(progress, visit, &mut changes);
        Step { outcome, changes }
    }

    fn complete_and_move(
        &self,
        progress: &mut ProgressState,
        visit: &mut ResourceVisit,
        changes: &mut Vec<ProgressChange>,
    ) -> Result<NextStep, ProgressError> {
        changes.extend(progress.complete(visit.id())?);
        visit.mark_completed();

        let destination = match self.trail.next_of(visit.id()) {
            Some(next) => {
                changes.extend(progress.advance(next)?);
                Destination::Resource(next)
            }
            None => Destination::Landing,
        };
        Ok(NextStep::Moved(destination))
    }

    /// Move backward. Never touches progress or the gate of the visit being left.
    #[must_use]
    pub fn go_previous(&self, visit: &ResourceVisit) -> Option<Destination> {
        visit.id().previous().map(Destination::Resource)
    }
}
