use crate::model::ids::ResourceId;
use crate::model::resource::ResourceKind;

/// Lifecycle of a single resource visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitPhase {
    /// Content must be consumed before the learner may move forward.
    Gated,
    /// Forward navigation is allowed.
    Open,
    /// The learner moved on and the resource was marked complete.
    Completed,
}

/// Transient, per-visit gate state. Never persisted.
///
/// Consumption reports are queued and only applied by [`ResourceVisit::settle`], which the
/// caller runs once the handler that produced the report has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceVisit {
    id: ResourceId,
    kind: ResourceKind,
    phase: VisitPhase,
    consumption_queued: bool,
}

impl ResourceVisit {
    #[must_use]
    pub fn open(id: ResourceId, kind: ResourceKind) -> Self {
        let phase = if kind.requires_consumption() {
            VisitPhase::Gated
        } else {
            VisitPhase::Open
        };
        Self {
            id,
            kind,
            phase,
            consumption_queued: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    #[must_use]
    pub fn phase(&self) -> VisitPhase {
        self.phase
    }

    #[must_use]
    pub fn can_proceed(&self) -> bool {
        !matches!(self.phase, VisitPhase::Gated)
    }

    #[must_use]
    pub fn has_queued_consumption(&self) -> bool {
        self.consumption_queued
    }

    /// Record that the content view has shown everything. Takes effect on `settle`.
    pub fn report_consumed(&mut self) {
        if self.phase == VisitPhase::Gated {
            self.consumption_queued = true;
        }
    }

    /// Apply queued consumption reports. Returns true if the gate opened.
    pub fn settle(&mut self) -> bool {
        if !std::mem::take(&mut self.consumption_queued) {
            return false;
        }
        if self.phase == VisitPhase::Gated {
            self.phase = VisitPhase::Open;
            return true;
        }
        false
    }

    pub(crate) fn mark_completed(&mut self) {
        self.phase = VisitPhase::Completed;
    }
}
