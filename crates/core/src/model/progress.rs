use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::ids::ResourceId;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("resource {id} is outside the trail (total {total})")]
    OutOfRange { id: ResourceId, total: usize },
}

/// What a mutation changed and therefore what must be written back to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressChange {
    /// The frontier pointer now holds this index.
    CurrentIndex(ResourceId),
    /// The completed set now holds exactly these indices, ascending.
    CompletedSet(Vec<ResourceId>),
    /// Progress was reset; persisted entries must be removed, not overwritten.
    Cleared,
}

/// How a resource may be accessed given the learner's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceAccess {
    Locked,
    Available,
    Completed,
}

impl ResourceAccess {
    #[must_use]
    pub fn is_locked(self) -> bool {
        matches!(self, ResourceAccess::Locked)
    }
}

/// Linear progress through a trail of `total` resources.
///
/// `current` is the frontier: the furthest resource unlocked without being completed
/// elsewhere. Completed indices always lie inside `[0, total)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    total: usize,
    current: ResourceId,
    completed: BTreeSet<ResourceId>,
}

impl ProgressState {
    /// Fresh progress: frontier at the first resource, nothing completed.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current: ResourceId::new(0),
            completed: BTreeSet::new(),
        }
    }

    /// Rebuild progress from persisted values.
    ///
    /// Values outside the trail are discarded: an out-of-range frontier falls back to the
    /// first resource and out-of-range completed entries are dropped.
    #[must_use]
    pub fn from_persisted(
        total: usize,
        current: Option<i64>,
        completed: impl IntoIterator<Item = i64>,
    ) -> Self {
        let in_range = |raw: i64| {
            usize::try_from(raw)
                .ok()
                .filter(|index| *index < total)
                .map(ResourceId::new)
        };

        Self {
            total,
            current: current.and_then(in_range).unwrap_or(ResourceId::new(0)),
            completed: completed.into_iter().filter_map(in_range).collect(),
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current(&self) -> ResourceId {
        self.current
    }

    #[must_use]
    pub fn completed(&self) -> &BTreeSet<ResourceId> {
        &self.completed
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn is_completed(&self, id: ResourceId) -> bool {
        self.completed.contains(&id)
    }

    /// True once every resource of the trail is marked complete, not merely the last one.
    #[must_use]
    pub fn is_trail_completed(&self) -> bool {
        self.completed.len() == self.total
    }

    /// Whether there is anything a reset would discard.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        !self.completed.is_empty() || self.current.value() > 0
    }

    /// Share of completed resources, rounded to the nearest whole percent.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let rounded = (self.completed.len() * 200 + self.total) / (self.total * 2);
        u8::try_from(rounded.min(100)).unwrap_or(100)
    }

    /// Access rule for a resource index.
    ///
    /// Indices outside the trail are `None`; the presentation layer treats them as not found.
    #[must_use]
    pub fn access(&self, id: ResourceId) -> Option<ResourceAccess> {
        if id.value() >= self.total {
            return None;
        }
        if self.completed.contains(&id) {
            Some(ResourceAccess::Completed)
        } else if id > self.current {
            Some(ResourceAccess::Locked)
        } else {
            Some(ResourceAccess::Available)
        }
    }

    /// Point the frontier at `id` (direct assignment, backwards included).
    ///
    /// Returns `Ok(None)` when the frontier already holds `id`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` for ids outside the trail.
    pub fn advance(&mut self, id: ResourceId) -> Result<Option<ProgressChange>, ProgressError> {
        self.check_range(id)?;
        if self.current == id {
            return Ok(None);
        }
        self.current = id;
        Ok(Some(ProgressChange::CurrentIndex(id)))
    }

    /// Mark `id` as done. Completing an already completed resource changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::OutOfRange` for ids outside the trail.
    pub fn complete(&mut self, id: ResourceId) -> Result<Option<ProgressChange>, ProgressError> {
        self.check_range(id)?;
        if !self.completed.insert(id) {
            return Ok(None);
        }
        Ok(Some(ProgressChange::CompletedSet(
            self.completed.iter().copied().collect(),
        )))
    }

    pub fn reset(&mut self) -> ProgressChange {
        self.current = ResourceId::new(0);
        self.completed.clear();
        ProgressChange::Cleared
    }

    fn check_range(&self, id: ResourceId) -> Result<(), ProgressError> {
        if id.value() < self.total {
            Ok(())
        } else {
            Err(ProgressError::OutOfRange {
                id,
                total: self.total,
            })
        }
    }
}
