//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;
use trail_core::model::{ProgressError, TrailError};

/// Errors emitted by `ProgressService` and `TrailService`.
///
/// Storage faults never show up here: the persistence adapter absorbs them.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressServiceError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Trail(#[from] TrailError),
}
