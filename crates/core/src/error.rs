use thiserror::Error;

use crate::model::{ProgressError, TrailError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Trail(#[from] TrailError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
