#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod persistence;
pub mod progress_service;
pub mod trail_service;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressServiceError};
pub use persistence::PersistenceAdapter;
pub use progress_service::ProgressService;
pub use trail_service::TrailService;
