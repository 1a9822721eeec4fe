#![forbid(unsafe_code)]

pub mod progress;
pub mod repository;
pub mod sqlite;

pub use progress::{COMPLETED_RESOURCES_KEY, CURRENT_RESOURCE_INDEX_KEY, ProgressRecord};
pub use repository::{
    InMemoryRepository, KeyValueStore, Storage, StorageError, UnavailableStore,
};
