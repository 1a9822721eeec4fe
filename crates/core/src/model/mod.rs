mod ids;
mod progress;
mod resource;
mod trail;
mod visit;

pub use ids::{ParseIdError, ResourceId};
pub use progress::{ProgressChange, ProgressError, ProgressState, ResourceAccess};
pub use resource::{AudioTrack, GalleryPage, Resource, ResourceContent, ResourceKind};
pub use trail::{Trail, TrailError};
pub use visit::{ResourceVisit, VisitPhase};
