use thiserror::Error;
use url::Url;

use crate::model::ids::ResourceId;
use crate::model::resource::{Resource, ResourceContent};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrailError {
    #[error("trail must contain at least one resource")]
    Empty,

    #[error("resource at position {position} has id {id}")]
    OutOfOrder { position: usize, id: ResourceId },

    #[error("gallery resource {0} has no pages")]
    EmptyGallery(ResourceId),

    #[error("resource {id} has an invalid url: {url}")]
    InvalidUrl { id: ResourceId, url: String },
}

/// The fixed, ordered sequence of learning resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trail {
    resources: Vec<Resource>,
}

impl Trail {
    /// Build a trail from resources listed in trail order.
    ///
    /// # Errors
    ///
    /// Returns `TrailError` if the list is empty, ids do not match positions, a gallery has
    /// no pages, or any content URL fails to parse.
    pub fn new(resources: Vec<Resource>) -> Result<Self, TrailError> {
        if resources.is_empty() {
            return Err(TrailError::Empty);
        }

        for (position, resource) in resources.iter().enumerate() {
            if resource.id().value() != position {
                return Err(TrailError::OutOfOrder {
                    position,
                    id: resource.id(),
                });
            }
            if let ResourceContent::Gallery { pages } = resource.content() {
                if pages.is_empty() {
                    return Err(TrailError::EmptyGallery(resource.id()));
                }
            }
            for url in resource.content().urls() {
                if Url::parse(url).is_err() {
                    return Err(TrailError::InvalidUrl {
                        id: resource.id(),
                        url: url.to_owned(),
                    });
                }
            }
        }

        Ok(Self { resources })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Always false for a constructed trail; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.get(id.value())
    }

    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    #[must_use]
    pub fn is_last(&self, id: ResourceId) -> bool {
        id.value() + 1 == self.resources.len()
    }

    /// The resource after `id`, if any.
    #[must_use]
    pub fn next_of(&self, id: ResourceId) -> Option<ResourceId> {
        let next = id.next();
        self.get(next).map(Resource::id)
    }
}
