use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Position of a resource in the trail.
///
/// Ids double as indices: the resource with id `n` is the `n`-th stop of the trail.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(usize);

impl ResourceId {
    /// Creates a new `ResourceId`
    #[must_use]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying index
    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// The id that follows this one in the trail.
    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// The id before this one, or `None` for the first resource.
    #[must_use]
    pub fn previous(&self) -> Option<Self> {
        self.0.checked_sub(1).map(Self)
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceId({})", self.0)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an id from a route segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse ResourceId from {:?}", self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for ResourceId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseIdError { raw: s.to_owned() });
        }
        s.parse::<usize>()
            .map(ResourceId::new)
            .map_err(|_| ParseIdError { raw: s.to_owned() })
    }
}
