use crate::model::ids::ResourceId;

/// Kind of content a trail stop carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Gallery,
    Media,
    Quiz,
}

impl ResourceKind {
    /// Whether the learner must consume the whole content before moving on.
    #[must_use]
    pub fn requires_consumption(self) -> bool {
        matches!(self, ResourceKind::Gallery)
    }
}

/// One page of a gallery flip-book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryPage {
    pub image_url: String,
    pub caption: String,
}

impl GalleryPage {
    #[must_use]
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: caption.into(),
        }
    }
}

/// An audio slot on a media resource. Slots without a source render as placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrack {
    pub title: String,
    pub src: Option<String>,
}

impl AudioTrack {
    #[must_use]
    pub fn placeholder(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            src: None,
        }
    }

    #[must_use]
    pub fn with_source(title: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            src: Some(src.into()),
        }
    }
}

/// Kind-specific payload of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceContent {
    Gallery { pages: Vec<GalleryPage> },
    Media { video_url: String, audio: Vec<AudioTrack> },
    Quiz { embed_url: String },
}

impl ResourceContent {
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceContent::Gallery { .. } => ResourceKind::Gallery,
            ResourceContent::Media { .. } => ResourceKind::Media,
            ResourceContent::Quiz { .. } => ResourceKind::Quiz,
        }
    }

    pub(crate) fn urls(&self) -> Vec<&str> {
        match self {
            ResourceContent::Gallery { pages } => {
                pages.iter().map(|page| page.image_url.as_str()).collect()
            }
            ResourceContent::Media { video_url, audio } => std::iter::once(video_url.as_str())
                .chain(audio.iter().filter_map(|track| track.src.as_deref()))
                .collect(),
            ResourceContent::Quiz { embed_url } => vec![embed_url.as_str()],
        }
    }
}

/// Static catalog entry. Never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    title: String,
    description: String,
    full_description: String,
    icon: String,
    accent: String,
    content: ResourceContent,
}

impl Resource {
    #[must_use]
    pub fn new(
        id: ResourceId,
        title: impl Into<String>,
        description: impl Into<String>,
        full_description: impl Into<String>,
        content: ResourceContent,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            full_description: full_description.into(),
            icon: String::new(),
            accent: String::new(),
            content,
        }
    }

    /// Attach the emoji icon and accent style used by the presentation layer.
    #[must_use]
    pub fn with_decoration(mut self, icon: impl Into<String>, accent: impl Into<String>) -> Self {
        self.icon = icon.into();
        self.accent = accent.into();
        self
    }

    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        self.content.kind()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn full_description(&self) -> &str {
        &self.full_description
    }

    #[must_use]
    pub fn icon(&self) -> &str {
        &self.icon
    }

    #[must_use]
    pub fn accent(&self) -> &str {
        &self.accent
    }

    #[must_use]
    pub fn content(&self) -> &ResourceContent {
        &self.content
    }
}
