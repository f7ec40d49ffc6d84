//! Photo entity returned by the search API.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Stable external identifier of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoId(pub String);

impl PhotoId {
    /// Creates a new `PhotoId`.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PhotoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PhotoId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A photo in a search feed.
///
/// Two photos are the same entity when their ids match, regardless of the
/// remaining fields. `PartialEq` and `Hash` only look at the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    id: PhotoId,
    created_at: String,
    author_name: String,
    image_url: String,
}

impl Photo {
    /// Creates a new photo.
    #[must_use]
    pub fn new(
        id: impl Into<PhotoId>,
        created_at: impl Into<String>,
        author_name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: created_at.into(),
            author_name: author_name.into(),
            image_url: image_url.into(),
        }
    }

    /// Photo identifier.
    #[must_use]
    pub const fn id(&self) -> &PhotoId {
        &self.id
    }

    /// Creation timestamp as reported by the server. Not parsed.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Photographer display name.
    #[must_use]
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// URL of the regular-size rendition.
    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    /// Returns true if both values refer to the same photo.
    #[must_use]
    pub fn same_id(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.same_id(other)
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One page of search results as reported by the server.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Server-reported number of matches.
    pub total: u64,
    /// Server-reported number of pages.
    pub total_pages: u32,
    /// Photos on this page, in server order.
    pub results: Vec<Photo>,
}

impl SearchPage {
    /// Consumes the page and returns its photos.
    #[must_use]
    pub fn into_results(self) -> Vec<Photo> {
        self.results
    }
}
