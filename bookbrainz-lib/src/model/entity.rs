//! Shared entity behaviour

use super::types::{Alias, Disambiguation};

/// The BookBrainz entity types, as they appear in site URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Author,
    Edition,
    EditionGroup,
    Publisher,
    Series,
    Work,
}

impl EntityType {
    /// URL path segment for entities of this type.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Edition => "edition",
            Self::EditionGroup => "edition-group",
            Self::Publisher => "publisher",
            Self::Series => "series",
            Self::Work => "work",
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Fields every entity record carries.
pub trait EntityRecord {
    fn entity_type(&self) -> EntityType;

    /// The entity's BookBrainz ID.
    fn bbid(&self) -> &str;

    fn default_alias(&self) -> Option<&Alias>;

    fn disambiguation(&self) -> Option<&Disambiguation>;

    /// Site-relative link to the entity page, e.g. `/publisher/{bbid}`.
    fn url(&self) -> String {
        format!("/{}/{}", self.entity_type().path_segment(), self.bbid())
    }
}
