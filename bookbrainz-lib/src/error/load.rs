//! LoadError for reading entity lists

/// Error type for loading entity records.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read.
    #[error("Failed to read entities: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not a valid entity list.
    #[error("Invalid entity JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record has an empty BBID and cannot be keyed.
    #[error("Record at index {index} has an empty BBID")]
    EmptyBbid { index: usize },

    /// Two records share a BBID.
    #[error("Duplicate BBID '{bbid}' at index {index}")]
    DuplicateBbid { bbid: String, index: usize },
}

impl LoadError {
    /// Creates a new duplicate key error.
    pub fn duplicate(bbid: impl Into<String>, index: usize) -> Self {
        Self::DuplicateBbid {
            bbid: bbid.into(),
            index,
        }
    }
}
