//! DateError for timestamp and partial date parsing

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DateError {
    /// Not an RFC 3339 or naive ISO 8601 timestamp.
    #[error("Invalid timestamp '{value}'")]
    InvalidTimestamp { value: String },

    /// Not a `[+-]YYYY[-MM[-DD]]` partial date.
    #[error("Invalid partial date '{value}'")]
    InvalidPartialDate { value: String },
}

impl DateError {
    pub fn timestamp(value: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            value: value.into(),
        }
    }

    pub fn partial_date(value: impl Into<String>) -> Self {
        Self::InvalidPartialDate {
            value: value.into(),
        }
    }
}
