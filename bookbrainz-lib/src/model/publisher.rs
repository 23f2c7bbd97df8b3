//! Publisher entity record

use serde::{Deserialize, Serialize};

use super::entity::{EntityRecord, EntityType};
use super::types::{Alias, Area, Disambiguation, PublisherType};

/// A publisher as served to entity and collection pages.
///
/// Every field apart from the BBID is optional; absent values are rendered as
/// placeholders rather than rejected.
///
/// # Example
///
/// ```
/// use bookbrainz_lib::model::EntityRecord;
/// use bookbrainz_lib::PublisherRecord;
///
/// let publisher = PublisherRecord::new("abc123")
///     .with_name("Penguin Books")
///     .with_area("United Kingdom");
///
/// assert_eq!(publisher.url(), "/publisher/abc123");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherRecord {
    pub bbid: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_alias: Option<Alias>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<Disambiguation>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_type: Option<PublisherType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,

    /// Partial ISO date, e.g. `+1935-07-30` or `+1935`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default)]
    pub ended: bool,

    /// When the publisher was added to a collection (collection views only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<String>,
}

impl PublisherRecord {
    pub fn new(bbid: impl Into<String>) -> Self {
        Self {
            bbid: bbid.into(),
            ..Default::default()
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.default_alias = Some(Alias::new(name));
        self
    }

    pub fn with_disambiguation(mut self, comment: impl Into<String>) -> Self {
        self.disambiguation = Some(Disambiguation {
            comment: comment.into(),
        });
        self
    }

    pub fn with_type(mut self, label: impl Into<String>) -> Self {
        self.publisher_type = Some(PublisherType {
            label: label.into(),
        });
        self
    }

    pub fn with_area(mut self, name: impl Into<String>) -> Self {
        self.area = Some(Area { name: name.into() });
        self
    }

    pub fn with_begin_date(mut self, date: impl Into<String>) -> Self {
        self.begin_date = Some(date.into());
        self
    }

    /// Sets the dissolution date and marks the publisher as ended.
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self.ended = true;
        self
    }

    pub fn with_added_at(mut self, timestamp: impl Into<String>) -> Self {
        self.added_at = Some(timestamp.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn type_label(&self) -> Option<&str> {
        self.publisher_type.as_ref().map(|t| t.label.as_str())
    }

    pub fn area_name(&self) -> Option<&str> {
        self.area.as_ref().map(|a| a.name.as_str())
    }
}

impl EntityRecord for PublisherRecord {
    fn entity_type(&self) -> EntityType {
        EntityType::Publisher
    }

    fn bbid(&self) -> &str {
        &self.bbid
    }

    fn default_alias(&self) -> Option<&Alias> {
        self.default_alias.as_ref()
    }

    fn disambiguation(&self) -> Option<&Disambiguation> {
        self.disambiguation.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "bbid": "abc123",
            "defaultAlias": {"name": "Penguin Books", "sortName": "Penguin Books"},
            "disambiguation": {"comment": "UK imprint"},
            "publisherType": {"label": "Imprint"},
            "area": {"name": "United Kingdom"},
            "beginDate": "+1935-07-30",
            "endDate": null,
            "ended": false,
            "addedAt": "2020-06-01T10:20:30.000Z",
            "revisionId": 42
        }"#;

        let publisher: PublisherRecord = serde_json::from_str(json).unwrap();
        assert_eq!(publisher.bbid, "abc123");
        assert_eq!(publisher.default_alias.as_ref().unwrap().name, "Penguin Books");
        assert_eq!(publisher.type_label(), Some("Imprint"));
        assert_eq!(publisher.area_name(), Some("United Kingdom"));
        assert_eq!(publisher.begin_date.as_deref(), Some("+1935-07-30"));
        assert_eq!(publisher.end_date, None);
        assert_eq!(publisher.added_at.as_deref(), Some("2020-06-01T10:20:30.000Z"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let publisher: PublisherRecord = serde_json::from_str(r#"{"bbid": "x"}"#).unwrap();
        assert_eq!(publisher, PublisherRecord::new("x"));
        assert!(!publisher.ended);
    }

    #[test]
    fn test_null_nested_fields() {
        let json = r#"{"bbid": "x", "publisherType": null, "area": null}"#;
        let publisher: PublisherRecord = serde_json::from_str(json).unwrap();
        assert_eq!(publisher.type_label(), None);
        assert_eq!(publisher.area_name(), None);
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let json = serde_json::to_string(&PublisherRecord::new("x").with_area("France")).unwrap();
        assert_eq!(json, r#"{"bbid":"x","area":{"name":"France"},"ended":false}"#);
    }

    #[test]
    fn test_url() {
        assert_eq!(PublisherRecord::new("abc123").url(), "/publisher/abc123");
    }
}
