//! Injected formatting for entity tables.
//!
//! Views never call the display helpers directly; they go through an
//! [`EntityFormatter`] so a page can swap conventions and tests can observe
//! exactly what is formatted.

use chrono::{DateTime, Utc};

use bookbrainz_lib::error::DateError;
use bookbrainz_lib::helpers;
use bookbrainz_lib::model::EntityRecord;

/// Formatting collaborators used by table rows. Every method is pure.
///
/// The provided methods follow the BookBrainz site conventions.
pub trait EntityFormatter: Send + Sync {
    /// Display name of the entity.
    fn label(&self, entity: &dyn EntityRecord) -> String {
        helpers::get_entity_label(entity)
    }

    /// Qualifier appended after the label, if any.
    fn disambiguation(&self, entity: &dyn EntityRecord) -> Option<String> {
        helpers::get_entity_disambiguation(entity)
    }

    /// Raw attribute value or placeholder.
    fn extract_attribute(&self, attr: Option<&str>) -> String {
        helpers::extract_attribute(attr)
    }

    /// Display form of an extracted partial date.
    fn display_date(&self, raw: &str) -> String {
        helpers::transform_iso_date_for_display(raw)
    }

    fn parse_timestamp(&self, raw: &str) -> Result<DateTime<Utc>, DateError> {
        helpers::parse_timestamp(raw)
    }

    fn format_date(&self, date: &DateTime<Utc>, include_time: bool) -> String {
        helpers::format_date(date, include_time)
    }
}

/// The site's own formatting conventions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookBrainzFormatter;

impl EntityFormatter for BookBrainzFormatter {}
