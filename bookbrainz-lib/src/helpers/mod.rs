//! Display helpers for entity pages and tables

mod date;
mod entity;

pub use date::{PartialDate, format_date, parse_timestamp, transform_iso_date_for_display};
pub use entity::{
    PLACEHOLDER, UNNAMED_LABEL, extract_attribute, get_entity_disambiguation, get_entity_label,
};
