use crate::model::EntityRecord;

/// Shown for any attribute the entity does not have.
pub const PLACEHOLDER: &str = "?";

/// Label for entities without a default alias.
pub const UNNAMED_LABEL: &str = "(unnamed)";

/// The display name of an entity: its default alias, or `(unnamed)`.
pub fn get_entity_label(entity: &(impl EntityRecord + ?Sized)) -> String {
    entity
        .default_alias()
        .map(|alias| alias.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNNAMED_LABEL)
        .to_string()
}

/// The qualifier shown after an entity's label, formatted as ` (comment)`.
///
/// Returns `None` when there is no disambiguation or its comment is blank.
pub fn get_entity_disambiguation(entity: &(impl EntityRecord + ?Sized)) -> Option<String> {
    entity
        .disambiguation()
        .map(|d| d.comment.trim())
        .filter(|comment| !comment.is_empty())
        .map(|comment| format!(" ({comment})"))
}

/// The raw attribute value, or the `?` placeholder when absent or empty.
pub fn extract_attribute(attr: Option<&str>) -> String {
    match attr {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}
