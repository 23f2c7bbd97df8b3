use std::sync::Arc;

use bbdom::{Element, Tag};
use bookbrainz_lib::PublisherRecord;
use bookbrainz_lib::helpers::PLACEHOLDER;
use bookbrainz_lib::model::EntityRecord;

use crate::events::{EventResult, ToggleHandler};
use crate::formatter::{BookBrainzFormatter, EntityFormatter};
use crate::table::text_cell;

/// Data key holding the row's BBID on its `tr` and checkbox elements.
pub const ROW_KEY: &str = "bbid";

/// Class shared by all row selection checkboxes.
pub const CHECKBOX_CLASS: &str = "checkboxes";

/// What leads the name cell of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowContent<'a> {
    WithCheckbox { bbid: &'a str, checked: bool },
    WithoutCheckbox,
}

/// Decide whether a row carries a checkbox and whether it is checked.
pub fn row_content<'a>(
    publisher: &'a PublisherRecord,
    show_checkboxes: bool,
    selected_entities: &[String],
) -> RowContent<'a> {
    if !show_checkboxes {
        return RowContent::WithoutCheckbox;
    }
    RowContent::WithCheckbox {
        bbid: &publisher.bbid,
        checked: selected_entities.iter().any(|id| *id == publisher.bbid),
    }
}

/// Formatted cell values of one publisher row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherRowView {
    pub href: String,
    pub name: String,
    pub disambiguation: Option<String>,
    pub area: String,
    pub publisher_type: String,
    pub begin_date: String,
    pub end_date: String,
    /// Present only for collection tables. Empty when the timestamp is
    /// missing or unparseable.
    pub added_at: Option<String>,
}

impl PublisherRowView {
    pub fn build(
        publisher: &PublisherRecord,
        is_collection_table: bool,
        formatter: &dyn EntityFormatter,
    ) -> Self {
        let display_date = |date: Option<&str>| {
            formatter.display_date(&formatter.extract_attribute(date))
        };

        Self {
            href: publisher.url(),
            name: formatter.label(publisher),
            disambiguation: formatter.disambiguation(publisher),
            area: publisher.area_name().unwrap_or(PLACEHOLDER).to_string(),
            publisher_type: publisher.type_label().unwrap_or(PLACEHOLDER).to_string(),
            begin_date: display_date(publisher.begin_date.as_deref()),
            end_date: display_date(publisher.end_date.as_deref()),
            added_at: is_collection_table.then(|| added_at(publisher, formatter)),
        }
    }
}

fn added_at(publisher: &PublisherRecord, formatter: &dyn EntityFormatter) -> String {
    let Some(raw) = publisher.added_at.as_deref() else {
        log::warn!("[publisher-table] {}: no addedAt", publisher.bbid);
        return String::new();
    };
    match formatter.parse_timestamp(raw) {
        Ok(date) => formatter.format_date(&date, true),
        Err(e) => {
            log::warn!("[publisher-table] {}: {}", publisher.bbid, e);
            String::new()
        }
    }
}

/// One publisher row.
///
/// `publisher` and `is_collection_table` are required; checkboxes are off,
/// nothing is selected and there is no toggle handler unless set.
#[derive(Clone)]
pub struct PublisherTableRow<'a> {
    publisher: &'a PublisherRecord,
    is_collection_table: bool,
    show_checkboxes: bool,
    selected_entities: &'a [String],
    on_toggle_row: Option<ToggleHandler>,
    formatter: Arc<dyn EntityFormatter>,
}

impl<'a> PublisherTableRow<'a> {
    pub fn new(publisher: &'a PublisherRecord, is_collection_table: bool) -> Self {
        Self {
            publisher,
            is_collection_table,
            show_checkboxes: false,
            selected_entities: &[],
            on_toggle_row: None,
            formatter: Arc::new(BookBrainzFormatter),
        }
    }

    pub fn show_checkboxes(mut self, show: bool) -> Self {
        self.show_checkboxes = show;
        self
    }

    pub fn selected_entities(mut self, selected: &'a [String]) -> Self {
        self.selected_entities = selected;
        self
    }

    pub fn on_toggle_row(mut self, handler: Option<ToggleHandler>) -> Self {
        self.on_toggle_row = handler;
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn EntityFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn publisher(&self) -> &'a PublisherRecord {
        self.publisher
    }

    pub fn content(&self) -> RowContent<'a> {
        row_content(self.publisher, self.show_checkboxes, self.selected_entities)
    }

    pub fn view(&self) -> PublisherRowView {
        PublisherRowView::build(
            self.publisher,
            self.is_collection_table,
            self.formatter.as_ref(),
        )
    }

    pub fn element(&self) -> Element {
        let view = self.view();

        let checkbox = match self.content() {
            RowContent::WithCheckbox { bbid, checked } => Some(
                Element::checkbox(checked)
                    .id(bbid)
                    .class(CHECKBOX_CLASS)
                    .attr("value", bbid)
                    .data(ROW_KEY, bbid),
            ),
            RowContent::WithoutCheckbox => None,
        };

        let name_cell = Element::new(Tag::Td)
            .maybe_child(checkbox)
            .child(Element::link(view.href, view.name))
            .maybe_child(view.disambiguation.map(Element::small));

        Element::new(Tag::Tr)
            .data(ROW_KEY, &self.publisher.bbid)
            .child(name_cell)
            .child(text_cell(view.area))
            .child(text_cell(view.publisher_type))
            .child(text_cell(view.begin_date))
            .child(text_cell(view.end_date))
            .maybe_child(view.added_at.map(text_cell))
    }

    /// Report checkbox activation to the toggle handler.
    ///
    /// Ignored when the row has no checkbox or there is no handler. The
    /// selection itself is never touched here.
    pub fn toggle(&self) -> EventResult {
        match (self.content(), &self.on_toggle_row) {
            (RowContent::WithCheckbox { bbid, .. }, Some(handler)) => {
                log::debug!("[publisher-table] toggle row {}", bbid);
                handler.as_ref()(bbid);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}

impl std::fmt::Debug for PublisherTableRow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherTableRow")
            .field("bbid", &self.publisher.bbid)
            .field("is_collection_table", &self.is_collection_table)
            .field("show_checkboxes", &self.show_checkboxes)
            .field("selected_entities", &self.selected_entities)
            .field("on_toggle_row", &self.on_toggle_row.is_some())
            .finish()
    }
}
