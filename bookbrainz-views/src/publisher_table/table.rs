use std::sync::Arc;

use bbdom::{Element, Event};
use bookbrainz_lib::PublisherRecord;

use super::row::PublisherTableRow;
use crate::events::{EventResult, ToggleHandler};
use crate::formatter::{BookBrainzFormatter, EntityFormatter};
use crate::table::{Column, striped_table};

pub const TITLE: &str = "Publishers";
pub const EMPTY_MESSAGE: &str = "No publishers";

/// Columns of a publisher table, in display order.
pub fn publisher_columns(is_collection_table: bool) -> Vec<Column> {
    let mut columns = vec![
        Column::new("name", "Name").percent(50),
        Column::new("area", "Area"),
        Column::new("type", "Type"),
        Column::new("begin_date", "Date founded"),
        Column::new("end_date", "Date dissolved"),
    ];
    if is_collection_table {
        columns.push(Column::new("added_at", "Added at"));
    }
    columns
}

/// What the section below the title shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableContent {
    Table { columns: Vec<Column> },
    Empty,
}

pub fn table_content(publishers: &[PublisherRecord], is_collection_table: bool) -> TableContent {
    if publishers.is_empty() {
        TableContent::Empty
    } else {
        TableContent::Table {
            columns: publisher_columns(is_collection_table),
        }
    }
}

/// A titled section listing publishers, one row each in the given order.
///
/// # Example
///
/// ```
/// use bookbrainz_lib::PublisherRecord;
/// use bookbrainz_views::PublisherTable;
///
/// let publishers = vec![PublisherRecord::new("abc123").with_name("Penguin Books")];
/// let html = bbdom::render_html(&PublisherTable::new(&publishers).element());
/// assert!(html.contains(r#"<a href="/publisher/abc123">Penguin Books</a>"#));
/// ```
#[derive(Clone)]
pub struct PublisherTable<'a> {
    publishers: &'a [PublisherRecord],
    is_collection_table: bool,
    show_checkboxes: bool,
    selected_entities: &'a [String],
    on_toggle_row: Option<ToggleHandler>,
    formatter: Arc<dyn EntityFormatter>,
}

impl<'a> PublisherTable<'a> {
    pub fn new(publishers: &'a [PublisherRecord]) -> Self {
        Self {
            publishers,
            is_collection_table: false,
            show_checkboxes: false,
            selected_entities: &[],
            on_toggle_row: None,
            formatter: Arc::new(BookBrainzFormatter),
        }
    }

    pub fn collection(mut self, is_collection_table: bool) -> Self {
        self.is_collection_table = is_collection_table;
        self
    }

    pub fn show_checkboxes(mut self, show: bool) -> Self {
        self.show_checkboxes = show;
        self
    }

    pub fn selected_entities(mut self, selected: &'a [String]) -> Self {
        self.selected_entities = selected;
        self
    }

    pub fn on_toggle_row(mut self, handler: ToggleHandler) -> Self {
        self.on_toggle_row = Some(handler);
        self
    }

    pub fn formatter(mut self, formatter: Arc<dyn EntityFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn content(&self) -> TableContent {
        table_content(self.publishers, self.is_collection_table)
    }

    /// Row components, in input order.
    pub fn rows(&self) -> impl Iterator<Item = PublisherTableRow<'a>> + '_ {
        self.publishers.iter().map(|publisher| self.row(publisher))
    }

    fn row(&self, publisher: &'a PublisherRecord) -> PublisherTableRow<'a> {
        PublisherTableRow::new(publisher, self.is_collection_table)
            .show_checkboxes(self.show_checkboxes)
            .selected_entities(self.selected_entities)
            .on_toggle_row(self.on_toggle_row.clone())
            .formatter(Arc::clone(&self.formatter))
    }

    pub fn element(&self) -> Element {
        log::debug!(
            "[publisher-table] render {} rows (collection: {}, checkboxes: {})",
            self.publishers.len(),
            self.is_collection_table,
            self.show_checkboxes
        );

        let body = match self.content() {
            TableContent::Table { columns } => {
                striped_table(&columns, self.rows().map(|row| row.element()))
            }
            TableContent::Empty => Element::span(EMPTY_MESSAGE),
        };

        Element::div().child(Element::heading(TITLE)).child(body)
    }

    /// Route an event to the row whose checkbox it targets.
    ///
    /// Only activation events (click, space, enter) aimed at a row checkbox
    /// are consumed; the handler receives that row's BBID. Checkbox ids are
    /// the row BBIDs, so nothing is rendered to resolve the target.
    pub fn dispatch(&self, event: &Event) -> EventResult {
        if !self.show_checkboxes || !event.is_activation() {
            return EventResult::Ignored;
        }
        let Some(target) = event.target() else {
            return EventResult::Ignored;
        };

        match self.publishers.iter().find(|p| p.bbid == target) {
            Some(publisher) => self.row(publisher).toggle(),
            None => EventResult::Ignored,
        }
    }
}

impl std::fmt::Debug for PublisherTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherTable")
            .field("publishers", &self.publishers.len())
            .field("is_collection_table", &self.is_collection_table)
            .field("show_checkboxes", &self.show_checkboxes)
            .field("selected_entities", &self.selected_entities)
            .field("on_toggle_row", &self.on_toggle_row.is_some())
            .finish()
    }
}
