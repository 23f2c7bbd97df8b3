//! Shared table building blocks.

mod column;

pub use column::{Column, ColumnWidth};

use bbdom::{Element, Tag};

/// Bootstrap classes for a striped table.
pub const STRIPED_TABLE_CLASSES: [&str; 2] = ["table", "table-striped"];

/// The `thead` row for the given columns.
pub fn header(columns: &[Column]) -> Element {
    Element::new(Tag::Thead).child(Element::new(Tag::Tr).children(columns.iter().map(Column::header_cell)))
}

/// A striped table with a header and the given body rows.
pub fn striped_table(columns: &[Column], rows: impl IntoIterator<Item = Element>) -> Element {
    let table = STRIPED_TABLE_CLASSES
        .iter()
        .fold(Element::new(Tag::Table), |table, class| table.class(*class));
    table
        .child(header(columns))
        .child(Element::new(Tag::Tbody).children(rows))
}

/// A `td` holding plain text.
pub fn text_cell(text: impl Into<String>) -> Element {
    Element::new(Tag::Td).child(Element::text(text))
}
