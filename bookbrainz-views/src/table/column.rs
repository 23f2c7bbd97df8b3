use bbdom::{Element, Tag};

/// How wide a column is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColumnWidth {
    /// Sized by the browser.
    #[default]
    Auto,
    /// Percentage of the table width.
    Percent(u16),
}

/// A table column definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    /// Unique identifier for this column.
    pub id: String,
    /// Header text displayed at the top.
    pub header: String,
    /// Width of the column.
    pub width: ColumnWidth,
}

impl Column {
    /// Create a new column with the given id and header.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            width: ColumnWidth::default(),
        }
    }

    /// Set a percentage width for this column.
    pub fn percent(mut self, percent: u16) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// The `th` element for this column.
    pub fn header_cell(&self) -> Element {
        let th = Element::new(Tag::Th).child(Element::text(&self.header));
        match self.width {
            ColumnWidth::Auto => th,
            ColumnWidth::Percent(percent) => th.attr("style", format!("width: {percent}%")),
        }
    }
}
