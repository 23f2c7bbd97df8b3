//! Publisher table - publishers listed with area, type and dates.
//!
//! Output for a non-empty list:
//!
//! ```text
//! div
//! ├── h2 "Publishers"
//! └── table.table.table-striped
//!     ├── thead: Name | Area | Type | Date founded | Date dissolved [| Added at]
//!     └── tbody: one tr per publisher
//! ```
//!
//! An empty list renders `span "No publishers"` in place of the table.

mod row;
mod table;

pub use row::{CHECKBOX_CLASS, PublisherRowView, PublisherTableRow, ROW_KEY, RowContent, row_content};
pub use table::{
    EMPTY_MESSAGE, PublisherTable, TITLE, TableContent, publisher_columns, table_content,
};
