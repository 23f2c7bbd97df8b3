//! Entity table views for BookBrainz pages.
//!
//! Views are stateless: they turn borrowed records and props into a `bbdom`
//! element tree. The only upward channel is the row toggle callback, whose
//! effect on the selection belongs to the parent.

pub mod events;
pub mod formatter;
pub mod publisher_table;
pub mod selection;
pub mod table;

pub use events::{EventResult, ToggleHandler, ToggleQueue};
pub use formatter::{BookBrainzFormatter, EntityFormatter};
pub use publisher_table::{PublisherTable, PublisherTableRow};
pub use selection::Selection;
