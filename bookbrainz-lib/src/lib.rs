//! BookBrainz entity data and display helpers
//!
//! Typed entity records as served by the BookBrainz site, loading with key
//! checks, and the formatting helpers used when entities are shown in tables.

pub mod error;
pub mod helpers;
pub mod load;
pub mod model;

pub use load::{load_publishers, load_publishers_file, publishers_from_str};
pub use model::PublisherRecord;
