//! Entity models

mod entity;
mod publisher;
pub mod types;

pub use entity::{EntityRecord, EntityType};
pub use publisher::PublisherRecord;
