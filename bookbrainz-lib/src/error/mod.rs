//! Error types

mod date;
mod load;

pub use date::*;
pub use load::*;
