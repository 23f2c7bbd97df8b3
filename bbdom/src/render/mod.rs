//! Renderers turning an element tree into output.
//!
//! - `html`: markup for the browser, deterministic and escaped
//! - `text`: aligned plain text for terminals and logs

mod html;
mod text;

pub use html::{escape, render_html, render_html_pretty};
pub use text::render_text;
