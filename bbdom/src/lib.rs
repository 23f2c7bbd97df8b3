pub mod element;
pub mod event;
pub mod render;

pub use element::{find_element, Content, Element, Tag};
pub use event::{Event, Key};
pub use render::{render_html, render_html_pretty, render_text};
