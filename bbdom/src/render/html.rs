use crate::element::{AttrValue, Content, Element, Tag};

const INDENT: &str = "  ";

/// Render the tree as compact HTML.
pub fn render_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out, None);
    log::debug!("[render] html: {} bytes", out.len());
    out
}

/// Render the tree as indented HTML. Elements with inline children stay on a
/// single line so no whitespace is added to rendered text.
pub fn render_html_pretty(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out, Some(0));
    out.push('\n');
    log::debug!("[render] pretty html: {} bytes", out.len());
    out
}

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn write_element(element: &Element, out: &mut String, depth: Option<usize>) {
    if element.tag == Tag::Text {
        if let Content::Text(text) = &element.content {
            out.push_str(&escape(text));
        }
        return;
    }

    write_open_tag(element, out);
    if element.tag.is_void() {
        return;
    }

    match &element.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            let nested = depth.filter(|_| {
                !children.is_empty() && children.iter().all(|c| !c.tag.is_inline())
            });
            match nested {
                Some(depth) => {
                    for child in children {
                        newline(out, depth + 1);
                        write_element(child, out, Some(depth + 1));
                    }
                    newline(out, depth);
                }
                None => {
                    for child in children {
                        write_element(child, out, None);
                    }
                }
            }
        }
    }

    out.push_str("</");
    out.push_str(element.tag.as_str());
    out.push('>');
}

fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag.as_str());
    if let Some(id) = &element.id {
        out.push_str(" id=\"");
        out.push_str(&escape(id));
        out.push('"');
    }
    for (name, value) in &element.attrs {
        out.push(' ');
        out.push_str(name);
        if let AttrValue::Text(text) = value {
            out.push_str("=\"");
            out.push_str(&escape(text));
            out.push('"');
        }
    }
    out.push('>');
}

fn newline(out: &mut String, depth: usize) {
    out.push('\n');
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
