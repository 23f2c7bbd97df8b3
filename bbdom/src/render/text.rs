use unicode_width::UnicodeWidthStr;

use crate::element::{Content, Element, Tag};

const COLUMN_GAP: &str = "  ";

/// Render the tree as plain text.
///
/// Headings are underlined, tables become aligned columns with a rule under
/// the header rows, checkboxes show as `[x]` / `[ ]` and links as their text.
pub fn render_text(root: &Element) -> String {
    let mut lines = Vec::new();
    write_block(root, &mut lines);
    log::debug!("[render] text: {} lines", lines.len());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn write_block(element: &Element, lines: &mut Vec<String>) {
    match element.tag {
        Tag::Table => write_table(element, lines),
        Tag::H2 => {
            let title = inline_text(element);
            let rule = "=".repeat(UnicodeWidthStr::width(title.as_str()));
            lines.push(title);
            lines.push(rule);
        }
        Tag::Div => {
            if let Content::Text(text) = &element.content {
                lines.push(text.clone());
            }
            for child in element.child_elements() {
                if child.tag.is_block() {
                    write_block(child, lines);
                } else {
                    push_non_empty(inline_text(child), lines);
                }
            }
        }
        _ => push_non_empty(inline_text(element), lines),
    }
}

fn push_non_empty(text: String, lines: &mut Vec<String>) {
    if !text.is_empty() {
        lines.push(text);
    }
}

fn inline_text(element: &Element) -> String {
    if element.tag == Tag::Input {
        return match element.get_attr("type") {
            Some("checkbox") if element.has_flag("checked") => "[x] ".to_string(),
            Some("checkbox") => "[ ] ".to_string(),
            _ => String::new(),
        };
    }

    match &element.content {
        Content::None => String::new(),
        Content::Text(text) => text.clone(),
        Content::Children(children) => children.iter().map(inline_text).collect(),
    }
}

fn write_table(table: &Element, lines: &mut Vec<String>) {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut header_rows = 0;

    for section in table.child_elements() {
        match section.tag {
            Tag::Thead => {
                for tr in section.child_elements() {
                    rows.push(row_cells(tr));
                    header_rows += 1;
                }
            }
            Tag::Tbody => rows.extend(section.child_elements().iter().map(row_cells)),
            Tag::Tr => rows.push(row_cells(section)),
            _ => {}
        }
    }

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    for (index, row) in rows.iter().enumerate() {
        lines.push(format_row(row, &widths));
        if index + 1 == header_rows {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            lines.push(rule.join(COLUMN_GAP));
        }
    }
}

fn row_cells(tr: &Element) -> Vec<String> {
    tr.child_elements()
        .iter()
        .filter(|cell| matches!(cell.tag, Tag::Th | Tag::Td))
        .map(|cell| inline_text(cell).trim().to_string())
        .collect()
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        line.push_str(cell);
        line.push_str(&" ".repeat(width.saturating_sub(UnicodeWidthStr::width(cell))));
    }
    line.trim_end().to_string()
}
