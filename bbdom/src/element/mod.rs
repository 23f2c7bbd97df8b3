mod content;
mod node;
mod tag;

pub use content::Content;
pub use node::{AttrValue, Element};
pub use tag::Tag;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element with the given tag, in document order.
pub fn find_all(root: &Element, tag: Tag) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_by_tag(root, tag, &mut found);
    found
}

fn collect_by_tag<'a>(element: &'a Element, tag: Tag, found: &mut Vec<&'a Element>) {
    if element.tag == tag {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_by_tag(child, tag, found);
    }
}

/// Concatenated text of an element and all of its descendants.
pub fn text_content(element: &Element) -> String {
    match &element.content {
        Content::None => String::new(),
        Content::Text(text) => text.clone(),
        Content::Children(children) => children.iter().map(text_content).collect(),
    }
}
