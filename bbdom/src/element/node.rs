use std::collections::HashMap;

use super::{Content, Tag};

/// Value of a markup attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute, present without a value (e.g. `checked`).
    Flag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    /// Explicit id. Elements are never given generated ids so that identical
    /// input always produces an identical tree.
    pub id: Option<String>,
    pub tag: Tag,

    // Content
    pub content: Content,

    // Markup
    /// Attributes in insertion order. `id` is kept separately.
    pub attrs: Vec<(String, AttrValue)>,

    // Interaction
    pub clickable: bool,
    pub focusable: bool,

    // Custom data storage (row keys etc.), not rendered.
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self::new(Tag::Div)
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: None,
            tag,
            content: Content::None,
            attrs: Vec::new(),
            clickable: false,
            focusable: false,
            data: HashMap::new(),
        }
    }

    /// A bare text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Content::Text(content.into()),
            ..Self::new(Tag::Text)
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span(content: impl Into<String>) -> Self {
        Self::new(Tag::Span).child(Self::text(content))
    }

    pub fn small(content: impl Into<String>) -> Self {
        Self::new(Tag::Small).child(Self::text(content))
    }

    pub fn heading(content: impl Into<String>) -> Self {
        Self::new(Tag::H2).child(Self::text(content))
    }

    pub fn link(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(Tag::A)
            .attr("href", href)
            .child(Self::text(label))
            .clickable(true)
    }

    /// A checkbox input. Checkboxes are clickable and focusable.
    pub fn checkbox(checked: bool) -> Self {
        let element = Self::new(Tag::Input)
            .attr("type", "checkbox")
            .clickable(true)
            .focusable(true);
        if checked {
            element.flag("checked")
        } else {
            element
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    // Markup

    /// Set an attribute, replacing any previous value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name.into(), AttrValue::Text(value.into()));
        self
    }

    /// Set a boolean attribute.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.set_attr(name.into(), AttrValue::Flag);
        self
    }

    /// Append a class to the `class` attribute.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let merged = match self.get_attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class,
        };
        self.set_attr("class".to_string(), AttrValue::Text(merged));
        self
    }

    fn set_attr(&mut self, name: String, value: AttrValue) {
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Text value of an attribute. Flags have no text value.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|(n, v)| match v {
            AttrValue::Text(text) if n == name => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs
            .iter()
            .any(|(n, v)| n == name && *v == AttrValue::Flag)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// Append a child only when one is given.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Direct child elements (empty for text and empty elements).
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
