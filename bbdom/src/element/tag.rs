/// The markup tags the element tree can represent.
///
/// `Text` is a bare text node: it has no markup of its own and only carries
/// `Content::Text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Text,
    Div,
    Span,
    Small,
    H2,
    A,
    Input,
    Table,
    Thead,
    Tbody,
    Tr,
    Th,
    Td,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Div => "div",
            Self::Span => "span",
            Self::Small => "small",
            Self::H2 => "h2",
            Self::A => "a",
            Self::Input => "input",
            Self::Table => "table",
            Self::Thead => "thead",
            Self::Tbody => "tbody",
            Self::Tr => "tr",
            Self::Th => "th",
            Self::Td => "td",
        }
    }

    /// Void elements never have a closing tag.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Input)
    }

    /// Phrasing content: rendered within the line of its parent.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Self::Text | Self::Span | Self::Small | Self::A | Self::Input
        )
    }

    /// Elements laid out on their own line(s) by the text renderer.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            Self::Div | Self::H2 | Self::Table | Self::Thead | Self::Tbody | Self::Tr
        )
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
