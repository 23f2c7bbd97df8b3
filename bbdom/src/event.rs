/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer click on an element
    Click { target: Option<String> },
    /// Key press, targeted at the focused element
    Key { target: Option<String>, key: Key },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn key(target: impl Into<String>, key: Key) -> Self {
        Self::Key {
            target: Some(target.into()),
            key,
        }
    }

    /// The id of the element this event is aimed at.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Click { target } | Self::Key { target, .. } => target.as_deref(),
        }
    }

    /// Whether the event activates its target the way a click does.
    /// Space and Enter activate, other keys do not.
    pub fn is_activation(&self) -> bool {
        match self {
            Self::Click { .. } => true,
            Self::Key { key, .. } => matches!(key, Key::Char(' ') | Key::Enter),
        }
    }
}
