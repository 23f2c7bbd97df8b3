//! Event results and the row toggle channel.

use std::sync::{Arc, Mutex, PoisonError};

/// Callback invoked with a row's BBID when its checkbox is activated.
pub type ToggleHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

/// Queue of toggled BBIDs, for parents that apply selection changes after
/// dispatch rather than inside the callback.
///
/// ```
/// use bookbrainz_views::{Selection, ToggleQueue};
///
/// let queue = ToggleQueue::new();
/// let handler = queue.handler();
/// handler("bbid-1");
///
/// let mut selection = Selection::new();
/// for bbid in queue.drain() {
///     selection.toggle(&bbid);
/// }
/// assert!(selection.is_selected("bbid-1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ToggleQueue {
    pending: Arc<Mutex<Vec<String>>>,
}

impl ToggleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler that pushes every toggled BBID onto this queue.
    pub fn handler(&self) -> ToggleHandler {
        let pending = Arc::clone(&self.pending);
        Arc::new(move |bbid: &str| {
            pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(bbid.to_string());
        })
    }

    /// Take all queued BBIDs, oldest first.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
