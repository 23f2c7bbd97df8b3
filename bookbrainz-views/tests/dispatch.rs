use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use bbdom::{Event, Key};
use bookbrainz_lib::PublisherRecord;
use bookbrainz_lib::model::EntityRecord;
use bookbrainz_views::publisher_table::PublisherTableRow;
use bookbrainz_views::{
    BookBrainzFormatter, EntityFormatter, EventResult, PublisherTable, Selection, ToggleQueue,
};

fn publishers() -> Vec<PublisherRecord> {
    vec![
        PublisherRecord::new("bbid-1").with_name("Penguin Books"),
        PublisherRecord::new("bbid-2").with_name("Gallimard"),
    ]
}

// ============================================================================
// Toggle callback
// ============================================================================

#[test]
fn test_click_invokes_handler_once_with_bbid() {
    let publishers = publishers();
    let selected = vec!["bbid-1".to_string()];
    let queue = ToggleQueue::new();
    let table = PublisherTable::new(&publishers)
        .show_checkboxes(true)
        .selected_entities(&selected)
        .on_toggle_row(queue.handler());

    let result = table.dispatch(&Event::click("bbid-1"));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(queue.drain(), vec!["bbid-1"]);
    // The table never edits the selection it was given.
    assert_eq!(selected, vec!["bbid-1"]);
}

#[test]
fn test_handler_counts_calls() {
    let publishers = publishers();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let table = PublisherTable::new(&publishers)
        .show_checkboxes(true)
        .on_toggle_row(Arc::new(move |_bbid: &str| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

    table.dispatch(&Event::click("bbid-2"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_activation_keys_toggle() {
    let publishers = publishers();
    let queue = ToggleQueue::new();
    let table = PublisherTable::new(&publishers)
        .show_checkboxes(true)
        .on_toggle_row(queue.handler());

    assert!(table.dispatch(&Event::key("bbid-1", Key::Char(' '))).is_handled());
    assert!(table.dispatch(&Event::key("bbid-2", Key::Enter)).is_handled());
    assert_eq!(
        table.dispatch(&Event::key("bbid-1", Key::Char('x'))),
        EventResult::Ignored
    );
    assert_eq!(queue.drain(), vec!["bbid-1", "bbid-2"]);
}

// ============================================================================
// Ignored events
// ============================================================================

#[test]
fn test_click_without_checkboxes_is_ignored() {
    let publishers = publishers();
    let queue = ToggleQueue::new();
    let table = PublisherTable::new(&publishers).on_toggle_row(queue.handler());

    assert_eq!(table.dispatch(&Event::click("bbid-1")), EventResult::Ignored);
    assert!(queue.is_empty());
}

#[test]
fn test_click_without_handler_is_ignored() {
    let publishers = publishers();
    let table = PublisherTable::new(&publishers).show_checkboxes(true);
    assert_eq!(table.dispatch(&Event::click("bbid-1")), EventResult::Ignored);
}

#[test]
fn test_unknown_or_missing_target_is_ignored() {
    let publishers = publishers();
    let queue = ToggleQueue::new();
    let table = PublisherTable::new(&publishers)
        .show_checkboxes(true)
        .on_toggle_row(queue.handler());

    assert_eq!(table.dispatch(&Event::click("bbid-3")), EventResult::Ignored);
    assert_eq!(table.dispatch(&Event::Click { target: None }), EventResult::Ignored);
    assert!(queue.is_empty());
}

#[test]
fn test_row_toggle_directly() {
    let publisher = PublisherRecord::new("bbid-1");
    let queue = ToggleQueue::new();

    let without_checkbox = PublisherTableRow::new(&publisher, false).on_toggle_row(Some(queue.handler()));
    assert_eq!(without_checkbox.toggle(), EventResult::Ignored);

    let with_checkbox = without_checkbox.show_checkboxes(true);
    assert_eq!(with_checkbox.toggle(), EventResult::Consumed);
    assert_eq!(queue.drain(), vec!["bbid-1"]);
}

/// Counts how many rows were formatted.
#[derive(Default)]
struct CountingFormatter {
    labels: AtomicUsize,
}

impl EntityFormatter for CountingFormatter {
    fn label(&self, entity: &dyn EntityRecord) -> String {
        self.labels.fetch_add(1, Ordering::SeqCst);
        BookBrainzFormatter.label(entity)
    }
}

#[test]
fn test_dispatch_does_not_format_rows() {
    let publishers = publishers();
    let formatter = Arc::new(CountingFormatter::default());
    let queue = ToggleQueue::new();
    let table = PublisherTable::new(&publishers)
        .show_checkboxes(true)
        .on_toggle_row(queue.handler())
        .formatter(formatter.clone());

    assert_eq!(table.dispatch(&Event::click("bbid-2")), EventResult::Consumed);
    assert_eq!(table.dispatch(&Event::click("bbid-3")), EventResult::Ignored);
    assert_eq!(formatter.labels.load(Ordering::SeqCst), 0);
    assert_eq!(queue.drain(), vec!["bbid-2"]);

    table.element();
    assert_eq!(formatter.labels.load(Ordering::SeqCst), 2);
}

// ============================================================================
// Parent-owned selection
// ============================================================================

#[test]
fn test_parent_applies_toggles_between_renders() {
    let publishers = publishers();
    let queue = ToggleQueue::new();
    let mut selection = Selection::new();

    for target in ["bbid-1", "bbid-2", "bbid-1"] {
        let selected = selection.selected();
        let table = PublisherTable::new(&publishers)
            .show_checkboxes(true)
            .selected_entities(&selected)
            .on_toggle_row(queue.handler());
        table.dispatch(&Event::click(target));

        for bbid in queue.drain() {
            selection.toggle(&bbid);
        }
    }

    assert_eq!(selection.selected(), vec!["bbid-2"]);
}
