use bbdom::{Event, render_html, render_html_pretty, render_text};
use bookbrainz_lib::load_publishers_file;
use bookbrainz_views::{PublisherTable, Selection, ToggleQueue};

use crate::args::{OutputFormat, PublishersArgs};
use crate::error::CliError;
use crate::settings::Settings;

/// Rendered table plus the selection it was rendered with.
#[derive(Debug)]
pub struct PublishersOutput {
    pub rendered: String,
    pub selected: Vec<String>,
}

/// Load publishers, replay `--toggle` clicks against the table, and render.
///
/// This command plays the parent page: it owns the selection, feeds it to the
/// table as read-only props and applies the toggles the table reports.
pub fn publishers(args: &PublishersArgs, settings: &Settings) -> Result<PublishersOutput, CliError> {
    let publishers = load_publishers_file(&args.input)?;

    let format = args.format.unwrap_or(settings.format);
    let collection = args.collection || settings.collection;
    let checkboxes = args.checkboxes || settings.checkboxes || !args.toggle.is_empty();
    let pretty = args.pretty || settings.pretty;

    let mut selection: Selection = args.select.iter().cloned().collect();
    let queue = ToggleQueue::new();

    for target in &args.toggle {
        let selected = selection.selected();
        let table = PublisherTable::new(&publishers)
            .collection(collection)
            .show_checkboxes(checkboxes)
            .selected_entities(&selected)
            .on_toggle_row(queue.handler());

        if !table.dispatch(&Event::click(target)).is_handled() {
            log::warn!("No publisher row with BBID '{}'", target);
        }
        for bbid in queue.drain() {
            let (added, removed) = selection.toggle(&bbid);
            log::debug!("toggled {}: added {:?}, removed {:?}", bbid, added, removed);
        }
    }

    let selected = selection.selected();
    let root = PublisherTable::new(&publishers)
        .collection(collection)
        .show_checkboxes(checkboxes)
        .selected_entities(&selected)
        .element();

    let rendered = match format {
        OutputFormat::Html if pretty => render_html_pretty(&root),
        OutputFormat::Html => render_html(&root),
        OutputFormat::Text => render_text(&root),
    };

    Ok(PublishersOutput { rendered, selected })
}
