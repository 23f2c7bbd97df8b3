//! Loading entity lists from JSON

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::PublisherRecord;

/// Accepted document shapes: a bare array, or the site's `{"publishers": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum PublisherDocument {
    List(Vec<PublisherRecord>),
    Wrapped { publishers: Vec<PublisherRecord> },
}

impl PublisherDocument {
    fn into_records(self) -> Vec<PublisherRecord> {
        match self {
            Self::List(records) | Self::Wrapped { publishers: records } => records,
        }
    }
}

/// Parse publishers from a JSON string.
pub fn publishers_from_str(json: &str) -> Result<Vec<PublisherRecord>, LoadError> {
    let document: PublisherDocument = serde_json::from_str(json)?;
    let records = document.into_records();
    check_keys(&records)?;
    Ok(records)
}

/// Read publishers from any JSON source.
pub fn load_publishers(reader: impl Read) -> Result<Vec<PublisherRecord>, LoadError> {
    let document: PublisherDocument = serde_json::from_reader(reader)?;
    let records = document.into_records();
    check_keys(&records)?;
    Ok(records)
}

/// Read publishers from a JSON file.
pub fn load_publishers_file(path: &Path) -> Result<Vec<PublisherRecord>, LoadError> {
    let file = File::open(path)?;
    let publishers = load_publishers(BufReader::new(file))?;
    log::info!(
        "Loaded {} publishers from {}",
        publishers.len(),
        path.display()
    );
    Ok(publishers)
}

/// BBIDs key table rows, so every record needs a distinct, non-empty one.
fn check_keys(records: &[PublisherRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.bbid.trim().is_empty() {
            return Err(LoadError::EmptyBbid { index });
        }
        if !seen.insert(record.bbid.as_str()) {
            return Err(LoadError::duplicate(&record.bbid, index));
        }
    }
    Ok(())
}
