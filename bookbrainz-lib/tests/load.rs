use std::io::Write;

use bookbrainz_lib::error::LoadError;
use bookbrainz_lib::{load_publishers, load_publishers_file, publishers_from_str};

const TWO_PUBLISHERS: &str = r#"[
    {"bbid": "bbid-1", "defaultAlias": {"name": "Penguin Books"}, "area": {"name": "United Kingdom"}},
    {"bbid": "bbid-2", "defaultAlias": {"name": "Gallimard"}, "publisherType": {"label": "Publisher"}}
]"#;

// ============================================================================
// Document shapes
// ============================================================================

#[test]
fn test_load_bare_array_keeps_order() {
    let publishers = publishers_from_str(TWO_PUBLISHERS).unwrap();
    let bbids: Vec<_> = publishers.iter().map(|p| p.bbid.as_str()).collect();
    assert_eq!(bbids, vec!["bbid-1", "bbid-2"]);
}

#[test]
fn test_load_wrapped_document() {
    let json = format!(r#"{{"publishers": {TWO_PUBLISHERS}}}"#);
    let publishers = publishers_from_str(&json).unwrap();
    assert_eq!(publishers.len(), 2);
}

#[test]
fn test_load_empty_list() {
    assert!(publishers_from_str("[]").unwrap().is_empty());
}

#[test]
fn test_load_from_reader() {
    let publishers = load_publishers(TWO_PUBLISHERS.as_bytes()).unwrap();
    assert_eq!(publishers[1].type_label(), Some("Publisher"));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("bookbrainz-load-{}.json", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(TWO_PUBLISHERS.as_bytes()).unwrap();
    drop(file);

    let publishers = load_publishers_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(publishers[0].area_name(), Some("United Kingdom"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_file() {
    let err = load_publishers_file(std::path::Path::new("/nonexistent/publishers.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_invalid_json() {
    let err = publishers_from_str("{not json").unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn test_missing_bbid_is_json_error() {
    let err = publishers_from_str(r#"[{"defaultAlias": {"name": "x"}}]"#).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}

#[test]
fn test_empty_bbid() {
    let err = publishers_from_str(r#"[{"bbid": "a"}, {"bbid": " "}]"#).unwrap_err();
    assert!(matches!(err, LoadError::EmptyBbid { index: 1 }));
}

#[test]
fn test_duplicate_bbid() {
    let err = publishers_from_str(r#"[{"bbid": "a"}, {"bbid": "b"}, {"bbid": "a"}]"#).unwrap_err();
    match err {
        LoadError::DuplicateBbid { bbid, index } => {
            assert_eq!(bbid, "a");
            assert_eq!(index, 2);
        }
        other => panic!("expected DuplicateBbid, got {other:?}"),
    }
    assert_eq!(
        LoadError::duplicate("a", 2).to_string(),
        "Duplicate BBID 'a' at index 2"
    );
}
