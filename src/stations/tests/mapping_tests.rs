//! Tests for station mapping lookups and document loading

use super::*;
use crate::error::TideError;
use crate::stations::{StationLookup, StationMapping};
use std::collections::{BTreeMap, HashMap};

#[test]
fn test_lookup_and_fallback_label() {
    let mapping = StationMapping::from_pairs([("01", "Tokyo"), ("TK", "東京")]);

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.lookup("01"), Some("Tokyo"));
    assert_eq!(mapping.lookup("99"), None);
    assert_eq!(mapping.display_name("TK"), "東京");
    assert_eq!(mapping.display_name("99"), "unmapped (99)");
}

#[test]
fn test_empty_mapping_resolves_everything_to_fallback() {
    let mapping = StationMapping::new();
    assert!(mapping.is_empty());
    assert_eq!(mapping.display_name("01"), "unmapped (01)");
}

#[test]
fn test_plain_maps_implement_lookup() {
    let mut hash = HashMap::new();
    hash.insert("01".to_string(), "Tokyo".to_string());
    assert_eq!(hash.display_name("01"), "Tokyo");

    let mut btree = BTreeMap::new();
    btree.insert("02".to_string(), "Osaka".to_string());
    assert_eq!(btree.lookup("02"), Some("Osaka"));
    assert_eq!(btree.display_name("03"), "unmapped (03)");

    let mapping = StationMapping::from(hash);
    assert_eq!(mapping.lookup("01"), Some("Tokyo"));
}

#[test]
fn test_load_from_markdown_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_mapping_document(temp_dir.path(), r#"{"TK": "東京", "01": "Tokyo"}"#);

    let mapping = StationMapping::load_from_file(&path).unwrap();
    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.lookup("TK"), Some("東京"));
    assert_eq!(mapping.source(), Some(&path));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.md");

    match StationMapping::load_from_file(&path).unwrap_err() {
        TideError::MappingLoad { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected MappingLoad error, got {:?}", other),
    }
}

#[test]
fn test_load_document_without_object() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("mapping.md");
    fs::write(&path, "# No mapping yet\n").unwrap();

    assert!(matches!(
        StationMapping::load_from_file(&path),
        Err(TideError::MappingLoad { .. })
    ));
}

#[test]
fn test_load_rejects_nested_values() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_mapping_document(temp_dir.path(), r#"{"TK": {"name": "東京"}}"#);

    match StationMapping::load_from_file(&path).unwrap_err() {
        TideError::MappingLoad { reason, .. } => assert!(reason.contains("invalid mapping JSON")),
        other => panic!("Expected MappingLoad error, got {:?}", other),
    }
}
