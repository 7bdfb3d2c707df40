use super::*;
use crate::config::io::{EXPORT_FILE_NAME, MemoryBlobIo};
use serde_json::json;

#[test]
fn held_snapshots_survive_later_updates() {
    let mut store = ConfigStore::new();
    let before = store.get();
    let after = store
        .update_field(&["button", "borderRadius"], json!(20))
        .unwrap();
    assert_eq!(before.leaf(ConfigField::ButtonBorderRadius), Some(&json!(8)));
    assert_eq!(after.leaf(ConfigField::ButtonBorderRadius), Some(&json!(20)));
    assert!(!Arc::ptr_eq(&before, &after));
    assert!(Arc::ptr_eq(&after, &store.get()));
}

#[test]
fn rejected_update_keeps_current_snapshot() {
    let mut store = ConfigStore::new();
    let before = store.get();
    let err = store.update_field(&["button", "glow"], json!(1)).unwrap_err();
    assert!(matches!(err, VitrineError::InvalidPath(_)));
    let err = store.set(ConfigField::FontSize, 99).unwrap_err();
    assert!(matches!(err, VitrineError::Validation(_)));
    assert!(Arc::ptr_eq(&before, &store.get()));
}

#[test]
fn same_update_twice_equals_once() {
    let mut a = ConfigStore::new();
    a.set(ConfigField::Viewport, "mobile").unwrap();
    let mut b = ConfigStore::new();
    b.set(ConfigField::Viewport, "mobile").unwrap();
    b.set(ConfigField::Viewport, "mobile").unwrap();
    assert_eq!(*a.get(), *b.get());
}

#[test]
fn batch_keeps_last_value_of_a_slider_burst() {
    let mut store = ConfigStore::new();
    let updates = (10..=24).map(|v| (ConfigField::FontSize, json!(v)));
    let snap = store.apply_batch(updates).unwrap();
    assert_eq!(snap.leaf(ConfigField::FontSize), Some(&json!(24)));
}

#[test]
fn batch_preserves_order_across_fields() {
    let mut store = ConfigStore::new();
    let snap = store
        .apply_batch([
            (ConfigField::Layout, json!("layoutB")),
            (ConfigField::GalleryColumns, json!(2)),
            (ConfigField::Layout, json!("layoutA")),
        ])
        .unwrap();
    assert_eq!(snap.leaf(ConfigField::Layout), Some(&json!("layoutA")));
    assert_eq!(snap.leaf(ConfigField::GalleryColumns), Some(&json!(2)));
}

#[test]
fn batch_is_atomic() {
    let mut store = ConfigStore::new();
    let before = store.get();
    let err = store
        .apply_batch([
            (ConfigField::FontSize, json!(12)),
            (ConfigField::GallerySpacing, json!(100)),
        ])
        .unwrap_err();
    assert!(matches!(err, VitrineError::Validation(_)));
    assert!(Arc::ptr_eq(&before, &store.get()));
}

#[test]
fn export_is_pretty_and_names_the_default_font() {
    let text = ConfigStore::new().export_snapshot().unwrap();
    assert!(text.contains("\"fontFamily\": \"Inter\""));
    assert!(text.starts_with("{\n  \"fontFamily\""));
    assert!(text.contains("\n    \"borderRadius\": 8"));
}

#[test]
fn export_then_import_is_identity() {
    let mut store = ConfigStore::new();
    store.set(ConfigField::ButtonShadow, "large").unwrap();
    store.set(ConfigField::SectionBg, "linen").unwrap();
    let original = store.get();
    let text = store.export_snapshot().unwrap();

    let mut fresh = ConfigStore::new();
    let imported = fresh.import_snapshot(&text).unwrap();
    assert_eq!(*imported, *original);
}

#[test]
fn partial_group_import_drops_sibling_leaves() {
    let mut store = ConfigStore::new();
    store.set(ConfigField::ButtonBackground, "#fff").unwrap();
    let snap = store
        .import_snapshot(r#"{"button": {"borderRadius": 5}}"#)
        .unwrap();
    assert_eq!(snap.leaf(ConfigField::ButtonBorderRadius), Some(&json!(5)));
    assert_eq!(snap.leaf(ConfigField::ButtonBackground), None);
    assert_eq!(snap.missing_leaves().len(), 6);
}

#[test]
fn malformed_import_is_a_parse_error_and_changes_nothing() {
    let mut store = ConfigStore::new();
    let before = store.get();
    for bad in ["{", "not json", "[1, 2]", "42"] {
        let err = store.import_snapshot(bad).unwrap_err();
        assert!(matches!(err, VitrineError::Parse(_)), "{bad}: {err}");
        assert!(err.is_recoverable());
    }
    assert!(Arc::ptr_eq(&before, &store.get()));
}

#[test]
fn import_with_bad_leaf_changes_nothing() {
    let mut store = ConfigStore::new();
    let before = store.get();
    let err = store
        .import_snapshot(r#"{"fontSize": 12, "layout": "layoutZ"}"#)
        .unwrap_err();
    assert!(matches!(err, VitrineError::Validation(_)));
    assert!(Arc::ptr_eq(&before, &store.get()));
}

#[test]
fn blob_export_and_import_use_the_capability() {
    let mut io = MemoryBlobIo::new();
    let mut store = ConfigStore::new();
    store.set(ConfigField::CardRadius, 3).unwrap();
    store.export_to(&mut io, EXPORT_FILE_NAME).unwrap();

    let mut other = ConfigStore::new();
    other.import_from(&io, EXPORT_FILE_NAME).unwrap();
    assert_eq!(*other.get(), *store.get());
    assert!(other.import_from(&io, "missing.json").is_err());
}
