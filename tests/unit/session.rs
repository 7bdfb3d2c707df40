use super::*;
use crate::config::io::{EXPORT_FILE_NAME, MemoryBlobIo};
use serde_json::json;

#[test]
fn update_reports_repaint_only_when_something_changed() {
    let mut s = EditorSession::new().unwrap();
    let start = s.fingerprint();

    let r = s.update(ConfigField::CardRadius, 20).unwrap();
    assert!(r.changed);
    assert_ne!(r.fingerprint, start);
    assert_eq!(s.fingerprint(), r.fingerprint);

    let again = s.update(ConfigField::CardRadius, 20).unwrap();
    assert!(!again.changed);
    assert_eq!(again.fingerprint, r.fingerprint);
}

#[test]
fn column_changes_above_the_cap_do_not_repaint() {
    let mut s = EditorSession::new().unwrap();
    assert!(s.update(ConfigField::GalleryColumns, 5).unwrap().changed);
    let r = s.update(ConfigField::GalleryColumns, 6).unwrap();
    assert!(!r.changed);
    assert_eq!(s.config().leaf(ConfigField::GalleryColumns), Some(&json!(6)));
}

#[test]
fn failed_update_keeps_tree_and_store() {
    let mut s = EditorSession::new().unwrap();
    let before = s.config();
    let fp = s.fingerprint();
    assert!(s.update_path(&["gallery", "nope"], json!(1)).is_err());
    assert!(s.update(ConfigField::FontWeight, 450).is_err());
    assert!(Arc::ptr_eq(&before, &s.config()));
    assert_eq!(s.fingerprint(), fp);
}

#[test]
fn batch_switches_layout_once() {
    let mut s = EditorSession::new().unwrap();
    let r = s
        .apply_batch([
            (ConfigField::Layout, json!("layoutB")),
            (ConfigField::Viewport, json!("mobile")),
        ])
        .unwrap();
    assert!(r.changed);
    assert!(s.tree().find("swatch-row").is_some());
    assert!(s.tree().find("swatch-grid").is_none());
}

#[test]
fn malformed_import_yields_a_notice() {
    let mut s = EditorSession::new().unwrap();
    let before = s.config();
    let out = s.import_text("{ nope").unwrap();
    assert_eq!(
        out,
        ImportOutcome::Rejected(Notice {
            message: "Invalid JSON".to_owned()
        })
    );
    assert!(Arc::ptr_eq(&before, &s.config()));
}

#[test]
fn partial_group_import_is_refused_by_the_session() {
    let mut s = EditorSession::new().unwrap();
    let fp = s.fingerprint();
    let out = s.import_text(r#"{"button": {"borderRadius": 5}}"#).unwrap();
    match out {
        ImportOutcome::Rejected(n) => assert!(n.message.contains("button.shadow"), "{}", n.message),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(s.config().leaf(ConfigField::ButtonBorderRadius), Some(&json!(8)));
    assert_eq!(s.fingerprint(), fp);
}

#[test]
fn full_import_applies_and_repaints() {
    let mut source = EditorSession::new().unwrap();
    source.update(ConfigField::SectionBg, "#fafafa").unwrap();
    let mut io = MemoryBlobIo::new();
    source.export_to(&mut io, EXPORT_FILE_NAME).unwrap();

    let mut s = EditorSession::new().unwrap();
    let out = s.import_from(&io, EXPORT_FILE_NAME).unwrap();
    assert!(matches!(out, ImportOutcome::Applied(Repaint { changed: true, .. })));
    assert_eq!(*s.config(), *source.config());
    assert_eq!(s.fingerprint(), source.fingerprint());
}

#[test]
fn unreadable_blob_is_a_rejected_import() {
    let mut s = EditorSession::new().unwrap();
    let out = s.import_from(&MemoryBlobIo::new(), EXPORT_FILE_NAME).unwrap();
    assert!(matches!(out, ImportOutcome::Rejected(_)));
}

#[test]
fn session_refuses_stores_that_do_not_project() {
    let mut store = ConfigStore::new();
    store.import_snapshot(r#"{"gallery": {"columns": 3}}"#).unwrap();
    let err = EditorSession::with_store(store).unwrap_err();
    assert!(matches!(err, VitrineError::MissingLeaf(_)));
}
