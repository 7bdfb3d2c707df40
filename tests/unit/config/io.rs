use super::*;

#[test]
fn memory_blobs_round_trip() {
    let mut io = MemoryBlobIo::new();
    io.write_text(EXPORT_FILE_NAME, "{}").unwrap();
    assert_eq!(io.read_text(EXPORT_FILE_NAME).unwrap(), "{}");
    assert!(io.read_text("other.json").is_err());
}

#[test]
fn blob_names_must_stay_below_root() {
    let mut io = MemoryBlobIo::new();
    for bad in ["", "  ", "/etc/passwd", "../up.json", "a/../../b.json", "..\\win.json"] {
        assert!(io.write_text(bad, "x").is_err(), "{bad:?}");
    }
    assert!(io.write_text("nested/ok.json", "x").is_ok());
}

#[test]
fn fs_blobs_write_then_read() {
    let dir = PathBuf::from("target").join("unit_fs_blob_io");
    let _ = fs::remove_dir_all(&dir);
    let mut io = FsBlobIo::new(&dir);
    io.write_text("sub/ui-config.json", "{\"a\": 1}").unwrap();
    assert_eq!(io.read_text("sub/ui-config.json").unwrap(), "{\"a\": 1}");
    assert!(io.root().join("sub").is_dir());
}

#[test]
fn fs_missing_blob_is_recoverable() {
    let io = FsBlobIo::new(PathBuf::from("target").join("unit_fs_blob_io_missing"));
    let err = io.read_text("absent.json").unwrap_err();
    assert!(err.is_recoverable());
    assert!(err.to_string().contains("absent.json"));
}
