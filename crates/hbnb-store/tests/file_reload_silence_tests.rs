// Logging behaviour of the file backend, in its own test binary so the
// capture buffer only sees events from these tests.

use hbnb_core::logging_facility::init_test_capture;
use hbnb_core::{State, StorageEngine};
use hbnb_store::FileStorage;
use tempfile::TempDir;

#[test]
fn test_reload_missing_file_is_silent_and_preserves_state() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path().join("absent.json"));

    // Given: An object registered but never saved
    let state = State::new("Vermont");
    storage.new(state.clone().into()).unwrap();

    // When: The absent document is reloaded
    storage.reload().unwrap();

    // Then: Nothing was logged and the table is unchanged
    assert!(capture.events_for("reload", None).is_empty());
    assert_eq!(storage.all(None).unwrap().len(), 1);
    assert!(!storage.path().exists());
}

#[test]
fn test_save_logs_end_event_with_backend() {
    let capture = init_test_capture();
    let temp_dir = TempDir::new().unwrap();
    let mut storage = FileStorage::new(temp_dir.path().join("file.json"));
    storage.save().unwrap();

    let ends = capture.count_events(|e| {
        e.op.as_deref() == Some("save")
            && e.event.as_deref() == Some("end")
            && e.field("backend") == Some("file")
    });
    assert!(ends >= 1);
}
