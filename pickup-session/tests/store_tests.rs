//! Snapshot store tests
//!
//! Round-trip fidelity, first-run behavior on a missing file, and the
//! corrupt-file path that must surface a parse error instead of silently
//! yielding defaults.

use pickup_common::Error;
use pickup_session::{Snapshot, SnapshotStore, Statistics};
use tempfile::tempdir;

fn sample_snapshot() -> Snapshot {
    Snapshot {
        playlist: vec![
            "/music/one.flac".to_string(),
            "/music/two.flac".to_string(),
            "https://example.com/three.ogg".to_string(),
        ],
        playlist_pos: Some(2),
        time_pos: Some(100.5),
        vid: Some(1),
        aid: Some(2),
        sid: None,
        audio_delay: Some(-0.125),
        reason: Some("quit".to_string()),
        statistics: Statistics {
            start_time: 1_700_000_000.25,
            stop_time: Some(1_700_003_600.5),
            start_position: Some(95.0),
        },
    }
}

#[test]
fn test_save_load_round_trip() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("session.json"));
    let snapshot = sample_snapshot();

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap().expect("snapshot should exist");

    assert_eq!(loaded, snapshot);
}

#[test]
fn test_load_missing_file_is_first_run() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("absent.json"));

    assert!(store.load().unwrap().is_none());
}

#[test]
fn test_load_corrupt_file_surfaces_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, b"{not json at all").unwrap();

    let store = SnapshotStore::new(&path);
    match store.load() {
        Err(Error::SnapshotParse(msg)) => {
            assert!(msg.contains("session.json"));
        }
        other => panic!("Expected SnapshotParse, got {:?}", other),
    }
}

#[test]
fn test_load_wrong_shape_surfaces_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    // Well-formed JSON, wrong structure
    std::fs::write(&path, br#"{"playlist-pos":"not-a-number"}"#).unwrap();

    let store = SnapshotStore::new(&path);
    assert!(matches!(store.load(), Err(Error::SnapshotParse(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("nested").join("deep").join("session.json"));

    store.save(&Snapshot::default()).unwrap();
    assert!(store.load().unwrap().is_some());
}

#[test]
fn test_save_overwrites_prior_content() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("session.json"));

    store.save(&sample_snapshot()).unwrap();
    let mut second = Snapshot::default();
    second.time_pos = Some(7.0);
    store.save(&second).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, second);
}

#[test]
fn test_saved_document_uses_kebab_case_keys() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("session.json"));
    store.save(&sample_snapshot()).unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert_eq!(doc["playlist-pos"], 2);
    assert_eq!(doc["time-pos"], 100.5);
    assert_eq!(doc["audio-delay"], -0.125);
    assert_eq!(doc["statistics"]["start-time"], 1_700_000_000.25);
    assert_eq!(doc["statistics"]["stop-time"], 1_700_003_600.5);
    assert_eq!(doc["statistics"]["start-position"], 95.0);
    assert_eq!(doc["playlist"][2], "https://example.com/three.ogg");
}

#[test]
fn test_empty_playlist_key_omitted() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("session.json"));
    store.save(&Snapshot::default()).unwrap();

    let text = std::fs::read_to_string(store.path()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

    assert!(doc.get("playlist").is_none());
    assert!(doc.get("statistics").is_some());
}

#[test]
fn test_no_temp_file_left_behind() {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::new(dir.path().join("session.json"));
    store.save(&sample_snapshot()).unwrap();

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("session.json")]);
}
