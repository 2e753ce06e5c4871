// Integration tests for the JSON document backend

mod common;

use common::{build_graph, file_storage};
use hbnb_core::codec::decode_document;
use hbnb_core::{City, Entity, EntityKind, ExErrorKind, Model, State, StorageEngine, User};
use hbnb_store::FileStorage;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_fresh_storage_is_empty() {
    // Given: A directory with no storage document
    let temp_dir = TempDir::new().unwrap();

    // When: The engine is constructed and reloaded
    let storage = file_storage(temp_dir.path());

    // Then: all() is empty for every filter
    assert!(storage.all(None).unwrap().is_empty());
    for kind in EntityKind::ALL {
        assert!(storage.all(Some(kind)).unwrap().is_empty());
    }
}

#[test]
fn test_save_then_reload_reproduces_state() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();

    let mut storage = file_storage(temp_dir.path());
    graph.persist(&mut storage);
    let before = storage.all(None).unwrap();

    storage.reload().unwrap();
    let after = storage.all(None).unwrap();

    assert_eq!(before.len(), 6);
    assert_eq!(
        before.keys().collect::<Vec<_>>(),
        after.keys().collect::<Vec<_>>()
    );
    for (key, entity) in &before {
        assert_eq!(
            entity.to_dict().unwrap(),
            after[key].to_dict().unwrap(),
            "attributes changed for {}",
            key
        );
    }
}

#[test]
fn test_restart_sees_saved_objects() {
    // Given: California and San Jose saved by one engine
    let temp_dir = TempDir::new().unwrap();
    let state = State::new("California");
    let city = City::new(&state, "San Jose");
    {
        let mut storage = file_storage(temp_dir.path());
        storage.new(state.clone().into()).unwrap();
        storage.new(city.clone().into()).unwrap();
        storage.save().unwrap();
    }

    // When: A new engine reloads the same document
    let restarted = file_storage(temp_dir.path());

    // Then: Exactly one city, referencing the state
    let cities = restarted.all(Some(EntityKind::City)).unwrap();
    assert_eq!(cities.len(), 1);
    let loaded = cities
        .into_values()
        .next()
        .and_then(Entity::into_model::<City>)
        .unwrap();
    assert_eq!(loaded.state_id, state.id());
    assert_eq!(loaded.name, "San Jose");
    assert_eq!(loaded.base().created_at(), city.base().created_at());
}

#[test]
fn test_all_filters_by_kind() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());
    build_graph().persist(&mut storage);

    let users = storage.all(Some(EntityKind::User)).unwrap();
    assert_eq!(users.len(), 1);
    assert!(users.keys().all(|k| k.starts_with("User.")));
}

#[test]
fn test_new_replaces_same_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());

    let mut state = State::new("Draft");
    storage.new(state.clone().into()).unwrap();
    state.name = "Final".to_string();
    storage.new(state.clone().into()).unwrap();

    let all = storage.all(None).unwrap();
    assert_eq!(all.len(), 1);
    let stored = all[&state.key()].clone().into_model::<State>().unwrap();
    assert_eq!(stored.name, "Final");
}

#[test]
fn test_delete_then_absent_after_reload() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());
    let user: Entity = User::new("u@x.io", "pw").into();

    storage.new(user.clone()).unwrap();
    storage.save().unwrap();
    storage.delete(&user).unwrap();
    storage.save().unwrap();

    let mut restarted = FileStorage::new(storage.path());
    restarted.reload().unwrap();
    assert!(!restarted.all(None).unwrap().contains_key(&user.key()));
}

#[test]
fn test_delete_absent_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());
    let never_added: Entity = State::new("Nowhere").into();

    storage.delete(&never_added).unwrap();
    assert!(storage.all(None).unwrap().is_empty());
}

#[test]
fn test_document_layout_is_keyed_by_composite_key() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());
    let state = State::new("Oregon");
    storage.new(state.clone().into()).unwrap();
    storage.save().unwrap();

    let text = fs::read_to_string(storage.path()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = &document[format!("State.{}", state.id())];
    assert_eq!(record["__class__"], "State");
    assert_eq!(record["name"], "Oregon");

    let decoded = decode_document(&text).unwrap();
    assert_eq!(decoded.len(), 1);
}

#[test]
fn test_close_resynchronizes_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let mut writer = file_storage(temp_dir.path());
    let mut reader = file_storage(temp_dir.path());

    let state: Entity = State::new("Idaho").into();
    writer.new(state.clone()).unwrap();
    writer.save().unwrap();

    assert!(reader.all(None).unwrap().is_empty());
    reader.close().unwrap();
    assert!(reader.all(None).unwrap().contains_key(&state.key()));
}

#[test]
fn test_unknown_class_in_document_fails_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("file.json");
    fs::write(
        &path,
        r#"{"Planet.1": {"__class__": "Planet", "id": "1"}}"#,
    )
    .unwrap();

    let mut storage = FileStorage::new(&path);
    let err = storage.reload().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::UnknownClass);
    assert!(storage.all(None).unwrap().is_empty());
}

#[test]
fn test_entity_save_touches_and_persists() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = file_storage(temp_dir.path());
    let mut state = State::new("Maine");
    let created = state.base().updated_at();

    state.save(&mut storage).unwrap();
    let first = state.base().updated_at();
    state.save(&mut storage).unwrap();
    let second = state.base().updated_at();

    assert!(first >= created);
    assert!(second >= first);
    let restarted = file_storage(temp_dir.path());
    assert!(restarted.all(None).unwrap().contains_key(&state.key()));
}

#[test]
fn test_non_finite_coordinate_fails_save_and_keeps_document() {
    // Given: A saved graph on disk
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = file_storage(temp_dir.path());
    graph.persist(&mut storage);
    let path = temp_dir.path().join("file.json");
    let before = fs::read_to_string(&path).unwrap();

    // When: A place with a NaN latitude is registered and saved
    let mut place = graph.place.clone();
    place.latitude = f64::NAN;
    storage.new(place.into()).unwrap();
    let err = storage.save().unwrap_err();

    // Then: save fails, the document is untouched and still reloads
    assert_eq!(err.kind(), ExErrorKind::InvalidValue);
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
    let restarted = file_storage(temp_dir.path());
    assert_eq!(restarted.all(None).unwrap().len(), 6);
}
