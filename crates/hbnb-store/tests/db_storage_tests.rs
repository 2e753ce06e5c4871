// Integration tests for the SQLite backend

mod common;

use common::{build_graph, db_config, db_storage};
use hbnb_core::{
    Amenity, City, Entity, EntityKind, ExErrorKind, Model, Place, State, StorageEngine,
};
use hbnb_store::{DbConfig, DbStorage};
use tempfile::TempDir;

#[test]
fn test_fresh_database_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let storage = db_storage(temp_dir.path());
    assert!(storage.all(None).unwrap().is_empty());
}

#[test]
fn test_new_is_staged_until_save() {
    // Given: An object registered but not saved
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());
    let state: Entity = State::new("California").into();
    storage.new(state.clone()).unwrap();

    // Then: It is pending, and a second engine cannot see it
    assert_eq!(storage.pending(), 1);
    let observer = db_storage(temp_dir.path());
    assert!(!observer.all(None).unwrap().contains_key(&state.key()));

    // When: The session commits
    storage.save().unwrap();

    // Then: A fresh engine sees it
    let fresh = db_storage(temp_dir.path());
    assert!(fresh.all(None).unwrap().contains_key(&state.key()));
}

#[test]
fn test_graph_round_trips_exactly() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    let fresh = db_storage(temp_dir.path());
    let all = fresh.all(None).unwrap();
    assert_eq!(all.len(), 6);
    for entity in graph.entities() {
        let stored = &all[&entity.key()];
        assert_eq!(stored.to_dict().unwrap(), entity.to_dict().unwrap());
    }
}

#[test]
fn test_commit_order_does_not_depend_on_registration_order() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());

    // Children registered before their parents
    for entity in graph.entities().into_iter().rev() {
        storage.new(entity).unwrap();
    }
    storage.save().unwrap();

    assert_eq!(storage.all(None).unwrap().len(), 6);
}

#[test]
fn test_failed_save_rolls_back_everything() {
    // Given: A committed state
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());
    let kept = State::new("Kept");
    storage.new(kept.clone().into()).unwrap();
    storage.save().unwrap();

    // When: A batch mixes a valid insert with a city whose state does not exist
    let valid = State::new("Valid");
    let orphan_parent = State::new("Never saved");
    let orphan = City::new(&orphan_parent, "Orphan");
    storage.new(valid.clone().into()).unwrap();
    storage.new(orphan.into()).unwrap();
    let err = storage.save().unwrap_err();

    // Then: Nothing from the batch is durable and the prior state survives
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert_eq!(storage.pending(), 0);
    let all = storage.all(None).unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.contains_key(&kept.key()));
    assert!(!all.contains_key(&valid.key()));
}

#[test]
fn test_closed_session_rejects_operations() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());
    let state: Entity = State::new("Closed").into();
    storage.close().unwrap();

    let errors = [
        storage.all(None).unwrap_err(),
        storage.new(state.clone()).unwrap_err(),
        storage.delete(&state).unwrap_err(),
        storage.save().unwrap_err(),
    ];
    for err in errors {
        assert_eq!(err.kind(), ExErrorKind::InvalidState, "{}", err);
    }

    // close stays harmless
    storage.close().unwrap();
}

#[test]
fn test_delete_then_absent() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());
    let state: Entity = State::new("Ephemeral").into();

    storage.new(state.clone()).unwrap();
    storage.save().unwrap();
    storage.delete(&state).unwrap();
    storage.save().unwrap();

    let mut fresh = DbStorage::new(db_config(temp_dir.path()));
    fresh.reload().unwrap();
    assert!(!fresh.all(None).unwrap().contains_key(&state.key()));
}

#[test]
fn test_delete_missing_row_commits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());

    storage.delete(&State::new("Ghost").into()).unwrap();
    storage.save().unwrap();
    assert!(storage.all(None).unwrap().is_empty());
}

#[test]
fn test_delete_state_cascades_to_dependents() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    storage.delete(&graph.state.clone().into()).unwrap();
    storage.save().unwrap();

    let all = storage.all(None).unwrap();
    for kind in [
        EntityKind::State,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::Review,
    ] {
        assert_eq!(storage.count(Some(kind)).unwrap(), 0, "{} survived", kind);
    }
    assert!(all.contains_key(&graph.user.key()));
    assert!(all.contains_key(&graph.amenity.key()));
}

#[test]
fn test_deleting_amenity_unlinks_it_from_places() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    storage.delete(&graph.amenity.clone().into()).unwrap();
    storage.save().unwrap();

    let place = storage
        .get(EntityKind::Place, graph.place.id())
        .unwrap()
        .and_then(Entity::into_model::<Place>)
        .unwrap();
    assert!(place.amenity_ids.is_empty());
}

#[test]
fn test_update_keeps_children() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    let mut state = graph.state.clone();
    state.name = "Golden State".to_string();
    state.save(&mut storage).unwrap();

    let stored = storage
        .get(EntityKind::State, state.id())
        .unwrap()
        .and_then(Entity::into_model::<State>)
        .unwrap();
    assert_eq!(stored.name, "Golden State");
    assert_eq!(storage.count(Some(EntityKind::City)).unwrap(), 1);
}

#[test]
fn test_amenity_links_keep_order() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    let pool = Amenity::new("Pool");
    let sauna = Amenity::new("Sauna");
    let mut place = graph.place.clone();
    place.unlink_amenity(graph.amenity.id());
    place.link_amenity(&sauna);
    place.link_amenity(&pool);
    place.link_amenity(&graph.amenity);

    storage.new(pool.clone().into()).unwrap();
    storage.new(sauna.clone().into()).unwrap();
    storage.new(place.clone().into()).unwrap();
    storage.save().unwrap();

    let fresh = db_storage(temp_dir.path());
    let loaded = fresh
        .get(EntityKind::Place, place.id())
        .unwrap()
        .and_then(Entity::into_model::<Place>)
        .unwrap();
    assert_eq!(
        loaded.amenity_ids,
        vec![
            sauna.id().to_string(),
            pool.id().to_string(),
            graph.amenity.id().to_string()
        ]
    );
}

#[test]
fn test_repeated_amenity_id_commits_once() {
    // Given: A persisted graph whose place lists its amenity twice
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    let mut place = graph.place.clone();
    let wifi = graph.amenity.id().to_string();
    place.amenity_ids = vec![wifi.clone(), wifi.clone()];

    // When: The place is saved
    storage.new(place.clone().into()).unwrap();
    storage.save().unwrap();

    // Then: One link row is written
    let fresh = db_storage(temp_dir.path());
    let loaded = fresh
        .get(EntityKind::Place, place.id())
        .unwrap()
        .and_then(Entity::into_model::<Place>)
        .unwrap();
    assert_eq!(loaded.amenity_ids, vec![wifi]);
}

#[test]
fn test_amenity_ids_update_with_repeats_saves() {
    let temp_dir = TempDir::new().unwrap();
    let graph = build_graph();
    let mut storage = db_storage(temp_dir.path());
    graph.persist(&mut storage);

    let wifi = graph.amenity.id();
    let mut place: Entity = graph.place.clone().into();
    place
        .set_attribute("amenity_ids", &format!("{},{}", wifi, wifi))
        .unwrap();
    storage.new(place).unwrap();
    storage.save().unwrap();

    assert_eq!(storage.count(Some(EntityKind::Place)).unwrap(), 1);
}

#[test]
fn test_reload_discards_staged_changes() {
    let temp_dir = TempDir::new().unwrap();
    let mut storage = db_storage(temp_dir.path());
    storage.new(State::new("Dropped").into()).unwrap();

    storage.reload().unwrap();
    assert_eq!(storage.pending(), 0);
    storage.save().unwrap();
    assert!(storage.all(None).unwrap().is_empty());
}

#[test]
fn test_test_environment_starts_from_empty_schema() {
    let temp_dir = TempDir::new().unwrap();
    {
        let mut storage = db_storage(temp_dir.path());
        storage.new(State::new("Leftover").into()).unwrap();
        storage.save().unwrap();
    }

    let config = DbConfig {
        reset_schema: true,
        ..db_config(temp_dir.path())
    };
    let mut storage = DbStorage::new(config);
    storage.reload().unwrap();
    assert!(storage.all(None).unwrap().is_empty());

    // The reset happens once; later sessions keep committed rows
    storage.new(State::new("Fresh").into()).unwrap();
    storage.save().unwrap();
    storage.close().unwrap();
    storage.reload().unwrap();
    assert_eq!(storage.count(None).unwrap(), 1);
}

#[test]
fn test_in_memory_database_survives_close() {
    let mut storage = DbStorage::new(DbConfig::in_memory());
    storage.reload().unwrap();
    storage.new(State::new("Volatile").into()).unwrap();
    storage.save().unwrap();

    storage.close().unwrap();
    storage.reload().unwrap();
    assert_eq!(storage.count(Some(EntityKind::State)).unwrap(), 1);
}
