#![allow(clippy::unwrap_used, clippy::expect_used)]

use hbnb_core::errors::{ExError, ExErrorKind, HbnbError};
use hbnb_core::EntityKind;

#[test]
fn test_every_kind_has_a_distinct_code() {
    let kinds = [
        ExErrorKind::InvalidInput,
        ExErrorKind::UnknownClass,
        ExErrorKind::MissingClass,
        ExErrorKind::InvalidAttribute,
        ExErrorKind::InvalidValue,
        ExErrorKind::InvalidTimestamp,
        ExErrorKind::NotFound,
        ExErrorKind::InvalidState,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
        ExErrorKind::Persistence,
        ExErrorKind::Config,
        ExErrorKind::Internal,
    ];
    let mut codes: Vec<&str> = kinds.iter().map(|k| k.code()).collect();
    assert!(codes.iter().all(|c| c.starts_with("ERR_")));
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), kinds.len());
}

#[test]
fn test_unknown_class_converts_with_context() {
    let err: HbnbError = "Planet".parse::<EntityKind>().unwrap_err();
    let ex: ExError = err.into();

    assert_eq!(ex.kind(), ExErrorKind::UnknownClass);
    assert_eq!(ex.class_name(), Some("Planet"));
    assert_eq!(ex.message(), "Class doesn't exist");
}

#[test]
fn test_not_found_carries_key() {
    let ex: ExError = HbnbError::NotFound {
        key: "State.42".to_string(),
    }
    .into();
    assert_eq!(ex.kind(), ExErrorKind::NotFound);
    assert_eq!(ex.entity_id(), Some("State.42"));
}

#[test]
fn test_json_errors_become_serialization() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: HbnbError = json_err.into();
    assert!(matches!(err, HbnbError::Serialization { .. }));

    let ex: ExError = err.into();
    assert_eq!(ex.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_display_renders_all_context() {
    let ex = ExError::new(ExErrorKind::Persistence)
        .with_op("save")
        .with_class_name("City")
        .with_entity_id("City.1")
        .with_message("FOREIGN KEY constraint failed");

    assert_eq!(
        ex.to_string(),
        "[ERR_PERSISTENCE] in operation 'save': FOREIGN KEY constraint failed (class: City) (entity_id: City.1)"
    );
}
