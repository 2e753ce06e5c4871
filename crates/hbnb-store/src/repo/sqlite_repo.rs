//! SQLite repository implementation
//!
//! Persists entities through their attribute mapping: every column of a
//! table is a key of the entity's `to_dict()` output. A place's
//! `amenity_ids` live in the `place_amenity` association table instead.

use std::collections::HashSet;

use crate::errors::{from_rusqlite, Result};
use hbnb_core::{Entity, EntityKind, ExError};
use rusqlite::types::Value as SqlValue;
use rusqlite::Transaction;
use serde_json::Value;

/// Table and column names backing one entity kind
pub struct TableLayout {
    pub kind: EntityKind,
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

const BASE_MODELS: TableLayout = TableLayout {
    kind: EntityKind::BaseModel,
    table: "base_models",
    columns: &["id", "created_at", "updated_at"],
};

const USERS: TableLayout = TableLayout {
    kind: EntityKind::User,
    table: "users",
    columns: &[
        "id",
        "created_at",
        "updated_at",
        "email",
        "password",
        "first_name",
        "last_name",
    ],
};

const STATES: TableLayout = TableLayout {
    kind: EntityKind::State,
    table: "states",
    columns: &["id", "created_at", "updated_at", "name"],
};

const CITIES: TableLayout = TableLayout {
    kind: EntityKind::City,
    table: "cities",
    columns: &["id", "created_at", "updated_at", "state_id", "name"],
};

const AMENITIES: TableLayout = TableLayout {
    kind: EntityKind::Amenity,
    table: "amenities",
    columns: &["id", "created_at", "updated_at", "name"],
};

const PLACES: TableLayout = TableLayout {
    kind: EntityKind::Place,
    table: "places",
    columns: &[
        "id",
        "created_at",
        "updated_at",
        "city_id",
        "user_id",
        "name",
        "description",
        "number_rooms",
        "number_bathrooms",
        "max_guest",
        "price_by_night",
        "latitude",
        "longitude",
    ],
};

const REVIEWS: TableLayout = TableLayout {
    kind: EntityKind::Review,
    table: "reviews",
    columns: &["id", "created_at", "updated_at", "place_id", "user_id", "text"],
};

/// Layout for `kind`
pub fn table_for(kind: EntityKind) -> &'static TableLayout {
    match kind {
        EntityKind::BaseModel => &BASE_MODELS,
        EntityKind::User => &USERS,
        EntityKind::State => &STATES,
        EntityKind::City => &CITIES,
        EntityKind::Amenity => &AMENITIES,
        EntityKind::Place => &PLACES,
        EntityKind::Review => &REVIEWS,
    }
}

impl TableLayout {
    pub(crate) fn select_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} ORDER BY id",
            self.columns.join(", "),
            self.table
        )
    }

    fn upsert_sql(&self) -> String {
        let placeholders: Vec<String> = (1..=self.columns.len()).map(|i| format!("?{}", i)).collect();
        let updates: Vec<String> = self
            .columns
            .iter()
            .filter(|c| **c != "id")
            .map(|c| format!("{} = excluded.{}", c, c))
            .collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT(id) DO UPDATE SET {}",
            self.table,
            self.columns.join(", "),
            placeholders.join(", "),
            updates.join(", ")
        )
    }
}

/// JSON attribute value to SQL parameter
pub(crate) fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Bool(b) => SqlValue::Integer(i64::from(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => SqlValue::Integer(i),
            None => n.as_f64().map(SqlValue::Real).unwrap_or(SqlValue::Null),
        },
        Value::String(s) => SqlValue::Text(s.clone()),
        other => SqlValue::Text(other.to_string()),
    }
}

/// SQL column value to JSON attribute; `None` leaves the attribute defaulted
pub(crate) fn from_sql_value(value: SqlValue) -> Option<Value> {
    match value {
        SqlValue::Null | SqlValue::Blob(_) => None,
        SqlValue::Integer(i) => Some(Value::from(i)),
        SqlValue::Real(f) => serde_json::Number::from_f64(f).map(Value::Number),
        SqlValue::Text(s) => Some(Value::String(s)),
    }
}

/// SQLite repository for entities
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert or update one entity within a transaction
    ///
    /// Never deletes the row first, so cascading children survive updates.
    pub fn upsert_tx(tx: &Transaction, entity: &Entity) -> Result<()> {
        let layout = table_for(entity.kind());
        let dict = entity
            .to_dict()
            .map_err(|e| ExError::from(e).with_op("upsert").with_entity_id(entity.key()))?;

        let params: Vec<SqlValue> = layout
            .columns
            .iter()
            .map(|c| dict.get(*c).map(to_sql_value).unwrap_or(SqlValue::Null))
            .collect();

        tx.execute(&layout.upsert_sql(), rusqlite::params_from_iter(params))
            .map_err(|e| from_rusqlite(e).with_entity_id(entity.key()))?;

        if let Entity::Place(place) = entity {
            Self::replace_amenity_links_tx(tx, entity.id(), &place.amenity_ids)?;
        }

        Ok(())
    }

    /// Rewrite the association rows of one place, keeping link order
    ///
    /// A repeated id keeps only its first position.
    fn replace_amenity_links_tx(tx: &Transaction, place_id: &str, amenity_ids: &[String]) -> Result<()> {
        tx.execute("DELETE FROM place_amenity WHERE place_id = ?1", [place_id])
            .map_err(from_rusqlite)?;

        let mut seen = HashSet::new();
        let unique = amenity_ids.iter().filter(|id| seen.insert(id.as_str()));
        for (position, amenity_id) in unique.enumerate() {
            tx.execute(
                "INSERT INTO place_amenity (place_id, amenity_id, position) VALUES (?1, ?2, ?3)",
                rusqlite::params![place_id, amenity_id, position as i64],
            )
            .map_err(|e| from_rusqlite(e).with_entity_id(format!("Amenity.{}", amenity_id)))?;
        }

        Ok(())
    }

    /// Delete one entity within a transaction; an absent row is not an error
    ///
    /// Dependent rows go with it through `ON DELETE CASCADE`.
    pub fn delete_tx(tx: &Transaction, kind: EntityKind, id: &str) -> Result<usize> {
        let layout = table_for(kind);
        tx.execute(&format!("DELETE FROM {} WHERE id = ?1", layout.table), [id])
            .map_err(from_rusqlite)
    }
}
