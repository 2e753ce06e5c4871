//! Hydration layer - loads entities from SQLite
//!
//! Converts table rows back into entities through the codec, with
//! deterministic ordering (rows by id, amenity links by position)

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::{from_sql_value, table_for};
use hbnb_core::{AttrMap, Entity, EntityKind, ExError, ObjectMap, CLASS_KEY};
use rusqlite::types::Value as SqlValue;
use rusqlite::Connection;
use serde_json::Value;
use std::collections::BTreeMap;

/// Load every row of one kind
pub fn load_kind(conn: &Connection, kind: EntityKind) -> Result<Vec<Entity>> {
    let layout = table_for(kind);
    let mut stmt = conn.prepare(&layout.select_sql()).map_err(from_rusqlite)?;

    let rows: Vec<AttrMap> = stmt
        .query_map([], |row| {
            let mut dict = AttrMap::new();
            dict.insert(CLASS_KEY.to_string(), Value::String(kind.name().to_string()));
            for (i, column) in layout.columns.iter().enumerate() {
                if let Some(value) = from_sql_value(row.get::<_, SqlValue>(i)?) {
                    dict.insert((*column).to_string(), value);
                }
            }
            Ok(dict)
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut links = if kind == EntityKind::Place {
        load_amenity_links(conn)?
    } else {
        BTreeMap::new()
    };

    rows.into_iter()
        .map(|mut dict| {
            if kind == EntityKind::Place {
                let id = dict.get("id").and_then(Value::as_str).unwrap_or("").to_string();
                let amenity_ids = links.remove(&id).unwrap_or_default();
                dict.insert(
                    "amenity_ids".to_string(),
                    Value::Array(amenity_ids.into_iter().map(Value::String).collect()),
                );
            }
            Entity::from_dict(&dict).map_err(|e| {
                ExError::from(e)
                    .with_op("hydrate")
                    .with_class_name(kind.name())
            })
        })
        .collect()
}

/// Load every kind, or one kind, keyed by composite key
pub fn load_all(conn: &Connection, kind: Option<EntityKind>) -> Result<ObjectMap> {
    let kinds: Vec<EntityKind> = match kind {
        Some(kind) => vec![kind],
        None => EntityKind::ALL.to_vec(),
    };

    let mut objects = ObjectMap::new();
    for kind in kinds {
        for entity in load_kind(conn, kind)? {
            objects.insert(entity.key(), entity);
        }
    }
    Ok(objects)
}

/// place id → amenity ids in link order
fn load_amenity_links(conn: &Connection) -> Result<BTreeMap<String, Vec<String>>> {
    let mut stmt = conn
        .prepare("SELECT place_id, amenity_id FROM place_amenity ORDER BY place_id, position")
        .map_err(from_rusqlite)?;

    let pairs: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut links: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (place_id, amenity_id) in pairs {
        links.entry(place_id).or_default().push(amenity_id);
    }
    Ok(links)
}
