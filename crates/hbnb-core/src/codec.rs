//! Attribute-mapping codec
//!
//! Converts entities to and from plain `serde_json` maps, and whole object
//! tables to and from the single JSON document the file backend persists.
//! Document layout:
//!
//! ```json
//! { "State.<id>": { "__class__": "State", "id": "...", "created_at": "...", ... } }
//! ```

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::engine::ObjectMap;
use crate::errors::{HbnbError, Result};
use crate::model::{Amenity, BaseModel, City, Entity, EntityKind, Place, Review, State, User};

/// Plain attribute mapping
pub type AttrMap = Map<String, Value>;

/// Name of the type discriminator field
pub const CLASS_KEY: &str = "__class__";

/// Serialize one entity, tagging it with its discriminator
///
/// Fails on values the mapping cannot carry faithfully, such as a
/// non-finite coordinate.
pub fn to_dict(entity: &Entity) -> Result<AttrMap> {
    let value = match entity {
        Entity::BaseModel(m) => serde_json::to_value(m)?,
        Entity::User(m) => serde_json::to_value(m)?,
        Entity::State(m) => serde_json::to_value(m)?,
        Entity::City(m) => serde_json::to_value(m)?,
        Entity::Amenity(m) => serde_json::to_value(m)?,
        Entity::Place(m) => {
            m.check_coordinates()?;
            serde_json::to_value(m)?
        }
        Entity::Review(m) => serde_json::to_value(m)?,
    };
    let mut map = match value {
        Value::Object(map) => map,
        other => {
            return Err(HbnbError::Serialization {
                message: format!("{} did not serialize to an object: {}", entity.kind(), other),
            })
        }
    };
    map.insert(
        CLASS_KEY.to_string(),
        Value::String(entity.kind().name().to_string()),
    );
    Ok(map)
}

/// Rebuild one entity from its mapping
///
/// The discriminator selects the constructor; unknown or missing
/// discriminators are errors. Missing identity fields are filled in fresh.
pub fn from_dict(map: &AttrMap) -> Result<Entity> {
    let class_name = match map.get(CLASS_KEY) {
        Some(Value::String(name)) => name.as_str(),
        Some(other) => {
            return Err(HbnbError::UnknownClass {
                class_name: other.to_string(),
            })
        }
        None => return Err(HbnbError::MissingClass),
    };
    let kind: EntityKind = class_name.parse()?;

    let mut fields = map.clone();
    fields.remove(CLASS_KEY);
    let fields = Value::Object(fields);

    Ok(match kind {
        EntityKind::BaseModel => Entity::BaseModel(decode::<BaseModel>(fields)?),
        EntityKind::User => Entity::User(decode::<User>(fields)?),
        EntityKind::State => Entity::State(decode::<State>(fields)?),
        EntityKind::City => Entity::City(decode::<City>(fields)?),
        EntityKind::Amenity => Entity::Amenity(decode::<Amenity>(fields)?),
        EntityKind::Place => Entity::Place(decode::<Place>(fields)?),
        EntityKind::Review => Entity::Review(decode::<Review>(fields)?),
    })
}

fn decode<T: DeserializeOwned>(fields: Value) -> Result<T> {
    Ok(serde_json::from_value(fields)?)
}

/// Encode a whole object table as one JSON document
pub fn encode_document(objects: &ObjectMap) -> Result<String> {
    let mut document = Map::new();
    for (key, entity) in objects {
        document.insert(key.clone(), Value::Object(to_dict(entity)?));
    }
    Ok(serde_json::to_string(&Value::Object(document))?)
}

/// Decode a JSON document into a complete object table
///
/// All-or-nothing: any malformed record fails the whole document. A record
/// whose key does not match its own discriminator and id is malformed.
pub fn decode_document(text: &str) -> Result<ObjectMap> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Object(records) = document else {
        return Err(HbnbError::Serialization {
            message: "storage document must be a JSON object".to_string(),
        });
    };

    let mut objects = ObjectMap::new();
    for (key, record) in records {
        let Value::Object(fields) = record else {
            return Err(HbnbError::Serialization {
                message: format!("record {} is not a JSON object", key),
            });
        };
        let entity = from_dict(&fields)?;
        if entity.key() != key {
            return Err(HbnbError::Serialization {
                message: format!("record key {} does not match {}", key, entity.key()),
            });
        }
        objects.insert(key, entity);
    }
    Ok(objects)
}
