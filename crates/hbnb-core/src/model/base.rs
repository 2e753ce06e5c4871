use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;
use super::kind::{composite_key, EntityKind};
use super::timestamp;
use crate::codec::AttrMap;
use crate::engine::StorageEngine;
use crate::errors::{HbnbError, Result, StorageResult};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Shared identity and lifecycle state of every entity
///
/// `id` and `created_at` never change after construction; `updated_at` only
/// moves forward through [`BaseModel::touch`]. Fields are private so that
/// those rules cannot be bypassed. Deserialization goes through
/// [`StoredIdentity`], which fills in whatever the mapping omits and rejects
/// an `updated_at` earlier than `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "StoredIdentity")]
pub struct BaseModel {
    id: String,

    #[serde(with = "timestamp")]
    created_at: DateTime<Utc>,

    #[serde(with = "timestamp")]
    updated_at: DateTime<Utc>,
}

/// Identity fields as they appear in a mapping, each one optional
#[derive(Deserialize)]
struct StoredIdentity {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    created_at: Option<String>,

    #[serde(default)]
    updated_at: Option<String>,
}

impl TryFrom<StoredIdentity> for BaseModel {
    type Error = HbnbError;

    fn try_from(stored: StoredIdentity) -> Result<Self> {
        let created_at = stored
            .created_at
            .as_deref()
            .map(timestamp::parse)
            .transpose()?;
        let updated_at = stored
            .updated_at
            .as_deref()
            .map(timestamp::parse)
            .transpose()?;

        // A missing timestamp takes the value of the one present.
        let (created_at, updated_at) = match (created_at, updated_at) {
            (Some(created), Some(updated)) => (created, updated),
            (Some(created), None) => (created, created),
            (None, Some(updated)) => (updated, updated),
            (None, None) => {
                let now = timestamp::now();
                (now, now)
            }
        };
        if updated_at < created_at {
            return Err(HbnbError::Serialization {
                message: format!(
                    "updated_at {} is earlier than created_at {}",
                    timestamp::format(&updated_at),
                    timestamp::format(&created_at)
                ),
            });
        }

        Ok(Self {
            id: stored.id.unwrap_or_else(new_id),
            created_at,
            updated_at,
        })
    }
}

impl BaseModel {
    /// Create fresh identity state: random UUIDv4 id, both timestamps now
    pub fn new() -> Self {
        let now = timestamp::now();
        Self {
            id: new_id(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild identity state read back from a durable medium
    pub fn from_parts(id: String, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Refresh `updated_at` to the current time
    ///
    /// Never moves the timestamp backwards, even if the wall clock does.
    pub fn touch(&mut self) {
        let now = timestamp::now();
        if now > self.updated_at {
            self.updated_at = now;
        }
    }
}

impl Default for BaseModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Behaviour shared by every concrete entity type
pub trait Model: Clone + std::fmt::Debug + Serialize + DeserializeOwned + Into<Entity> {
    /// Discriminator for this type
    const KIND: EntityKind;

    fn base(&self) -> &BaseModel;

    fn base_mut(&mut self) -> &mut BaseModel;

    /// Narrow a type-erased entity back to this type
    fn from_entity(entity: Entity) -> Option<Self>;

    /// Assign one domain attribute from its textual form, coercing to the
    /// attribute's type. Returns `Ok(false)` when the type has no such attribute.
    fn assign(&mut self, name: &str, raw: &str) -> Result<bool>;

    fn id(&self) -> &str {
        self.base().id()
    }

    /// `"<TypeName>.<id>"`
    fn key(&self) -> String {
        composite_key(Self::KIND, self.id())
    }

    /// Set a domain attribute; identity and timestamp fields are rejected
    fn set_attribute(&mut self, name: &str, raw: &str) -> Result<()> {
        let invalid = || HbnbError::InvalidAttribute {
            class_name: Self::KIND.name().to_string(),
            attribute: name.to_string(),
        };
        if super::attributes::is_immutable(name) {
            return Err(invalid());
        }
        if self.assign(name, raw)? {
            Ok(())
        } else {
            Err(invalid())
        }
    }

    /// Attribute mapping with the `__class__` discriminator
    fn to_dict(&self) -> Result<AttrMap> {
        crate::codec::to_dict(&self.clone().into())
    }

    /// Refresh `updated_at`, register with the façade and persist
    fn save(&mut self, storage: &mut dyn StorageEngine) -> StorageResult<()> {
        self.base_mut().touch();
        storage.new(self.clone().into())?;
        storage.save()
    }
}

/// Implements the identity plumbing of [`Model`] plus id-based equality
macro_rules! impl_model {
    ($ty:ident) => {
        impl $crate::model::base::Model for $ty {
            const KIND: $crate::model::kind::EntityKind = $crate::model::kind::EntityKind::$ty;

            fn base(&self) -> &$crate::model::base::BaseModel {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::model::base::BaseModel {
                &mut self.base
            }

            fn from_entity(entity: $crate::model::entity::Entity) -> Option<Self> {
                match entity {
                    $crate::model::entity::Entity::$ty(inner) => Some(inner),
                    _ => None,
                }
            }

            fn assign(&mut self, name: &str, raw: &str) -> $crate::errors::Result<bool> {
                self.assign_attribute(name, raw)
            }
        }

        impl From<$ty> for $crate::model::entity::Entity {
            fn from(value: $ty) -> Self {
                $crate::model::entity::Entity::$ty(value)
            }
        }

        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.base.id() == other.base.id()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.base.id().hash(state);
            }
        }
    };
}

pub(crate) use impl_model;

impl Model for BaseModel {
    const KIND: EntityKind = EntityKind::BaseModel;

    fn base(&self) -> &BaseModel {
        self
    }

    fn base_mut(&mut self) -> &mut BaseModel {
        self
    }

    fn from_entity(entity: Entity) -> Option<Self> {
        match entity {
            Entity::BaseModel(inner) => Some(inner),
            _ => None,
        }
    }

    fn assign(&mut self, _name: &str, _raw: &str) -> Result<bool> {
        Ok(false)
    }
}

impl From<BaseModel> for Entity {
    fn from(value: BaseModel) -> Self {
        Entity::BaseModel(value)
    }
}

impl PartialEq for BaseModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for BaseModel {}

impl std::hash::Hash for BaseModel {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_base_model() {
        let base = BaseModel::new();
        assert!(Uuid::parse_str(base.id()).is_ok());
        assert_eq!(base.created_at(), base.updated_at());
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(BaseModel::new().id(), BaseModel::new().id());
    }

    #[test]
    fn test_touch_never_moves_backwards() {
        let future = timestamp::now() + chrono::Duration::hours(1);
        let mut base = BaseModel::from_parts("b1".to_string(), timestamp::now(), future);
        base.touch();
        assert_eq!(base.updated_at(), future);
    }

    #[test]
    fn test_touch_keeps_identity() {
        let mut base = BaseModel::new();
        let (id, created) = (base.id().to_string(), base.created_at());
        base.touch();
        assert_eq!(base.id(), id);
        assert_eq!(base.created_at(), created);
        assert!(base.updated_at() >= created);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = BaseModel::new();
        let mut b = a.clone();
        b.touch();
        assert_eq!(a, b);
        assert_ne!(a, BaseModel::new());
    }

    #[test]
    fn test_missing_created_at_follows_updated_at() {
        let base: BaseModel = serde_json::from_value(serde_json::json!({
            "id": "b2",
            "updated_at": "2017-01-01T00:00:00.000000"
        }))
        .unwrap();
        assert_eq!(base.created_at(), base.updated_at());
        assert_eq!(
            timestamp::format(&base.created_at()),
            "2017-01-01T00:00:00.000000"
        );
    }

    #[test]
    fn test_missing_updated_at_follows_created_at() {
        let base: BaseModel = serde_json::from_value(serde_json::json!({
            "created_at": "2017-01-01T00:00:00.000000"
        }))
        .unwrap();
        assert_eq!(base.updated_at(), base.created_at());
        assert!(Uuid::parse_str(base.id()).is_ok());
    }

    #[test]
    fn test_updated_before_created_is_rejected() {
        let result = serde_json::from_value::<BaseModel>(serde_json::json!({
            "id": "b3",
            "created_at": "2017-01-02T00:00:00.000000",
            "updated_at": "2017-01-01T00:00:00.000000"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_base_model_has_no_settable_attributes() {
        let mut base = BaseModel::new();
        assert!(matches!(
            base.set_attribute("name", "x"),
            Err(HbnbError::InvalidAttribute { .. })
        ));
    }
}
