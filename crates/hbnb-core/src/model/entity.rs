use std::fmt;

use super::base::{BaseModel, Model};
use super::kind::{composite_key, EntityKind};
use super::{Amenity, City, Place, Review, State, User};
use crate::codec::{self, AttrMap, CLASS_KEY};
use crate::engine::StorageEngine;
use crate::errors::{Result, StorageResult};

/// Any storable entity
///
/// This is the value type the storage façade traffics in. The variant is the
/// type discriminator; decoding maps a discriminator string to exactly one
/// variant and rejects anything else.
#[derive(Debug, Clone)]
pub enum Entity {
    BaseModel(BaseModel),
    User(User),
    State(State),
    City(City),
    Amenity(Amenity),
    Place(Place),
    Review(Review),
}

macro_rules! each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            Entity::BaseModel($inner) => $body,
            Entity::User($inner) => $body,
            Entity::State($inner) => $body,
            Entity::City($inner) => $body,
            Entity::Amenity($inner) => $body,
            Entity::Place($inner) => $body,
            Entity::Review($inner) => $body,
        }
    };
}

impl Entity {
    /// Fresh entity of the given kind with default domain attributes
    pub fn new_of_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::BaseModel => Entity::BaseModel(BaseModel::new()),
            EntityKind::User => Entity::User(User::default()),
            EntityKind::State => Entity::State(State::default()),
            EntityKind::City => Entity::City(City::default()),
            EntityKind::Amenity => Entity::Amenity(Amenity::default()),
            EntityKind::Place => Entity::Place(Place::default()),
            EntityKind::Review => Entity::Review(Review::default()),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::BaseModel(_) => EntityKind::BaseModel,
            Entity::User(_) => EntityKind::User,
            Entity::State(_) => EntityKind::State,
            Entity::City(_) => EntityKind::City,
            Entity::Amenity(_) => EntityKind::Amenity,
            Entity::Place(_) => EntityKind::Place,
            Entity::Review(_) => EntityKind::Review,
        }
    }

    pub fn base(&self) -> &BaseModel {
        each_variant!(self, m => m.base())
    }

    pub fn base_mut(&mut self) -> &mut BaseModel {
        each_variant!(self, m => m.base_mut())
    }

    pub fn id(&self) -> &str {
        self.base().id()
    }

    /// `"<TypeName>.<id>"`
    pub fn key(&self) -> String {
        composite_key(self.kind(), self.id())
    }

    /// Set a domain attribute from text, coercing to the attribute's type
    pub fn set_attribute(&mut self, name: &str, raw: &str) -> Result<()> {
        each_variant!(self, m => m.set_attribute(name, raw))
    }

    /// Apply several assignments in order, stopping at the first failure
    pub fn update_attributes<'a, I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (name, raw) in pairs {
            self.set_attribute(name, raw)?;
        }
        Ok(())
    }

    /// Attribute mapping including the `__class__` discriminator
    pub fn to_dict(&self) -> Result<AttrMap> {
        codec::to_dict(self)
    }

    /// Rebuild an entity from a mapping produced by [`Entity::to_dict`]
    pub fn from_dict(map: &AttrMap) -> Result<Self> {
        codec::from_dict(map)
    }

    /// Narrow to a concrete type
    pub fn into_model<T: Model>(self) -> Option<T> {
        T::from_entity(self)
    }

    /// Refresh `updated_at`, register with the façade and persist
    pub fn save(&mut self, storage: &mut dyn StorageEngine) -> StorageResult<()> {
        self.base_mut().touch();
        storage.new(self.clone())?;
        storage.save()
    }
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }
}

impl Eq for Entity {}

/// `[<Type>] (<id>) {attributes}`
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attrs = self.to_dict().map_err(|_| fmt::Error)?;
        attrs.remove(CLASS_KEY);
        write!(
            f,
            "[{}] ({}) {}",
            self.kind(),
            self.id(),
            serde_json::Value::Object(attrs)
        )
    }
}
