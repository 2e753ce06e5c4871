use std::fmt;
use std::str::FromStr;

use crate::errors::HbnbError;

/// Closed set of entity classes the storage layer knows how to build
///
/// The discriminator string (`name()`) is what appears in composite keys and
/// in the `__class__` field of serialized mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    BaseModel,
    User,
    State,
    City,
    Amenity,
    Place,
    Review,
}

impl EntityKind {
    /// Every kind, parents before children
    pub const ALL: [EntityKind; 7] = [
        EntityKind::BaseModel,
        EntityKind::User,
        EntityKind::State,
        EntityKind::City,
        EntityKind::Amenity,
        EntityKind::Place,
        EntityKind::Review,
    ];

    /// The type discriminator
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::BaseModel => "BaseModel",
            EntityKind::User => "User",
            EntityKind::State => "State",
            EntityKind::City => "City",
            EntityKind::Amenity => "Amenity",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
        }
    }

    /// Position in foreign-key dependency order (referenced tables first)
    pub fn dependency_rank(&self) -> u8 {
        match self {
            EntityKind::BaseModel => 0,
            EntityKind::User => 1,
            EntityKind::State => 1,
            EntityKind::Amenity => 1,
            EntityKind::City => 2,
            EntityKind::Place => 3,
            EntityKind::Review => 4,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = HbnbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EntityKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| HbnbError::UnknownClass {
                class_name: s.to_string(),
            })
    }
}

/// Build the `"<TypeName>.<id>"` lookup key
pub fn composite_key(kind: EntityKind, id: &str) -> String {
    format!("{}.{}", kind.name(), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for kind in EntityKind::ALL {
            assert_eq!(kind.name().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_rejected() {
        let err = "MyModel".parse::<EntityKind>().unwrap_err();
        assert_eq!(
            err,
            HbnbError::UnknownClass {
                class_name: "MyModel".to_string()
            }
        );
    }

    #[test]
    fn test_discriminator_is_case_sensitive() {
        assert!("state".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_composite_key_format() {
        assert_eq!(composite_key(EntityKind::City, "abc"), "City.abc");
    }

    #[test]
    fn test_children_rank_after_parents() {
        assert!(EntityKind::State.dependency_rank() < EntityKind::City.dependency_rank());
        assert!(EntityKind::City.dependency_rank() < EntityKind::Place.dependency_rank());
        assert!(EntityKind::Place.dependency_rank() < EntityKind::Review.dependency_rank());
        assert!(EntityKind::User.dependency_rank() < EntityKind::Place.dependency_rank());
        assert!(EntityKind::Amenity.dependency_rank() < EntityKind::Place.dependency_rank());
    }
}
