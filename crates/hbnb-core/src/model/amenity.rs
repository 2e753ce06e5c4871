use serde::{Deserialize, Serialize};

use super::attributes;
use super::base::{impl_model, BaseModel};
use crate::errors::Result;

/// An amenity offered by places (many-to-many through `Place::amenity_ids`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub name: String,
}

impl Amenity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    fn assign_attribute(&mut self, name: &str, raw: &str) -> Result<bool> {
        match name {
            "name" => self.name = attributes::to_string(raw),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl_model!(Amenity);
