use serde::{Deserialize, Serialize};

use super::amenity::Amenity;
use super::attributes;
use super::base::{impl_model, BaseModel};
use super::city::City;
use super::user::User;
use crate::errors::{HbnbError, Result};
use crate::model::Model;

/// A rentable place in a city, owned by a user
///
/// `amenity_ids` carries the many-to-many link to amenities. The file
/// backend stores it inline; the relational backend stores it in the
/// `place_amenity` association table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Place {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub city_id: String,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub number_rooms: i64,

    #[serde(default)]
    pub number_bathrooms: i64,

    #[serde(default)]
    pub max_guest: i64,

    #[serde(default)]
    pub price_by_night: i64,

    #[serde(default)]
    pub latitude: f64,

    #[serde(default)]
    pub longitude: f64,

    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

impl Place {
    pub fn new(city: &City, owner: &User, name: impl Into<String>) -> Self {
        Self {
            city_id: city.id().to_string(),
            user_id: owner.id().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Link an amenity to this place; linking twice is a no-op
    pub fn link_amenity(&mut self, amenity: &Amenity) {
        let id = amenity.id();
        if !self.amenity_ids.iter().any(|a| a == id) {
            self.amenity_ids.push(id.to_string());
        }
    }

    /// Remove an amenity link if present
    pub fn unlink_amenity(&mut self, amenity_id: &str) {
        self.amenity_ids.retain(|a| a != amenity_id);
    }

    /// Coordinates must be finite; JSON has no encoding for NaN or infinity
    pub(crate) fn check_coordinates(&self) -> Result<()> {
        for (attribute, value) in [("latitude", self.latitude), ("longitude", self.longitude)] {
            if !value.is_finite() {
                return Err(HbnbError::InvalidValue {
                    attribute: attribute.to_string(),
                    expected: "float",
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    fn assign_attribute(&mut self, name: &str, raw: &str) -> Result<bool> {
        match name {
            "city_id" => self.city_id = attributes::to_string(raw),
            "user_id" => self.user_id = attributes::to_string(raw),
            "name" => self.name = attributes::to_string(raw),
            "description" => self.description = attributes::to_string(raw),
            "number_rooms" => self.number_rooms = attributes::to_int(name, raw)?,
            "number_bathrooms" => self.number_bathrooms = attributes::to_int(name, raw)?,
            "max_guest" => self.max_guest = attributes::to_int(name, raw)?,
            "price_by_night" => self.price_by_night = attributes::to_int(name, raw)?,
            "latitude" => self.latitude = attributes::to_float(name, raw)?,
            "longitude" => self.longitude = attributes::to_float(name, raw)?,
            "amenity_ids" => self.amenity_ids = attributes::to_id_list(name, raw)?,
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl_model!(Place);
