use serde::{Deserialize, Serialize};

use super::attributes;
use super::base::{impl_model, BaseModel};
use super::place::Place;
use super::user::User;
use crate::errors::Result;
use crate::model::Model;

/// A review of a place, written by a user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub place_id: String,

    #[serde(default)]
    pub user_id: String,

    #[serde(default)]
    pub text: String,
}

impl Review {
    pub fn new(place: &Place, author: &User, text: impl Into<String>) -> Self {
        Self {
            place_id: place.id().to_string(),
            user_id: author.id().to_string(),
            text: text.into(),
            ..Self::default()
        }
    }

    fn assign_attribute(&mut self, name: &str, raw: &str) -> Result<bool> {
        match name {
            "place_id" => self.place_id = attributes::to_string(raw),
            "user_id" => self.user_id = attributes::to_string(raw),
            "text" => self.text = attributes::to_string(raw),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl_model!(Review);
