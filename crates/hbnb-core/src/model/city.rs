use serde::{Deserialize, Serialize};

use super::attributes;
use super::base::{impl_model, BaseModel};
use super::state::State;
use crate::errors::Result;
use crate::model::Model;

/// A city, belonging to exactly one state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct City {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub state_id: String,

    #[serde(default)]
    pub name: String,
}

impl City {
    pub fn new(state: &State, name: impl Into<String>) -> Self {
        Self {
            state_id: state.id().to_string(),
            name: name.into(),
            ..Self::default()
        }
    }

    fn assign_attribute(&mut self, name: &str, raw: &str) -> Result<bool> {
        match name {
            "state_id" => self.state_id = attributes::to_string(raw),
            "name" => self.name = attributes::to_string(raw),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl_model!(City);
