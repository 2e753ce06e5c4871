use serde::{Deserialize, Serialize};

use super::attributes;
use super::base::{impl_model, BaseModel};
use crate::errors::Result;

/// A state; cities reference it by `state_id`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub name: String,
}

impl State {
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

impl_model!(State);
