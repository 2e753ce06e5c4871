use serde::{Deserialize, Serialize};

use super::attributes;
use super::base::{impl_model, BaseModel};
use crate::errors::Result;

/// A registered user; owns places and writes reviews
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub base: BaseModel,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,
}

impl User {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    /// "First Last", skipping whichever part is empty
    pub fn full_name(&self) -> String {
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn assign_attribute(&mut self, name: &str, raw: &str) -> Result<bool> {
        match name {
            "email" => self.email = attributes::to_string(raw),
            "password" => self.password = attributes::to_string(raw),
            "first_name" => self.first_name = attributes::to_string(raw),
            "last_name" => self.last_name = attributes::to_string(raw),
            _ => return Ok(false),
        }
        Ok(true)
    }
}

impl_model!(User);
