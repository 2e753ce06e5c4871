//! Console commands
//!
//! Each command validates its positional arguments in order and reports the
//! first one missing with the console's fixed message.

use clap::Args;
use hbnb_core::{Entity, EntityKind, StorageEngine};
use hbnb_store::Storage;

use crate::commands::params::parse_param;
use crate::error::ConsoleError;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Class name
    pub class: Option<String>,

    /// Attribute assignments, `key=value`
    pub params: Vec<String>,
}

#[derive(Debug, Args)]
pub struct TargetArgs {
    /// Class name
    pub class: Option<String>,

    /// Object id
    pub id: Option<String>,
}

#[derive(Debug, Args)]
pub struct AllArgs {
    /// Class name
    pub class: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Class name
    pub class: Option<String>,

    /// Object id
    pub id: Option<String>,

    /// Attribute name
    pub attribute: Option<String>,

    /// New value; surrounding double quotes are stripped
    pub value: Option<String>,
}

fn require_kind(class: Option<&str>) -> Result<EntityKind, ConsoleError> {
    let class = class.ok_or(ConsoleError::ClassNameMissing)?;
    class
        .parse::<EntityKind>()
        .map_err(|_| ConsoleError::ClassDoesNotExist)
}

fn require_object(
    storage: &Storage,
    class: Option<&str>,
    id: Option<&str>,
) -> Result<Entity, ConsoleError> {
    let kind = require_kind(class)?;
    let id = id.ok_or(ConsoleError::InstanceIdMissing)?;
    storage
        .get(kind, id)?
        .ok_or(ConsoleError::NoInstanceFound)
}

/// `create <Class> [key=value ...]`: prints the new id
///
/// Malformed pairs, unknown attributes and values that do not fit the
/// attribute's type are skipped.
pub fn create(storage: &mut Storage, args: CreateArgs) -> Result<String, ConsoleError> {
    let kind = require_kind(args.class.as_deref())?;
    let mut entity = Entity::new_of_kind(kind);

    for token in &args.params {
        let Some((key, value)) = parse_param(token) else {
            tracing::debug!(token = token.as_str(), "skipping malformed parameter");
            continue;
        };
        if let Err(e) = entity.set_attribute(&key, &value.as_raw()) {
            tracing::debug!(key = key.as_str(), error = %e, "skipping parameter");
        }
    }

    entity.save(storage)?;
    Ok(entity.id().to_string())
}

/// `show <Class> <id>`
pub fn show(storage: &mut Storage, args: TargetArgs) -> Result<String, ConsoleError> {
    let entity = require_object(storage, args.class.as_deref(), args.id.as_deref())?;
    Ok(entity.to_string())
}

/// `destroy <Class> <id>`
pub fn destroy(storage: &mut Storage, args: TargetArgs) -> Result<String, ConsoleError> {
    let entity = require_object(storage, args.class.as_deref(), args.id.as_deref())?;
    storage.delete(&entity)?;
    storage.save()?;
    Ok(String::new())
}

/// `all [Class]`: one object per line, ordered by composite key
pub fn all(storage: &mut Storage, args: AllArgs) -> Result<String, ConsoleError> {
    let kind = match args.class.as_deref() {
        Some(class) => Some(require_kind(Some(class))?),
        None => None,
    };
    let lines: Vec<String> = storage
        .all(kind)?
        .values()
        .map(|entity| entity.to_string())
        .collect();
    Ok(lines.join("\n"))
}

/// `count <Class>`
pub fn count(storage: &mut Storage, args: AllArgs) -> Result<String, ConsoleError> {
    let kind = require_kind(args.class.as_deref())?;
    Ok(storage.count(Some(kind))?.to_string())
}

/// `update <Class> <id> <attribute> <value>`
pub fn update(storage: &mut Storage, args: UpdateArgs) -> Result<String, ConsoleError> {
    let mut entity = require_object(storage, args.class.as_deref(), args.id.as_deref())?;
    let attribute = args.attribute.ok_or(ConsoleError::AttributeNameMissing)?;
    let value = args.value.ok_or(ConsoleError::ValueMissing)?;
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(&value);

    entity.set_attribute(&attribute, value)?;
    entity.save(storage)?;
    Ok(String::new())
}
