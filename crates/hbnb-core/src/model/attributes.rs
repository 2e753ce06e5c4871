//! Type coercion for attribute values arriving as text
//!
//! The console hands every value over as a string; each model coerces it to
//! the declared type of the attribute being assigned.

use crate::errors::{HbnbError, Result};

const IMMUTABLE: [&str; 4] = ["id", "created_at", "updated_at", "__class__"];

/// Identity and timestamp fields cannot be assigned through the attribute path
pub fn is_immutable(name: &str) -> bool {
    IMMUTABLE.contains(&name)
}

pub fn to_string(raw: &str) -> String {
    raw.to_string()
}

pub fn to_int(attribute: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| HbnbError::InvalidValue {
        attribute: attribute.to_string(),
        expected: "integer",
        value: raw.to_string(),
    })
}

pub fn to_float(attribute: &str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| HbnbError::InvalidValue {
            attribute: attribute.to_string(),
            expected: "float",
            value: raw.to_string(),
        })
}

/// A JSON array of strings, or a comma-separated list
///
/// Repeated ids keep their first occurrence only.
pub fn to_id_list(attribute: &str, raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim();
    let ids = if trimmed.starts_with('[') {
        serde_json::from_str::<Vec<String>>(trimmed).map_err(|_| HbnbError::InvalidValue {
            attribute: attribute.to_string(),
            expected: "list of ids",
            value: raw.to_string(),
        })?
    } else {
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    };

    let mut unique: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_immutable_fields() {
        assert!(is_immutable("id"));
        assert!(is_immutable("created_at"));
        assert!(is_immutable("updated_at"));
        assert!(!is_immutable("name"));
    }

    #[test]
    fn test_int_coercion() {
        assert_eq!(to_int("max_guest", " 4 ").unwrap(), 4);
        assert!(to_int("max_guest", "4.5").is_err());
        assert!(to_int("max_guest", "four").is_err());
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(to_float("latitude", "37.77").unwrap(), 37.77);
        assert_eq!(to_float("latitude", "12").unwrap(), 12.0);
        assert!(to_float("latitude", "NaN").is_err());
    }

    #[test]
    fn test_id_list_coercion() {
        assert_eq!(to_id_list("amenity_ids", "a, b,,c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(to_id_list("amenity_ids", r#"["x","y"]"#).unwrap(), vec!["x", "y"]);
        assert!(to_id_list("amenity_ids", "[1, 2]").is_err());
        assert!(to_id_list("amenity_ids", "").unwrap().is_empty());
    }

    #[test]
    fn test_id_list_drops_repeats() {
        assert_eq!(to_id_list("amenity_ids", "a,b,a").unwrap(), vec!["a", "b"]);
        assert_eq!(to_id_list("amenity_ids", r#"["x","x"]"#).unwrap(), vec!["x"]);
    }
}
