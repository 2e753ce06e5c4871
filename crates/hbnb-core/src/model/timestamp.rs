//! Canonical timestamp format
//!
//! Timestamps are rendered as `YYYY-MM-DDTHH:MM:SS.ffffff` with no zone
//! suffix and are always UTC. Values are kept at microsecond precision so a
//! render/parse cycle is lossless.

use chrono::{DateTime, NaiveDateTime, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

use crate::errors::{HbnbError, Result};

/// strftime pattern used for every persisted timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current time, truncated to the precision the canonical format carries
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Render a timestamp in the canonical format
pub fn format(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a canonical timestamp
///
/// Also accepts RFC 3339 strings (with an offset), which are converted to UTC.
pub fn parse(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(Utc.from_utc_datetime(&naive).trunc_subsecs(6));
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc).trunc_subsecs(6))
        .map_err(|_| HbnbError::InvalidTimestamp {
            value: value.to_string(),
        })
}

/// serde adapter: `#[serde(with = "crate::model::timestamp")]`
pub fn serialize<S>(ts: &DateTime<Utc>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(ts))
}

/// serde adapter: `#[serde(with = "crate::model::timestamp")]`
pub fn deserialize<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}
