//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use sha2::{Digest, Sha256};

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Hex SHA-256 of the SQL text, recorded in `schema_version`
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}

/// Every table the migrations create, children before parents
pub const TABLES_DROP_ORDER: [&str; 9] = [
    "place_amenity",
    "reviews",
    "places",
    "cities",
    "amenities",
    "states",
    "users",
    "base_models",
    "schema_version",
];
