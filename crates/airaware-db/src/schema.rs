//! Schema definitions for the air-quality tables.
//!
//! Reference data (locations, sub-locations, pollutants) and the
//! measurement facts are written by external import jobs. This crate
//! only ever reads them.

use chrono::NaiveDate;
use serde::Serialize;

/// DDL for a fresh database, in dependency order.
pub const SCHEMA_DDL: [&str; 5] = [
    r#"
    CREATE TABLE IF NOT EXISTS locations (
        location_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name        TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sub_locations (
        sub_location_id INTEGER PRIMARY KEY AUTOINCREMENT,
        location_id     INTEGER NOT NULL REFERENCES locations (location_id),
        name            TEXT NOT NULL,
        UNIQUE (location_id, name)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pollutants (
        pollutant_id INTEGER PRIMARY KEY AUTOINCREMENT,
        name         TEXT NOT NULL UNIQUE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS measurements (
        measurement_id  INTEGER PRIMARY KEY AUTOINCREMENT,
        sub_location_id INTEGER NOT NULL REFERENCES sub_locations (sub_location_id),
        pollutant_id    INTEGER NOT NULL REFERENCES pollutants (pollutant_id),
        value           REAL NOT NULL,
        status          TEXT NOT NULL,
        measured_at     DATE NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_measurements_measured_at ON measurements (measured_at)",
];

// =============================================================================
// Reference data
// =============================================================================

/// Top-level administrative area, e.g. a district council.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Location {
    pub location_id: i64,
    pub name: String,
}

/// A physical monitoring site, owned by exactly one location.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct SubLocation {
    pub sub_location_id: i64,
    pub location_id: i64,
    pub location_name: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Pollutant {
    pub pollutant_id: i64,
    pub name: String,
}

// =============================================================================
// Measurement rows
// =============================================================================

/// One reading joined with the names of everything it references.
///
/// This is the only row shape that leaves the storage boundary: the
/// explore table, the charts, the JSON API and the CSV export all
/// consume it.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct MeasurementRow {
    pub location_name: String,
    pub sub_location_name: String,
    pub pollutant_name: String,
    pub value: f64,
    /// Free text, e.g. `"P µg/m³"` for a provisional reading.
    pub status: String,
    pub measured_at: NaiveDate,
}
