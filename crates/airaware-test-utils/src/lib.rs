//! Shared fixtures for AirAware integration tests.
//!
//! Everything here writes to the database directly with `sqlx`; the
//! application crates themselves are read-only.

use airaware_db::Database;
use chrono::NaiveDate;

pub use pretty_assertions::assert_eq;

/// Dates of the Oxford rows in [`oxford_fixture`], newest first.
pub const OXFORD_DATES_DESC: [&str; 3] = ["2024-01-03", "2024-01-02", "2024-01-01"];

/// Parse a `YYYY-MM-DD` literal. Panics on bad input.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date must be YYYY-MM-DD")
}

/// Fresh in-memory database with the schema created and no rows.
pub async fn empty_db() -> anyhow::Result<Database> {
    let db = Database::in_memory().await?;
    db.initialize().await?;
    Ok(db)
}

pub async fn insert_location(db: &Database, name: &str) -> anyhow::Result<i64> {
    let id = sqlx::query("INSERT INTO locations (name) VALUES (?)")
        .bind(name)
        .execute(db.pool())
        .await?
        .last_insert_rowid();
    Ok(id)
}

pub async fn insert_sub_location(db: &Database, location_id: i64, name: &str) -> anyhow::Result<i64> {
    let id = sqlx::query("INSERT INTO sub_locations (location_id, name) VALUES (?, ?)")
        .bind(location_id)
        .bind(name)
        .execute(db.pool())
        .await?
        .last_insert_rowid();
    Ok(id)
}

pub async fn insert_pollutant(db: &Database, name: &str) -> anyhow::Result<i64> {
    let id = sqlx::query("INSERT INTO pollutants (name) VALUES (?)")
        .bind(name)
        .execute(db.pool())
        .await?
        .last_insert_rowid();
    Ok(id)
}

pub async fn insert_measurement(
    db: &Database,
    sub_location_id: i64,
    pollutant_id: i64,
    value: f64,
    status: &str,
    measured_at: &str,
) -> anyhow::Result<i64> {
    let id = sqlx::query(
        "INSERT INTO measurements (sub_location_id, pollutant_id, value, status, measured_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(sub_location_id)
    .bind(pollutant_id)
    .bind(value)
    .bind(status)
    .bind(date(measured_at))
    .execute(db.pool())
    .await?
    .last_insert_rowid();
    Ok(id)
}

/// Three Oxford readings and two readings elsewhere.
///
/// The Oxford rows are inserted out of date order so that sorting is
/// actually exercised. The non-Oxford rows are newer than every Oxford
/// row, so an unfiltered query puts them first.
pub async fn oxford_fixture() -> anyhow::Result<Database> {
    let db = empty_db().await?;

    let oxford = insert_location(&db, "Oxford").await?;
    let sodc = insert_location(&db, "SODC").await?;
    let vowh = insert_location(&db, "VOWH").await?;

    let high_street = insert_sub_location(&db, oxford, "High Street").await?;
    let st_aldates = insert_sub_location(&db, oxford, "St Aldates").await?;
    let st_ebbes = insert_sub_location(&db, oxford, "St Ebbes").await?;
    let henley = insert_sub_location(&db, sodc, "Henley Duke St").await?;
    let abingdon = insert_sub_location(&db, vowh, "Abingdon Stert St").await?;

    let no2 = insert_pollutant(&db, "Nitrogen dioxide").await?;
    let pm10 = insert_pollutant(&db, "PM10 Particulate matter").await?;
    let ozone = insert_pollutant(&db, "Ozone").await?;

    insert_measurement(&db, high_street, no2, 20.5, "P µg/m³", "2024-01-01").await?;
    insert_measurement(&db, st_aldates, pm10, 11.2, "V µg/m³", "2024-01-03").await?;
    insert_measurement(&db, st_ebbes, ozone, 48.0, "P µg/m³", "2024-01-02").await?;
    insert_measurement(&db, henley, no2, 30.1, "P µg/m³", "2024-01-04").await?;
    insert_measurement(&db, abingdon, pm10, 9.9, "V µg/m³", "2024-01-05").await?;

    Ok(db)
}
