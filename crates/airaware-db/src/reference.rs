//! Reference data repository: locations, sub-locations, pollutants.

use crate::error::Result;
use crate::schema::{Location, Pollutant, SubLocation};
use sqlx::SqliteConnection;

pub struct ReferenceRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ReferenceRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn locations(&mut self) -> Result<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>(
            "SELECT location_id, name FROM locations ORDER BY name",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    /// All monitoring sites with the name of the location that owns them.
    pub async fn sub_locations(&mut self) -> Result<Vec<SubLocation>> {
        let rows = sqlx::query_as::<_, SubLocation>(
            r#"
            SELECT
                sub_locations.sub_location_id,
                sub_locations.location_id,
                locations.name AS location_name,
                sub_locations.name
            FROM sub_locations
            JOIN locations ON locations.location_id = sub_locations.location_id
            ORDER BY locations.name, sub_locations.name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    pub async fn pollutants(&mut self) -> Result<Vec<Pollutant>> {
        let rows = sqlx::query_as::<_, Pollutant>(
            "SELECT pollutant_id, name FROM pollutants ORDER BY name",
        )
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }
}
