//! Measurement repository.
//!
//! Read-only. Runs built [`MeasurementQuery`]s against a connection the
//! caller owns.

use crate::error::Result;
use crate::query::MeasurementQuery;
use crate::schema::MeasurementRow;
use sqlx::SqliteConnection;
use tracing::debug;

/// Repository for filtered measurement reads.
pub struct MeasurementRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> MeasurementRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Rows matching the query's filters, sorted by date and capped at
    /// the query's limit.
    pub async fn find(&mut self, query: &MeasurementQuery) -> Result<Vec<MeasurementRow>> {
        let built = query.build();
        debug!(sql = %built.sql, params = ?built.params, "Measurement query");

        let mut select = sqlx::query_as::<_, MeasurementRow>(&built.sql);
        for param in &built.params {
            select = select.bind(param.as_str());
        }

        let rows = select.fetch_all(&mut *self.conn).await?;
        debug!(rows = rows.len(), "Measurement query returned");
        Ok(rows)
    }
}
