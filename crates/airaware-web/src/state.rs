//! Shared application state and the per-request storage handle.

use airaware_db::{
    Database, DbError, Location, MeasurementQuery, MeasurementRepository, MeasurementRow,
    Pollutant, ReferenceRepository, SortOrder, SubLocation,
};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use minijinja::Environment;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection};
use std::convert::Infallible;
use std::sync::Arc;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub db: Database,
    pub templates: Environment<'static>,
    pub sort_order: SortOrder,
}

impl AppState {
    pub fn new(db: Database, sort_order: SortOrder) -> Result<Self, minijinja::Error> {
        Ok(Self {
            db,
            templates: crate::templates::build_environment()?,
            sort_order,
        })
    }
}

pub type SharedState = Arc<AppState>;

/// One pooled connection, held for the whole request and returned to the
/// pool when the handler finishes, whichever way it finishes.
///
/// Acquisition never rejects the request. If the pool can't hand out a
/// connection the failure is logged and every read reports
/// [`DbError::NoConnection`].
pub struct DbConn(Option<PoolConnection<Sqlite>>);

impl DbConn {
    fn conn(&mut self) -> Result<&mut SqliteConnection, DbError> {
        self.0.as_deref_mut().ok_or(DbError::NoConnection)
    }

    pub async fn measurements(&mut self, query: &MeasurementQuery) -> Result<Vec<MeasurementRow>, DbError> {
        MeasurementRepository::new(self.conn()?).find(query).await
    }

    pub async fn locations(&mut self) -> Result<Vec<Location>, DbError> {
        ReferenceRepository::new(self.conn()?).locations().await
    }

    pub async fn sub_locations(&mut self) -> Result<Vec<SubLocation>, DbError> {
        ReferenceRepository::new(self.conn()?).sub_locations().await
    }

    pub async fn pollutants(&mut self) -> Result<Vec<Pollutant>, DbError> {
        ReferenceRepository::new(self.conn()?).pollutants().await
    }
}

impl FromRequestParts<SharedState> for DbConn {
    type Rejection = Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &SharedState) -> Result<Self, Self::Rejection> {
        match state.db.acquire().await {
            Ok(conn) => Ok(DbConn(Some(conn))),
            Err(e) => {
                tracing::warn!(error = %e, "No storage connection for request");
                Ok(DbConn(None))
            }
        }
    }
}
