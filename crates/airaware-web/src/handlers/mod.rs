//! HTTP handlers for all web routes.

pub mod api;
pub mod download;
pub mod explore;
pub mod graphs;

use airaware_db::DbError;

/// The one place storage failures are translated: log, then carry on
/// with an empty result so the page still renders.
pub fn or_degraded<T: Default>(result: Result<T, DbError>, what: &str) -> T {
    result.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Could not load {what}, showing none");
        T::default()
    })
}
