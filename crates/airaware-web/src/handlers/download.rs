//! CSV download of the filtered rows.

use axum::extract::{Query, RawQuery, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Local;
use tracing::{error, info};

use crate::export::{attachment_filename, encode_csv};
use crate::handlers::or_degraded;
use crate::params::MeasurementParams;
use crate::state::{DbConn, SharedState};

/// Stream the rows as `text/csv`. If encoding fails nothing partial is
/// sent: the user is sent back to the explore view with the same filters.
pub async fn download(
    State(state): State<SharedState>,
    mut db: DbConn,
    Query(params): Query<MeasurementParams>,
    RawQuery(raw): RawQuery,
) -> Response {
    let rows = or_degraded(db.measurements(&params.query(state.sort_order)).await, "measurements");

    match encode_csv(&rows) {
        Ok(buffer) => {
            let filename = attachment_filename(&params.label(), Local::now().date_naive());
            info!(rows = rows.len(), %filename, "CSV export");
            (
                [
                    (CONTENT_TYPE, "text/csv".to_string()),
                    (CONTENT_DISPOSITION, format!("attachment; filename=\"{filename}\"")),
                ],
                buffer.into_inner(),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "CSV export failed");
            let target = match raw {
                Some(q) if !q.is_empty() => format!("/explore?{q}"),
                _ => "/explore".to_string(),
            };
            Redirect::to(&target).into_response()
        }
    }
}
