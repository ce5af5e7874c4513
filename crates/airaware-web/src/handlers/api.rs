//! JSON API.

use airaware_db::MeasurementRow;
use axum::extract::{Query, State};
use axum::Json;

use crate::handlers::or_degraded;
use crate::params::MeasurementParams;
use crate::state::{DbConn, SharedState};

/// GET /api/measurements - the same rows the explore view shows
pub async fn api_measurements(
    State(state): State<SharedState>,
    mut db: DbConn,
    Query(params): Query<MeasurementParams>,
) -> Json<Vec<MeasurementRow>> {
    Json(or_degraded(db.measurements(&params.query(state.sort_order)).await, "measurements"))
}
