//! Browse view: filter form plus the most recent matching readings.

use axum::extract::{Query, RawQuery, State};
use axum::response::Html;
use minijinja::context;

use crate::error::WebError;
use crate::handlers::or_degraded;
use crate::params::MeasurementParams;
use crate::state::{DbConn, SharedState};

pub async fn explore(
    State(state): State<SharedState>,
    mut db: DbConn,
    Query(params): Query<MeasurementParams>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, WebError> {
    let locations = or_degraded(db.locations().await, "locations");
    let sub_locations = or_degraded(db.sub_locations().await, "sub-locations");
    let pollutants = or_degraded(db.pollutants().await, "pollutants");

    let filter = params.filter();
    let query = params.query(state.sort_order);
    let rows = or_degraded(db.measurements(&query).await, "measurements");

    let html = state.templates.get_template("explore.html")?.render(context! {
        label => params.label(),
        rows,
        locations,
        sub_locations,
        pollutants,
        selected => context! {
            main_location => filter.location,
            sub_location => filter.sub_location,
            pollutant => filter.pollutant,
            num_records => query.limit.get(),
            location_data_selection => params.location_data_selection.clone().unwrap_or_default(),
        },
        query_string => raw.unwrap_or_default(),
    })?;

    Ok(Html(html))
}
