//! Chart and table views. Figures are built here and drawn by plotly.js.

use axum::extract::{Query, RawQuery, State};
use axum::response::Html;
use minijinja::context;

use crate::chart;
use crate::error::WebError;
use crate::handlers::or_degraded;
use crate::params::MeasurementParams;
use crate::state::{DbConn, SharedState};

pub async fn graphs(
    State(state): State<SharedState>,
    mut db: DbConn,
    Query(params): Query<MeasurementParams>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, WebError> {
    let rows = or_degraded(db.measurements(&params.chart_query(state.sort_order)).await, "measurements");
    let label = params.label();
    let figure = chart::measurement_figure(&rows, &format!("Air Quality Measurements - {label}"));

    let html = state.templates.get_template("graphs.html")?.render(context! {
        label,
        figure,
        query_string => raw.unwrap_or_default(),
    })?;
    Ok(Html(html))
}

pub async fn plotly_table(
    State(state): State<SharedState>,
    mut db: DbConn,
    Query(params): Query<MeasurementParams>,
    RawQuery(raw): RawQuery,
) -> Result<Html<String>, WebError> {
    let rows = or_degraded(db.measurements(&params.query(state.sort_order)).await, "measurements");
    let label = params.label();
    let figure = chart::table_figure(&rows, &label);

    let html = state.templates.get_template("table.html")?.render(context! {
        label,
        figure,
        query_string => raw.unwrap_or_default(),
    })?;
    Ok(Html(html))
}
