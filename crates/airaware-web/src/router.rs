//! Axum router: maps all URL paths to handlers.

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{
    api::api_measurements,
    download::download,
    explore::explore,
    graphs::{graphs, plotly_table},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState, static_dir: &str) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",             get(explore))
        .route("/explore",      get(explore))
        .route("/graphs",       get(graphs))
        .route("/plotly_table", get(plotly_table))
        .route("/download",     get(download))

        // API endpoints
        .route("/api/measurements", get(api_measurements))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))

        // Middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
