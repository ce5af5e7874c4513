//! AirAware Web Server
//!
//! Run with: cargo run -p airaware-web

use airaware_db::Database;
use airaware_web::config::Config;
use airaware_web::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("airaware=debug,info")),
        )
        .init();

    info!("Starting AirAware {}...", env!("CARGO_PKG_VERSION"));

    let config = Config::load()?;
    info!(
        database = %config.database.url,
        sort_order = ?config.query.sort_order,
        "Configuration loaded"
    );

    let db = Database::open(&config.database.url, &config.database.pool_settings()).await?;
    if config.database.initialize_schema && !config.database.read_only {
        db.initialize().await?;
    }

    let state = AppState::new(db, config.query.sort_order)?;
    let app = airaware_web::router::build_router(state, &config.server.static_dir);

    let addr = config.server.socket_addr()?;
    info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
