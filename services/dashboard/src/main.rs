use anyhow::Context as _;
use sea_orm::{ConnectOptions, Database};
use tracing::info;

use academy_core::tracing::init_tracing;
use academy_dashboard::config::DashboardConfig;
use academy_dashboard::router::build_router;
use academy_dashboard::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config = DashboardConfig::from_env().context("load dashboard configuration")?;

    let mut options = ConnectOptions::new(config.database_url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(config.connect_timeout)
        .sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;

    let state = AppState { db };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.dashboard_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("dashboard service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
