use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medsupply_api::{app, config::AppConfig, database, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, PORT, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,medsupply_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!("starting MedSupply API v{}", env!("CARGO_PKG_VERSION"));

    let pool = database::connect(&config.database).context("invalid DATABASE_URL")?;

    // A store outage at startup is logged, not fatal; requests answer 500
    // until the database comes back.
    match database::init(&pool).await {
        Ok(()) => tracing::info!("database ready: {}", config.database.url),
        Err(e) => tracing::error!("database initialization failed: {}", e),
    }

    let bind_addr = config.bind_address();
    let state = AppState::new(pool, config);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await.context("server")?;
    Ok(())
}
