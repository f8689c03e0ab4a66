//! Farmie Crop Recommendation - Backend Server
//!
//! Suggests alternative crops to farmers based on their farm's climate,
//! crop family relationships, and what the community already grows.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use farmie_backend::{
    create_app,
    external::ArchiveClient,
    services::{PgStore, RecommendationService, WeatherService},
    AppState, Config,
};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "farmie_server=debug,farmie_backend=debug,tower_http=debug,sqlx=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Farmie Crop Recommendation Server");
    tracing::info!("Environment: {}", config.environment);

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&config.database.url)
        .await?;

    tracing::info!("Database connection established");

    // Wire providers and services
    let store = Arc::new(PgStore::new(db_pool.clone()));
    let archive = Arc::new(ArchiveClient::new(&config.weather)?);
    let weather = WeatherService::new(archive, store.clone());
    let recommendations = RecommendationService::new(
        store.clone(),
        store,
        weather.clone(),
        &config.recommendation,
    )?;

    tracing::info!(
        archive = %config.weather.archive_url,
        window = %recommendations.window(),
        max_results = config.recommendation.max_results,
        "Recommendation engine ready"
    );

    // Create application state
    let state = AppState {
        db: db_pool,
        config: Arc::new(config.clone()),
        recommendations,
        weather,
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
