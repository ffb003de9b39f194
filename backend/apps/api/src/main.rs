//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are rendered
//! by the weather crate through `kernel::error::AppError`.

use axum::Router;
use platform::config::{env_parse, env_string, require_env};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather::{OpenWeatherClient, PgWeatherRepository, RateLimiter, WeatherConfig, weather_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                //.unwrap_or_else(|_| "api=debug,weather=debug,platform=debug,tower_http=debug".into()),
                .unwrap_or_else(|_| "api=info,weather=info,platform=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = require_env("DATABASE_URL")?;
    let max_connections: u32 = env_parse("DB_MAX_CONNECTIONS", 5)?;

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    tracing::info!(max_connections, "Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Weather configuration
    let weather_config = WeatherConfig::from_env()?;
    if !weather_config.has_api_key() {
        if cfg!(debug_assertions) {
            tracing::warn!("OPEN_WEATHER_API_KEY is not set, provider calls will be rejected");
        } else {
            anyhow::bail!("OPEN_WEATHER_API_KEY must be set in production");
        }
    }

    tracing::info!(
        provider_url = %weather_config.provider_url,
        default_cities = weather_config.default_cities.len(),
        max_requests = weather_config.rate_limit.max_requests,
        window_secs = weather_config.rate_limit.window.as_secs(),
        "Weather configuration loaded"
    );

    let weather_store = PgWeatherRepository::new(pool.clone());
    let provider = OpenWeatherClient::new(&weather_config)?;

    // One limiter for the whole process: every job shares the provider quota
    let limiter = Arc::new(RateLimiter::new(weather_config.rate_limit.clone()));

    // Build router
    let app = Router::new()
        .merge(weather_router(weather_store, provider, limiter, weather_config))
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = env_string("BIND_ADDR", "0.0.0.0:8000").parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
