//! Weather Router

use crate::application::config::WeatherConfig;
use crate::domain::provider::WeatherProvider;
use crate::domain::repository::WeatherRecordRepository;
use crate::infra::openweather::OpenWeatherClient;
use crate::infra::postgres::PgWeatherRepository;
use crate::presentation::handlers::{self, WeatherAppState};
use axum::{Router, routing::get};
use platform::rate_limit::RateLimiter;
use std::sync::Arc;

/// Create the weather router with PostgreSQL storage and the OpenWeather client
pub fn weather_router(
    repo: PgWeatherRepository,
    provider: OpenWeatherClient,
    limiter: Arc<RateLimiter>,
    config: WeatherConfig,
) -> Router {
    weather_router_generic(repo, provider, limiter, config)
}

/// Create a weather router for any store and provider implementation
pub fn weather_router_generic<R, P>(
    repo: R,
    provider: P,
    limiter: Arc<RateLimiter>,
    config: WeatherConfig,
) -> Router
where
    R: WeatherRecordRepository + Clone + Send + Sync + 'static,
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    let state = WeatherAppState {
        repo: Arc::new(repo),
        provider: Arc::new(provider),
        limiter,
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/weather",
            get(handlers::completion_status::<R, P>).post(handlers::request_collection::<R, P>),
        )
        .route(
            "/weather/observations",
            get(handlers::list_observations::<R, P>),
        )
        .with_state(state)
}
