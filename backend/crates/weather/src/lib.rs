//! Weather Collection Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and provider traits
//! - `application/` - Use cases and the detached fetch job
//! - `infra/` - PostgreSQL and in-memory stores, OpenWeather client
//! - `presentation/` - HTTP handlers
//!
//! ## Job Model
//! - One collection job per user, ever; a user with stored rows is rejected
//! - A job fetches its cities in order through the process-wide rate limiter
//! - The first failed city ends the job; rows already written stay
//! - Progress is derived from stored rows, never from job state

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WeatherConfig;
pub use error::{WeatherError, WeatherResult};
pub use infra::memory::InMemoryWeatherRepository;
pub use infra::openweather::OpenWeatherClient;
pub use infra::postgres::PgWeatherRepository;
pub use presentation::router::{weather_router, weather_router_generic};

pub use platform::rate_limit::{RateLimitConfig, RateLimiter};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
