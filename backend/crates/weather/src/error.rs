//! Weather Error Types
//!
//! This module provides weather-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::rate_limit::RateLimitError;
use thiserror::Error;

use crate::domain::value_objects::CityId;

/// Weather-specific result type alias
pub type WeatherResult<T> = Result<T, WeatherError>;

/// Weather-specific error variants
#[derive(Debug, Error)]
pub enum WeatherError {
    /// A collection job already exists for the user
    #[error("User already requested weather data")]
    JobAlreadyExists,

    /// Transport-level failure talking to the provider
    #[error("Weather provider request failed: {0}")]
    ProviderRequest(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Weather provider returned status {status}: {body}")]
    ProviderStatus { status: u16, body: String },

    /// Provider body lacks the expected fields
    #[error("Malformed weather provider body: {0}")]
    MalformedBody(String),

    /// A city fetch failed; the rest of the job was skipped
    #[error("Weather job aborted at city {city_id} after {completed} of {total} cities: {source}")]
    JobAborted {
        city_id: CityId,
        completed: usize,
        total: usize,
        #[source]
        source: RateLimitError,
    },

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WeatherError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::JobAlreadyExists => StatusCode::CONFLICT,
            WeatherError::ProviderRequest(_)
            | WeatherError::ProviderStatus { .. }
            | WeatherError::MalformedBody(_)
            | WeatherError::JobAborted { .. } => StatusCode::BAD_GATEWAY,
            WeatherError::Database(_) | WeatherError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::JobAlreadyExists => ErrorKind::Conflict,
            WeatherError::ProviderRequest(_)
            | WeatherError::ProviderStatus { .. }
            | WeatherError::MalformedBody(_)
            | WeatherError::JobAborted { .. } => ErrorKind::BadGateway,
            WeatherError::Database(_) | WeatherError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            WeatherError::JobAlreadyExists => AppError::new(self.kind(), self.to_string())
                .with_action("Check progress with GET /weather?user_id=<user_id>"),
            // Internals stay in the logs.
            WeatherError::Database(_) | WeatherError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WeatherError::Database(e) => {
                tracing::error!(error = %e, "Weather database error");
            }
            WeatherError::Internal(msg) => {
                tracing::error!(message = %msg, "Weather internal error");
            }
            WeatherError::JobAlreadyExists => {
                tracing::warn!("Weather job requested twice for the same user");
            }
            _ => {
                tracing::warn!(error = %self, "Weather provider error");
            }
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(err: WeatherError) -> Self {
        err.to_app_error().with_source(err)
    }
}

impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
