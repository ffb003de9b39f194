//! Domain Entities
//!
//! Core business entities for the weather domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::UserId;

/// Normalized reading for one city, stored as JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub city_id: i64,
    pub temperature_celsius: f64,
    pub humidity: i64,
}

/// WeatherObservation entity - one persisted reading tied to a user
///
/// Rows are append-only. `total_requested` is the size of the city list of
/// the job that wrote the row, so completion can be computed from the store
/// alone.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub id: i64,
    pub user_id: UserId,
    pub request_date: DateTime<Utc>,
    pub payload: WeatherPayload,
    pub total_requested: u32,
}
