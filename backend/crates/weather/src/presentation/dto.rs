//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::WeatherObservation;
use crate::domain::value_objects::UserId;

/// Request for POST /weather
#[derive(Debug, Clone, Deserialize)]
pub struct CollectWeatherRequest {
    pub user_id: i64,
    #[serde(default)]
    pub cities: Option<Vec<i64>>,
}

/// Response for POST /weather
#[derive(Debug, Clone, Serialize)]
pub struct CollectWeatherResponse {
    /// Short description of the response
    pub title: String,
    /// Full description of the response
    pub message: String,
}

impl CollectWeatherResponse {
    pub fn accepted(user_id: UserId) -> Self {
        Self {
            title: "Collecting weather data".to_string(),
            message: format!(
                "The system are already collecting weather data for the requested user.\
                 You can check the percentage of completion using the get endpoint /weather?user_id={user_id}"
            ),
        }
    }
}

/// Query for GET /weather and GET /weather/observations
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub user_id: i64,
}

/// Response for GET /weather
#[derive(Debug, Clone, Serialize)]
pub struct PercentageResponse {
    /// Percentage of processed cities
    pub percentage: f64,
}

/// Item of the GET /weather/observations response
#[derive(Debug, Clone, Serialize)]
pub struct ObservationResponse {
    pub id: i64,
    pub user_id: i64,
    pub request_date: DateTime<Utc>,
    pub city_id: i64,
    pub temperature_celsius: f64,
    pub humidity: i64,
}

impl From<WeatherObservation> for ObservationResponse {
    fn from(observation: WeatherObservation) -> Self {
        Self {
            id: observation.id,
            user_id: observation.user_id.value(),
            request_date: observation.request_date,
            city_id: observation.payload.city_id,
            temperature_celsius: observation.payload.temperature_celsius,
            humidity: observation.payload.humidity,
        }
    }
}
