//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{WeatherObservation, WeatherPayload};
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;

/// Weather record repository trait
#[trait_variant::make(WeatherRecordRepository: Send)]
pub trait LocalWeatherRecordRepository {
    /// True if any observation exists for the user
    async fn exists_for_user(&self, user_id: UserId) -> WeatherResult<bool>;

    /// Append one observation; the store assigns `id` and `request_date`
    async fn insert(
        &self,
        user_id: UserId,
        payload: &WeatherPayload,
        total_requested: u32,
    ) -> WeatherResult<WeatherObservation>;

    /// All observations of the user, oldest first
    async fn list_for_user(&self, user_id: UserId) -> WeatherResult<Vec<WeatherObservation>>;
}
