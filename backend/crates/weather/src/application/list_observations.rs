//! List Observations Use Case

use crate::domain::entities::WeatherObservation;
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;
use std::sync::Arc;

/// List Observations Use Case
pub struct ListObservationsUseCase<R>
where
    R: WeatherRecordRepository,
{
    weather_repo: Arc<R>,
}

impl<R> ListObservationsUseCase<R>
where
    R: WeatherRecordRepository,
{
    pub fn new(weather_repo: Arc<R>) -> Self {
        Self { weather_repo }
    }

    /// The user's observations in creation order
    pub async fn execute(&self, user_id: UserId) -> WeatherResult<Vec<WeatherObservation>> {
        self.weather_repo.list_for_user(user_id).await
    }
}
