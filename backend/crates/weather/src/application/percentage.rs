//! Completion Percentage Use Case

use crate::domain::repository::WeatherRecordRepository;
use crate::domain::services::completion_percentage;
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;
use std::sync::Arc;

/// Completion Percentage Use Case
pub struct CompletionPercentageUseCase<R>
where
    R: WeatherRecordRepository,
{
    weather_repo: Arc<R>,
}

impl<R> CompletionPercentageUseCase<R>
where
    R: WeatherRecordRepository,
{
    pub fn new(weather_repo: Arc<R>) -> Self {
        Self { weather_repo }
    }

    /// Stored rows over the persisted city count, as a percentage.
    ///
    /// A user with no rows reports `0.0`.
    pub async fn execute(&self, user_id: UserId) -> WeatherResult<f64> {
        let observations = self.weather_repo.list_for_user(user_id).await?;

        let Some(latest) = observations.last() else {
            return Ok(0.0);
        };

        Ok(completion_percentage(
            observations.len(),
            latest.total_requested,
        ))
    }
}
