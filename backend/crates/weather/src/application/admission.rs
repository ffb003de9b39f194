//! Job Admission Use Case

use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::UserId;
use crate::error::{WeatherError, WeatherResult};
use std::sync::Arc;

/// Job Admission Use Case
///
/// A user has a job as soon as one observation exists for them. Reads go
/// straight to the store on every call.
pub struct JobAdmissionUseCase<R>
where
    R: WeatherRecordRepository,
{
    weather_repo: Arc<R>,
}

impl<R> JobAdmissionUseCase<R>
where
    R: WeatherRecordRepository,
{
    pub fn new(weather_repo: Arc<R>) -> Self {
        Self { weather_repo }
    }

    /// True if a prior job exists for the user
    pub async fn exists(&self, user_id: UserId) -> WeatherResult<bool> {
        self.weather_repo.exists_for_user(user_id).await
    }

    /// Fail with `JobAlreadyExists` if a prior job exists
    pub async fn ensure_admissible(&self, user_id: UserId) -> WeatherResult<()> {
        if self.exists(user_id).await? {
            tracing::info!(user_id = %user_id, "Rejected weather job, user already has one");
            return Err(WeatherError::JobAlreadyExists);
        }
        Ok(())
    }
}
