//! Start Collection Use Case

use crate::application::admission::JobAdmissionUseCase;
use crate::application::config::WeatherConfig;
use crate::application::fetch_job::{JobOutcome, WeatherFetchJob};
use crate::domain::provider::WeatherProvider;
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::{CityList, UserId};
use crate::error::WeatherResult;
use platform::rate_limit::RateLimiter;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Input DTO for start collection
#[derive(Debug, Clone)]
pub struct StartCollectionInput {
    pub user_id: UserId,
    /// Requested cities; `None` or empty falls back to the configured list
    pub cities: Option<Vec<i64>>,
}

/// Output DTO for start collection
pub struct StartCollectionOutput {
    pub user_id: UserId,
    pub total_requested: u32,
    /// Supervisor of the detached job; dropping it leaves the job running
    pub job: JoinHandle<JobOutcome>,
}

/// Start Collection Use Case
pub struct StartCollectionUseCase<R, P>
where
    R: WeatherRecordRepository,
    P: WeatherProvider,
{
    weather_repo: Arc<R>,
    provider: Arc<P>,
    limiter: Arc<RateLimiter>,
    config: Arc<WeatherConfig>,
}

impl<R, P> StartCollectionUseCase<R, P>
where
    R: WeatherRecordRepository + Send + Sync + 'static,
    P: WeatherProvider + Send + Sync + 'static,
{
    pub fn new(
        weather_repo: Arc<R>,
        provider: Arc<P>,
        limiter: Arc<RateLimiter>,
        config: Arc<WeatherConfig>,
    ) -> Self {
        Self {
            weather_repo,
            provider,
            limiter,
            config,
        }
    }

    /// Admit the user and spawn their job without waiting for it
    pub async fn execute(&self, input: StartCollectionInput) -> WeatherResult<StartCollectionOutput> {
        JobAdmissionUseCase::new(self.weather_repo.clone())
            .ensure_admissible(input.user_id)
            .await?;

        let cities = CityList::resolve(input.cities, &self.config.default_cities);
        let total_requested = cities.total_requested();

        let job = WeatherFetchJob::new(
            self.weather_repo.clone(),
            self.provider.clone(),
            self.limiter.clone(),
            input.user_id,
            cities,
        );

        tracing::info!(
            user_id = %input.user_id,
            total_requested,
            "Accepted weather collection request"
        );

        Ok(StartCollectionOutput {
            user_id: input.user_id,
            total_requested,
            job: job.spawn(),
        })
    }
}
