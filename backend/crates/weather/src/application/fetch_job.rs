//! Weather Fetch Job
//!
//! Drives one user's city list through the shared rate limiter, one
//! provider call at a time, persisting each reading as it arrives.

use crate::domain::entities::WeatherPayload;
use crate::domain::provider::WeatherProvider;
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::services::normalize_report;
use crate::domain::value_objects::{CityId, CityList, UserId};
use crate::error::{WeatherError, WeatherResult};
use platform::rate_limit::RateLimiter;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Result of a job that fetched every city
#[derive(Debug, Clone, PartialEq)]
pub struct JobSummary {
    pub user_id: UserId,
    pub fetched: usize,
    pub elapsed: Duration,
}

/// What the supervising task observed when a job ended
#[derive(Debug)]
pub enum JobOutcome {
    Completed(JobSummary),
    Aborted(WeatherError),
    Panicked { user_id: UserId },
}

/// Weather Fetch Job
///
/// Cities are processed strictly in list order. Each provider call is
/// awaited before the next admission wait starts, so a job never has more
/// than one call in flight. The first failure ends the job; rows written
/// for earlier cities stay.
pub struct WeatherFetchJob<R, P>
where
    R: WeatherRecordRepository,
    P: WeatherProvider,
{
    weather_repo: Arc<R>,
    provider: Arc<P>,
    limiter: Arc<RateLimiter>,
    user_id: UserId,
    cities: CityList,
}

impl<R, P> WeatherFetchJob<R, P>
where
    R: WeatherRecordRepository + Send + Sync + 'static,
    P: WeatherProvider + Send + Sync + 'static,
{
    pub fn new(
        weather_repo: Arc<R>,
        provider: Arc<P>,
        limiter: Arc<RateLimiter>,
        user_id: UserId,
        cities: CityList,
    ) -> Self {
        Self {
            weather_repo,
            provider,
            limiter,
            user_id,
            cities,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn cities(&self) -> &CityList {
        &self.cities
    }

    /// Fetch, normalize and persist one city
    pub async fn fetch_one_city(&self, city_id: CityId) -> WeatherResult<WeatherPayload> {
        let body = self.provider.fetch(city_id).await?;
        let payload = normalize_report(&body)?;

        let observation = self
            .weather_repo
            .insert(self.user_id, &payload, self.cities.total_requested())
            .await?;

        tracing::debug!(
            user_id = %self.user_id,
            city_id = %city_id,
            observation_id = observation.id,
            temperature_celsius = payload.temperature_celsius,
            humidity = payload.humidity,
            "Stored city weather"
        );

        Ok(payload)
    }

    /// Fetch every city in order, stopping at the first failure
    pub async fn run(&self) -> WeatherResult<JobSummary> {
        let started = Instant::now();
        let total = self.cities.len();

        tracing::info!(user_id = %self.user_id, total, "Weather job started");

        for (completed, &city_id) in self.cities.iter().enumerate() {
            self.limiter
                .run_with_limit(|| self.fetch_one_city(city_id))
                .await
                .map_err(|source| WeatherError::JobAborted {
                    city_id,
                    completed,
                    total,
                    source,
                })?;
        }

        Ok(JobSummary {
            user_id: self.user_id,
            fetched: total,
            elapsed: started.elapsed(),
        })
    }

    /// Run the job detached from the caller.
    ///
    /// The job runs in its own task; a supervising task awaits it and logs
    /// completion, failure, or panic. Dropping the returned handle does not
    /// cancel the job.
    pub fn spawn(self) -> JoinHandle<JobOutcome> {
        let user_id = self.user_id;
        let worker = tokio::spawn(async move { self.run().await });

        tokio::spawn(async move {
            match worker.await {
                Ok(Ok(summary)) => {
                    tracing::info!(
                        user_id = %user_id,
                        fetched = summary.fetched,
                        elapsed_ms = summary.elapsed.as_millis() as u64,
                        "Weather job completed"
                    );
                    JobOutcome::Completed(summary)
                }
                Ok(Err(error)) => {
                    tracing::error!(user_id = %user_id, error = %error, "Weather job aborted");
                    JobOutcome::Aborted(error)
                }
                Err(join_error) => {
                    tracing::error!(
                        user_id = %user_id,
                        panicked = join_error.is_panic(),
                        error = %join_error,
                        "Weather job task failed"
                    );
                    JobOutcome::Panicked { user_id }
                }
            }
        })
    }
}
