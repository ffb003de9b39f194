//! HTTP Handlers

use crate::application::config::WeatherConfig;
use crate::application::list_observations::ListObservationsUseCase;
use crate::application::percentage::CompletionPercentageUseCase;
use crate::application::start_collection::{StartCollectionInput, StartCollectionUseCase};
use crate::domain::provider::WeatherProvider;
use crate::domain::repository::WeatherRecordRepository;
use crate::domain::value_objects::UserId;
use crate::error::WeatherResult;
use crate::presentation::dto::{
    CollectWeatherRequest, CollectWeatherResponse, ObservationResponse, PercentageResponse,
    UserQuery,
};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use platform::rate_limit::RateLimiter;
use std::sync::Arc;

/// Shared state for weather handlers
///
/// `limiter` is one instance for the whole process: every job draws from
/// the same provider ceiling.
#[derive(Clone)]
pub struct WeatherAppState<R, P>
where
    R: WeatherRecordRepository + Clone + Send + Sync + 'static,
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub provider: Arc<P>,
    pub limiter: Arc<RateLimiter>,
    pub config: Arc<WeatherConfig>,
}

/// POST /weather
pub async fn request_collection<R, P>(
    State(state): State<WeatherAppState<R, P>>,
    Json(req): Json<CollectWeatherRequest>,
) -> WeatherResult<(StatusCode, Json<CollectWeatherResponse>)>
where
    R: WeatherRecordRepository + Clone + Send + Sync + 'static,
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    let use_case = StartCollectionUseCase::new(
        state.repo.clone(),
        state.provider.clone(),
        state.limiter.clone(),
        state.config.clone(),
    );

    let input = StartCollectionInput {
        user_id: UserId::new(req.user_id),
        cities: req.cities,
    };

    let output = use_case.execute(input).await?;

    // Respond without waiting; the supervisor logs how the job ends.
    drop(output.job);

    Ok((
        StatusCode::ACCEPTED,
        Json(CollectWeatherResponse::accepted(output.user_id)),
    ))
}

/// GET /weather?user_id=
pub async fn completion_status<R, P>(
    State(state): State<WeatherAppState<R, P>>,
    Query(query): Query<UserQuery>,
) -> WeatherResult<Json<PercentageResponse>>
where
    R: WeatherRecordRepository + Clone + Send + Sync + 'static,
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    let use_case = CompletionPercentageUseCase::new(state.repo.clone());

    let percentage = use_case.execute(UserId::new(query.user_id)).await?;

    Ok(Json(PercentageResponse { percentage }))
}

/// GET /weather/observations?user_id=
pub async fn list_observations<R, P>(
    State(state): State<WeatherAppState<R, P>>,
    Query(query): Query<UserQuery>,
) -> WeatherResult<Json<Vec<ObservationResponse>>>
where
    R: WeatherRecordRepository + Clone + Send + Sync + 'static,
    P: WeatherProvider + Clone + Send + Sync + 'static,
{
    let use_case = ListObservationsUseCase::new(state.repo.clone());

    let observations = use_case.execute(UserId::new(query.user_id)).await?;

    Ok(Json(
        observations
            .into_iter()
            .map(ObservationResponse::from)
            .collect(),
    ))
}
